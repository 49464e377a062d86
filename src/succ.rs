use num::{BigInt, BigUint};

/// Capability trait for element types with a natural "next" value,
/// used by [`Stream::seed`](crate::Stream::seed) to spin an infinite
/// sequence out of a single starting point. Types without an impl
/// must supply an explicit generator instead.
pub trait Succ {
  /// The value following `self`.
  fn succ(&self) -> Self;
}

macro_rules! succ_int {
  ($($t:ty),*) => { $(
    impl Succ for $t {
      /// Increment, wrapping at the type's upper bound.
      fn succ(&self) -> Self { self.wrapping_add(1) }
    }
  )* };
}

succ_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

impl Succ for BigInt {
  fn succ(&self) -> Self { self + 1 }
}

impl Succ for BigUint {
  fn succ(&self) -> Self { self + 1u32 }
}
