pub mod stream;
pub mod succ;
pub mod take;
pub mod map;
pub mod fold;
pub mod iter;
pub mod display;

pub use stream::*;
pub use succ::*;
pub use iter::*;

pub mod trait_methods {
  pub use crate::succ::Succ as _;
}
