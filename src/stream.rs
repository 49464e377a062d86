// Lazy cons-style sequences: one known element plus a deferred
// continuation for the rest.

use std::rc::Rc;

use crate::succ::Succ;

/// A deferred computation producing the next stream state.
pub(crate) type Gen<T> = Rc<dyn Fn() -> Stream<T>>;

/// A lazy, possibly infinite sequence.
///
/// A non-empty stream holds its current element (the head) and a
/// generator that, when invoked, produces the stream of remaining
/// elements. The empty stream is the terminal sentinel: it has no
/// head and no generator, and the two are always absent together.
///
/// Nothing past the head is computed until requested, and nothing is
/// cached: calling [`tail`](Stream::tail) twice re-invokes the
/// generator twice. Streams are plain values; cloning one shares the
/// generator (it is immutable) and advancing a clone never affects
/// the original.
pub struct Stream<T> {
  cell: Option<(T, Gen<T>)>,
}

impl<T> Stream<T> {

  /// The terminal stream with no elements.
  pub fn empty() -> Self {
    Stream { cell: None }
  }

  /// A stream with the given head, whose remaining elements come from
  /// invoking `gen`.
  pub fn new(head: T, gen: impl Fn() -> Stream<T> + 'static) -> Self {
    Stream { cell: Some((head, Rc::new(gen))) }
  }

  /// True iff this is the terminal sentinel.
  pub fn is_empty(&self) -> bool {
    self.cell.is_none()
  }

  /// The current element.
  /// Assert: the stream is non-empty.
  pub fn head(&self) -> &T {
    match &self.cell {
      Some((head, _)) => head,
      None => panic!("head: called on empty stream"),
    }
  }

  /// Invoke the generator and return the stream of remaining
  /// elements. Each call recomputes the continuation.
  /// Assert: the stream is non-empty.
  pub fn tail(&self) -> Stream<T> {
    match &self.cell {
      Some((_, gen)) => gen(),
      None => panic!("tail: called on empty stream"),
    }
  }

  /// Advance in place: replace this stream with its tail and return a
  /// reference to it, so sequences can be pumped imperatively with
  /// `s.next().head()`. Clones of the previous state are unaffected.
  /// Assert: the stream is non-empty.
  pub fn next(&mut self) -> &mut Self {
    *self = self.tail();
    self
  }

  pub(crate) fn into_cell(self) -> Option<(T, Gen<T>)> {
    self.cell
  }
}

impl<T: Succ + Clone + 'static> Stream<T> {
  /// The infinite sequence starting at `head` and continuing with
  /// repeated application of [`Succ::succ`].
  pub fn seed(head: T) -> Self {
    let cur = head.clone();
    Stream::new(head, move || Stream::seed(cur.succ()))
  }
}

impl<T: 'static> Stream<T> {
  /// Build a stream from a starting state and a step function: each
  /// step yields the next element together with the state for the
  /// rest, or `None` to terminate.
  pub fn unfold<S, F>(state: S, step: F) -> Self
  where
    S: Clone + 'static,
    F: Fn(S) -> Option<(T, S)> + 'static,
  {
    unfold_rc(state, Rc::new(step))
  }
}

fn unfold_rc<T, S, F>(state: S, step: Rc<F>) -> Stream<T>
where
  T: 'static,
  S: Clone + 'static,
  F: Fn(S) -> Option<(T, S)> + 'static,
{
  match step(state) {
    None => Stream::empty(),
    Some((head, rest)) =>
      Stream::new(head, move || unfold_rc(rest.clone(), Rc::clone(&step))),
  }
}

impl<T> Default for Stream<T> {
  fn default() -> Self {
    Stream::empty()
  }
}

impl<T: Clone> Clone for Stream<T> {
  fn clone(&self) -> Self {
    let cell = self.cell.as_ref()
                        .map(|(head, gen)| (head.clone(), Rc::clone(gen)));
    Stream { cell }
  }
}


#[cfg(test)]
mod test {
  use std::cell::Cell;
  use std::rc::Rc;
  use proptest::prelude::*;
  use super::*;

  #[test]
  fn seeded() {
    let s = Stream::seed(1);
    assert_eq!(*s.head(), 1);
    assert_eq!(*s.tail().head(), 2);
    assert_eq!(*s.tail().tail().head(), 3);
    assert_eq!(*s.tail().tail().tail().head(), 4);
  }

  #[test]
  fn pump() {
    let mut s = Stream::seed(1);
    assert_eq!(*s.head(), 1);
    for i in 2 .. 10 {
      assert_eq!(*s.next().head(), i);
    }
  }

  #[test]
  fn explicit_generator() {
    let s = Stream::new(5, || Stream::new(7, Stream::empty));
    assert_eq!(*s.head(), 5);
    assert_eq!(*s.tail().head(), 7);
    assert!(s.tail().tail().is_empty());
  }

  #[test]
  fn unfold_terminates() {
    let mut s = Stream::unfold(0, |n| if n < 3 { Some((n * 10, n + 1)) } else { None });
    assert_eq!(*s.head(), 0);
    assert_eq!(*s.next().head(), 10);
    assert_eq!(*s.next().head(), 20);
    assert!(s.next().is_empty());
  }

  #[test]
  fn tail_recomputes() {
    let runs = Rc::new(Cell::new(0));
    let counter = Rc::clone(&runs);
    let s = Stream::new(1, move || {
      counter.set(counter.get() + 1);
      Stream::empty()
    });
    s.tail();
    s.tail();
    assert_eq!(runs.get(), 2);
  }

  #[test]
  fn clones_are_independent() {
    let original = Stream::seed(1);
    let mut copy = original.clone();
    copy.next().next();
    assert_eq!(*copy.head(), 3);
    assert_eq!(*original.head(), 1);
    assert_eq!(*original.tail().head(), 2);
  }

  #[test]
  fn tail_twice_agrees() {
    let s = Stream::seed(10);
    let a = s.tail();
    let b = s.tail();
    assert_eq!(a.head(), b.head());
    assert_eq!(a.tail().head(), b.tail().head());
  }

  #[test]
  fn default_is_empty() {
    assert!(Stream::<i64>::default().is_empty());
  }

  #[test]
  #[should_panic(expected = "head: called on empty stream")]
  fn head_of_empty() {
    Stream::<i64>::empty().head();
  }

  #[test]
  #[should_panic(expected = "tail: called on empty stream")]
  fn tail_of_empty() {
    Stream::<i64>::empty().tail();
  }

  proptest! {
    #[test]
    fn advancing_n_steps_adds_n(v in -10_000i64 .. 10_000, n in 0usize .. 200) {
      let mut s = Stream::seed(v);
      for _ in 0 .. n {
        s.next();
      }
      prop_assert_eq!(*s.head(), v + n as i64);
    }
  }
}
