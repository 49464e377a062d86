// Eager terminal reductions. Both walks require a finite stream:
// bound infinite sources with `take` / `take_while` first, or the
// loop never ends.

use crate::stream::Stream;

impl<T> Stream<T> {

  /// Left-reduce the whole stream: the accumulator starts at `init`
  /// and is combined with each element in order via `f`.
  pub fn fold<A, F>(self, init: A, mut f: F) -> A
  where
    F: FnMut(A, T) -> A,
  {
    let mut acc = init;
    let mut cur = self.into_cell();
    while let Some((head, gen)) = cur {
      acc = f(acc, head);
      cur = gen().into_cell();
    }
    acc
  }

  /// Materialize the stream into a container, preserving traversal
  /// order.
  pub fn collect<C: FromIterator<T>>(self) -> C {
    self.into_iter().collect()
  }
}
