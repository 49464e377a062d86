// Prefix combinators: bound a stream by count or by predicate.

use std::rc::Rc;

use crate::stream::Stream;

impl<T: 'static> Stream<T> {

  /// At most the first `n` elements, then the sentinel. `take(0)` is
  /// empty immediately, even on an infinite stream, and taking from
  /// the sentinel stays empty.
  pub fn take(self, n: usize) -> Stream<T> {
    if n == 0 {
      return Stream::empty();
    }
    match self.into_cell() {
      None => Stream::empty(),
      Some((head, gen)) => Stream::new(head, move || gen().take(n - 1)),
    }
  }

  /// The longest prefix on which `pred` holds. The predicate is
  /// checked eagerly against the current head; the first failing
  /// element ends the stream and is excluded.
  pub fn take_while<P>(self, pred: P) -> Stream<T>
  where
    P: Fn(&T) -> bool + 'static,
  {
    take_while_rc(self, Rc::new(pred))
  }
}

fn take_while_rc<T: 'static>(s: Stream<T>, pred: Rc<dyn Fn(&T) -> bool>) -> Stream<T> {
  match s.into_cell() {
    None => Stream::empty(),
    Some((head, gen)) => {
      if !pred(&head) {
        return Stream::empty();
      }
      Stream::new(head, move || take_while_rc(gen(), Rc::clone(&pred)))
    }
  }
}
