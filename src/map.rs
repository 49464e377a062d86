// Lazy element-wise transforms.

use std::rc::Rc;

use crate::stream::Stream;

impl<T: 'static> Stream<T> {

  /// Transform each element with `f`. The current head is mapped
  /// eagerly; later elements are mapped as they are produced, once
  /// per traversal actually performed.
  pub fn map<U, F>(self, f: F) -> Stream<U>
  where
    U: 'static,
    F: Fn(T) -> U + 'static,
  {
    map_rc(self, Rc::new(f))
  }

  /// Exactly the elements on which `pred` holds, in order.
  ///
  /// The search for the next match is eager: this walks the receiver
  /// until a match is found or the sentinel is reached. On an
  /// infinite stream whose predicate never holds again, that search
  /// does not return; bound such streams with
  /// [`take`](Stream::take) / [`take_while`](Stream::take_while)
  /// first.
  pub fn filter<P>(self, pred: P) -> Stream<T>
  where
    P: Fn(&T) -> bool + 'static,
  {
    filter_rc(self, Rc::new(pred))
  }
}

fn map_rc<T, U>(s: Stream<T>, f: Rc<dyn Fn(T) -> U>) -> Stream<U>
where
  T: 'static,
  U: 'static,
{
  match s.into_cell() {
    None => Stream::empty(),
    Some((head, gen)) => {
      let mapped = f(head);
      Stream::new(mapped, move || map_rc(gen(), Rc::clone(&f)))
    }
  }
}

fn filter_rc<T: 'static>(s: Stream<T>, pred: Rc<dyn Fn(&T) -> bool>) -> Stream<T> {
  // Skip the non-matching prefix now; only the rest stays lazy.
  let mut cur = s;
  loop {
    match cur.into_cell() {
      None => return Stream::empty(),
      Some((head, gen)) => {
        if pred(&head) {
          return Stream::new(head, move || filter_rc(gen(), Rc::clone(&pred)));
        }
        cur = gen();
      }
    }
  }
}
