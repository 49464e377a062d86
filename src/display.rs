use std::fmt;

use crate::stream::Stream;

/// Shows the head only. Formatting never invokes the generator, so it
/// is safe on infinite streams.
impl<T: fmt::Debug> fmt::Debug for Stream<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if self.is_empty() {
      f.write_str("Stream[]")
    } else {
      write!(f, "Stream[{:?}, ..]", self.head())
    }
  }
}
