//! Cursor over a step's repeated sub-content (chunks, screens, problems,
//! questions). The manager only ever talks to steps through `Paging`.

/// Forward/backward movement over a non-empty sequence of sub-units.
pub trait Paging {
  /// 0-based index of the current sub-unit.
  fn position(&self) -> usize;
  /// Number of sub-units; never zero.
  fn len(&self) -> usize;
  /// Move to the next sub-unit; false (and no movement) at the end.
  fn advance(&mut self) -> bool;
  /// Move to the previous sub-unit; false (and no movement) at the start.
  fn retreat(&mut self) -> bool;
  /// Jump to the last sub-unit.
  fn seek_last(&mut self);

  fn at_start(&self) -> bool {
    self.position() == 0
  }

  fn at_end(&self) -> bool {
    self.position() + 1 >= self.len()
  }
}

/// A non-empty list with a cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct Pages<T> {
  items: Vec<T>,
  cursor: usize,
}

impl<T> Pages<T> {
  /// `None` when `items` is empty.
  pub fn new(items: Vec<T>) -> Option<Self> {
    if items.is_empty() {
      None
    } else {
      Some(Self { items, cursor: 0 })
    }
  }

  pub fn current(&self) -> &T {
    &self.items[self.cursor]
  }

  pub fn items(&self) -> &[T] {
    &self.items
  }
}

impl<T> Paging for Pages<T> {
  fn position(&self) -> usize {
    self.cursor
  }

  fn len(&self) -> usize {
    self.items.len()
  }

  fn advance(&mut self) -> bool {
    if self.cursor + 1 < self.items.len() {
      self.cursor += 1;
      true
    } else {
      false
    }
  }

  fn retreat(&mut self) -> bool {
    if self.cursor > 0 {
      self.cursor -= 1;
      true
    } else {
      false
    }
  }

  fn seek_last(&mut self) {
    self.cursor = self.items.len() - 1;
  }
}
