use super::*;

/// A simple array-based `Stack<T>`. Uses Rust's `Vec<T>`, top last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayStack<T> {
  elems: Vec<T>,
}

impl<T> Stack<T> for ArrayStack<T> {
  fn new() -> Self {
    Self {
      elems: Vec::new(),
    }
  }

  fn push(&mut self, elem: T) {
    self.elems.push(elem)
  }

  fn pop(&mut self) -> Option<T> {
    self.elems.pop()
  }

  fn peek(&self) -> Option<&T> {
    self.elems.last()
  }

  fn size(&self) -> usize {
    self.elems.len()
  }
}

impl<T> Default for ArrayStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

/// Pushes the elements in iteration order, so the last one ends up on top.
impl<T> FromIterator<T> for ArrayStack<T> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    Self {
      elems: iter.into_iter().collect(),
    }
  }
}

impl<T> Extend<T> for ArrayStack<T> {
  fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
    self.elems.extend(iter)
  }
}

/// Consumes an `ArrayStack<T>` in pop order, top first.
pub struct IntoIter<T> {
  stack: ArrayStack<T>,
}

impl<T> Iterator for IntoIter<T> {
  type Item = T;

  fn next(&mut self) -> Option<T> {
    self.stack.pop()
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let n = self.stack.size();
    (n, Some(n))
  }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for ArrayStack<T> {
  type Item = T;
  type IntoIter = IntoIter<T>;

  fn into_iter(self) -> IntoIter<T> {
    IntoIter { stack: self }
  }
}
