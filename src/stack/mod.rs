//! Stack implementation
//!
//! This module provides the `Stack<T>` abstract data type and its
//! array-based implementation `ArrayStack`, which keeps its elements in a
//! `Vec<T>` with the top at the end.
//!
//! Popping or peeking an empty stack is not an error: both return `None`
//! and leave the stack untouched. Callers that would rather propagate the
//! exhaustion with `?` can use `try_pop` and `try_peek`, which report an
//! `EmptyStackError` instead.

mod array;

pub use self::array::{ArrayStack, IntoIter};

use crate::error::EmptyStackError;

/// The `Stack<T>` abstract data type.
pub trait Stack<T> {
  /// Creates a new, empty `Stack<T>`.
  fn new() -> Self;

  /// Pushes an element onto the stack.
  fn push(&mut self, elem: T);

  /// Pops an element from the stack, if there is one.
  fn pop(&mut self) -> Option<T>;

  /// Returns the top element without removing it, if there is one.
  fn peek(&self) -> Option<&T>;

  /// Returns the number of elements in the stack.
  fn size(&self) -> usize;

  /// Predicate that tests if the stack is empty.
  fn is_empty(&self) -> bool {
    self.size() == 0
  }

  /// Like `pop`, but reports an empty stack as an error.
  fn try_pop(&mut self) -> Result<T, EmptyStackError> {
    self.pop().ok_or(EmptyStackError)
  }

  /// Like `peek`, but reports an empty stack as an error.
  fn try_peek(&self) -> Result<&T, EmptyStackError> {
    self.peek().ok_or(EmptyStackError)
  }
}
