use crate::stack::Stack;
use super::*;

/// Wraps a `Stack<T>` and records each forwarded operation in a `History`.
///
/// `peek` takes `&mut self` and returns a clone of the top element, since
/// observing the stack is itself recorded.
#[derive(Debug)]
pub struct Recorder<T, S> {
  stack: S,
  history: History<T>,
}

impl<T, S> Recorder<T, S>
where T: Clone, S: Stack<T> {
  /// Creates a recorder around a new, empty stack.
  pub fn new() -> Self {
    Self::wrap(S::new())
  }

  /// Creates a recorder around an existing stack. Its current contents
  /// are not part of the history, so `check` expects `stack` to be empty.
  pub fn wrap(stack: S) -> Self {
    Self {
      stack: stack,
      history: History::new(),
    }
  }

  pub fn push(&mut self, elem: T) {
    self.history.record(StackOp::Push(elem.clone()));
    self.stack.push(elem);
  }

  pub fn pop(&mut self) -> Option<T> {
    let r = self.stack.pop();
    self.history.record(StackOp::Pop(r.clone()));
    r
  }

  pub fn peek(&mut self) -> Option<T> {
    let r = self.stack.peek().cloned();
    self.history.record(StackOp::Peek(r.clone()));
    r
  }

  pub fn size(&mut self) -> usize {
    let n = self.stack.size();
    self.history.record(StackOp::Size(n));
    n
  }

  pub fn history(&self) -> &History<T> {
    &self.history
  }

  /// Splits the recorder into the wrapped stack and the recorded log.
  pub fn into_parts(self) -> (S, History<T>) {
    (self.stack, self.history)
  }
}

impl<T, S> Default for Recorder<T, S>
where T: Clone, S: Stack<T> {
  fn default() -> Self {
    Self::new()
  }
}
