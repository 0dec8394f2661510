//! Sequential histories of stack operations
//!
//! A `History` is a log of `StackOp` values, each one an operation
//! together with the result it produced. `History::check` replays the log
//! against a model stack and reports the first step whose recorded result
//! disagrees with the model, which makes it the oracle for the randomized
//! tests of the `Stack` implementations.
//!
//! Logs are usually captured with a `Recorder`, which wraps a `Stack` and
//! records everything forwarded to it.

mod op;
mod recorder;

pub use self::op::StackOp;
pub use self::recorder::Recorder;

use std::fmt::Debug;

use log::trace;
use thiserror::Error;

/// A step of a `History` that the model stack does not agree with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("step {step}: recorded {recorded:?}, but the stack should give {expected:?}")]
pub struct HistoryError<T>
where T: Debug {
  /// Zero-based index of the offending operation.
  pub step: usize,
  /// The operation as recorded.
  pub recorded: StackOp<T>,
  /// The same operation with the result the model produced.
  pub expected: StackOp<T>,
}

/// An ordered log of stack operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History<T> {
  ops: Vec<StackOp<T>>,
}

impl<T> History<T> {
  /// Creates a new, empty history.
  pub fn new() -> Self {
    Self {
      ops: Vec::new(),
    }
  }

  /// Appends an operation to the log.
  pub fn record(&mut self, op: StackOp<T>) {
    self.ops.push(op);
  }

  pub fn ops(&self) -> &[StackOp<T>] {
    &self.ops
  }

  pub fn len(&self) -> usize {
    self.ops.len()
  }

  pub fn is_empty(&self) -> bool {
    self.ops.is_empty()
  }
}

impl<T> History<T>
where T: Clone + PartialEq + Debug {
  /// Replays the log against a model stack, starting from empty.
  pub fn check(&self) -> Result<(), HistoryError<T>> {
    let mut current: Vec<T> = Vec::new();

    for (step, op) in self.ops.iter().enumerate() {
      trace!("replay step {}: {:?}", step, op);

      let expected = match op {
        StackOp::Push(v) => {
          current.push(v.clone());
          continue;
        }
        StackOp::Pop(r) => {
          let top = current.pop();
          if *r == top {
            continue;
          }
          StackOp::Pop(top)
        }
        StackOp::Peek(r) => {
          let top = current.last();
          if r.as_ref() == top {
            continue;
          }
          StackOp::Peek(top.cloned())
        }
        StackOp::Size(n) => {
          if *n == current.len() {
            continue;
          }
          StackOp::Size(current.len())
        }
      };

      return Err(HistoryError {
        step: step,
        recorded: op.clone(),
        expected: expected,
      });
    }

    Ok(())
  }
}

impl<T> Default for History<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> FromIterator<StackOp<T>> for History<T> {
  fn from_iter<I: IntoIterator<Item = StackOp<T>>>(iter: I) -> Self {
    Self {
      ops: iter.into_iter().collect(),
    }
  }
}
