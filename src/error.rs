use thiserror::Error;

/// Returned by `try_pop` and `try_peek` when there is no top element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stack is empty")]
pub struct EmptyStackError;
