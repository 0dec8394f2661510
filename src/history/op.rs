/// Represents an operation performed on a `Stack<T>`, with its result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackOp<T> {
  Push(T),
  Pop(Option<T>),
  Peek(Option<T>),
  Size(usize),
}

impl<T> StackOp<T> {
  /// Name of the operation, without its argument or result.
  pub fn name(&self) -> &'static str {
    match self {
      StackOp::Push(_) => "push",
      StackOp::Pop(_) => "pop",
      StackOp::Peek(_) => "peek",
      StackOp::Size(_) => "size",
    }
  }
}
