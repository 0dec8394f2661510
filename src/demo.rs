//! Scripted walk through the stack operations.

use std::fmt;

use log::debug;
use crate::error::EmptyStackError;
use crate::stack::{ArrayStack, Stack};

/// An element of the demo stack, which holds numbers and text side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
  Num(i64),
  Text(String),
}

impl fmt::Display for Item {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Item::Num(n) => write!(f, "{}", n),
      Item::Text(s) => write!(f, "{}", s),
    }
  }
}

impl From<i64> for Item {
  fn from(n: i64) -> Self {
    Item::Num(n)
  }
}

impl<'a> From<&'a str> for Item {
  fn from(s: &'a str) -> Self {
    Item::Text(s.to_owned())
  }
}

/// Runs the scenario and returns the lines it prints, in order.
///
/// Every peek and pop in the script hits a non-empty stack, so an
/// `EmptyStackError` here means the stack lost an element.
pub fn scenario() -> Result<Vec<String>, EmptyStackError> {
  let mut stack: ArrayStack<Item> = ArrayStack::new();
  let mut out = Vec::new();

  stack.push(Item::Num(1));
  stack.push(Item::Num(2));
  out.push(stack.try_peek()?.to_string());
  out.push(stack.try_pop()?.to_string());
  out.push(stack.try_peek()?.to_string());
  stack.push("free".into());
  out.push(stack.size().to_string());
  out.push(stack.try_peek()?.to_string());
  out.push(stack.try_pop()?.to_string());
  out.push(stack.try_peek()?.to_string());

  debug!("scenario left {} element(s) on the stack", stack.size());
  Ok(out)
}
