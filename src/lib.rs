//! The stack abstract data type
//!
//! `stack` holds the `Stack<T>` trait and its array-based implementation.
//! `history` records and checks sequences of stack operations, and
//! `palindrome` and `demo` are the two demonstrations run by the `lifo`
//! binary.

pub mod error;
pub mod stack;
pub mod history;
pub mod palindrome;
pub mod demo;

#[cfg(test)]
mod testing;

pub use error::EmptyStackError;
pub use stack::{ArrayStack, Stack};
