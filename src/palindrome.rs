//! Palindrome check by reversing a word through a stack.
//!
//! The comparison is exact: case, whitespace and punctuation all count.

use log::debug;
use crate::stack::{ArrayStack, Stack};

/// Reverses `word` by pushing each of its characters and popping them off.
pub fn reverse(word: &str) -> String {
  let mut letters = ArrayStack::new();
  for c in word.chars() {
    letters.push(c);
  }

  let mut rword = String::with_capacity(word.len());
  while let Some(c) = letters.pop() {
    rword.push(c);
  }

  rword
}

pub fn is_palindrome(word: &str) -> bool {
  let rword = reverse(word);
  debug!("{:?} reversed is {:?}", word, rword);
  rword == word
}

/// The line the demo prints for `word`.
pub fn verdict(word: &str) -> String {
  if is_palindrome(word) {
    format!("{} is a palindrome.", word)
  } else {
    format!("{} is not a palindrome.", word)
  }
}
