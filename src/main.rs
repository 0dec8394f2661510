//! Runs the stack demonstrations.

use clap::{Parser, Subcommand};
use log::info;
use lifo::{demo, palindrome, EmptyStackError};
use thiserror::Error;

/// Central error type.
#[derive(Debug, Error)]
enum Error {
  #[error("demo failed: {0}")]
  Demo(#[from] EmptyStackError),
}

#[derive(Clone, Debug, Parser)]
/// Demonstrations of the stack abstract data type
///
/// Without a command, runs the palindrome check on "racecar" and then the
/// scripted demo, each under its own header.
struct Opt {
  #[command(subcommand)]
  command: Option<Command>,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
  /// Check words for being palindromes by reversing them through a stack
  ///
  /// The comparison is exact, so case and whitespace count.
  Palindrome {
    /// Words to check
    #[arg(value_name = "WORD", default_value = "racecar")]
    words: Vec<String>,
  },

  /// Push, pop and peek a stack of numbers and text, printing each result
  Demo,

  /// Run every demonstration in order
  All,
}

/// Runs a command and returns the lines it prints.
fn run(command: &Command) -> Result<Vec<String>, Error> {
  let lines = match command {
    Command::Palindrome { words } => {
      words.iter().map(|word| palindrome::verdict(word)).collect()
    }
    Command::Demo => demo::scenario()?,
    Command::All => {
      let mut lines = vec!["Use array as stack:".to_string()];
      lines.push(palindrome::verdict("racecar"));
      lines.push(String::new());
      lines.push("Create a stack:".to_string());
      lines.extend(demo::scenario()?);
      lines
    }
  };

  Ok(lines)
}

fn main() -> Result<(), Error> {
  env_logger::init();

  let opt = Opt::parse();
  let command = opt.command.unwrap_or(Command::All);
  info!("running {:?}", command);

  for line in run(&command)? {
    println!("{}", line);
  }

  Ok(())
}
