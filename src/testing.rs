//! Randomized drivers shared by the unit tests.

use rand::Rng;
use crate::history::{History, Recorder};
use crate::stack::Stack;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOp {
  Push,
  Pop,
  Peek,
  Size,
}

/// Operation weights for a mix that pops with probability `p_pop` and
/// splits the rest between pushes and the two observers.
pub fn weights(p_pop: f64) -> Vec<(TestOp, f64)> {
  let rest = 1.0 - p_pop;
  vec![(TestOp::Push, rest * 0.6),
       (TestOp::Pop,  p_pop),
       (TestOp::Peek, rest * 0.2),
       (TestOp::Size, rest * 0.2)]
}

/// Picks an operation according to the given weights.
pub fn choose_op<R: Rng>(rng: &mut R, ops: &[(TestOp, f64)]) -> TestOp {
  let total: f64 = ops.iter().map(|&(_, w)| w).sum();
  let mut f = rng.gen::<f64>() * total;

  for &(op, w) in ops {
    if f < w {
      return op;
    }
    f -= w;
  }

  // rounding can leave `f` just past the last weight
  ops.last().map_or(TestOp::Push, |&(op, _)| op)
}

/// Runs `n_ops` random operations against `stack` and returns the log.
pub fn random_history<S: Stack<i32>>(stack: S, n_ops: usize, p_pop: f64) -> History<i32> {
  let mut rng = rand::thread_rng();
  let ops = weights(p_pop);
  let mut rec = Recorder::wrap(stack);

  for _ in 0..n_ops {
    match choose_op(&mut rng, &ops) {
      TestOp::Push => rec.push(rng.gen()),
      TestOp::Pop => { rec.pop(); }
      TestOp::Peek => { rec.peek(); }
      TestOp::Size => { rec.size(); }
    }
  }

  let (_, history) = rec.into_parts();
  history
}


#[cfg(test)]
mod testing_tests {
  use super::*;

  #[test]
  fn choose_op_single_weight() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
      assert_eq!(choose_op(&mut rng, &[(TestOp::Peek, 1.0)]), TestOp::Peek);
    }
  }

  #[test]
  fn choose_op_empty_weights() {
    let mut rng = rand::thread_rng();
    assert_eq!(choose_op(&mut rng, &[]), TestOp::Push);
  }
}
