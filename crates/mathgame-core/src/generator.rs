//! Problem generation.
//!
//! Operands are drawn uniformly from `[1, upper_bound)`. Operations with a
//! validity predicate (division) use rejection sampling until the pair is
//! accepted.

use rand::Rng;

use crate::error::{GameError, Result};
use crate::model::{Operation, Problem};

/// Generate a problem for `operation` with operands below `upper_bound`.
///
/// `upper_bound < 2` leaves no operand to draw and is rejected. For any
/// larger bound the pair `(x, x)` satisfies every predicate, so sampling
/// terminates with probability 1.
pub fn generate<R: Rng + ?Sized>(
    operation: Operation,
    upper_bound: i32,
    rng: &mut R,
) -> Result<Problem> {
    if upper_bound < 2 {
        return Err(GameError::EmptyOperandRange { upper_bound });
    }

    let mut rejected = 0u32;
    let (num1, num2) = loop {
        let num1 = rng.random_range(1..upper_bound);
        let num2 = rng.random_range(1..upper_bound);
        if operation.is_valid(num1, num2) {
            break (num1, num2);
        }
        rejected += 1;
    };

    if rejected > 0 {
        tracing::trace!("{operation}: accepted ({num1}, {num2}) after {rejected} rejections");
    }

    Ok(Problem {
        operation,
        num1,
        num2,
        result: operation.apply(num1, num2),
    })
}
