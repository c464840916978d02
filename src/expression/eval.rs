use log::debug;

use crate::expression::ast::{Operation, Step};
use crate::expression::errors::ExpressionError;

impl Operation {
    /// Apply the operation to two tiles.
    ///
    /// Returns `None` when the result would not be a new positive tile:
    /// subtraction with `a <= b`, division by zero, inexact division, or `u32` overflow.
    pub fn apply(self, a: u32, b: u32) -> Option<u32> {
        match self {
            Operation::Add => a.checked_add(b),
            Operation::Sub => (a > b).then(|| a - b),
            Operation::Mul => a.checked_mul(b),
            Operation::Div => (b != 0 && a % b == 0).then(|| a / b),
        }
    }
}

/// Remove one occurrence of `value` from the multiset
fn take_tile(tiles: &mut Vec<u32>, value: u32) -> Result<(), ExpressionError> {
    let position = tiles
        .iter()
        .position(|&tile| tile == value)
        .ok_or(ExpressionError::MissingTile(value))?;
    tiles.remove(position);
    Ok(())
}

/// Replay a derivation against its starting tiles and return the final value.
///
/// Every `Apply` step consumes its two operands from the current multiset and adds
/// its result back, so a trail produced by the solver always replays cleanly.
///
/// # Errors
///
/// Returns an error when the trail is empty, uses a tile that is not available at
/// that point, contains an operation that is not allowed, or places a literal step
/// anywhere other than as the sole step.
pub fn replay(tiles: &[u32], steps: &[Step]) -> Result<u32, ExpressionError> {
    let mut available = tiles.to_vec();
    let mut last = None;

    for step in steps {
        match *step {
            Step::Literal(value) => {
                if steps.len() != 1 {
                    return Err(ExpressionError::MisplacedLiteral);
                }
                if !available.contains(&value) {
                    return Err(ExpressionError::MissingTile(value));
                }
                last = Some(value);
            }
            Step::Apply { lhs, op, rhs } => {
                take_tile(&mut available, lhs)?;
                take_tile(&mut available, rhs)?;
                let result = op
                    .apply(lhs, rhs)
                    .ok_or(ExpressionError::InvalidOperation { lhs, op, rhs })?;
                debug!("Replayed {} = {}", step, result);
                available.push(result);
                last = Some(result);
            }
        }
    }

    last.ok_or(ExpressionError::EmptyExpression)
}
