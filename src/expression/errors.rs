use thiserror::Error;

use crate::expression::ast::Operation;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("Expression has no steps")]
    EmptyExpression,
    #[error("Tile {0} is not available")]
    MissingTile(u32),
    #[error("Invalid operation: {lhs} {op} {rhs}")]
    InvalidOperation { lhs: u32, op: Operation, rhs: u32 },
    #[error("A literal tile can only appear as the whole expression")]
    MisplacedLiteral,
}
