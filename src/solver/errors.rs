use thiserror::Error;

use crate::solver::constants::{MAX_TARGET, TILE_COUNT};

/// Errors for caller-supplied puzzles
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PuzzleError {
    #[error("Puzzle needs at least one tile")]
    NoTiles,
    #[error("Puzzle has {0} tiles, at most {max} are allowed", max = TILE_COUNT)]
    TooManyTiles(usize),
    #[error("Tile at position {0} is zero, tiles must be positive")]
    ZeroTile(usize),
    #[error("Target {0} is out of range, expected 0..={max}", max = MAX_TARGET)]
    TargetOutOfRange(u32),
}

#[derive(Error, Debug)]
pub enum SolverError {
    #[error("No puzzle to solve: generate or supply one first")]
    PuzzleNotGenerated,
    #[error("Invalid puzzle: {0}")]
    PuzzleError(#[from] PuzzleError),
}
