pub mod constants;
mod core;
mod errors;
mod puzzle;
mod solution;

pub use self::core::Solver;
pub use errors::{PuzzleError, SolverError};
pub use puzzle::Puzzle;
pub use solution::Solution;

#[cfg(test)]
mod tests;
