//! Countdown - generate and solve numbers-round puzzles
//!
//! A puzzle is a target and six tiles drawn from a fixed pool. The solver combines
//! tiles with `+ - * /`, keeping every intermediate value a positive integer, and
//! reports the value closest to the target together with the steps that reach it.
//! Puzzles come from a seeded Mersenne Twister so a seed reproduces a whole run.

pub mod expression;
pub mod rng;
pub mod solver;

// Re-export the main public API
pub use expression::{ExpressionError, Operation, Step, format_expression, replay};
pub use rng::{MersenneTwister, RngError};
pub use solver::{Puzzle, PuzzleError, Solution, Solver, SolverError};

/// Find the expression closest to `target` using the given tiles
///
/// This is a convenience function that validates the puzzle, creates a solver and
/// runs the search.
///
/// # Arguments
///
/// * `target` - The value to reach, at most 1000
/// * `tiles` - Between one and six positive tiles
///
/// # Errors
///
/// This function will return an error if the puzzle is invalid: no tiles, too many
/// tiles, a zero tile, or a target out of range.
///
/// # Examples
///
/// ```
/// use countdown::solve_puzzle;
///
/// let solution = solve_puzzle(952, vec![25, 50, 75, 100, 3, 6]).unwrap();
/// assert_eq!(solution.closest_result, Some(952));
/// ```
pub fn solve_puzzle(target: u32, tiles: Vec<u32>) -> Result<Solution, SolverError> {
    let puzzle = Puzzle::new(target, tiles)?;
    Solver::with_puzzle(puzzle).solve()
}
