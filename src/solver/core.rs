use log::{debug, info, warn};

use crate::expression::{Operation, Step};
use crate::rng::MersenneTwister;
use crate::solver::errors::SolverError;
use crate::solver::puzzle::Puzzle;
use crate::solver::solution::Solution;

/// Depth-first search for the expression closest to the target.
///
/// The solver owns its puzzle and the best-so-far state. Each branch of the search
/// works on its own copy of the tiles and of the expression trail; only the best-so-far
/// fields are shared, and they only ever move closer to the target.
#[derive(Debug, Default)]
pub struct Solver {
    puzzle: Option<Puzzle>,
    closest_result: Option<u32>,
    best_expression: Vec<Step>,
    improvements: Vec<u32>,
    nodes_explored: u64,
}

impl Solver {
    /// Create a solver without a puzzle
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver for a known puzzle
    pub fn with_puzzle(puzzle: Puzzle) -> Self {
        Self {
            puzzle: Some(puzzle),
            ..Self::default()
        }
    }

    /// Draw a fresh puzzle from `rng`, discarding any previous result
    pub fn generate_target_and_tiles(&mut self, rng: &mut MersenneTwister) -> &Puzzle {
        self.reset();
        self.puzzle.insert(Puzzle::generate(rng))
    }

    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    pub fn closest_result(&self) -> Option<u32> {
        self.closest_result
    }

    pub fn best_expression(&self) -> &[Step] {
        &self.best_expression
    }

    /// Search for the value closest to the target.
    ///
    /// A target that is already one of the tiles is answered directly with a single
    /// literal step. Ties between equally close results go to the first one found.
    ///
    /// # Errors
    ///
    /// Returns `SolverError::PuzzleNotGenerated` if no puzzle has been generated or supplied.
    pub fn solve(&mut self) -> Result<Solution, SolverError> {
        let puzzle = self.puzzle.clone().ok_or(SolverError::PuzzleNotGenerated)?;
        self.reset();

        let target = puzzle.target();
        info!(
            "Solving for {} with tiles {:?}",
            target,
            puzzle.tiles()
        );

        if puzzle.tiles().contains(&target) {
            info!("Target {} is one of the tiles", target);
            self.nodes_explored = 1;
            self.record(target, vec![Step::Literal(target)]);
        } else {
            self.find_solution(target, puzzle.tiles().to_vec(), Vec::new());
        }

        match self.closest_result {
            Some(value) => info!(
                "Closest result {} (off by {}) after {} nodes",
                value,
                value.abs_diff(target),
                self.nodes_explored
            ),
            None => warn!("No valid solution found after {} nodes", self.nodes_explored),
        }

        Ok(Solution {
            target,
            closest_result: self.closest_result,
            expression: self.best_expression.clone(),
            improvements: self.improvements.clone(),
            nodes_explored: self.nodes_explored,
        })
    }

    fn reset(&mut self) {
        self.closest_result = None;
        self.best_expression.clear();
        self.improvements.clear();
        self.nodes_explored = 0;
    }

    fn record(&mut self, value: u32, expression: Vec<Step>) {
        debug!("New best {} via {} steps", value, expression.len());
        self.closest_result = Some(value);
        self.best_expression = expression;
        self.improvements.push(value);
    }

    fn find_solution(&mut self, target: u32, tiles: Vec<u32>, expression: Vec<Step>) {
        if self.closest_result == Some(target) {
            return;
        }
        self.nodes_explored += 1;

        if tiles.contains(&target) {
            // Every earlier tile was already present in the parent state, so only the
            // newest one can be the match.
            debug_assert_eq!(tiles.last(), Some(&target));
            self.record(target, expression);
            return;
        }

        if let [value] = tiles.as_slice() {
            let closer = match self.closest_result {
                None => true,
                Some(best) => value.abs_diff(target) < best.abs_diff(target),
            };
            if closer {
                let mut expression = expression;
                if expression.is_empty() {
                    // A lone starting tile is its own derivation
                    expression.push(Step::Literal(*value));
                }
                self.record(*value, expression);
            }
            return;
        }

        for (i, &a) in tiles.iter().enumerate() {
            for (j, &b) in tiles.iter().enumerate() {
                if i == j {
                    continue;
                }
                for op in Operation::ALL {
                    self.branch(target, &tiles, &expression, (i, j), Step::apply(a, op, b));

                    if !op.is_commutative() {
                        self.branch(target, &tiles, &expression, (i, j), Step::apply(b, op, a));
                    }
                }
            }
        }
    }

    /// Replace the tiles at `positions` with the result of `step` and recurse
    fn branch(
        &mut self,
        target: u32,
        tiles: &[u32],
        expression: &[Step],
        positions: (usize, usize),
        step: Step,
    ) {
        let Some(result) = step.value() else {
            return;
        };

        let (i, j) = positions;
        let mut next_tiles = tiles.to_vec();
        next_tiles.remove(i.max(j));
        next_tiles.remove(i.min(j));
        next_tiles.push(result);

        let mut next_expression = expression.to_vec();
        next_expression.push(step);

        self.find_solution(target, next_tiles, next_expression);
    }
}
