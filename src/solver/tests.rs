use crate::expression::{Operation, Step, replay};
use crate::rng::MersenneTwister;
use crate::solver::constants::{MAX_TARGET, TILE_COUNT, TILE_POOL};
use crate::solver::{Puzzle, PuzzleError, Solution, Solver, SolverError};

fn solve(target: u32, tiles: Vec<u32>) -> Result<Solution, SolverError> {
    crate::solve_puzzle(target, tiles)
}

fn assert_consistent(tiles: &[u32], solution: &Solution) {
    let replayed = replay(tiles, &solution.expression);
    assert_eq!(
        replayed.ok(),
        solution.closest_result,
        "expression {:?} does not reach the reported result",
        solution.expression
    );

    let differences: Vec<u32> = solution
        .improvements
        .iter()
        .map(|value| value.abs_diff(solution.target))
        .collect();
    for pair in differences.windows(2) {
        assert!(pair[1] < pair[0], "improvements not monotone: {:?}", differences);
    }
    assert_eq!(solution.improvements.last().copied(), solution.closest_result);
}

#[test]
fn test_exact_match_fast_path() {
    let result = solve(25, vec![3, 7, 25, 1, 1, 9]);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.closest_result, Some(25));
        assert_eq!(solution.expression, vec![Step::Literal(25)]);
        assert_eq!(solution.nodes_explored, 1);
        assert!(solution.is_exact());
        assert_eq!(solution.difference(), Some(0));
    }
}

#[test]
fn test_end_to_end_952() {
    let tiles = vec![25, 50, 75, 100, 3, 6];
    let result = solve(952, tiles.clone());
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert!(solution.is_exact());
        assert!(!solution.expression.is_empty());
        assert_eq!(replay(&tiles, &solution.expression), Ok(952));
        assert_consistent(&tiles, &solution);
    }
}

#[test]
fn test_exact_match_is_newest_tile() {
    let result = solve(5, vec![2, 3]);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.closest_result, Some(5));
        assert_eq!(
            solution.expression,
            vec![Step::apply(2, Operation::Add, 3)]
        );
        assert_eq!(solution.improvements, vec![5]);
    }
}

#[test]
fn test_tie_goes_to_first_found() {
    // 2 + 3 is recorded first, then 2 * 3 is closer; 3 * 2 ties and is ignored
    let result = solve(10, vec![2, 3]);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.closest_result, Some(6));
        assert_eq!(solution.improvements, vec![5, 6]);
        assert_eq!(
            solution.expression,
            vec![Step::apply(2, Operation::Mul, 3)]
        );
    }
}

#[test]
fn test_reversed_operands_for_subtraction() {
    let result = solve(2, vec![3, 5]);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.closest_result, Some(2));
        assert_eq!(
            solution.expression,
            vec![Step::apply(5, Operation::Sub, 3)]
        );
    }
}

#[test]
fn test_reversed_operands_for_division() {
    let result = solve(4, vec![2, 8]);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.closest_result, Some(4));
        assert_eq!(
            solution.expression,
            vec![Step::apply(8, Operation::Div, 2)]
        );
    }
}

#[test]
fn test_branch_count_two_tiles() {
    // Root, then per ordered pair: a + b, the valid subtraction, a * b
    let result = solve(10, vec![2, 3]);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.nodes_explored, 7);
    }
}

#[test]
fn test_commutative_operations_are_not_reversed() {
    // Per ordered pair: +, the valid subtraction, *, the exact division.
    // Reversing + and * as well would add four more nodes.
    let result = solve(100, vec![4, 2]);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.nodes_explored, 9);
        assert_eq!(solution.closest_result, Some(8));
    }
}

#[test]
fn test_exact_match_stops_the_search() {
    let result = solve(5, vec![2, 3]);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.nodes_explored, 2);
    }

    // 8 / 2 is the last branch tried for the pair (2, 8); the pair (8, 2) is skipped
    let result = solve(4, vec![2, 8]);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.nodes_explored, 5);
    }
}

#[test]
fn test_worst_case_fallback() {
    let tiles = vec![1, 1, 1, 1];
    let result = solve(999, tiles.clone());
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.closest_result, Some(4));
        assert!(!solution.is_exact());
        assert_eq!(solution.difference(), Some(995));
        assert_eq!(solution.expression.len(), 3);
        assert_consistent(&tiles, &solution);
    }
}

#[test]
fn test_closest_uses_every_tile() {
    let tiles = vec![2, 3, 7];
    let result = solve(1000, tiles.clone());
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.closest_result, Some(42));
        assert_eq!(solution.expression.len(), 2);
        assert_consistent(&tiles, &solution);
    }
}

#[test]
fn test_target_zero_reports_nearest_positive() {
    let tiles = vec![4, 5];
    let result = solve(0, tiles.clone());
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.closest_result, Some(1));
        assert_consistent(&tiles, &solution);
    }
}

#[test]
fn test_single_tile_puzzle() {
    let result = solve(10, vec![7]);
    assert!(result.is_ok());
    if let Ok(solution) = result {
        assert_eq!(solution.closest_result, Some(7));
        assert_eq!(solution.expression, vec![Step::Literal(7)]);
    }
}

#[test]
fn test_solve_without_puzzle() {
    let mut solver = Solver::new();
    assert!(matches!(
        solver.solve(),
        Err(SolverError::PuzzleNotGenerated)
    ));
    assert_eq!(solver.closest_result(), None);
    assert!(solver.best_expression().is_empty());
}

#[test]
fn test_solve_is_repeatable() {
    let puzzle = Puzzle::new(317, vec![4, 9, 25, 6]);
    assert!(puzzle.is_ok());
    if let Ok(puzzle) = puzzle {
        let mut solver = Solver::with_puzzle(puzzle);
        let first = solver.solve();
        let second = solver.solve();
        assert!(first.is_ok() && second.is_ok());
        if let (Ok(first), Ok(second)) = (first, second) {
            assert_eq!(first, second);
            assert_eq!(solver.closest_result(), first.closest_result);
            assert_eq!(solver.best_expression(), first.expression.as_slice());
        }
    }
}

#[test]
fn test_puzzle_validation() {
    assert_eq!(Puzzle::new(10, vec![]), Err(PuzzleError::NoTiles));
    assert_eq!(
        Puzzle::new(10, vec![1, 2, 3, 4, 5, 6, 7]),
        Err(PuzzleError::TooManyTiles(7))
    );
    assert_eq!(
        Puzzle::new(10, vec![1, 0, 3]),
        Err(PuzzleError::ZeroTile(1))
    );
    assert_eq!(
        Puzzle::new(1001, vec![1, 2]),
        Err(PuzzleError::TargetOutOfRange(1001))
    );
    assert!(Puzzle::new(1000, vec![75, 75]).is_ok());
}

#[test]
fn test_generated_puzzle_follows_rules() {
    let mut rng = MersenneTwister::new(4539);
    for _ in 0..100 {
        let puzzle = Puzzle::generate(&mut rng);
        assert!(puzzle.target() <= MAX_TARGET);
        assert_eq!(puzzle.tiles().len(), TILE_COUNT);
        for tile in puzzle.tiles() {
            assert!(TILE_POOL.contains(tile));
        }
        let mut distinct = puzzle.tiles().to_vec();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(distinct.len(), TILE_COUNT);
    }
}

#[test]
fn test_generation_is_deterministic() {
    let mut a = MersenneTwister::new(4539);
    let mut b = MersenneTwister::new(4539);
    for _ in 0..100 {
        assert_eq!(Puzzle::generate(&mut a), Puzzle::generate(&mut b));
    }
}

#[test]
fn test_generation_order_is_shuffle_then_target() {
    let mut rng = MersenneTwister::new(4539);
    let mut manual = MersenneTwister::new(4539);

    let puzzle = Puzzle::generate(&mut rng);

    let mut pool = TILE_POOL;
    manual.shuffle(&mut pool);
    let target = manual.next_u32() % 1001;
    assert_eq!(puzzle.tiles(), &pool[..TILE_COUNT]);
    assert_eq!(puzzle.target(), target);
}

#[test]
fn test_generate_resets_previous_result() {
    let mut rng = MersenneTwister::new(1);
    let puzzle = Puzzle::new(5, vec![2, 3]);
    assert!(puzzle.is_ok());
    if let Ok(puzzle) = puzzle {
        let mut solver = Solver::with_puzzle(puzzle);
        assert!(solver.solve().is_ok());
        assert_eq!(solver.closest_result(), Some(5));

        let generated = solver.generate_target_and_tiles(&mut rng).clone();
        assert_eq!(solver.puzzle(), Some(&generated));
        assert_eq!(solver.closest_result(), None);
        assert!(solver.best_expression().is_empty());
    }
}

#[test]
fn test_seeded_small_puzzles_are_consistent() {
    // Exercises the newest-tile assertion in the search on many reachable states
    let mut rng = MersenneTwister::new(4539);
    for _ in 0..40 {
        let mut pool = TILE_POOL;
        rng.shuffle(&mut pool);
        let tiles = pool[..4].to_vec();
        let target = rng.next_u32() % (MAX_TARGET + 1);

        let result = solve(target, tiles.clone());
        assert!(result.is_ok());
        if let Ok(solution) = result {
            assert!(solution.closest_result.is_some());
            assert!(!solution.expression.is_empty());
            assert_consistent(&tiles, &solution);

            if solution.is_exact() && !tiles.contains(&target) {
                let last = solution.expression.last().and_then(Step::value);
                assert_eq!(last, Some(target));
            }
        }
    }
}
