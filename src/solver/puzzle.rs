use log::{debug, warn};

use crate::rng::MersenneTwister;
use crate::solver::constants::{MAX_TARGET, TILE_COUNT, TILE_POOL};
use crate::solver::errors::PuzzleError;

/// A target and the tiles available to reach it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    target: u32,
    tiles: Vec<u32>,
}

impl Puzzle {
    /// # Errors
    ///
    /// Returns an error if there are no tiles, more than `TILE_COUNT` tiles,
    /// a zero tile, or a target above `MAX_TARGET`.
    pub fn new(target: u32, tiles: Vec<u32>) -> Result<Self, PuzzleError> {
        if tiles.is_empty() {
            warn!("Rejecting puzzle without tiles");
            return Err(PuzzleError::NoTiles);
        }
        if tiles.len() > TILE_COUNT {
            warn!("Rejecting puzzle with {} tiles", tiles.len());
            return Err(PuzzleError::TooManyTiles(tiles.len()));
        }
        if let Some(position) = tiles.iter().position(|&tile| tile == 0) {
            warn!("Rejecting zero tile at position {}", position);
            return Err(PuzzleError::ZeroTile(position));
        }
        if target > MAX_TARGET {
            warn!("Rejecting target {}", target);
            return Err(PuzzleError::TargetOutOfRange(target));
        }
        Ok(Self { target, tiles })
    }

    /// Draw a random puzzle: shuffle the pool, keep the first tiles, then pick a target.
    ///
    /// The draw order (shuffle first, target second) is part of the reproducibility
    /// contract for a given seed.
    pub fn generate(rng: &mut MersenneTwister) -> Self {
        let mut pool = TILE_POOL;
        rng.shuffle(&mut pool);
        let tiles = pool.iter().take(TILE_COUNT).copied().collect();
        let target = rng.next_u32() % (MAX_TARGET + 1);

        let puzzle = Self { target, tiles };
        debug!("Generated puzzle {:?}", puzzle);
        puzzle
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }
}
