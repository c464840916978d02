//! Deterministic pseudo-random numbers (MT19937) for reproducible puzzles

pub mod constants;
mod core;
mod errors;

pub use self::core::MersenneTwister;
pub use errors::RngError;
