// MT19937 parameters
pub const STATE_SIZE: usize = 624;
pub const SHIFT_SIZE: usize = 397;
pub const MATRIX_A: u32 = 0x9908_b0df;
pub const UPPER_MASK: u32 = 0x8000_0000;
pub const LOWER_MASK: u32 = 0x7fff_ffff;

/// Seed used by `Default`, matching the reference generator when it is never seeded
pub const DEFAULT_SEED: u32 = 5489;

/// Base seed applied before mixing in an array key
pub const KEY_BASE_SEED: u32 = 19_650_218;
