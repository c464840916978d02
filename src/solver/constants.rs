// Rules of the numbers round
pub const TILE_POOL: [u32; 13] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 25, 50, 100];
pub const TILE_COUNT: usize = 6;
pub const MAX_TARGET: u32 = 1000;
