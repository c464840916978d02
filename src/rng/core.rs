use log::{debug, trace};

use crate::rng::constants::{
    DEFAULT_SEED, KEY_BASE_SEED, LOWER_MASK, MATRIX_A, SHIFT_SIZE, STATE_SIZE, UPPER_MASK,
};
use crate::rng::errors::RngError;

/// Mersenne Twister (MT19937) generator.
///
/// The whole run is determined by the seed: puzzle generation and every shuffle draw
/// from the same stream, so callers must keep one generator and use it in a fixed order.
#[derive(Clone)]
pub struct MersenneTwister {
    state: [u32; STATE_SIZE],
    index: usize,
}

impl MersenneTwister {
    /// Create a generator seeded with a single integer
    pub fn new(seed: u32) -> Self {
        let mut rng = Self {
            state: [0; STATE_SIZE],
            index: STATE_SIZE,
        };
        rng.seed(seed);
        rng
    }

    /// Create a generator seeded from an array key
    ///
    /// # Errors
    ///
    /// Returns `RngError::EmptyKey` if `key` is empty.
    pub fn from_key(key: &[u32]) -> Result<Self, RngError> {
        let mut rng = Self::new(KEY_BASE_SEED);
        rng.seed_from_array(key)?;
        Ok(rng)
    }

    /// Reset the state from a single integer
    pub fn seed(&mut self, seed: u32) {
        debug!("Seeding generator with {}", seed);
        self.state[0] = seed;
        for i in 1..STATE_SIZE {
            let prev = self.state[i - 1];
            self.state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = STATE_SIZE;
    }

    /// Reset the state from an array key
    ///
    /// # Errors
    ///
    /// Returns `RngError::EmptyKey` if `key` is empty; the state is left untouched.
    pub fn seed_from_array(&mut self, key: &[u32]) -> Result<(), RngError> {
        if key.is_empty() {
            return Err(RngError::EmptyKey);
        }
        debug!("Seeding generator from a {}-word key", key.len());

        self.seed(KEY_BASE_SEED);
        let mut i = 1;
        let mut j = 0;

        for _ in 0..STATE_SIZE.max(key.len()) {
            let prev = self.state[i - 1];
            self.state[i] = (self.state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_664_525))
                .wrapping_add(key[j])
                .wrapping_add(j as u32);
            i += 1;
            j += 1;
            if i >= STATE_SIZE {
                self.state[0] = self.state[STATE_SIZE - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }

        for _ in 0..STATE_SIZE - 1 {
            let prev = self.state[i - 1];
            self.state[i] = (self.state[i] ^ (prev ^ (prev >> 30)).wrapping_mul(1_566_083_941))
                .wrapping_sub(i as u32);
            i += 1;
            if i >= STATE_SIZE {
                self.state[0] = self.state[STATE_SIZE - 1];
                i = 1;
            }
        }

        // MSB is 1, assuring a non-zero initial array
        self.state[0] = UPPER_MASK;
        self.index = STATE_SIZE;
        Ok(())
    }

    fn twist(&mut self) {
        trace!("Regenerating {} state words", STATE_SIZE);
        for i in 0..STATE_SIZE {
            let next = self.state[(i + 1) % STATE_SIZE];
            let y = (self.state[i] & UPPER_MASK) | (next & LOWER_MASK);
            let mag = if y & 1 == 0 { 0 } else { MATRIX_A };
            self.state[i] = self.state[(i + SHIFT_SIZE) % STATE_SIZE] ^ (y >> 1) ^ mag;
        }
        self.index = 0;
    }

    /// Uniform on `[0, 0xffffffff]`
    pub fn next_u32(&mut self) -> u32 {
        if self.index >= STATE_SIZE {
            self.twist();
        }

        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }

    /// Uniform on `[0, 0x7fffffff]`
    pub fn next_u31(&mut self) -> u32 {
        self.next_u32() >> 1
    }

    /// Uniform on `[0, 1]`
    pub fn next_real_closed(&mut self) -> f64 {
        f64::from(self.next_u32()) * (1.0 / 4_294_967_295.0)
    }

    /// Uniform on `[0, 1)`
    pub fn next_real_half_open(&mut self) -> f64 {
        f64::from(self.next_u32()) * (1.0 / 4_294_967_296.0)
    }

    /// Uniform on `(0, 1)`
    pub fn next_real_open(&mut self) -> f64 {
        (f64::from(self.next_u32()) + 0.5) * (1.0 / 4_294_967_296.0)
    }

    /// Uniform on `[0, 1)` with 53-bit resolution
    pub fn next_real53(&mut self) -> f64 {
        let a = f64::from(self.next_u32() >> 5);
        let b = f64::from(self.next_u32() >> 6);
        (a * 67_108_864.0 + b) * (1.0 / 9_007_199_254_740_992.0)
    }

    /// In-place Fisher-Yates shuffle drawing from this generator
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = (self.next_u32() as usize) % (i + 1);
            items.swap(i, j);
        }
    }
}

impl Default for MersenneTwister {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl std::fmt::Debug for MersenneTwister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MersenneTwister")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
