//! Seedable pseudo-random number generator (xorshift64).
//! Deterministic, fast, no-std compatible.

/// Seedable pseudo-random number generator (xorshift64).
///
/// The simulation owns one of these for its whole lifetime and draws from it
/// repeatedly; a fixed seed makes runs reproducible in tests.
#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    pub fn new(seed: u64) -> Self {
        Rng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Generate a random number in [0, upper_bound).
    pub fn next_int(&mut self, upper_bound: u32) -> u32 {
        (self.next_u64() % upper_bound as u64) as u32
    }

    /// Generate a random float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Generate a random float in [lo, hi).
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }

    /// Generate a random float in [-magnitude, magnitude).
    pub fn bilateral(&mut self, magnitude: f32) -> f32 {
        self.range(-magnitude, magnitude)
    }
}
