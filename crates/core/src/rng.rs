//! RNG module - injected entropy for shape selection
//!
//! The controller never touches a global generator. Hosts pass a
//! [`RandomSource`] in at construction: a seeded [`SimpleRng`] for play, or a
//! scripted [`SequenceRng`] when a test needs to pin the next shapes.

/// Source of random numbers consumed on every spawn.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Get the current RNG state (for restarting a game with the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of a power-of-two LCG cycle quickly; use the high half.
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// `next_range` returns each scripted value modulo `max`, so a script of
/// catalog indices selects exactly those shapes in order.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0);
        }
        Self { values, pos: 0 }
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
    }

    #[test]
    fn test_next_range_covers_all_buckets() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [0u32; 7];
        for _ in 0..7000 {
            seen[rng.next_range(7) as usize] += 1;
        }
        for (bucket, count) in seen.iter().enumerate() {
            assert!(*count > 700, "bucket {} drawn only {} times", bucket, count);
        }
    }

    #[test]
    fn test_sequence_rng_cycles() {
        let mut rng = SequenceRng::new(vec![1, 5, 9]);
        let drawn: Vec<u32> = (0..4).map(|_| rng.next_range(7)).collect();
        assert_eq!(drawn, vec![1, 5, 2, 1]);
    }

    #[test]
    fn test_sequence_rng_empty_script_yields_zero() {
        let mut rng = SequenceRng::new(Vec::new());
        assert_eq!(rng.next_u32(), 0);
    }
}
