//! RNG module - deterministic random disc generation
//!
//! A simple LCG keeps the crate dependency-free and makes random draws
//! reproducible from a seed, which matters for simulations that want
//! replayable games.

use dropfour_types::Disc;

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Draw a disc uniformly from all three variants, `Empty` included
pub fn random_disc(rng: &mut SimpleRng) -> Disc {
    Disc::ALL[rng.next_range(Disc::ALL.len() as u32) as usize]
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

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(3) < 3);
        }
    }

    #[test]
    fn test_random_disc_distribution() {
        const ROUNDS: usize = 10_000;
        // Each variant should land within 5% of a perfectly even split.
        const MIN_PER_VARIANT: usize = ROUNDS / 3 * 95 / 100;

        let mut rng = SimpleRng::new(42);
        let mut counts = [0usize; 3];
        for _ in 0..ROUNDS {
            let disc = random_disc(&mut rng);
            let slot = Disc::ALL.iter().position(|&d| d == disc).unwrap();
            counts[slot] += 1;
        }

        assert_eq!(counts.iter().sum::<usize>(), ROUNDS);
        for (disc, count) in Disc::ALL.iter().zip(counts) {
            assert!(
                count >= MIN_PER_VARIANT,
                "{disc} drawn {count} times, expected at least {MIN_PER_VARIANT}"
            );
        }
    }
}
