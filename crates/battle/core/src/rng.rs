//! Deterministic random source for battle simulation.
//!
//! Every random decision in a battle log (enemy names, target picks,
//! critical rolls) draws from a single [`BattleRng`] instance that is
//! created once per log generation and threaded explicitly through the
//! engine. There is no process-global RNG: two concurrent generations
//! can never interfere with each other's sequences.

/// Modulus of the Park-Miller generator: 2^31 - 1 (a Mersenne prime).
const MODULUS: u64 = 0x7FFF_FFFF;

/// Park-Miller multiplier (7^5).
const MULTIPLIER: u64 = 16807;

/// Seeded linear congruential generator.
///
/// Uses the classic Park-Miller parameters:
/// `state' = state * 16807 mod (2^31 - 1)`.
///
/// The state is always kept in `[1, 2^31 - 2]`; a seed of zero (which
/// would collapse the sequence to all zeroes) is folded to one.
#[derive(Clone, Debug)]
pub struct BattleRng {
    state: u64,
}

impl BattleRng {
    /// Create a generator from an integer seed.
    pub fn new(seed: u32) -> Self {
        let mut state = u64::from(seed) % MODULUS;
        if state == 0 {
            state = 1;
        }
        Self { state }
    }

    #[inline]
    fn step(&mut self) -> u64 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        self.state
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.step() as f64 / MODULUS as f64
    }

    /// Uniform integer in `[min, max)`. Returns `min` when the range is empty.
    pub fn next_range(&mut self, min: i64, max: i64) -> i64 {
        if max <= min {
            return min;
        }
        min + (self.next_f64() * (max - min) as f64) as i64
    }

    /// Bernoulli draw: `true` with the given probability.
    pub fn next_bool(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Uniform index into a collection of `len` elements.
    ///
    /// `len` must be nonzero; a zero length returns 0 and the caller is
    /// expected to have checked emptiness beforehand.
    pub fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.next_range(0, len as i64) as usize
    }
}

/// Derive the battle seed from immutable run identity.
///
/// Combines the run id with the creation timestamp truncated to whole
/// seconds, so regenerating the log for the same run always replays the
/// identical sequence of rolls. The mixing uses SplitMix64-style
/// avalanche constants.
pub fn derive_seed(run_id: u64, created_at_ms: u64) -> u32 {
    let mut hash = run_id;
    hash ^= (created_at_ms / 1000).wrapping_mul(0x9e37_79b9_7f4a_7c15);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51_afd7_ed55_8ccd);
    hash ^= hash >> 33;
    (hash % MODULUS) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = BattleRng::new(42);
        let mut b = BattleRng::new(42);
        for _ in 0..100 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn zero_seed_is_folded() {
        let mut rng = BattleRng::new(0);
        // A zero state would emit only zeroes; the fold must prevent that.
        assert!(rng.next_f64() > 0.0);
    }

    #[test]
    fn next_range_stays_in_bounds() {
        let mut rng = BattleRng::new(7);
        for _ in 0..1000 {
            let v = rng.next_range(3, 9);
            assert!((3..9).contains(&v));
        }
    }

    #[test]
    fn next_range_empty_returns_min() {
        let mut rng = BattleRng::new(7);
        assert_eq!(rng.next_range(5, 5), 5);
        assert_eq!(rng.next_range(5, 2), 5);
    }

    #[test]
    fn derive_seed_truncates_to_seconds() {
        // Millisecond jitter within the same second must not change the seed.
        assert_eq!(derive_seed(42, 1_700_000_000_123), derive_seed(42, 1_700_000_000_999));
        assert_ne!(derive_seed(42, 1_700_000_000_000), derive_seed(42, 1_700_000_001_000));
        assert_ne!(derive_seed(42, 1_700_000_000_000), derive_seed(43, 1_700_000_000_000));
    }
}
