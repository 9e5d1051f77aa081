//! Random sources for template and call-to-action selection.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Source of uniformly distributed indexes.
///
/// Injected into the template bank so tests can pin selection.
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. `len` must be non-zero.
    fn pick(&self, len: usize) -> usize;

    /// Returns two distinct indexes in `0..len`, in draw order. `len` must be at least 2.
    fn pick_two(&self, len: usize) -> (usize, usize) {
        let first = self.pick(len);
        let mut second = self.pick(len - 1);
        if second >= first {
            second += 1;
        }
        (first, second)
    }
}

/// Draws from the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible generator seeded from a fixed value.
///
/// # Examples
///
/// ```
/// use postcraft_interface::{RandomSource, SeededRandom};
///
/// let a = SeededRandom::new(7);
/// let b = SeededRandom::new(7);
/// assert_eq!(a.pick(10), b.pick(10));
/// ```
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    /// Creates a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len)
    }
}

/// Always returns the same index, clamped to the last valid one.
///
/// # Examples
///
/// ```
/// use postcraft_interface::{FixedIndex, RandomSource};
///
/// assert_eq!(FixedIndex(2).pick(4), 2);
/// assert_eq!(FixedIndex(9).pick(4), 3);
/// assert_eq!(FixedIndex(0).pick_two(8), (0, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedIndex(pub usize);

impl RandomSource for FixedIndex {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_stays_in_range() {
        let source = ThreadRandom;
        for _ in 0..200 {
            assert!(source.pick(4) < 4);
        }
    }

    #[test]
    fn pick_two_is_distinct() {
        let source = SeededRandom::new(42);
        for _ in 0..200 {
            let (a, b) = source.pick_two(8);
            assert_ne!(a, b);
            assert!(a < 8 && b < 8);
        }
    }

    #[test]
    fn fixed_index_pick_two_skips_first() {
        assert_eq!(FixedIndex(3).pick_two(8), (3, 4));
        assert_eq!(FixedIndex(7).pick_two(8), (7, 6));
    }
}
