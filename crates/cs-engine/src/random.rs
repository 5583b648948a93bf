//! The single source of randomness for the engine.
//!
//! Challenge picks, distractor draws, option shuffles, challenge ids,
//! story event rolls and flee attempts all go through [`RandomSource`].

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, RngCore};

/// Uniform random draws.
pub trait RandomSource {
    /// A uniform index in `0..n`. Returns 0 when `n` is 0 or 1.
    fn below(&mut self, n: usize) -> usize;

    /// A fair coin flip.
    fn coin_flip(&mut self) -> bool;

    /// Fill `buf` with random bytes.
    fn random_bytes(&mut self, buf: &mut [u8]);
}

impl RandomSource for StdRng {
    fn below(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        self.random_range(0..n)
    }

    fn coin_flip(&mut self) -> bool {
        self.random_bool(0.5)
    }

    fn random_bytes(&mut self, buf: &mut [u8]) {
        self.fill_bytes(buf);
    }
}

/// Shuffle `items` in place (Fisher-Yates).
pub fn shuffle<T>(rng: &mut dyn RandomSource, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}

/// A random source that replays scripted values, for tests and demos.
///
/// `below(n)` returns the next scripted draw modulo `n`, or 0 once the
/// script runs out. `coin_flip` returns the next scripted flip, or
/// `false`. Bytes come from a counter so ids stay distinct.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    draws: VecDeque<usize>,
    flips: VecDeque<bool>,
    counter: u8,
}

impl ScriptedRandom {
    /// An empty script: every draw is 0, every flip fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue index draws.
    pub fn with_draws(mut self, draws: impl IntoIterator<Item = usize>) -> Self {
        self.draws.extend(draws);
        self
    }

    /// Queue coin flips.
    pub fn with_flips(mut self, flips: impl IntoIterator<Item = bool>) -> Self {
        self.flips.extend(flips);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, n: usize) -> usize {
        let draw = self.draws.pop_front().unwrap_or(0);
        if n == 0 { 0 } else { draw % n }
    }

    fn coin_flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(false)
    }

    fn random_bytes(&mut self, buf: &mut [u8]) {
        for byte in buf {
            self.counter = self.counter.wrapping_add(1);
            *byte = self.counter;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn seeded_rng_is_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let left: Vec<usize> = (0..20).map(|_| a.below(10)).collect();
        let right: Vec<usize> = (0..20).map(|_| b.below(10)).collect();
        assert_eq!(left, right);
        assert!(left.iter().all(|&x| x < 10));
    }

    #[test]
    fn below_handles_tiny_ranges() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(rng.below(0), 0);
        assert_eq!(rng.below(1), 0);
    }

    #[test]
    fn scripted_draws_wrap_and_exhaust() {
        let mut rng = ScriptedRandom::new().with_draws([7, 2]).with_flips([true]);
        assert_eq!(rng.below(5), 2);
        assert_eq!(rng.below(5), 2);
        assert_eq!(rng.below(5), 0);
        assert!(rng.coin_flip());
        assert!(!rng.coin_flip());
    }

    #[test]
    fn scripted_bytes_differ() {
        let mut rng = ScriptedRandom::new();
        let mut a = [0u8; 4];
        let mut b = [0u8; 4];
        rng.random_bytes(&mut a);
        rng.random_bytes(&mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut items = vec![1, 2, 3, 4, 5];
        shuffle(&mut rng, &mut items);
        items.sort();
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn scripted_shuffle_with_zero_draws_rotates_predictably() {
        // Each draw of 0 swaps position i with 0.
        let mut rng = ScriptedRandom::new();
        let mut items = vec!['a', 'b', 'c'];
        shuffle(&mut rng, &mut items);
        assert_eq!(items, vec!['b', 'c', 'a']);
    }
}
