use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform randomness used by every generator.
///
/// Implementations need not be cryptographically secure. Tests substitute
/// scripted sources to pin exact outputs.
pub trait RandomSource {
    /// Uniform integer in `[min, max]`.
    fn next_int(&mut self, min: i64, max: i64) -> i64;

    /// Uniform index in `[0, len)`. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize;

    /// Uniform character of an ASCII `alphabet`.
    fn next_char(&mut self, alphabet: &str) -> char {
        debug_assert!(alphabet.is_ascii());
        let bytes = alphabet.as_bytes();
        char::from(bytes[self.next_index(bytes.len())])
    }

    /// Uniform element of `candidates`, or `None` when it is empty.
    fn pick<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if candidates.is_empty() {
            return None;
        }
        candidates.get(self.next_index(candidates.len()))
    }
}

impl RandomSource for ChaCha8Rng {
    fn next_int(&mut self, min: i64, max: i64) -> i64 {
        self.random_range(min..=max)
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Deterministic source for a fixed seed.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Source seeded from the thread-local generator.
pub fn from_entropy() -> ChaCha8Rng {
    ChaCha8Rng::from_rng(&mut rand::rng())
}
