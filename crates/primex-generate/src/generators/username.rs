use primex_core::UsernamePattern;

use super::{LOWER_ALPHANUMERIC, dictionary_word, random_string};
use crate::random::RandomSource;

const RANDOM_USERNAME_LEN: usize = 8;

/// Produce the username for record `index` (zero-based).
pub fn generate_username(
    pattern: UsernamePattern,
    index: usize,
    rng: &mut impl RandomSource,
) -> String {
    match pattern {
        UsernamePattern::Random => random_string(LOWER_ALPHANUMERIC, RANDOM_USERNAME_LEN, rng),
        UsernamePattern::Sequential => format!("user{:06}", index + 1),
        UsernamePattern::Dictionary => {
            format!("{}{}", dictionary_word(rng), rng.next_int(100, 999))
        }
    }
}
