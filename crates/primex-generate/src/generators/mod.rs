//! Leaf generators: passwords, usernames and card records.

pub mod card;
pub mod password;
pub mod username;

pub use card::{CardRecord, DEFAULT_BINS, generate_card, luhn_check_digit, luhn_is_valid};
pub use password::generate_password;
pub use username::generate_username;

use crate::random::RandomSource;

/// Lowercase letters and digits, used for usernames and custom combos.
pub const LOWER_ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Built-in word list for readable identifiers.
pub const DICTIONARY_WORDS: [&str; 8] = [
    "alpha", "beta", "gamma", "delta", "epsilon", "zeta", "eta", "theta",
];

/// `len` characters drawn independently from `alphabet`.
pub fn random_string(alphabet: &str, len: usize, rng: &mut impl RandomSource) -> String {
    (0..len).map(|_| rng.next_char(alphabet)).collect()
}

pub fn dictionary_word(rng: &mut impl RandomSource) -> &'static str {
    rng.pick(&DICTIONARY_WORDS).copied().unwrap_or("alpha")
}
