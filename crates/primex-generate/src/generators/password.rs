use primex_core::PasswordPolicySpec;

use super::{dictionary_word, random_string};
use crate::random::RandomSource;

/// Upper and lower letters, digits and `!@#$%^&*` (70 symbols).
pub const STRONG_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

/// Returned by the fixed policy when its value is empty.
pub const FIXED_FALLBACK: &str = "password123";

pub const PATTERNS: [&str; 4] = ["Aa1!Bb2@", "Cc3#Dd4$", "Ee5%Ff6^", "Gg7&Hh8*"];

/// Produce one password according to `spec`.
pub fn generate_password(spec: &PasswordPolicySpec, rng: &mut impl RandomSource) -> String {
    match spec {
        PasswordPolicySpec::Random { length } => random_string(STRONG_ALPHABET, *length, rng),
        PasswordPolicySpec::Fixed { value } if value.is_empty() => FIXED_FALLBACK.to_string(),
        PasswordPolicySpec::Fixed { value } => value.clone(),
        PasswordPolicySpec::Numeric { low, high } => rng.next_int(*low, *high).to_string(),
        PasswordPolicySpec::Patterned => rng
            .pick(&PATTERNS)
            .copied()
            .unwrap_or(PATTERNS[0])
            .to_string(),
        PasswordPolicySpec::Dictionary => {
            format!("{}{}", dictionary_word(rng), rng.next_int(10, 99))
        }
    }
}
