use std::fmt;

use primex_core::CardType;

use crate::random::RandomSource;

/// BIN prefixes used when the request leaves the BIN empty.
pub const DEFAULT_BINS: [&str; 7] = ["4532", "4916", "4485", "4716", "4024", "4175", "4571"];

/// A generated card: display number, `MM/YY` expiry and CVV.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

impl fmt::Display for CardRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.number, self.expiry, self.cvv)
    }
}

/// The configured BIN, or one of [`DEFAULT_BINS`] when it is empty.
pub fn resolve_bin(bin: &str, rng: &mut impl RandomSource) -> String {
    if !bin.is_empty() {
        return bin.to_string();
    }
    rng.pick(&DEFAULT_BINS)
        .copied()
        .unwrap_or(DEFAULT_BINS[0])
        .to_string()
}

/// Build a Luhn-valid card record starting with `bin`.
///
/// `bin` must be all digits and shorter than the card number. Expiry years
/// are drawn from `current_year + 1 ..= current_year + 5`.
pub fn generate_card(
    bin: &str,
    card_type: CardType,
    current_year: i32,
    rng: &mut impl RandomSource,
) -> CardRecord {
    let target = card_type.number_length();
    let mut digits = String::with_capacity(target);
    digits.push_str(bin);
    while digits.len() < target - 1 {
        digits.push(random_digit(rng));
    }
    let check = luhn_check_digit(&digits);
    digits.push(char::from(b'0' + check));

    let month = rng.next_int(1, 12);
    let year = i64::from(current_year) + rng.next_int(1, 5);
    let cvv = match card_type {
        CardType::Amex => rng.next_int(1000, 9999),
        CardType::Visa | CardType::Other => rng.next_int(100, 999),
    };

    CardRecord {
        number: group_digits(&digits),
        expiry: format!("{month:02}/{:02}", year.rem_euclid(100)),
        cvv: cvv.to_string(),
    }
}

fn random_digit(rng: &mut impl RandomSource) -> char {
    char::from(b'0' + rng.next_int(0, 9) as u8)
}

/// Check digit that makes `payload` followed by it Luhn-valid.
///
/// Non-digit characters in `payload` are ignored.
pub fn luhn_check_digit(payload: &str) -> u8 {
    let sum = luhn_sum(payload, true);
    ((10 - sum % 10) % 10) as u8
}

/// Whether the digits of `number` pass the Luhn check. Spaces and other
/// separators are ignored; a string without digits is invalid.
pub fn luhn_is_valid(number: &str) -> bool {
    number.bytes().any(|byte| byte.is_ascii_digit()) && luhn_sum(number, false) % 10 == 0
}

// Positions are counted from the rightmost digit. A complete number doubles
// odd positions; a payload awaiting its check digit doubles even ones.
fn luhn_sum(digits: &str, double_rightmost: bool) -> u32 {
    digits
        .bytes()
        .filter(u8::is_ascii_digit)
        .rev()
        .enumerate()
        .map(|(position, byte)| {
            let digit = u32::from(byte - b'0');
            if (position % 2 == 0) == double_rightmost {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum()
}

/// Groups of four digits separated by single spaces.
pub fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 4);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && index % 4 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}
