use primex_core::{
    CardType, CreditCardConfig, DomainSelection, EmailConfig, GenerationRequest, GeneratorConfig,
    GeneratorKind, PasswordPolicySpec, UsernameConfig, UsernamePattern,
};
use primex_generate::generators::{DEFAULT_BINS, luhn_is_valid};
use primex_generate::{GenerationError, GenerationSession};
use regex::Regex;

const REFERENCE_YEAR: i32 = 2026;

fn session(seed: u64) -> GenerationSession {
    GenerationSession::seeded(seed).with_reference_year(REFERENCE_YEAR)
}

fn card_request(count: i64, bin: &str, card_type: CardType) -> GenerationRequest {
    GenerationRequest::new(
        count,
        GeneratorConfig::CreditCard(CreditCardConfig {
            bin: bin.to_string(),
            card_type,
        }),
    )
}

fn card_digits(line: &str) -> String {
    let number = line.split('|').next().unwrap_or_default();
    number.chars().filter(char::is_ascii_digit).collect()
}

#[test]
fn line_count_matches_clamped_count() {
    let mut session = session(1);
    for (requested, expected) in [(-10, 1), (0, 1), (1, 1), (250, 250)] {
        let result = session
            .run(GenerationRequest::new(requested, GeneratorConfig::Custom1))
            .expect("generation succeeds");
        assert_eq!(result.lines.len(), expected, "requested {requested}");
        assert_eq!(result.kind, GeneratorKind::Custom1);
    }
}

#[test]
fn maximum_count_produces_one_million_lines() {
    let mut session = session(2);
    let result = session
        .run(GenerationRequest::new(5_000_000, GeneratorConfig::Custom2))
        .expect("generation succeeds");
    assert_eq!(result.lines.len(), 1_000_000);
    assert_eq!(result.lines[999_999].split(':').next(), Some("combo1000000"));
}

#[test]
fn visa_cards_are_luhn_valid_with_bin_prefix() {
    let mut session = session(3);
    let result = session
        .run(card_request(500, "45320151", CardType::Visa))
        .expect("generation succeeds");

    let shape = Regex::new(r"^\d{4} \d{4} \d{4} \d{4}\|(0[1-9]|1[0-2])/\d{2}\|\d{3}$")
        .expect("valid regex");
    for line in &result.lines {
        assert!(shape.is_match(line), "unexpected card line {line}");
        let digits = card_digits(line);
        assert_eq!(digits.len(), 16);
        assert!(digits.starts_with("45320151"));
        assert!(luhn_is_valid(&digits), "luhn failure for {line}");
    }
}

#[test]
fn amex_cards_have_fifteen_digits_and_four_digit_cvv() {
    let mut session = session(4);
    let result = session
        .run(card_request(500, "3782", CardType::Amex))
        .expect("generation succeeds");

    let shape = Regex::new(r"^\d{4} \d{4} \d{4} \d{3}\|\d{2}/\d{2}\|\d{4}$").expect("valid regex");
    for line in &result.lines {
        assert!(shape.is_match(line), "unexpected amex line {line}");
        let digits = card_digits(line);
        assert_eq!(digits.len(), 15);
        assert!(luhn_is_valid(&digits));
    }
}

#[test]
fn empty_bin_is_picked_once_per_run() {
    let mut session = session(5);
    let result = session
        .run(card_request(200, "", CardType::Other))
        .expect("generation succeeds");

    let first = card_digits(&result.lines[0]);
    let bin = DEFAULT_BINS
        .iter()
        .find(|bin| first.starts_with(**bin))
        .expect("number starts with a default BIN");
    for line in &result.lines {
        let digits = card_digits(line);
        assert!(digits.starts_with(bin));
        assert!(luhn_is_valid(&digits));
    }
}

#[test]
fn expiry_is_one_to_five_years_ahead() {
    let mut session = session(6);
    let result = session
        .run(card_request(1000, "4916", CardType::Visa))
        .expect("generation succeeds");

    let mut years_seen = std::collections::BTreeSet::new();
    for line in &result.lines {
        let expiry = line.split('|').nth(1).expect("expiry field");
        let (month, year) = expiry.split_once('/').expect("MM/YY");
        let month: u32 = month.parse().expect("month");
        let year: i32 = year.parse().expect("year");
        assert!((1..=12).contains(&month));
        let full_year = 2000 + year;
        assert!(full_year > REFERENCE_YEAR && full_year <= REFERENCE_YEAR + 5);
        years_seen.insert(full_year);
    }
    assert_eq!(years_seen.len(), 5);
}

#[test]
fn sequential_usernames_follow_record_index() {
    let mut session = session(7);
    let request = GenerationRequest::new(
        1000,
        GeneratorConfig::Username(UsernameConfig {
            username_pattern: UsernamePattern::Sequential,
            password_policy: PasswordPolicySpec::Fixed {
                value: String::new(),
            },
        }),
    );
    let result = session.run(request).expect("generation succeeds");

    assert_eq!(result.lines[0], "user000001:password123");
    assert_eq!(result.lines[999], "user001000:password123");
    for (index, line) in result.lines.iter().enumerate() {
        let (username, _) = line.split_once(':').expect("separator");
        assert_eq!(username, format!("user{:06}", index + 1));
    }
}

#[test]
fn email_lines_use_the_selected_domain() {
    let mut session = session(8);
    let request = GenerationRequest::new(
        300,
        GeneratorConfig::Email(EmailConfig {
            domain: DomainSelection::Preset("yahoo.com".to_string()),
            password_policy: PasswordPolicySpec::Random { length: 12 },
        }),
    );
    let result = session.run(request).expect("generation succeeds");

    let shape = Regex::new(r"^[a-z0-9]{8}@yahoo\.com:[A-Za-z0-9!@#$%^&*]{12}$").expect("valid regex");
    for line in &result.lines {
        assert!(shape.is_match(line), "unexpected email line {line}");
    }
}

#[test]
fn every_line_is_single_line_and_non_empty() {
    let configs = [
        GeneratorConfig::Email(EmailConfig {
            domain: DomainSelection::default(),
            password_policy: PasswordPolicySpec::Dictionary,
        }),
        GeneratorConfig::Username(UsernameConfig {
            username_pattern: UsernamePattern::Dictionary,
            password_policy: PasswordPolicySpec::Patterned,
        }),
        GeneratorConfig::CreditCard(CreditCardConfig::default()),
        GeneratorConfig::Custom1,
        GeneratorConfig::Custom2,
    ];

    let mut session = session(9);
    for config in configs {
        let result = session
            .run(GenerationRequest::new(100, config))
            .expect("generation succeeds");
        for line in &result.lines {
            assert!(!line.is_empty());
            assert!(!line.contains('\n') && !line.contains('\r'));
        }
    }
}

#[test]
fn seeded_sessions_are_deterministic() {
    let request = GenerationRequest::new(
        500,
        GeneratorConfig::Username(UsernameConfig {
            username_pattern: UsernamePattern::Random,
            password_policy: PasswordPolicySpec::random(),
        }),
    );

    let first = session(42).run(request.clone()).expect("first run");
    let second = session(42).run(request.clone()).expect("second run");
    let other = session(43).run(request).expect("other seed");

    assert_eq!(first.lines, second.lines);
    assert_ne!(first.lines, other.lines);
}

#[test]
fn malformed_config_fails_before_generation() {
    let mut session = session(10);
    let err = session
        .run(card_request(10, "45x2", CardType::Visa))
        .expect_err("bin must be digits");
    match err {
        GenerationError::Config(inner) => assert_eq!(inner.field(), Some("credit_card.bin")),
        other => panic!("unexpected error: {other}"),
    }

    let request = GenerationRequest::new(
        10,
        GeneratorConfig::Email(EmailConfig {
            domain: DomainSelection::Custom(String::new()),
            password_policy: PasswordPolicySpec::default(),
        }),
    );
    let err = session.run(request).expect_err("custom domain required");
    assert!(err.to_string().contains("email.custom_domain"));
}
