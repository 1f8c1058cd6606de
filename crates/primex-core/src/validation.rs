use crate::error::{Error, Result};
use crate::request::{
    CreditCardConfig, DomainSelection, GenerationRequest, GeneratorConfig, PasswordPolicySpec,
};
use crate::{MAX_COUNT, MIN_COUNT};

const BIN_MIN_LEN: usize = 4;
const BIN_MAX_LEN: usize = 8;

/// Clamp a requested record count into `[MIN_COUNT, MAX_COUNT]`.
pub fn clamp_count(count: i64) -> usize {
    count.clamp(MIN_COUNT as i64, MAX_COUNT as i64) as usize
}

/// Validate a request before any record is generated.
///
/// The count is not checked here; out-of-range counts are clamped.
pub fn validate_request(request: &GenerationRequest) -> Result<()> {
    validate_config(&request.config)
}

/// Validate the config of the selected generator.
pub fn validate_config(config: &GeneratorConfig) -> Result<()> {
    match config {
        GeneratorConfig::Email(email) => {
            validate_domain(&email.domain)?;
            validate_password_policy(&email.password_policy)
        }
        GeneratorConfig::Username(user) => validate_password_policy(&user.password_policy),
        GeneratorConfig::CreditCard(card) => validate_card(card),
        GeneratorConfig::Custom1 | GeneratorConfig::Custom2 => Ok(()),
    }
}

fn validate_domain(selection: &DomainSelection) -> Result<()> {
    let field = selection.field();
    let domain = selection.resolve();
    if domain.is_empty() {
        return Err(Error::config(field, "domain must not be empty"));
    }
    if domain
        .chars()
        .any(|ch| ch.is_whitespace() || ch == ':' || ch == '@')
    {
        return Err(Error::config(
            field,
            format!("'{domain}' is not a bare domain name"),
        ));
    }
    Ok(())
}

fn validate_password_policy(policy: &PasswordPolicySpec) -> Result<()> {
    match policy {
        PasswordPolicySpec::Random { length } if *length == 0 => Err(Error::config(
            "password_policy.length",
            "length must be at least 1",
        )),
        PasswordPolicySpec::Fixed { value } if value.contains(['\n', '\r']) => Err(Error::config(
            "password_policy.value",
            "fixed password must not contain line breaks",
        )),
        PasswordPolicySpec::Numeric { low, high } if low > high => Err(Error::config(
            "password_policy.low",
            format!("low ({low}) must be <= high ({high})"),
        )),
        _ => Ok(()),
    }
}

fn validate_card(card: &CreditCardConfig) -> Result<()> {
    let bin = card.bin.as_str();
    if bin.is_empty() {
        return Ok(());
    }
    if !bin.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(Error::config(
            "credit_card.bin",
            format!("'{bin}' must contain only digits"),
        ));
    }
    if !(BIN_MIN_LEN..=BIN_MAX_LEN).contains(&bin.len()) {
        return Err(Error::config(
            "credit_card.bin",
            format!("must be {BIN_MIN_LEN} to {BIN_MAX_LEN} digits, got {}", bin.len()),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{CardType, EmailConfig};

    #[test]
    fn clamps_counts_into_range() {
        assert_eq!(clamp_count(-5), 1);
        assert_eq!(clamp_count(0), 1);
        assert_eq!(clamp_count(42), 42);
        assert_eq!(clamp_count(5_000_000), 1_000_000);
    }

    #[test]
    fn rejects_non_digit_bin() {
        let config = GeneratorConfig::CreditCard(CreditCardConfig {
            bin: "45a2".to_string(),
            card_type: CardType::Visa,
        });
        let err = validate_config(&config).expect_err("bin should be rejected");
        assert_eq!(err.field(), Some("credit_card.bin"));
    }

    #[test]
    fn rejects_short_bin_but_accepts_empty() {
        let short = GeneratorConfig::CreditCard(CreditCardConfig {
            bin: "453".to_string(),
            card_type: CardType::Amex,
        });
        assert!(validate_config(&short).is_err());

        let empty = GeneratorConfig::CreditCard(CreditCardConfig::default());
        assert!(validate_config(&empty).is_ok());
    }

    #[test]
    fn empty_custom_domain_names_the_custom_field() {
        let config = GeneratorConfig::Email(EmailConfig {
            domain: DomainSelection::Custom("@".to_string()),
            password_policy: PasswordPolicySpec::default(),
        });
        let err = validate_config(&config).expect_err("empty domain");
        assert_eq!(err.field(), Some("email.custom_domain"));
    }

    #[test]
    fn inverted_numeric_range_is_rejected() {
        let config = GeneratorConfig::Email(EmailConfig {
            domain: DomainSelection::default(),
            password_policy: PasswordPolicySpec::Numeric { low: 10, high: 1 },
        });
        let err = validate_config(&config).expect_err("inverted range");
        assert_eq!(err.field(), Some("password_policy.low"));
    }
}
