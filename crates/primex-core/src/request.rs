use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::kind::GeneratorKind;
use crate::validation::{clamp_count, validate_request};

/// Record count used when a request document omits `count`.
pub const DEFAULT_COUNT: i64 = 100;
/// Length of a `random` password when none is given.
pub const DEFAULT_PASSWORD_LENGTH: usize = 12;
/// Inclusive bounds of a `numeric` password when none are given.
pub const DEFAULT_NUMERIC_LOW: i64 = 10_000_000;
pub const DEFAULT_NUMERIC_HIGH: i64 = 99_999_999;

/// One generation request: a record count and the config of a single generator.
///
/// The generator kind is derived from the config variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GenerationRequest {
    /// Requested number of records; clamped to `[1, 1_000_000]` at run time.
    #[serde(default = "default_count")]
    pub count: i64,
    pub config: GeneratorConfig,
}

impl GenerationRequest {
    pub fn new(count: i64, config: GeneratorConfig) -> Self {
        Self { count, config }
    }

    pub fn kind(&self) -> GeneratorKind {
        self.config.kind()
    }

    /// Number of records this request will actually produce.
    pub fn clamped_count(&self) -> usize {
        clamp_count(self.count)
    }

    /// Parse and validate a request from its JSON form.
    ///
    /// A missing required field is reported as a configuration error naming it.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let request: GenerationRequest = serde_json::from_str(input).map_err(|err| {
            let message = err.to_string();
            match missing_field(&message) {
                Some(field) => Error::config(field, "missing required field"),
                None => Error::InvalidRequest(message),
            }
        })?;
        validate_request(&request)?;
        Ok(request)
    }
}

fn missing_field(message: &str) -> Option<String> {
    let rest = message.strip_prefix("missing field `")?;
    rest.split('`').next().map(str::to_string)
}

fn default_count() -> i64 {
    DEFAULT_COUNT
}

/// Per-generator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind")]
pub enum GeneratorConfig {
    #[serde(rename = "email")]
    Email(EmailConfig),
    #[serde(rename = "user")]
    Username(UsernameConfig),
    #[serde(rename = "cc")]
    CreditCard(CreditCardConfig),
    #[serde(rename = "custom1")]
    Custom1,
    #[serde(rename = "custom2")]
    Custom2,
}

impl GeneratorConfig {
    pub fn kind(&self) -> GeneratorKind {
        match self {
            GeneratorConfig::Email(_) => GeneratorKind::Email,
            GeneratorConfig::Username(_) => GeneratorKind::Username,
            GeneratorConfig::CreditCard(_) => GeneratorKind::CreditCard,
            GeneratorConfig::Custom1 => GeneratorKind::Custom1,
            GeneratorConfig::Custom2 => GeneratorKind::Custom2,
        }
    }
}

/// Email combo settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EmailConfig {
    pub domain: DomainSelection,
    #[serde(default)]
    pub password_policy: PasswordPolicySpec,
}

/// Domain selector: one of the preset domains, or a user-supplied one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "selector", content = "value", rename_all = "snake_case")]
pub enum DomainSelection {
    Preset(String),
    Custom(String),
}

impl DomainSelection {
    /// Preset domains offered by front-ends.
    pub const PRESETS: [&'static str; 6] = [
        "gmail.com",
        "yahoo.com",
        "outlook.com",
        "hotmail.com",
        "icloud.com",
        "protonmail.com",
    ];

    /// Domain literal placed after the `@`; custom values lose any leading `@`.
    pub fn resolve(&self) -> &str {
        match self {
            DomainSelection::Preset(domain) => domain.as_str(),
            DomainSelection::Custom(domain) => domain.trim_start_matches('@'),
        }
    }

    /// Config field this selection is read from.
    pub fn field(&self) -> &'static str {
        match self {
            DomainSelection::Preset(_) => "email.domain",
            DomainSelection::Custom(_) => "email.custom_domain",
        }
    }
}

impl Default for DomainSelection {
    fn default() -> Self {
        DomainSelection::Preset(Self::PRESETS[0].to_string())
    }
}

/// Username combo settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UsernameConfig {
    #[serde(default)]
    pub username_pattern: UsernamePattern,
    #[serde(default)]
    pub password_policy: PasswordPolicySpec,
}

/// Card record settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CreditCardConfig {
    /// Leading digits (4 to 8). Empty picks one of the built-in BINs.
    #[serde(default)]
    pub bin: String,
    #[serde(default)]
    pub card_type: CardType,
}

/// How a password is produced for each record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PasswordPolicySpec {
    /// Uniform draw from upper/lower letters, digits and `!@#$%^&*`.
    Random {
        #[serde(default = "default_password_length")]
        length: usize,
    },
    /// Same value for every record; empty means `password123`.
    Fixed { value: String },
    /// Decimal integer in `[low, high]`.
    #[serde(alias = "numbers")]
    Numeric {
        #[serde(default = "default_numeric_low")]
        low: i64,
        #[serde(default = "default_numeric_high")]
        high: i64,
    },
    /// One of a few pre-built mixed-class patterns.
    #[serde(alias = "pattern")]
    Patterned,
    /// Dictionary word followed by two digits.
    Dictionary,
}

impl PasswordPolicySpec {
    pub fn random() -> Self {
        PasswordPolicySpec::Random {
            length: DEFAULT_PASSWORD_LENGTH,
        }
    }

    pub fn numeric() -> Self {
        PasswordPolicySpec::Numeric {
            low: DEFAULT_NUMERIC_LOW,
            high: DEFAULT_NUMERIC_HIGH,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PasswordPolicySpec::Random { .. } => "random",
            PasswordPolicySpec::Fixed { .. } => "fixed",
            PasswordPolicySpec::Numeric { .. } => "numeric",
            PasswordPolicySpec::Patterned => "patterned",
            PasswordPolicySpec::Dictionary => "dictionary",
        }
    }
}

impl Default for PasswordPolicySpec {
    fn default() -> Self {
        Self::random()
    }
}

fn default_password_length() -> usize {
    DEFAULT_PASSWORD_LENGTH
}

fn default_numeric_low() -> i64 {
    DEFAULT_NUMERIC_LOW
}

fn default_numeric_high() -> i64 {
    DEFAULT_NUMERIC_HIGH
}

/// Username shape for the `user` generator.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum UsernamePattern {
    #[default]
    Random,
    Sequential,
    Dictionary,
}

impl FromStr for UsernamePattern {
    type Err = Error;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "random" => Ok(UsernamePattern::Random),
            "sequential" => Ok(UsernamePattern::Sequential),
            "dictionary" => Ok(UsernamePattern::Dictionary),
            _ => Err(Error::InvalidValue {
                field: "username_pattern",
                value: value.to_string(),
            }),
        }
    }
}

/// Card network; only the number length and CVV width depend on it.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    #[default]
    Visa,
    Amex,
    Other,
}

impl CardType {
    /// Total digits of a complete card number, check digit included.
    pub fn number_length(&self) -> usize {
        match self {
            CardType::Amex => 15,
            CardType::Visa | CardType::Other => 16,
        }
    }
}

impl FromStr for CardType {
    type Err = Error;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "visa" => Ok(CardType::Visa),
            "amex" => Ok(CardType::Amex),
            "other" => Ok(CardType::Other),
            _ => Err(Error::InvalidValue {
                field: "card_type",
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_domain_drops_leading_at() {
        let selection = DomainSelection::Custom("@corp.example".to_string());
        assert_eq!(selection.resolve(), "corp.example");
        let preset = DomainSelection::Preset("gmail.com".to_string());
        assert_eq!(preset.resolve(), "gmail.com");
    }

    #[test]
    fn extracts_missing_field_name() {
        assert_eq!(
            missing_field("missing field `domain` at line 1 column 20"),
            Some("domain".to_string())
        );
        assert_eq!(missing_field("expected value at line 1 column 1"), None);
    }

    #[test]
    fn amex_numbers_are_shorter() {
        assert_eq!(CardType::Amex.number_length(), 15);
        assert_eq!(CardType::Visa.number_length(), 16);
        assert_eq!(CardType::Other.number_length(), 16);
    }
}
