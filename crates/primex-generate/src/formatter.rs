use primex_core::{GeneratorConfig, UsernamePattern};

use crate::generators::{
    LOWER_ALPHANUMERIC, card, generate_card, generate_password, generate_username, random_string,
};
use crate::random::RandomSource;

const CUSTOM1_DATA_LEN: usize = 8;
const CUSTOM2_VALUE_LEN: usize = 10;

/// Formats one record per index for a single generator config.
///
/// Per-request state is resolved once at construction: the email domain and,
/// for card configs with an empty BIN, the BIN shared by every record.
#[derive(Debug)]
pub struct ComboFormatter<'a> {
    config: &'a GeneratorConfig,
    domain: &'a str,
    bin: String,
    current_year: i32,
}

impl<'a> ComboFormatter<'a> {
    pub fn new(
        config: &'a GeneratorConfig,
        current_year: i32,
        rng: &mut impl RandomSource,
    ) -> Self {
        let domain = match config {
            GeneratorConfig::Email(email) => email.domain.resolve(),
            _ => "",
        };
        let bin = match config {
            GeneratorConfig::CreditCard(card_config) => card::resolve_bin(&card_config.bin, rng),
            _ => String::new(),
        };
        Self {
            config,
            domain,
            bin,
            current_year,
        }
    }

    /// BIN used for card records; empty for other generators.
    pub fn bin(&self) -> &str {
        &self.bin
    }

    /// Record for zero-based position `index`.
    pub fn format_line(&self, index: usize, rng: &mut impl RandomSource) -> String {
        match self.config {
            GeneratorConfig::Email(email) => {
                let username = generate_username(UsernamePattern::Random, index, rng);
                let password = generate_password(&email.password_policy, rng);
                format!("{username}@{}:{password}", self.domain)
            }
            GeneratorConfig::Username(user) => {
                let username = generate_username(user.username_pattern, index, rng);
                let password = generate_password(&user.password_policy, rng);
                format!("{username}:{password}")
            }
            GeneratorConfig::CreditCard(card_config) => {
                generate_card(&self.bin, card_config.card_type, self.current_year, rng).to_string()
            }
            GeneratorConfig::Custom1 => format!(
                "custom{}:data{}",
                index + 1,
                random_string(LOWER_ALPHANUMERIC, CUSTOM1_DATA_LEN, rng)
            ),
            GeneratorConfig::Custom2 => format!(
                "combo{}:value{}",
                index + 1,
                random_string(LOWER_ALPHANUMERIC, CUSTOM2_VALUE_LEN, rng)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use primex_core::{DomainSelection, EmailConfig, PasswordPolicySpec};

    use super::*;
    use crate::random::seeded;

    #[test]
    fn email_line_uses_stripped_custom_domain() {
        let config = GeneratorConfig::Email(EmailConfig {
            domain: DomainSelection::Custom("@corp.example".to_string()),
            password_policy: PasswordPolicySpec::Fixed {
                value: "secret".to_string(),
            },
        });
        let mut rng = seeded(4);
        let formatter = ComboFormatter::new(&config, 2026, &mut rng);
        let line = formatter.format_line(0, &mut rng);
        let (user, rest) = line.split_once('@').expect("email separator");
        assert_eq!(user.len(), 8);
        assert_eq!(rest, "corp.example:secret");
    }

    #[test]
    fn custom_lines_are_numbered_from_one() {
        let mut rng = seeded(4);
        let custom1 = GeneratorConfig::Custom1;
        let formatter = ComboFormatter::new(&custom1, 2026, &mut rng);
        let line = formatter.format_line(0, &mut rng);
        assert!(line.starts_with("custom1:data"));
        assert_eq!(line.len(), "custom1:data".len() + 8);

        let custom2 = GeneratorConfig::Custom2;
        let formatter = ComboFormatter::new(&custom2, 2026, &mut rng);
        let line = formatter.format_line(41, &mut rng);
        assert!(line.starts_with("combo42:value"));
        assert_eq!(line.len(), "combo42:value".len() + 10);
    }
}
