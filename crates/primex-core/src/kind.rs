use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Output record shape produced by a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum GeneratorKind {
    /// `user@domain:password`
    #[serde(rename = "email")]
    Email,
    /// `username:password`
    #[serde(rename = "user")]
    Username,
    /// `number|MM/YY|cvv`
    #[serde(rename = "cc")]
    CreditCard,
    /// `customN:data...`
    #[serde(rename = "custom1")]
    Custom1,
    /// `comboN:value...`
    #[serde(rename = "custom2")]
    Custom2,
}

impl GeneratorKind {
    /// Every kind, in catalogue order.
    pub const ALL: [GeneratorKind; 5] = [
        GeneratorKind::Email,
        GeneratorKind::Username,
        GeneratorKind::CreditCard,
        GeneratorKind::Custom1,
        GeneratorKind::Custom2,
    ];

    /// Stable identifier used in exports and file names.
    pub fn id(&self) -> &'static str {
        match self {
            GeneratorKind::Email => "email",
            GeneratorKind::Username => "user",
            GeneratorKind::CreditCard => "cc",
            GeneratorKind::Custom1 => "custom1",
            GeneratorKind::Custom2 => "custom2",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GeneratorKind::Email => "Email:Password Generator",
            GeneratorKind::Username => "User:Password Generator",
            GeneratorKind::CreditCard => "Credit Card Generator",
            GeneratorKind::Custom1 => "Custom Combo Generator 1",
            GeneratorKind::Custom2 => "Custom Combo Generator 2",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GeneratorKind::Email => {
                "Generate email:password combinations for a preset or custom domain."
            }
            GeneratorKind::Username => {
                "Create username:password combinations with random, sequential or dictionary usernames."
            }
            GeneratorKind::CreditCard => {
                "Generate Luhn-valid card numbers with expiry dates and CVVs for testing."
            }
            GeneratorKind::Custom1 => "Numbered custom combos with an 8-character data suffix.",
            GeneratorKind::Custom2 => "Numbered combo/value pairs with a 10-character value suffix.",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for GeneratorKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(GeneratorKind::Email),
            "user" | "username" => Ok(GeneratorKind::Username),
            "cc" | "credit_card" | "card" => Ok(GeneratorKind::CreditCard),
            "custom1" => Ok(GeneratorKind::Custom1),
            "custom2" => Ok(GeneratorKind::Custom2),
            _ => Err(Error::InvalidValue {
                field: "generator",
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ids_and_aliases() {
        for kind in GeneratorKind::ALL {
            assert_eq!(kind.id().parse::<GeneratorKind>().ok(), Some(kind));
        }
        assert_eq!(
            "credit_card".parse::<GeneratorKind>().ok(),
            Some(GeneratorKind::CreditCard)
        );
        assert!("ssn".parse::<GeneratorKind>().is_err());
    }
}
