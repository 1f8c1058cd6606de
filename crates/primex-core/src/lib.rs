//! Core contracts for the PrimeX combo generator.
//!
//! This crate defines the request and configuration types consumed by the
//! generation engine, the validation applied to them before any record is
//! produced, and the error type shared across PrimeX crates.

pub mod error;
pub mod kind;
pub mod request;
pub mod validation;

pub use error::{Error, Result};
pub use kind::GeneratorKind;
pub use request::{
    CardType, CreditCardConfig, DomainSelection, EmailConfig, GenerationRequest, GeneratorConfig,
    PasswordPolicySpec, UsernameConfig, UsernamePattern,
};
pub use validation::{clamp_count, validate_config, validate_request};

/// Smallest number of records a single request produces.
pub const MIN_COUNT: usize = 1;
/// Largest number of records a single request produces.
pub const MAX_COUNT: usize = 1_000_000;
