//! Combo generation engine for PrimeX.
//!
//! Turns a validated [`primex_core::GenerationRequest`] into an ordered list
//! of formatted records (email/user combos, Luhn-valid card records, custom
//! combos) and exports them as plain text, CSV or JSON. All randomness flows
//! through a [`RandomSource`], so seeded runs are reproducible.

pub mod errors;
pub mod formatter;
pub mod generators;
pub mod output;
pub mod random;
pub mod session;

pub use errors::GenerationError;
pub use formatter::ComboFormatter;
pub use output::ExportFormat;
pub use random::RandomSource;
pub use session::{GenerationResult, GenerationSession};
