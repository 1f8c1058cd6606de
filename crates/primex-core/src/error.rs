use thiserror::Error;

/// Core error type shared across PrimeX crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A config field required by the selected generator is missing or invalid.
    #[error("configuration error: {field}: {reason}")]
    Configuration { field: String, reason: String },
    /// A value could not be parsed into one of the core enums.
    #[error("invalid value for {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },
    /// The request document is not valid JSON for a generation request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// Build a configuration error for `field`.
    pub fn config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Configuration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending config field, if this is a configuration error.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::Configuration { field, .. } => Some(field.as_str()),
            Error::InvalidValue { field, .. } => Some(field),
            Error::InvalidRequest(_) => None,
        }
    }
}

/// Convenience alias for results returned by PrimeX crates.
pub type Result<T> = std::result::Result<T, Error>;
