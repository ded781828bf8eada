//! Core error types for the Shopfront application.
//!
//! Currency resolution failures keep their own typed enum
//! ([`CurrencyResolutionError`]) and are wrapped here so hosts can propagate
//! them alongside configuration loading failures with `?`.

use thiserror::Error;

use crate::currency::CurrencyResolutionError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the core crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Currency resolution failed: {0}")]
    Currency(#[from] CurrencyResolutionError),

    #[error("Currency '{0}' is not supported")]
    UnsupportedCurrency(String),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidConfigValue(err.to_string())
    }
}

impl From<dotenvy::Error> for Error {
    fn from(err: dotenvy::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}
