use thiserror::Error;

/// Why the configured default currency could not be resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyResolutionError {
    #[error("No default currency configured: set '{key}' to an ISO 4217 currency code such as \"EUR\"")]
    NotConfigured { key: String },

    #[error("Configured default currency '{code}' (from '{key}') is not a recognized ISO 4217 currency code")]
    InvalidCode { key: String, code: String },
}

impl CurrencyResolutionError {
    /// Human-readable description, suitable for the host's error reporting.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Configuration key the failure refers to.
    pub fn key(&self) -> &str {
        match self {
            CurrencyResolutionError::NotConfigured { key } => key,
            CurrencyResolutionError::InvalidCode { key, .. } => key,
        }
    }
}
