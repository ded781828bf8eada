//! Shopfront Core - currency resolution over application configuration.
//!
//! The host application hands in a configuration snapshot through the
//! [`settings::ConfigurationSource`] trait; the [`currency`] module turns the
//! configured default currency code into a validated ISO 4217 [`Currency`]
//! or a typed [`CurrencyResolutionError`].

pub mod currency;
pub mod errors;
pub mod settings;

// Re-export the types hosts reach for most often
pub use currency::{
    parse_code, resolve_default_currency, Currency, CurrencyResolutionError, CurrencyResolver,
    CurrencyResolverTrait, DEFAULT_CURRENCY_CODE_KEY,
};
pub use settings::{ConfigSnapshot, ConfigurationSource, EnvConfigurationSource};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
