//! Currency module - ISO 4217 registry and default currency resolution.

mod currency_constants;
mod currency_errors;
mod currency_model;
mod currency_registry;
mod currency_service;
mod currency_tests;

pub use currency_constants::*;
pub use currency_errors::CurrencyResolutionError;
pub use currency_model::Currency;
pub use currency_registry::{all_currencies, parse_code};
pub use currency_service::{resolve_default_currency, CurrencyResolver, CurrencyResolverTrait};
