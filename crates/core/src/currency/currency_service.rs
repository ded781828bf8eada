use log::{debug, warn};
use std::sync::Arc;

use super::currency_constants::DEFAULT_CURRENCY_CODE_KEY;
use super::currency_errors::CurrencyResolutionError;
use super::currency_model::Currency;
use super::currency_registry::parse_code;
use crate::settings::ConfigurationSource;

/// Resolves the default currency from a configuration snapshot.
///
/// Reads [`DEFAULT_CURRENCY_CODE_KEY`]; a missing key is `NotConfigured`,
/// a value that is not a known ISO 4217 code (including an empty one) is
/// `InvalidCode`. The value is matched as-is, without trimming or case folding.
pub fn resolve_default_currency(
    source: &dyn ConfigurationSource,
) -> Result<Currency, CurrencyResolutionError> {
    let Some(code) = source.get_setting(DEFAULT_CURRENCY_CODE_KEY) else {
        return Err(CurrencyResolutionError::NotConfigured {
            key: DEFAULT_CURRENCY_CODE_KEY.to_string(),
        });
    };

    match parse_code(&code) {
        Some(currency) => {
            debug!("Resolved default currency {}", currency);
            Ok(currency)
        }
        None => {
            warn!(
                "Default currency '{}' from '{}' is not an ISO 4217 code",
                code, DEFAULT_CURRENCY_CODE_KEY
            );
            Err(CurrencyResolutionError::InvalidCode {
                key: DEFAULT_CURRENCY_CODE_KEY.to_string(),
                code,
            })
        }
    }
}

/// Trait defining the contract for default currency lookups.
pub trait CurrencyResolverTrait: Send + Sync {
    fn currency(&self) -> Result<Currency, CurrencyResolutionError>;
}

/// Default currency lookup bound to one configuration source.
///
/// Holds no state besides the source; every call re-reads it.
#[derive(Clone)]
pub struct CurrencyResolver {
    config: Arc<dyn ConfigurationSource>,
}

impl CurrencyResolver {
    pub fn new(config: Arc<dyn ConfigurationSource>) -> Self {
        CurrencyResolver { config }
    }

    pub fn of<S>(config: S) -> Self
    where
        S: ConfigurationSource + 'static,
    {
        Self::new(Arc::new(config))
    }
}

impl CurrencyResolverTrait for CurrencyResolver {
    fn currency(&self) -> Result<Currency, CurrencyResolutionError> {
        resolve_default_currency(self.config.as_ref())
    }
}
