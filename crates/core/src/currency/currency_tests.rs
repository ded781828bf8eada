//! Tests for the currency registry and default currency resolution.

#[cfg(test)]
mod tests {
    use crate::currency::{
        all_currencies, parse_code, resolve_default_currency, Currency, CurrencyResolutionError,
        CurrencyResolver, CurrencyResolverTrait, DEFAULT_CURRENCY_CODE_KEY,
    };
    use crate::errors::Error;
    use crate::settings::{ConfigSnapshot, ConfigurationSource};
    use rust_decimal_macros::dec;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn resolver_with_currency(code: Option<&str>) -> CurrencyResolver {
        let snapshot = match code {
            Some(code) => ConfigSnapshot::new().with(DEFAULT_CURRENCY_CODE_KEY, code),
            None => ConfigSnapshot::new(),
        };
        CurrencyResolver::of(snapshot)
    }

    fn eur() -> Currency {
        parse_code("EUR").unwrap()
    }

    fn usd() -> Currency {
        parse_code("USD").unwrap()
    }

    // ==================== parse_code ====================

    #[test]
    fn test_parse_code_valid() {
        let currency = parse_code("USD").unwrap();
        assert_eq!(currency.code(), "USD");
        assert_eq!(currency.numeric_code(), 840);
        assert_eq!(currency.minor_units(), Some(2));
        assert_eq!(currency.name(), "US Dollar");
    }

    #[test]
    fn test_parse_code_invalid() {
        assert_eq!(parse_code("INVALID"), None);
        assert_eq!(parse_code(""), None);
        assert_eq!(parse_code("ABC"), None);
        assert_eq!(parse_code("€"), None);
    }

    #[test]
    fn test_parse_code_is_case_sensitive() {
        assert_eq!(parse_code("usd"), None);
        assert_eq!(parse_code("Eur"), None);
    }

    #[test]
    fn test_parse_code_does_not_trim() {
        assert_eq!(parse_code(" USD"), None);
        assert_eq!(parse_code("USD\n"), None);
    }

    #[test]
    fn test_parse_code_minor_unit_variants() {
        assert_eq!(parse_code("JPY").unwrap().minor_units(), Some(0));
        assert_eq!(parse_code("KWD").unwrap().minor_units(), Some(3));
        assert_eq!(parse_code("CLF").unwrap().minor_units(), Some(4));
        assert_eq!(parse_code("XAU").unwrap().minor_units(), None);
    }

    #[test]
    fn test_parse_code_accepts_withdrawn_codes() {
        for code in ["VEF", "MRO", "STD", "BYR", "LTL", "ZMK", "EEK", "DEM", "HRK"] {
            let currency = parse_code(code).unwrap();
            assert_eq!(currency.code(), code);
            assert!(currency.is_withdrawn(), "{} should be withdrawn", code);
        }
        assert_eq!(parse_code("VEF").unwrap().numeric_code(), 937);
        assert_eq!(parse_code("ITL").unwrap().minor_units(), Some(0));
        assert!(!usd().is_withdrawn());
        assert!(!parse_code("VES").unwrap().is_withdrawn());
    }

    #[test]
    fn test_registry_is_sorted_and_unique() {
        let codes: Vec<&str> = all_currencies().map(|c| c.code()).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
        assert!(codes.iter().all(|c| c.len() == 3
            && c.chars().all(|ch| ch.is_ascii_uppercase())));
    }

    // ==================== Currency ====================

    #[test]
    fn test_currency_display_is_code() {
        assert_eq!(eur().to_string(), "EUR");
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("EUR".parse::<Currency>().unwrap(), eur());
        match "eur".parse::<Currency>() {
            Err(Error::UnsupportedCurrency(code)) => assert_eq!(code, "eur"),
            other => panic!("expected UnsupportedCurrency, got {:?}", other),
        }
    }

    #[test]
    fn test_currency_serialization() {
        assert_eq!(serde_json::to_string(&usd()).unwrap(), "\"USD\"");
        assert_eq!(serde_json::from_str::<Currency>("\"USD\"").unwrap(), usd());
        assert!(serde_json::from_str::<Currency>("\"INVALID\"").is_err());
    }

    #[test]
    fn test_currency_round() {
        assert_eq!(eur().round(dec!(10.456)), dec!(10.46));
        assert_eq!(parse_code("JPY").unwrap().round(dec!(1234.4)), dec!(1234));
        assert_eq!(parse_code("BHD").unwrap().round(dec!(1.23456)), dec!(1.235));
        assert_eq!(parse_code("XAU").unwrap().round(dec!(0.123456)), dec!(0.123456));
    }

    // ==================== CurrencyResolver ====================

    #[test]
    fn test_gets_currency_from_configuration() {
        assert_eq!(resolver_with_currency(Some("EUR")).currency(), Ok(eur()));
    }

    #[test]
    fn test_invalid_currency_fails_with_invalid_code() {
        let err = resolver_with_currency(Some("INVALID")).currency().unwrap_err();
        assert_eq!(
            err,
            CurrencyResolutionError::InvalidCode {
                key: DEFAULT_CURRENCY_CODE_KEY.to_string(),
                code: "INVALID".to_string(),
            }
        );
        assert!(!err.message().is_empty());
        assert!(err.message().contains("INVALID"));
    }

    #[test]
    fn test_missing_currency_fails_with_not_configured() {
        let err = resolver_with_currency(None).currency().unwrap_err();
        assert!(matches!(err, CurrencyResolutionError::NotConfigured { .. }));
        assert!(!err.message().is_empty());
        assert_eq!(err.key(), DEFAULT_CURRENCY_CODE_KEY);
    }

    #[test]
    fn test_error_messages_are_distinct() {
        let missing = resolver_with_currency(None).currency().unwrap_err();
        let invalid = resolver_with_currency(Some("INVALID")).currency().unwrap_err();
        assert_ne!(missing.message(), invalid.message());
    }

    #[test]
    fn test_empty_value_is_invalid_code() {
        let err = resolver_with_currency(Some("")).currency().unwrap_err();
        assert!(matches!(
            err,
            CurrencyResolutionError::InvalidCode { ref code, .. } if code.is_empty()
        ));
    }

    #[test]
    fn test_lowercase_value_is_invalid_code() {
        let err = resolver_with_currency(Some("eur")).currency().unwrap_err();
        assert!(matches!(err, CurrencyResolutionError::InvalidCode { .. }));
    }

    #[test]
    fn test_currency_is_idempotent() {
        let resolver = resolver_with_currency(Some("EUR"));
        assert_eq!(resolver.currency(), resolver.currency());

        let failing = resolver_with_currency(Some("INVALID"));
        assert_eq!(failing.currency(), failing.currency());
    }

    #[test]
    fn test_withdrawn_configured_code_resolves() {
        let currency = resolver_with_currency(Some("VEF")).currency().unwrap();
        assert_eq!(currency.code(), "VEF");
        assert!(currency.is_withdrawn());
    }

    #[test]
    fn test_resolve_from_std_map() {
        let mut config = HashMap::new();
        config.insert(DEFAULT_CURRENCY_CODE_KEY.to_string(), "USD".to_string());
        assert_eq!(resolve_default_currency(&config), Ok(usd()));
    }

    #[test]
    fn test_resolver_error_converts_into_crate_error() {
        fn host_handler(resolver: &CurrencyResolver) -> crate::Result<Currency> {
            Ok(resolver.currency()?)
        }

        let err = host_handler(&resolver_with_currency(None)).unwrap_err();
        assert!(matches!(
            err,
            Error::Currency(CurrencyResolutionError::NotConfigured { .. })
        ));
        assert!(err.to_string().starts_with("Currency resolution failed"));
    }

    /// Counts reads so the tests can check the resolver goes back to the source.
    struct CountingSource {
        inner: ConfigSnapshot,
        reads: AtomicUsize,
    }

    impl ConfigurationSource for CountingSource {
        fn get_setting(&self, key: &str) -> Option<String> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.get_setting(key)
        }
    }

    #[test]
    fn test_resolver_reads_configuration_on_every_call() {
        let source = Arc::new(CountingSource {
            inner: ConfigSnapshot::new().with(DEFAULT_CURRENCY_CODE_KEY, "GBP"),
            reads: AtomicUsize::new(0),
        });
        let resolver = CurrencyResolver::new(source.clone());

        resolver.currency().unwrap();
        resolver.currency().unwrap();
        assert_eq!(source.reads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_resolver_shared_across_threads() {
        let resolver = resolver_with_currency(Some("CHF"));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let resolver = resolver.clone();
                std::thread::spawn(move || resolver.currency())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap().code(), "CHF");
        }
    }
}
