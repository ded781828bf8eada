/// Configuration key holding the shop's default currency code
pub const DEFAULT_CURRENCY_CODE_KEY: &str = "default_currency_code";

/// Length of an ISO 4217 alphabetic code
pub const CURRENCY_CODE_LENGTH: usize = 3;
