use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::currency_registry::parse_code;
use crate::errors::Error;

/// A validated ISO 4217 currency.
///
/// Values only come out of the registry, so holding a `Currency` means the
/// code is known. Serialized as its alphabetic code (`"EUR"`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(into = "String", try_from = "String")]
pub struct Currency {
    code: &'static str,
    numeric_code: u16,
    minor_units: Option<u8>,
    name: &'static str,
    withdrawn: bool,
}

impl Currency {
    pub(crate) const fn new(
        code: &'static str,
        numeric_code: u16,
        minor_units: Option<u8>,
        name: &'static str,
        withdrawn: bool,
    ) -> Self {
        Currency {
            code,
            numeric_code,
            minor_units,
            name,
            withdrawn,
        }
    }

    /// Alphabetic code, e.g. "EUR".
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Numeric code, e.g. 978 for EUR.
    pub fn numeric_code(&self) -> u16 {
        self.numeric_code
    }

    /// Number of digits after the decimal separator.
    /// None for units without a minor unit (metals, funds, XXX).
    pub fn minor_units(&self) -> Option<u8> {
        self.minor_units
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// True for codes ISO 4217 has withdrawn (list three) but that are still
    /// accepted, e.g. "VEF" or "DEM".
    pub fn is_withdrawn(&self) -> bool {
        self.withdrawn
    }

    /// Rounds a monetary amount to this currency's minor units.
    /// Amounts in currencies without a minor unit are returned unchanged.
    pub fn round(&self, amount: Decimal) -> Decimal {
        match self.minor_units {
            Some(dp) => amount.round_dp(u32::from(dp)),
            None => amount,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_code(s).ok_or_else(|| Error::UnsupportedCurrency(s.to_string()))
    }
}

impl TryFrom<String> for Currency {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(currency: Currency) -> Self {
        currency.code.to_string()
    }
}
