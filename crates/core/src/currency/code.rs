//! Alphabetic ISO 4217 currency codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::CurrencyError;

/// A three-letter, upper-case ISO 4217 alphabetic code (e.g., "AUD").
///
/// The code is stored inline, so values carrying it stay `Copy`. Only the
/// shape is checked; whether the code is actually assigned is a registry
/// concern.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CurrencyCode([u8; 3]);

macro_rules! currency_codes {
    ($($name:ident),* $(,)?) => {
        impl CurrencyCode {
            $(
                #[doc = concat!("`", stringify!($name), "`")]
                pub const $name: Self = Self::from_ascii(stringify!($name).as_bytes());
            )*
        }
    };
}

currency_codes!(
    AUD, BRL, CAD, CLP, CNY, DKK, EUR, GBP, HKD, IDR, ILS, JPY, KRW, MYR, NZD, RUB, SGD, TWD,
    USD, XXX,
);

impl CurrencyCode {
    /// Invalid or no currency information, per ISO 4217.
    pub const UNKNOWN: Self = Self::XXX;

    pub(crate) const fn from_ascii(bytes: &[u8]) -> Self {
        Self([bytes[0], bytes[1], bytes[2]])
    }

    /// Parses a code, normalizing to upper case.
    pub fn parse(code: &str) -> Result<Self, CurrencyError> {
        match code.as_bytes() {
            [a, b, c] if [a, b, c].iter().all(|byte| byte.is_ascii_alphabetic()) => Ok(Self([
                a.to_ascii_uppercase(),
                b.to_ascii_uppercase(),
                c.to_ascii_uppercase(),
            ])),
            _ => Err(CurrencyError::InvalidCurrencyCode(code.to_string())),
        }
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Every constructor writes ASCII letters only.
        std::str::from_utf8(&self.0).unwrap_or("XXX")
    }

    /// Returns true for the `XXX` sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        *self == Self::UNKNOWN
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CurrencyCode({:?})", self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
