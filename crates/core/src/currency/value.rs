//! Monetary value read from a transit card.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::code::CurrencyCode;
use super::error::CurrencyError;
use super::iso4217::{self, CurrencyInfo};
use crate::format::{CurrencyFormatter, FormattedString};

/// Divisor used when nothing better is known: amounts are in cents.
pub const DEFAULT_DIVISOR: i32 = 100;

/// Default divisors for currencies commonly seen on transit cards.
///
/// Codes not listed here use [`DEFAULT_DIVISOR`].
static DEFAULT_DIVISORS: &[(CurrencyCode, i32)] = &[
    (CurrencyCode::AUD, 100),
    (CurrencyCode::BRL, 100),
    (CurrencyCode::CAD, 100),
    (CurrencyCode::CLP, 1),
    (CurrencyCode::CNY, 100),
    (CurrencyCode::DKK, 100),
    (CurrencyCode::EUR, 100),
    (CurrencyCode::GBP, 100),
    (CurrencyCode::HKD, 100),
    (CurrencyCode::IDR, 1),
    (CurrencyCode::ILS, 100),
    (CurrencyCode::JPY, 1),
    (CurrencyCode::KRW, 1),
    (CurrencyCode::MYR, 100),
    (CurrencyCode::NZD, 100),
    (CurrencyCode::RUB, 100),
    (CurrencyCode::SGD, 100),
    (CurrencyCode::TWD, 1),
    (CurrencyCode::USD, 100),
    (CurrencyCode::XXX, 100),
];

/// Returns the divisor [`TransitCurrency::of`] uses for `code`.
#[must_use]
pub fn default_divisor(code: CurrencyCode) -> i32 {
    DEFAULT_DIVISORS
        .iter()
        .find(|(known, _)| *known == code)
        .map_or(DEFAULT_DIVISOR, |(_, divisor)| *divisor)
}

/// An amount of money in a given currency, as `amount / divisor` whole units.
///
/// Equality is nominal: `TransitCurrency(100, USD, 100)` equals
/// `TransitCurrency(1, USD, 1)`. Use [`TransitCurrency::exactly_equals`] when
/// the divisor must match too.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "WireTransitCurrency")]
pub struct TransitCurrency {
    #[serde(rename = "value")]
    amount: i64,
    #[serde(rename = "currencyCode")]
    code: CurrencyCode,
    divisor: i32,
}

#[derive(Deserialize)]
struct WireTransitCurrency {
    value: i64,
    #[serde(rename = "currencyCode")]
    currency_code: CurrencyCode,
    divisor: i32,
}

impl TryFrom<WireTransitCurrency> for TransitCurrency {
    type Error = CurrencyError;

    fn try_from(wire: WireTransitCurrency) -> Result<Self, Self::Error> {
        Self::new(wire.value, wire.currency_code, wire.divisor)
    }
}

impl TransitCurrency {
    /// Builds a value with an explicit divisor.
    ///
    /// If the amount is in cents, the divisor is 100. Currencies without a
    /// fractional part (eg: JPY, KRW) use 1.
    pub fn new(amount: i64, code: CurrencyCode, divisor: i32) -> Result<Self, CurrencyError> {
        if divisor <= 0 {
            return Err(CurrencyError::InvalidDivisor(divisor));
        }
        Ok(Self {
            amount,
            code,
            divisor,
        })
    }

    /// Builds a value from an alphabetic code, using that currency's default
    /// divisor (see [`default_divisor`]).
    ///
    /// Prefer this over [`TransitCurrency::new`] when a card only ever deals
    /// in one currency.
    #[must_use]
    pub fn of(code: CurrencyCode, amount: i64) -> Self {
        Self {
            amount,
            code,
            divisor: default_divisor(code),
        }
    }

    /// Builds a value in the unknown currency (`XXX`), in cents.
    #[must_use]
    pub fn xxx(amount: i64) -> Self {
        Self::of(CurrencyCode::UNKNOWN, amount)
    }

    /// Builds a value in the unknown currency (`XXX`) with an explicit divisor.
    pub fn xxx_with_divisor(amount: i64, divisor: i32) -> Result<Self, CurrencyError> {
        Self::new(amount, CurrencyCode::UNKNOWN, divisor)
    }

    /// Builds a value from a numeric ISO 4217 code.
    ///
    /// The divisor follows the currency's minor unit digits. Unknown codes,
    /// including ones outside the three-digit range, are accepted and become
    /// `XXX` in cents; this never fails.
    #[must_use]
    pub fn from_numeric(amount: i64, numeric: i32) -> Self {
        let info = Self::lookup(numeric);
        let divisor = info
            .and_then(CurrencyInfo::divisor)
            .unwrap_or(DEFAULT_DIVISOR);
        Self::from_info(amount, info, divisor)
    }

    /// Builds a value from a numeric ISO 4217 code with an explicit divisor.
    ///
    /// Unknown codes become `XXX`.
    pub fn from_numeric_with_divisor(
        amount: i64,
        numeric: i32,
        divisor: i32,
    ) -> Result<Self, CurrencyError> {
        if divisor <= 0 {
            return Err(CurrencyError::InvalidDivisor(divisor));
        }
        Ok(Self::from_info(amount, Self::lookup(numeric), divisor))
    }

    fn lookup(numeric: i32) -> Option<&'static CurrencyInfo> {
        let info = u16::try_from(numeric)
            .ok()
            .and_then(iso4217::lookup_numeric);
        if info.is_none() {
            debug!(numeric, "unknown ISO 4217 numeric code, using XXX");
        }
        info
    }

    fn from_info(amount: i64, info: Option<&CurrencyInfo>, divisor: i32) -> Self {
        Self {
            amount,
            code: info.map_or(CurrencyCode::UNKNOWN, |info| info.code),
            divisor,
        }
    }

    /// Raw amount, in units of `1 / divisor`.
    #[must_use]
    pub const fn amount(&self) -> i64 {
        self.amount
    }

    /// Alphabetic currency code.
    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.code
    }

    /// Value to divide [`TransitCurrency::amount`] by to get whole units.
    #[must_use]
    pub const fn divisor(&self) -> i32 {
        self.divisor
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// Same currency and divisor, different amount.
    #[must_use]
    pub(crate) const fn with_amount(&self, amount: i64) -> Self {
        Self {
            amount,
            code: self.code,
            divisor: self.divisor,
        }
    }

    /// Tests equality requiring identical amounts, codes and divisors.
    #[must_use]
    pub fn exactly_equals(&self, other: &Self) -> bool {
        self.amount == other.amount && self.code == other.code && self.divisor == other.divisor
    }

    /// Returns the value with its sign flipped.
    ///
    /// `i64::MIN` has no positive counterpart and maps to itself, so negating
    /// twice always gives back the original.
    #[must_use]
    pub const fn negate(&self) -> Self {
        Self {
            amount: self.amount.wrapping_neg(),
            code: self.code,
            divisor: self.divisor,
        }
    }

    /// Adds `other` to this value.
    ///
    /// `None` is the identity and returns `self`. When divisors differ, the
    /// larger one is kept if it is a multiple of the smaller; otherwise the
    /// result uses the product of both divisors, which grows quickly over
    /// repeated additions and may eventually report [`CurrencyError::Overflow`].
    ///
    /// # Errors
    ///
    /// [`CurrencyError::CurrencyMismatch`] if the currency codes differ.
    pub fn checked_add(&self, other: Option<&Self>) -> Result<Self, CurrencyError> {
        let Some(other) = other else {
            return Ok(*self);
        };

        if self.code != other.code {
            return Err(CurrencyError::CurrencyMismatch {
                left: self.code,
                right: other.code,
            });
        }

        if self.divisor == other.divisor {
            let amount = self
                .amount
                .checked_add(other.amount)
                .ok_or(CurrencyError::Overflow("amount"))?;
            return Ok(Self { amount, ..*self });
        }

        let (large, small) = if self.divisor > other.divisor {
            (self, other)
        } else {
            (other, self)
        };

        if large.divisor % small.divisor == 0 {
            let ratio = i64::from(large.divisor / small.divisor);
            trace!(
                from = small.divisor,
                to = large.divisor,
                "rescaling to larger divisor"
            );
            let amount = small
                .amount
                .checked_mul(ratio)
                .and_then(|scaled| scaled.checked_add(large.amount))
                .ok_or(CurrencyError::Overflow("amount"))?;
            return Ok(Self {
                amount,
                code: self.code,
                divisor: large.divisor,
            });
        }

        trace!(
            left = self.divisor,
            right = other.divisor,
            "incommensurate divisors, cross-scaling"
        );
        let divisor = self
            .divisor
            .checked_mul(other.divisor)
            .ok_or(CurrencyError::Overflow("divisor"))?;
        let amount = self
            .amount
            .checked_mul(i64::from(other.divisor))
            .zip(other.amount.checked_mul(i64::from(self.divisor)))
            .and_then(|(left, right)| left.checked_add(right))
            .ok_or(CurrencyError::Overflow("amount"))?;
        Ok(Self {
            amount,
            code: self.code,
            divisor,
        })
    }

    /// Formats the value for display through `formatter`.
    ///
    /// `is_balance` suppresses credit/debit decoration.
    pub fn format_currency_string<F>(&self, is_balance: bool, formatter: &F) -> FormattedString
    where
        F: CurrencyFormatter + ?Sized,
    {
        formatter.format_currency(self.amount, self.divisor, self.code, is_balance)
    }

    /// Adds up a sequence of values. Returns `None` for an empty sequence.
    pub fn try_sum<'a, I>(values: I) -> Result<Option<Self>, CurrencyError>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        values.into_iter().try_fold(None, |total: Option<Self>, value| {
            value.checked_add(total.as_ref()).map(Some)
        })
    }

    /// `amount * 100 / divisor`, truncated toward zero. Feeds the hash.
    fn hash_amount(&self) -> i128 {
        i128::from(self.amount) * 100 / i128::from(self.divisor)
    }
}

impl PartialEq for TransitCurrency {
    fn eq(&self, other: &Self) -> bool {
        if self.code != other.code {
            return false;
        }

        if self.divisor == other.divisor {
            return self.amount == other.amount;
        }

        // Divisors differ, compare over a common denominator
        i128::from(self.amount) * i128::from(other.divisor)
            == i128::from(other.amount) * i128::from(self.divisor)
    }
}

impl Eq for TransitCurrency {}

impl Hash for TransitCurrency {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
        self.hash_amount().hash(state);
    }
}

impl Neg for TransitCurrency {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// Debug-log form, eg: `TransitCurrency.AUD(1234, 100)` for AUD 12.34.
/// Not localized; use a [`crate::format::CurrencyFormatter`] for display.
impl fmt::Display for TransitCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TransitCurrency.{}({}, {})",
            self.code, self.amount, self.divisor
        )
    }
}

impl fmt::Debug for TransitCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
