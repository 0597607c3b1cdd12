//! Formatting and localization capabilities.
//!
//! Rendering money for people is locale work that lives outside this crate.
//! Display layers plug in a [`CurrencyFormatter`] and a [`Localizer`];
//! [`PlainFormatter`] and [`CatalogLocalizer`] are locale-neutral defaults
//! for logs, tests and the command line.

use std::collections::HashMap;
use std::fmt;

use rust_decimal::prelude::*;

use crate::balance::StringResource;
use crate::currency::{CurrencyCode, lookup_alpha};

/// Markup attached to a span of a [`FormattedString`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// The span should be read out as an amount of money.
    Money {
        /// Byte offset where the span starts.
        start: usize,
        /// Byte offset where the span ends (exclusive).
        end: usize,
        /// Signed amount in whole units.
        amount: Decimal,
        /// Currency of the amount.
        currency: CurrencyCode,
    },
}

/// Displayable text with optional annotations for accessibility tooling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedString {
    text: String,
    annotations: Vec<Annotation>,
}

impl FormattedString {
    /// Text without annotations.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotations: Vec::new(),
        }
    }

    /// Adds an annotation.
    #[must_use]
    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// The displayable text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Annotations over [`FormattedString::text`].
    #[must_use]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

impl fmt::Display for FormattedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Turns a raw amount into displayable text.
pub trait CurrencyFormatter {
    /// Formats `amount / divisor` in `currency`.
    ///
    /// `is_balance` is true for card balances, which are never decorated as
    /// credits.
    fn format_currency(
        &self,
        amount: i64,
        divisor: i32,
        currency: CurrencyCode,
        is_balance: bool,
    ) -> FormattedString;
}

/// Resolves string resources to localized text.
pub trait Localizer {
    /// Returns the text for `resource`.
    fn localize(&self, resource: &StringResource) -> FormattedString;
}

/// Locale-neutral formatter: `USD 12.34`.
///
/// Negative fares (top-ups, refunds) render as credits with an explicit `+`
/// and the absolute value, eg: `+USD 5.00`. Balances keep their sign.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl PlainFormatter {
    /// Digits after the decimal point for a value.
    ///
    /// Power-of-ten divisors show exactly their precision; anything else falls
    /// back to the currency's minor unit digits, then to 2.
    #[must_use]
    pub fn fraction_digits(divisor: i32, currency: CurrencyCode) -> u32 {
        if let Some(digits) = power_of_ten(divisor) {
            return digits;
        }
        lookup_alpha(currency)
            .and_then(|info| info.decimal_digits)
            .map_or(2, u32::from)
    }
}

fn power_of_ten(divisor: i32) -> Option<u32> {
    let mut remaining = divisor;
    let mut digits = 0;
    while remaining > 1 && remaining % 10 == 0 {
        remaining /= 10;
        digits += 1;
    }
    (remaining == 1).then_some(digits)
}

impl CurrencyFormatter for PlainFormatter {
    fn format_currency(
        &self,
        amount: i64,
        divisor: i32,
        currency: CurrencyCode,
        is_balance: bool,
    ) -> FormattedString {
        let digits = Self::fraction_digits(divisor, currency);
        let value = (Decimal::from(amount) / Decimal::from(divisor.max(1)))
            .round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);

        let credit = !is_balance && value.is_sign_negative() && !value.is_zero();
        let mut shown = if credit { value.abs() } else { value };
        shown.rescale(digits);

        let prefix = if credit { "+" } else { "" };
        let text = format!("{prefix}{currency} {shown}");

        FormattedString::plain(text.clone()).with_annotation(Annotation::Money {
            start: prefix.len(),
            end: text.len(),
            amount: value,
            currency,
        })
    }
}

/// Localizer backed by an in-memory catalog of `id -> text`.
///
/// Unknown identifiers are shown as-is.
#[derive(Debug, Clone, Default)]
pub struct CatalogLocalizer {
    entries: HashMap<String, String>,
}

impl CatalogLocalizer {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an entry.
    #[must_use]
    pub fn with_entry(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(id.into(), text.into());
        self
    }
}

impl Localizer for CatalogLocalizer {
    fn localize(&self, resource: &StringResource) -> FormattedString {
        let id = resource.id();
        FormattedString::plain(self.entries.get(id).map_or(id, String::as_str))
    }
}
