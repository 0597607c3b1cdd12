//! Card balances: either an amount of money or a localized label.

pub mod resource;

use rand::Rng;
use serde::{Deserialize, Serialize};

pub use resource::{ResourceBalance, StringResource};

use crate::currency::TransitCurrency;
use crate::format::{CurrencyFormatter, FormattedString, Localizer};
use crate::obfuscate::{PrivacyPreferences, TripObfuscator};

/// A balance read from a card.
///
/// Persisted as a tagged union on `"type"`: `"iso"` carries `value`,
/// `currencyCode` and `divisor`; `"resource"` carries `mDesc`.
///
/// Adding a variant means revisiting every match in this module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Balance {
    /// An amount in an ISO 4217 currency.
    #[serde(rename = "iso")]
    Currency(TransitCurrency),
    /// A label with no amount.
    #[serde(rename = "resource")]
    Resource(ResourceBalance),
}

impl Balance {
    /// Formats the balance for display.
    ///
    /// Amounts go through `formatter`; labels through `localizer`.
    pub fn format_currency_string<F, L>(
        &self,
        is_balance: bool,
        formatter: &F,
        localizer: &L,
    ) -> FormattedString
    where
        F: CurrencyFormatter + ?Sized,
        L: Localizer + ?Sized,
    {
        match self {
            Self::Currency(value) => value.format_currency_string(is_balance, formatter),
            Self::Resource(resource) => resource.format_currency_string(localizer),
        }
    }

    /// Obfuscates amounts; labels pass through.
    pub fn obfuscate<R: Rng>(&self, obfuscator: &TripObfuscator<R>) -> Self {
        match self {
            Self::Currency(value) => Self::Currency(obfuscator.obfuscate(value)),
            Self::Resource(resource) => Self::Resource(resource.obfuscate()),
        }
    }

    /// Obfuscates amounts if the balance preference is on.
    pub fn maybe_obfuscate_balance<R, P>(&self, obfuscator: &TripObfuscator<R>, prefs: &P) -> Self
    where
        R: Rng,
        P: PrivacyPreferences + ?Sized,
    {
        match self {
            Self::Currency(value) => {
                Self::Currency(obfuscator.maybe_obfuscate_balance(value, prefs))
            }
            Self::Resource(resource) => Self::Resource(resource.obfuscate()),
        }
    }

    /// Numeric view of the balance. Labels report a meaningless `USD 0.00`.
    #[must_use]
    pub fn balance(&self) -> TransitCurrency {
        match self {
            Self::Currency(value) => *value,
            Self::Resource(resource) => resource.balance(),
        }
    }

    /// Encodes the wire representation.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decodes the wire representation.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl From<TransitCurrency> for Balance {
    fn from(value: TransitCurrency) -> Self {
        Self::Currency(value)
    }
}

impl From<ResourceBalance> for Balance {
    fn from(resource: ResourceBalance) -> Self {
        Self::Resource(resource)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::currency::CurrencyCode;
    use crate::format::{CatalogLocalizer, PlainFormatter};
    use farecard_shared::PrivacyConfig;

    fn label(id: &str) -> Balance {
        ResourceBalance::new(StringResource::new(id)).into()
    }

    #[test]
    fn test_equality_across_variants() {
        let cents: Balance = TransitCurrency::new(100, CurrencyCode::USD, 100).unwrap().into();
        let dollars: Balance = TransitCurrency::new(1, CurrencyCode::USD, 1).unwrap().into();
        assert_eq!(cents, dollars);
        assert_ne!(cents, label("one_dollar"));
        assert_eq!(label("a"), label("a"));
        assert_ne!(label("a"), label("b"));
    }

    #[test]
    fn test_hash_groups_equal_balances() {
        let set: HashSet<Balance> = [
            TransitCurrency::new(100, CurrencyCode::USD, 100).unwrap().into(),
            TransitCurrency::new(1, CurrencyCode::USD, 1).unwrap().into(),
            label("a"),
            label("a"),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_format_dispatch() {
        let localizer = CatalogLocalizer::new().with_entry("unlimited", "Unlimited");
        let money: Balance = TransitCurrency::of(CurrencyCode::AUD, -250).into();

        assert_eq!(
            money.format_currency_string(true, &PlainFormatter, &localizer).text(),
            "AUD -2.50"
        );
        assert_eq!(
            money.format_currency_string(false, &PlainFormatter, &localizer).text(),
            "+AUD 2.50"
        );
        assert_eq!(
            label("unlimited")
                .format_currency_string(true, &PlainFormatter, &localizer)
                .text(),
            "Unlimited"
        );
    }

    #[test]
    fn test_obfuscate_dispatch() {
        let obfuscator = TripObfuscator::seeded(11);
        assert_eq!(label("a").obfuscate(&obfuscator), label("a"));

        let money = Balance::from(TransitCurrency::of(CurrencyCode::EUR, 5_000));
        let Balance::Currency(obfuscated) = money.obfuscate(&obfuscator) else {
            panic!("variant changed");
        };
        assert_eq!(obfuscated.currency_code(), CurrencyCode::EUR);
        assert!(obfuscated.amount() > 0);
    }

    #[test]
    fn test_maybe_obfuscate_balance() {
        let obfuscator = TripObfuscator::seeded(5);
        let money = Balance::from(TransitCurrency::of(CurrencyCode::EUR, 5_000));
        let off = PrivacyConfig::default();
        let on = PrivacyConfig {
            obfuscate_balance: true,
            ..PrivacyConfig::default()
        };

        assert_eq!(money.maybe_obfuscate_balance(&obfuscator, &off), money);
        assert_eq!(label("a").maybe_obfuscate_balance(&obfuscator, &on), label("a"));

        let shown: Vec<TransitCurrency> = (0..8)
            .map(|_| match money.maybe_obfuscate_balance(&obfuscator, &on) {
                Balance::Currency(value) => value,
                Balance::Resource(_) => panic!("variant changed"),
            })
            .collect();
        assert!(shown.iter().all(|value| value.currency_code() == CurrencyCode::EUR));
        assert!(shown.iter().all(|value| value.divisor() == 100 && value.amount() > 0));
        assert!(shown.iter().any(|value| value.amount() != 5_000));
    }

    #[test]
    fn test_balance_accessor() {
        let value = TransitCurrency::of(CurrencyCode::NZD, 990);
        assert!(Balance::from(value).balance().exactly_equals(&value));
        assert!(label("a").balance().exactly_equals(&TransitCurrency::of(CurrencyCode::USD, 0)));
    }

    #[test]
    fn test_wire_format() {
        let money = Balance::from(TransitCurrency::of(CurrencyCode::JPY, 1200));
        assert_eq!(
            serde_json::to_value(&money).unwrap(),
            serde_json::json!({
                "type": "iso",
                "value": 1200,
                "currencyCode": "JPY",
                "divisor": 1
            })
        );
        assert_eq!(
            serde_json::to_value(label("pass")).unwrap(),
            serde_json::json!({ "type": "resource", "mDesc": "pass" })
        );
    }

    #[test]
    fn test_wire_round_trip_is_exact() {
        let original = TransitCurrency::new(100, CurrencyCode::USD, 1000).unwrap();
        let json = Balance::from(original).to_json().unwrap();
        let Balance::Currency(decoded) = Balance::from_json(&json).unwrap() else {
            panic!("variant changed");
        };
        assert!(decoded.exactly_equals(&original));

        let back = Balance::from_json(&label("pass").to_json().unwrap()).unwrap();
        assert_eq!(back, label("pass"));
    }

    #[test]
    fn test_wire_rejects_unknown_tag_and_bad_values() {
        assert!(Balance::from_json(r#"{"type":"points","value":1}"#).is_err());
        assert!(
            Balance::from_json(r#"{"type":"iso","value":1,"currencyCode":"USD","divisor":-1}"#)
                .is_err()
        );
        assert!(
            Balance::from_json(r#"{"type":"iso","value":1,"currencyCode":"","divisor":100}"#)
                .is_err()
        );
    }
}
