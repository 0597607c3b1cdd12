//! Non-numeric balances, shown as a localized label.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::currency::{CurrencyCode, TransitCurrency};
use crate::format::{FormattedString, Localizer};

/// Identifier of a localized string owned by the display layer.
///
/// Cloning shares the identifier rather than copying it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringResource(Arc<str>);

impl StringResource {
    /// Wraps a string identifier.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// The identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.0
    }
}

/// A balance that has no amount, only a label (eg: "Unlimited rides").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceBalance {
    #[serde(rename = "mDesc")]
    descriptor: StringResource,
}

impl ResourceBalance {
    /// Creates a balance shown as `descriptor`.
    #[must_use]
    pub const fn new(descriptor: StringResource) -> Self {
        Self { descriptor }
    }

    /// The label to show.
    #[must_use]
    pub const fn descriptor(&self) -> &StringResource {
        &self.descriptor
    }

    /// Localizes the descriptor; there is no amount to format.
    pub fn format_currency_string<L>(&self, localizer: &L) -> FormattedString
    where
        L: Localizer + ?Sized,
    {
        localizer.localize(&self.descriptor)
    }

    /// Nothing to hide, returns a copy of `self`.
    #[must_use]
    pub fn obfuscate(&self) -> Self {
        self.clone()
    }

    /// Always `USD 0.00`. Only here so every [`super::Balance`] has a
    /// numeric view; the value carries no meaning.
    #[must_use]
    pub fn balance(&self) -> TransitCurrency {
        TransitCurrency::of(CurrencyCode::USD, 0)
    }
}
