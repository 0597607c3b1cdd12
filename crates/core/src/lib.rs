//! Core monetary value logic for Farecard.
//!
//! This crate contains pure logic with ZERO I/O dependencies. Card decoders
//! build [`Balance`] values, display layers format them, and privacy settings
//! decide whether they get obfuscated first.
//!
//! # Modules
//!
//! - `currency` - ISO 4217 registry and the [`TransitCurrency`] value type
//! - `obfuscate` - Randomized, sign-preserving perturbation of values
//! - `format` - Formatting and localization capabilities
//! - `balance` - The [`Balance`] sum type and its resource variant

pub mod balance;
pub mod currency;
pub mod format;
pub mod obfuscate;

pub use balance::{Balance, ResourceBalance, StringResource};
pub use currency::{CurrencyCode, CurrencyError, TransitCurrency};
pub use format::{CurrencyFormatter, FormattedString, Localizer};
pub use obfuscate::{PrivacyPreferences, TripObfuscator};
