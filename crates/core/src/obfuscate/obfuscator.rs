//! Randomized perturbation of monetary values for privacy on screen.
//!
//! This is meant to stop casual disclosure (screenshots, shoulder surfing).
//! It is NOT a security mechanism and the output is not reproducible across
//! runs unless a seed is configured.

use std::sync::{Mutex, PoisonError};

use farecard_shared::ObfuscationConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::preferences::PrivacyPreferences;
use crate::currency::TransitCurrency;

/// One whole multiplier, in basis points.
pub const SCALE_ONE: i64 = 10_000;

/// Offsets are drawn from `OFFSET_RANGE` (minor units).
pub const OFFSET_RANGE: std::ops::Range<i64> = -50..50;

/// Multipliers are drawn from `SCALE_RANGE` basis points, ie: `[0.8, 1.2)`.
pub const SCALE_RANGE: std::ops::Range<i64> = 8_000..12_000;

/// Applies a fixed offset and multiplier to `value`.
///
/// Computes `floor((amount + offset) * scale_bp / 10000)`, then restores the
/// sign of the original amount. A non-zero amount never comes out as zero.
#[must_use]
pub fn obfuscate_with(value: &TransitCurrency, offset: i64, scale_bp: i64) -> TransitCurrency {
    let amount = value.amount();
    let shifted = i128::from(amount.saturating_add(offset));
    let scaled = (shifted * i128::from(scale_bp)).div_euclid(i128::from(SCALE_ONE));
    let mut raw = i64::try_from(scaled).unwrap_or(if scaled < 0 { i64::MIN } else { i64::MAX });

    // Match the sign of the original fare
    if (raw > 0 && amount < 0) || (raw < 0 && amount >= 0) {
        raw = raw.saturating_neg();
    }
    if raw == 0 && amount != 0 {
        raw = amount.signum();
    }

    value.with_amount(raw)
}

/// Obfuscates values using an owned random source.
///
/// The source sits behind a mutex so one obfuscator can be shared across
/// threads; each draw advances it.
pub struct TripObfuscator<R = StdRng> {
    rng: Mutex<R>,
}

impl TripObfuscator<StdRng> {
    /// Creates an obfuscator with a reproducible sequence.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Creates an obfuscator seeded from the operating system.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Creates an obfuscator from configuration: seeded if a seed is set.
    #[must_use]
    pub fn from_config(config: &ObfuscationConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }
}

impl<R: Rng> TripObfuscator<R> {
    /// Creates an obfuscator around any random source.
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Draws an offset and multiplier and applies them to `value`.
    pub fn obfuscate(&self, value: &TransitCurrency) -> TransitCurrency {
        let (offset, scale_bp) = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            (
                rng.random_range(OFFSET_RANGE),
                rng.random_range(SCALE_RANGE),
            )
        };
        obfuscate_with(value, offset, scale_bp)
    }

    /// Obfuscates `value` if the balance preference is on.
    pub fn maybe_obfuscate_balance<P>(&self, value: &TransitCurrency, prefs: &P) -> TransitCurrency
    where
        P: PrivacyPreferences + ?Sized,
    {
        if prefs.obfuscate_balance() {
            debug!(currency = %value.currency_code(), "obfuscating balance");
            self.obfuscate(value)
        } else {
            *value
        }
    }

    /// Obfuscates `value` if the trip fare preference is on.
    pub fn maybe_obfuscate_fare<P>(&self, value: &TransitCurrency, prefs: &P) -> TransitCurrency
    where
        P: PrivacyPreferences + ?Sized,
    {
        if prefs.obfuscate_trip_fares() {
            debug!(currency = %value.currency_code(), "obfuscating fare");
            self.obfuscate(value)
        } else {
            *value
        }
    }
}

impl Default for TripObfuscator<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}
