//! Application configuration management.

use serde::Deserialize;

use crate::error::AppResult;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Privacy flags controlling what gets hidden or perturbed on display.
    pub privacy: PrivacyConfig,
    /// Random source configuration for obfuscation.
    pub obfuscation: ObfuscationConfig,
}

/// Privacy (display obfuscation) flags.
///
/// Only `obfuscate_balance` and `obfuscate_trip_fares` affect monetary values;
/// the rest are consumed by surrounding UIs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PrivacyConfig {
    /// Hide card serial numbers.
    pub hide_card_numbers: bool,
    /// Perturb card balances.
    pub obfuscate_balance: bool,
    /// Shift trip dates.
    pub obfuscate_trip_dates: bool,
    /// Perturb trip fares.
    pub obfuscate_trip_fares: bool,
    /// Shift trip times.
    pub obfuscate_trip_times: bool,
}

impl PrivacyConfig {
    /// Number of privacy flags currently switched on.
    #[must_use]
    pub fn enabled_count(&self) -> usize {
        [
            self.hide_card_numbers,
            self.obfuscate_balance,
            self.obfuscate_trip_dates,
            self.obfuscate_trip_fares,
            self.obfuscate_trip_times,
        ]
        .into_iter()
        .filter(|on| *on)
        .count()
    }
}

/// Obfuscation random source configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ObfuscationConfig {
    /// Fixed seed for reproducible output. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, later ones winning: `config/default`, `config/{RUN_MODE}`,
    /// then `FARECARD__SECTION__KEY` environment variables.
    pub fn load() -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FARECARD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
