//! Preference flags that switch obfuscation on.

use farecard_shared::{AppConfig, PrivacyConfig};

/// Source of the user's privacy choices for monetary values.
pub trait PrivacyPreferences {
    /// Whether card balances should be obfuscated.
    fn obfuscate_balance(&self) -> bool;

    /// Whether trip fares should be obfuscated.
    fn obfuscate_trip_fares(&self) -> bool;
}

impl PrivacyPreferences for PrivacyConfig {
    fn obfuscate_balance(&self) -> bool {
        self.obfuscate_balance
    }

    fn obfuscate_trip_fares(&self) -> bool {
        self.obfuscate_trip_fares
    }
}

impl PrivacyPreferences for AppConfig {
    fn obfuscate_balance(&self) -> bool {
        self.privacy.obfuscate_balance()
    }

    fn obfuscate_trip_fares(&self) -> bool {
        self.privacy.obfuscate_trip_fares()
    }
}
