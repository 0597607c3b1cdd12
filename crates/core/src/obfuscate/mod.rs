//! Privacy obfuscation of monetary values.
//!
//! - `obfuscator` - Random offset and multiplier applied to a value
//! - `preferences` - Flags deciding when values get obfuscated

pub mod obfuscator;
pub mod preferences;

#[cfg(test)]
mod obfuscator_props;

pub use obfuscator::{TripObfuscator, obfuscate_with};
pub use preferences::PrivacyPreferences;
