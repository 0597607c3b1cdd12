//! Currency codes, the ISO 4217 registry and monetary values.

pub mod code;
pub mod error;
pub mod iso4217;
pub mod value;

#[cfg(test)]
mod value_props;

pub use code::CurrencyCode;
pub use error::CurrencyError;
pub use iso4217::{CurrencyInfo, lookup_alpha, lookup_numeric};
pub use value::{DEFAULT_DIVISOR, TransitCurrency, default_divisor};
