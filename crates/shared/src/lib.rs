//! Shared errors and configuration for Farecard.
//!
//! This crate provides common pieces used across all other crates:
//! - Application-wide error types
//! - Configuration management (privacy flags, obfuscation seed)

pub mod config;
pub mod error;

pub use config::{AppConfig, ObfuscationConfig, PrivacyConfig};
pub use error::{AppError, AppResult};
