//! Configuration utilities.

/// TOML configuration loading, validation and secret resolution.
pub mod config;

pub use config::{ConfigError, InvestigatorConfig, LogFormat, Secrets};
