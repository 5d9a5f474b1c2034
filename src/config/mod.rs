//! Configuration module.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Display mode definitions shared with the CLI
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{ClientConfig, Config, OptionsConfig, ProfileConfig};
pub use modes::{DetailLevel, SortKey};
pub use validation::validate_config;
