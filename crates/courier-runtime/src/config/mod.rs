//! Configuration module for the Courier runtime.
//!
//! Layered loading (defaults, files, `COURIER_*` environment variables,
//! programmatic overrides) via figment, plus validation.

pub mod error;
pub mod loader;
pub mod schema;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use loader::{ConfigLoader, Profile, load_config, load_config_from_file};
pub use schema::{
    CacheConfig, CommandsConfig, CourierConfig, LogFormat, LogLevel, LogOutput, LoggingConfig,
    RuntimeConfig,
};
pub use validation::validate_config;
