//! Courier Runtime - orchestration layer for the Courier bot framework.
//!
//! This crate provides:
//! - Layered configuration loading ([`ConfigLoader`], figment)
//! - Logging setup ([`init_from_config`], tracing-subscriber)
//! - The message event loop ([`CourierRuntime`])
//!
//! ```ignore
//! use courier_runtime::CourierRuntime;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let runtime = CourierRuntime::builder().build(client, registry)?;
//!     let events = runtime.sender();
//!     // hand `events` to whatever produces messages
//!     runtime.run_until_ctrl_c().await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;

pub use config::{
    CacheConfig, CommandsConfig, ConfigError, ConfigLoader, ConfigResult, CourierConfig,
    LoggingConfig, RuntimeConfig, validate_config,
};
pub use error::{RuntimeError, RuntimeResult};
pub use logging::{init_from_config, try_init_from_config};
pub use runtime::{CourierRuntime, EventSender, RuntimeBuilder, RuntimeStats};

pub use tracing;

/// Logging macros re-exported for command implementations.
pub mod prelude {
    pub use tracing::{Level, debug, error, info, instrument, span, trace, warn};
}
