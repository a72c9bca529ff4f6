//! Runtime error types.

use courier_framework::RegistryError;
use thiserror::Error;

pub use crate::config::{ConfigError, ConfigResult};

/// Errors that can occur during runtime operations.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Command registration failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The runtime's event loop is gone; no further messages are accepted.
    #[error("Event channel closed")]
    ChannelClosed,
}

/// Result type for runtime operations.
pub type RuntimeResult<T> = Result<T, RuntimeError>;
