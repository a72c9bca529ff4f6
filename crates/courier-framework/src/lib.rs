//! # Courier Framework
//!
//! The command engine of the Courier bot framework.
//!
//! This layer provides:
//! - Mention gate deciding whether a leading mention addresses the bot
//! - Tokenizer splitting message text into argument tokens
//! - Reference decoder for `<#id>`, `<@&id>`, `<:name:id>` style tokens
//! - Parameter binder turning tokens into typed [`Arguments`]
//! - [`CommandDispatcher`], which ties them together per message and is also
//!   usable as a `tower::Service`
//!
//! ```rust,ignore
//! use courier_framework::prelude::*;
//!
//! let registry = CommandRegistry::new()
//!     .with(
//!         CommandDescriptor::builder("kick")
//!             .param("user", ParamType::User { resolved: false })
//!             .param("reason", ParamType::Text)
//!             .build(Kick::default),
//!     )?;
//!
//! let dispatcher = CommandDispatcher::new(registry, client, DispatcherConfig::default());
//! dispatcher.dispatch(message).await;
//! ```

pub mod command;
pub mod dispatcher;
pub mod error;
pub mod mention;
pub mod registry;
pub mod service;

pub use command::{
    Arguments, Command, CommandContext, CommandDescriptor, CommandDescriptorBuilder,
    CommandFactory, EntityKind, FromValue, ParamType, ParameterDescriptor, ReferenceToken, Value,
    bind, decode_reference, is_reference, tokenize,
};
pub use dispatcher::{CommandDispatcher, DispatchOutcome, DispatcherConfig, IgnoreReason};
pub use error::{
    ArgumentError, ArgumentErrorKind, ConversionError, ReferenceError, RegistryError,
    RegistryResult,
};
pub use mention::is_invocation_mention;
pub use registry::CommandRegistry;
pub use service::BoxedDispatchService;

/// Re-exported so command implementations need no direct dependency.
pub use async_trait::async_trait;

/// Prelude for common imports.
pub mod prelude {
    pub use super::command::{
        Arguments, Command, CommandContext, CommandDescriptor, FromValue, ParamType, Value,
    };
    pub use super::dispatcher::{CommandDispatcher, DispatchOutcome, DispatcherConfig};
    pub use super::error::{ArgumentError, ArgumentErrorKind};
    pub use super::registry::CommandRegistry;
}
