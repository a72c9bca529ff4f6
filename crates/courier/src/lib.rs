//! # Courier
//!
//! Text-command dispatch for chat bots: prefix or mention invocation,
//! whitespace tokenizing, and typed parameter binding that understands
//! channel, role, emoji and user references.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────────┐     ┌───────────────────────────────┐
//! │   Runtime    │────▶│ CommandDispatcher │────▶│ fresh command instance        │
//! │ (event loop) │     │ gate → tokens →   │     │ prepare → execute             │
//! │ task/message │     │ lookup → bind     │     │        or handle_error        │
//! └──────────────┘     └───────────────────┘     └───────────────────────────────┘
//! ```
//!
//! - **core**: identifiers, entities, messages, the `Client` and `EntityStore` traits
//! - **framework**: tokenizer, reference decoder, binder, registry and dispatcher
//! - **runtime**: configuration, logging and the message event loop
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use courier::prelude::*;
//!
//! #[derive(Default)]
//! struct Roll;
//!
//! #[async_trait]
//! impl Command for Roll {
//!     async fn execute(&mut self, args: Arguments) {
//!         let count: i64 = args.get("count").unwrap_or(1);
//!         info!(count, "rolling");
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let registry = CommandRegistry::new().with(
//!         CommandDescriptor::builder("roll")
//!             .param("count", ParamType::Integer)
//!             .build(Roll::default),
//!     )?;
//!
//!     let runtime = CourierRuntime::builder().build(client, registry)?;
//!     runtime.run_until_ctrl_c().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - `toml-config` (default): TOML configuration files
//! - `yaml-config`: YAML configuration files
//! - `json-log`: JSON log output

pub use courier_core as core;
pub use courier_framework as framework;
pub use courier_runtime as runtime;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use courier_runtime::{CourierConfig, CourierRuntime, EventSender, RuntimeError};

    pub use courier_framework::{
        ArgumentError, ArgumentErrorKind, Arguments, Command, CommandContext, CommandDescriptor,
        CommandDispatcher, CommandRegistry, DispatchOutcome, DispatcherConfig, FromValue,
        IgnoreReason, ParamType, Value,
    };

    pub use courier_core::{
        BoxedClient, Channel, Client, Emoji, EntityCache, EntityStore, MessageEvent,
        MinimalChannel, MinimalUser, PartialEmoji, Role, Snowflake, User,
    };

    pub use courier_framework::async_trait;
    pub use courier_runtime::prelude::*;
}
