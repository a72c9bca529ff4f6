//! Command definitions and argument binding.
//!
//! A command is declared once, at startup, as a [`CommandDescriptor`]: a
//! unique name, an ordered list of typed parameters and a factory producing a
//! fresh [`Command`] instance per invocation.
//!
//! # Binding
//!
//! After the dispatcher strips the prefix (or the leading self-mention) and
//! the command name, the remaining whitespace tokens are bound to the declared
//! parameters in order:
//!
//! - a [`ParamType::Text`] parameter declared last absorbs every remaining
//!   token, joined by single spaces
//! - in group messages, `<...>` tokens go through the reference decoder
//! - everything else is parsed as a literal of the parameter's type
//!
//! ```rust,ignore
//! use courier_framework::command::{CommandDescriptor, ParamType};
//!
//! let descriptor = CommandDescriptor::builder("topic")
//!     .param("channel", ParamType::Channel { resolved: true })
//!     .param("text", ParamType::Text)
//!     .build(Topic::default);
//!
//! // "!topic <#123456789012345678> release planning" binds
//! //   channel = Channel { id: 123456789012345678, .. } (from the cache)
//! //   text    = "release planning"
//! ```

pub mod binder;
pub mod descriptor;
pub mod param;
pub mod reference;
pub mod split;
pub mod traits;
pub mod value;

pub use binder::bind;
pub use descriptor::{CommandDescriptor, CommandDescriptorBuilder, CommandFactory};
pub use param::{EntityKind, ParamType, ParameterDescriptor};
pub use reference::{ReferenceToken, decode_reference, is_reference};
pub use split::tokenize;
pub use traits::{Command, CommandContext};
pub use value::{Arguments, FromValue, Value};
