//! # Courier Core
//!
//! The data model shared by every Courier crate.
//!
//! ## Foundation Layer
//!
//! - **Identifiers**: [`Snowflake`], the 64-bit id carried by every entity
//! - **Entities**: lightweight references ([`MinimalChannel`], [`PartialEmoji`],
//!   [`MinimalUser`]) and fully resolved objects ([`Channel`], [`Role`],
//!   [`Emoji`], [`User`])
//! - **Messages**: the inbound [`MessageEvent`]
//!
//! ## Integration Layer
//!
//! The collaborators the command engine talks to but does not own:
//! - [`Client`]: the bot's own identity, its entity store and the send path
//! - [`EntityStore`]: id to entity lookups, backed by [`EntityCache`]
//!
//! ```rust,ignore
//! use courier_core::{EntityCache, EntityStore, Role, Snowflake};
//!
//! let cache = EntityCache::new();
//! cache.insert_role(Role::new(Snowflake::new(42), "moderator"));
//! assert!(cache.role(Snowflake::new(42)).is_some());
//! ```

pub mod foundation;
pub mod integration;

pub use foundation::{
    Channel, Emoji, MessageEvent, MinimalChannel, MinimalUser, PartialEmoji, ParseSnowflakeError,
    Role, Snowflake, User,
};
pub use integration::{ApiError, ApiResult, BoxedClient, Client, EntityCache, EntityStore};

/// Prelude for common imports.
pub mod prelude {
    pub use super::foundation::*;
    pub use super::integration::{ApiError, ApiResult, Client, EntityStore};
}
