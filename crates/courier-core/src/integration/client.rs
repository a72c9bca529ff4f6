//! The connection collaborator.
//!
//! A [`Client`] represents the bot's live connection to the chat service. The
//! command engine only needs three things from it: the bot's own identity (to
//! recognise a leading self-mention), the entity store (present only when
//! caching is enabled) and a way for commands to reply.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::foundation::snowflake::Snowflake;
use crate::integration::store::EntityStore;

/// Errors returned by calls against the chat service.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The connection is not established.
    #[error("client is not connected")]
    NotConnected,

    /// The target channel does not exist or is not visible to the bot.
    #[error("channel {0} not found")]
    ChannelNotFound(Snowflake),

    /// Any other failure reported by the service.
    #[error("{0}")]
    Other(String),
}

/// Result type for API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// The live connection a command runs against.
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct MyClient {
///     id: Snowflake,
///     cache: Option<EntityCache>,
/// }
///
/// #[async_trait]
/// impl Client for MyClient {
///     fn self_id(&self) -> Snowflake {
///         self.id
///     }
///
///     fn store(&self) -> Option<&dyn EntityStore> {
///         self.cache.as_ref().map(|c| c as &dyn EntityStore)
///     }
///
///     async fn send_message(&self, channel_id: Snowflake, content: &str) -> ApiResult<()> {
///         // call the REST layer
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Client: Send + Sync {
    /// Returns the bot's own user identity.
    fn self_id(&self) -> Snowflake;

    /// Returns the entity store, or `None` when caching is disabled.
    ///
    /// Reference arguments that need a fully resolved entity can only be
    /// bound while this returns `Some`.
    fn store(&self) -> Option<&dyn EntityStore>;

    /// Returns `true` if caching is enabled for this connection.
    fn cache_enabled(&self) -> bool {
        self.store().is_some()
    }

    /// Sends a text message to a channel.
    async fn send_message(&self, channel_id: Snowflake, content: &str) -> ApiResult<()>;
}

/// A shared client trait object.
pub type BoxedClient = Arc<dyn Client>;
