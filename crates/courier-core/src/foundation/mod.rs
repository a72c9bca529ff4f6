//! Foundation layer - identifiers, entities and messages.

pub mod entity;
pub mod message;
pub mod snowflake;

pub use entity::{Channel, Emoji, MinimalChannel, MinimalUser, PartialEmoji, Role, User};
pub use message::MessageEvent;
pub use snowflake::{ParseSnowflakeError, Snowflake};
