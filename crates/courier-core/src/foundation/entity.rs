//! Chat entities that can appear as command arguments.
//!
//! Every kind comes in up to two shapes:
//!
//! - a **lightweight reference** ([`MinimalChannel`], [`PartialEmoji`],
//!   [`MinimalUser`]) that only carries what the reference token itself
//!   encodes. Nothing guarantees the entity exists on the remote service.
//! - a **resolved entity** ([`Channel`], [`Role`], [`Emoji`], [`User`]) that was
//!   materialised from the local entity store.
//!
//! Roles have no lightweight form.

use serde::{Deserialize, Serialize};

use super::snowflake::Snowflake;

// ============================================================================
// Lightweight References
// ============================================================================

/// A channel known only by its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinimalChannel {
    pub id: Snowflake,
}

impl MinimalChannel {
    pub fn new(id: Snowflake) -> Self {
        Self { id }
    }

    /// Formats the channel as a reference token (`<#id>`).
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }
}

/// An emoji reference decoded from `<:name:id>` or `<a:name:id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PartialEmoji {
    pub id: Snowflake,
    pub name: String,
    #[serde(default)]
    pub animated: bool,
}

impl PartialEmoji {
    pub fn new(id: Snowflake, name: impl Into<String>, animated: bool) -> Self {
        Self {
            id,
            name: name.into(),
            animated,
        }
    }

    /// Formats the emoji back into its reference token.
    pub fn mention(&self) -> String {
        let prefix = if self.animated { "a" } else { "" };
        format!("<{prefix}:{}:{}>", self.name, self.id)
    }
}

/// A user known only by its identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MinimalUser {
    pub id: Snowflake,
}

impl MinimalUser {
    pub fn new(id: Snowflake) -> Self {
        Self { id }
    }

    /// Formats the user as a reference token (`<@id>`).
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }
}

// ============================================================================
// Resolved Entities
// ============================================================================

/// A channel materialised from the entity store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: Snowflake,
    pub name: String,
    /// The guild this channel belongs to, absent for private channels.
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
}

impl Channel {
    pub fn new(id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            guild_id: None,
        }
    }

    /// Sets the owning guild.
    pub fn in_guild(mut self, guild_id: Snowflake) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    /// Drops everything but the identifier.
    pub fn to_minimal(&self) -> MinimalChannel {
        MinimalChannel::new(self.id)
    }
}

/// A guild role materialised from the entity store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Snowflake,
    pub name: String,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
}

impl Role {
    pub fn new(id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            guild_id: None,
        }
    }

    pub fn in_guild(mut self, guild_id: Snowflake) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    /// Formats the role as a reference token (`<@&id>`).
    pub fn mention(&self) -> String {
        format!("<@&{}>", self.id)
    }
}

/// A custom guild emoji materialised from the entity store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    pub id: Snowflake,
    pub name: String,
    #[serde(default)]
    pub animated: bool,
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
}

impl Emoji {
    pub fn new(id: Snowflake, name: impl Into<String>, animated: bool) -> Self {
        Self {
            id,
            name: name.into(),
            animated,
            guild_id: None,
        }
    }

    pub fn to_partial(&self) -> PartialEmoji {
        PartialEmoji::new(self.id, self.name.clone(), self.animated)
    }
}

/// A user account materialised from the entity store or carried on a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Snowflake,
    pub username: String,
    /// Whether the account is a bot account.
    #[serde(default)]
    pub bot: bool,
}

impl User {
    pub fn new(id: Snowflake, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            bot: false,
        }
    }

    pub fn to_minimal(&self) -> MinimalUser {
        MinimalUser::new(self.id)
    }
}
