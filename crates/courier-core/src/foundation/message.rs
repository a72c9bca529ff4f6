//! Inbound chat messages.

use serde::{Deserialize, Serialize};

use super::entity::User;
use super::snowflake::Snowflake;

/// A chat message delivered by the transport.
///
/// `mentions` lists the users addressed by the message in the order the
/// platform reports them. Only the first entry can turn a message into a
/// mention-style command invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEvent {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    /// Present when the message was sent inside a guild (group context).
    #[serde(default)]
    pub guild_id: Option<Snowflake>,
    pub author: User,
    pub content: String,
    #[serde(default)]
    pub mentions: Vec<User>,
}

impl MessageEvent {
    /// Creates a private (one-to-one) message with no mentions.
    pub fn new(
        id: Snowflake,
        channel_id: Snowflake,
        author: User,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            channel_id,
            guild_id: None,
            author,
            content: content.into(),
            mentions: Vec::new(),
        }
    }

    /// Marks the message as sent inside the given guild.
    pub fn in_guild(mut self, guild_id: Snowflake) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    /// Replaces the mention list.
    pub fn with_mentions(mut self, mentions: Vec<User>) -> Self {
        self.mentions = mentions;
        self
    }

    /// Parses a message from its JSON gateway representation.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }

    /// Returns `true` if the message originated in a group (multi-party) context.
    pub fn is_group(&self) -> bool {
        self.guild_id.is_some()
    }

    /// Returns the identities of the mentioned users, in order.
    pub fn mention_ids(&self) -> impl Iterator<Item = Snowflake> + '_ {
        self.mentions.iter().map(|user| user.id)
    }
}
