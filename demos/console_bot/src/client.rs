//! A [`Client`] that writes replies to stdout, plus a seeded entity cache.

use courier::prelude::*;

pub const GENERAL: Snowflake = Snowflake::new(100_000_000_000_000_001);
pub const RANDOM: Snowflake = Snowflake::new(100_000_000_000_000_002);
pub const MODERATORS: Snowflake = Snowflake::new(200_000_000_000_000_001);
pub const PARTY_PARROT: Snowflake = Snowflake::new(300_000_000_000_000_001);
pub const THINKING: Snowflake = Snowflake::new(300_000_000_000_000_002);
pub const ALICE: Snowflake = Snowflake::new(400_000_000_000_000_001);
pub const BOB: Snowflake = Snowflake::new(400_000_000_000_000_002);

pub struct ConsoleClient {
    self_id: Snowflake,
    cache: Option<EntityCache>,
}

impl ConsoleClient {
    pub fn new(self_id: Snowflake, cache: Option<EntityCache>) -> Self {
        Self { self_id, cache }
    }

    /// Looks a user up in the cache, falling back to a placeholder.
    pub fn user(&self, id: Snowflake) -> User {
        self.cache
            .as_ref()
            .and_then(|cache| cache.user(id))
            .unwrap_or_else(|| User::new(id, id.to_string()))
    }
}

#[async_trait]
impl Client for ConsoleClient {
    fn self_id(&self) -> Snowflake {
        self.self_id
    }

    fn store(&self) -> Option<&dyn EntityStore> {
        self.cache.as_ref().map(|cache| cache as &dyn EntityStore)
    }

    async fn send_message(&self, channel_id: Snowflake, content: &str) -> courier::core::ApiResult<()> {
        println!("[{channel_id}] {content}");
        Ok(())
    }
}

/// Builds a cache holding a small fixed guild.
pub fn seeded_cache(guild: Snowflake, self_id: Snowflake) -> EntityCache {
    let cache = EntityCache::new();
    cache.insert_channel(Channel::new(GENERAL, "general").in_guild(guild));
    cache.insert_channel(Channel::new(RANDOM, "random").in_guild(guild));
    cache.insert_role(Role::new(MODERATORS, "moderators").in_guild(guild));
    cache.insert_emoji(Emoji::new(PARTY_PARROT, "partyparrot", true));
    cache.insert_emoji(Emoji::new(THINKING, "thinking", false));
    cache.insert_user(User::new(ALICE, "alice"));
    cache.insert_user(User::new(BOB, "bob"));
    let mut bot = User::new(self_id, "courier");
    bot.bot = true;
    cache.insert_user(bot);
    cache
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_cache() {
        let guild = Snowflake::new(1);
        let self_id = Snowflake::new(900_000_000_000_000_001);
        let client = ConsoleClient::new(self_id, Some(seeded_cache(guild, self_id)));

        assert!(client.cache_enabled());
        assert_eq!(client.user(ALICE).username, "alice");
        assert!(client.user(self_id).bot);
        assert_eq!(client.user(Snowflake::new(5)).username, "5");
        assert_eq!(
            client.store().and_then(|s| s.channel(GENERAL)).map(|c| c.name),
            Some("general".to_string())
        );
    }
}
