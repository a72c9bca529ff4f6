//! Entity lookup by identifier.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::foundation::entity::{Channel, Emoji, Role, User};
use crate::foundation::snowflake::Snowflake;

/// Resolves identifiers to fully materialised entities.
///
/// Lookups are local and never block on the network; a miss simply returns
/// `None`.
pub trait EntityStore: Send + Sync {
    fn channel(&self, id: Snowflake) -> Option<Channel>;

    fn role(&self, id: Snowflake) -> Option<Role>;

    fn emoji(&self, id: Snowflake) -> Option<Emoji>;

    fn user(&self, id: Snowflake) -> Option<User>;
}

/// An in-memory [`EntityStore`].
///
/// The transport fills the cache from gateway events; the command engine only
/// reads from it. Each entity kind sits behind its own lock so readers of one
/// kind never wait on writers of another.
#[derive(Debug, Default)]
pub struct EntityCache {
    channels: RwLock<HashMap<Snowflake, Channel>>,
    roles: RwLock<HashMap<Snowflake, Role>>,
    emojis: RwLock<HashMap<Snowflake, Emoji>>,
    users: RwLock<HashMap<Snowflake, User>>,
}

impl EntityCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_channel(&self, channel: Channel) {
        self.channels.write().insert(channel.id, channel);
    }

    pub fn insert_role(&self, role: Role) {
        self.roles.write().insert(role.id, role);
    }

    pub fn insert_emoji(&self, emoji: Emoji) {
        self.emojis.write().insert(emoji.id, emoji);
    }

    pub fn insert_user(&self, user: User) {
        self.users.write().insert(user.id, user);
    }

    /// Returns the total number of cached entities across all kinds.
    pub fn len(&self) -> usize {
        self.channels.read().len()
            + self.roles.read().len()
            + self.emojis.read().len()
            + self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EntityStore for EntityCache {
    fn channel(&self, id: Snowflake) -> Option<Channel> {
        self.channels.read().get(&id).cloned()
    }

    fn role(&self, id: Snowflake) -> Option<Role> {
        self.roles.read().get(&id).cloned()
    }

    fn emoji(&self, id: Snowflake) -> Option<Emoji> {
        self.emojis.read().get(&id).cloned()
    }

    fn user(&self, id: Snowflake) -> Option<User> {
        self.users.read().get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integration::client::{ApiResult, Client};
    use async_trait::async_trait;

    struct CachedClient {
        cache: Option<EntityCache>,
    }

    #[async_trait]
    impl Client for CachedClient {
        fn self_id(&self) -> Snowflake {
            Snowflake::new(1)
        }

        fn store(&self) -> Option<&dyn EntityStore> {
            self.cache.as_ref().map(|c| c as &dyn EntityStore)
        }

        async fn send_message(&self, _channel_id: Snowflake, _content: &str) -> ApiResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let cache = EntityCache::new();
        assert!(cache.is_empty());

        cache.insert_channel(Channel::new(Snowflake::new(1), "general"));
        cache.insert_role(Role::new(Snowflake::new(2), "mods"));
        cache.insert_emoji(Emoji::new(Snowflake::new(3), "party", true));
        cache.insert_user(User::new(Snowflake::new(4), "alice"));

        assert_eq!(cache.len(), 4);
        assert_eq!(cache.channel(Snowflake::new(1)).unwrap().name, "general");
        assert_eq!(cache.role(Snowflake::new(2)).unwrap().name, "mods");
        assert!(cache.emoji(Snowflake::new(3)).unwrap().animated);
        assert_eq!(cache.user(Snowflake::new(4)).unwrap().username, "alice");
    }

    #[test]
    fn test_lookup_is_per_kind() {
        let cache = EntityCache::new();
        cache.insert_role(Role::new(Snowflake::new(2), "mods"));
        assert!(cache.channel(Snowflake::new(2)).is_none());
        assert!(cache.user(Snowflake::new(2)).is_none());
    }

    #[tokio::test]
    async fn test_cache_enabled_follows_store() {
        let enabled = CachedClient {
            cache: Some(EntityCache::new()),
        };
        let disabled = CachedClient { cache: None };
        assert!(enabled.cache_enabled());
        assert!(!disabled.cache_enabled());
        assert!(enabled.send_message(Snowflake::new(9), "hi").await.is_ok());
    }
}
