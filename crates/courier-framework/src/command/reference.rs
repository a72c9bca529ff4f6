//! Reference token decoding.
//!
//! Chat platforms encode mentions of entities inline as `<SIGIL ID>`:
//!
//! | Token                  | Sigil        | Entity          |
//! |------------------------|--------------|-----------------|
//! | `<#123…>`              | `#`          | channel         |
//! | `<@&123…>`             | `@&`         | role            |
//! | `<@123…>`, `<@!123…>`  | `@`, `@!`    | user            |
//! | `<:name:123…>`         | `:name:`     | emoji           |
//! | `<a:name:123…>`        | `a:name:`    | animated emoji  |
//!
//! The identifier is always the final run of at least 18 digits and must end
//! the body. Whatever precedes it is the sigil, which is checked against the
//! parameter's expected [`ParamType`].

use std::sync::OnceLock;

use courier_core::{EntityStore, MinimalChannel, MinimalUser, PartialEmoji, Snowflake};
use regex::Regex;
use tracing::trace;

use super::param::{EntityKind, ParamType};
use super::value::Value;
use crate::error::ReferenceError;

fn id_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[0-9]{18,}").expect("identifier pattern is valid"))
}

fn emoji_sigil_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(a)?:(\w+):$").expect("emoji sigil pattern is valid"))
}

/// Returns `true` if the token is syntactically a reference (`<...>`).
pub fn is_reference(token: &str) -> bool {
    token.starts_with('<') && token.ends_with('>')
}

/// A parsed view of one `<...>` reference token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceToken<'a> {
    raw_body: &'a str,
    id: Snowflake,
    sigil: &'a str,
}

impl<'a> ReferenceToken<'a> {
    /// Parses a reference token, delimiters included.
    pub fn parse(token: &'a str) -> Result<Self, ReferenceError> {
        let invalid = || ReferenceError::InvalidSyntax(token.to_string());

        let body = token
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .ok_or_else(invalid)?;

        let run = id_pattern()
            .find_iter(body)
            .last()
            .filter(|m| m.end() == body.len())
            .ok_or_else(invalid)?;

        let id = run.as_str().parse::<Snowflake>().map_err(|_| invalid())?;

        Ok(Self {
            raw_body: body,
            id,
            sigil: &body[..run.start()],
        })
    }

    /// The text between the angle brackets.
    pub fn raw_body(&self) -> &'a str {
        self.raw_body
    }

    pub fn id(&self) -> Snowflake {
        self.id
    }

    /// Everything before the identifier, e.g. `#`, `@&` or `a:party:`.
    pub fn sigil(&self) -> &'a str {
        self.sigil
    }

    /// Splits an emoji sigil into its name and animated flag.
    ///
    /// Returns `None` unless the sigil is exactly `:name:` or `a:name:`.
    pub fn emoji_parts(&self) -> Option<(&'a str, bool)> {
        let caps = emoji_sigil_pattern().captures(self.sigil)?;
        let name = caps.get(2)?.as_str();
        Some((name, caps.get(1).is_some()))
    }

    /// `true` for `a:name:` emoji sigils.
    pub fn animated(&self) -> bool {
        self.emoji_parts().is_some_and(|(_, animated)| animated)
    }

    fn expect_sigil(&self, ok: bool, expected: EntityKind) -> Result<(), ReferenceError> {
        if ok {
            Ok(())
        } else {
            Err(ReferenceError::InvalidType {
                expected,
                sigil: self.sigil.to_string(),
            })
        }
    }
}

/// Decodes a reference token into a value for a parameter of type `expected`.
///
/// `store` is `None` when caching is disabled; resolved reference types then
/// fail with [`ReferenceError::CacheRequired`]. Non-reference parameter types
/// get the bare identifier regardless of sigil.
pub fn decode_reference(
    expected: ParamType,
    token: &str,
    store: Option<&dyn EntityStore>,
) -> Result<Value, ReferenceError> {
    let reference = ReferenceToken::parse(token)?;
    let id = reference.id();
    trace!(sigil = reference.sigil(), %id, expected = %expected, "decoding reference");

    match expected {
        ParamType::Channel { resolved } => {
            reference.expect_sigil(reference.sigil() == "#", EntityKind::Channel)?;
            if !resolved {
                return Ok(Value::Channel(MinimalChannel::new(id)));
            }
            resolve(store, EntityKind::Channel, id, |s| s.channel(id)).map(Value::ResolvedChannel)
        }
        ParamType::Role => {
            reference.expect_sigil(reference.sigil() == "@&", EntityKind::Role)?;
            resolve(store, EntityKind::Role, id, |s| s.role(id)).map(Value::Role)
        }
        ParamType::Emoji { resolved } => {
            let (name, animated) =
                reference
                    .emoji_parts()
                    .ok_or_else(|| ReferenceError::InvalidType {
                        expected: EntityKind::Emoji,
                        sigil: reference.sigil().to_string(),
                    })?;
            if !resolved {
                return Ok(Value::Emoji(PartialEmoji::new(id, name, animated)));
            }
            resolve(store, EntityKind::Emoji, id, |s| s.emoji(id)).map(Value::ResolvedEmoji)
        }
        ParamType::User { resolved } => {
            reference.expect_sigil(matches!(reference.sigil(), "@" | "@!"), EntityKind::User)?;
            if !resolved {
                return Ok(Value::User(MinimalUser::new(id)));
            }
            resolve(store, EntityKind::User, id, |s| s.user(id)).map(Value::ResolvedUser)
        }
        ParamType::Text | ParamType::Integer | ParamType::Float | ParamType::Boolean | ParamType::Id => {
            Ok(Value::Id(id))
        }
    }
}

fn resolve<T>(
    store: Option<&dyn EntityStore>,
    kind: EntityKind,
    id: Snowflake,
    lookup: impl FnOnce(&dyn EntityStore) -> Option<T>,
) -> Result<T, ReferenceError> {
    let store = store.ok_or(ReferenceError::CacheRequired(kind))?;
    lookup(store).ok_or(ReferenceError::NotCached { kind, id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_core::{Channel, Emoji, EntityCache, Role, User};

    const ID: u64 = 123_456_789_012_345_678;

    fn cache() -> EntityCache {
        let cache = EntityCache::new();
        cache.insert_channel(Channel::new(Snowflake::new(ID), "general"));
        cache.insert_role(Role::new(Snowflake::new(ID), "moderators"));
        cache.insert_emoji(Emoji::new(Snowflake::new(ID), "party", true));
        cache.insert_user(User::new(Snowflake::new(ID), "alice"));
        cache
    }

    #[test]
    fn test_is_reference() {
        assert!(is_reference("<#123>"));
        assert!(is_reference("<>"));
        assert!(!is_reference("<#123"));
        assert!(!is_reference("#123>"));
        assert!(!is_reference("<"));
        assert!(!is_reference("plain"));
    }

    #[test]
    fn test_parse_token() {
        let token = ReferenceToken::parse("<a:party:123456789012345678>").unwrap();
        assert_eq!(token.raw_body(), "a:party:123456789012345678");
        assert_eq!(token.id(), Snowflake::new(ID));
        assert_eq!(token.sigil(), "a:party:");
        assert_eq!(token.emoji_parts(), Some(("party", true)));
        assert!(token.animated());

        let token = ReferenceToken::parse("<#123456789012345678>").unwrap();
        assert_eq!(token.sigil(), "#");
        assert!(token.emoji_parts().is_none());
        assert!(!token.animated());
    }

    #[test]
    fn test_parse_uses_last_digit_run() {
        let token = ReferenceToken::parse("<:n111111111111111111:123456789012345678>").unwrap();
        assert_eq!(token.id(), Snowflake::new(ID));
        assert_eq!(token.sigil(), ":n111111111111111111:");
    }

    #[test]
    fn test_parse_rejects_bad_syntax() {
        // fewer than 18 digits
        assert!(matches!(
            ReferenceToken::parse("<#12345678901234567>"),
            Err(ReferenceError::InvalidSyntax(_))
        ));
        // trailing characters after the id
        assert!(matches!(
            ReferenceToken::parse("<#123456789012345678x>"),
            Err(ReferenceError::InvalidSyntax(_))
        ));
        // overflows u64
        assert!(matches!(
            ReferenceToken::parse("<#99999999999999999999>"),
            Err(ReferenceError::InvalidSyntax(_))
        ));
        assert!(matches!(
            ReferenceToken::parse("<>"),
            Err(ReferenceError::InvalidSyntax(_))
        ));
    }

    #[test]
    fn test_channel_lightweight_without_cache() {
        let value = decode_reference(
            ParamType::Channel { resolved: false },
            "<#123456789012345678>",
            None,
        )
        .unwrap();
        assert_eq!(value, Value::Channel(MinimalChannel::new(Snowflake::new(ID))));
    }

    #[test]
    fn test_channel_resolved_requires_cache() {
        let err = decode_reference(
            ParamType::Channel { resolved: true },
            "<#123456789012345678>",
            None,
        )
        .unwrap_err();
        assert_eq!(err, ReferenceError::CacheRequired(EntityKind::Channel));

        let cache = cache();
        let value = decode_reference(
            ParamType::Channel { resolved: true },
            "<#123456789012345678>",
            Some(&cache),
        )
        .unwrap();
        match value {
            Value::ResolvedChannel(channel) => {
                assert_eq!(channel.id, Snowflake::new(ID));
                assert_eq!(channel.name, "general");
            }
            other => panic!("unexpected value: {other:?}"),
        }
    }

    #[test]
    fn test_channel_wrong_sigil() {
        let err = decode_reference(
            ParamType::Channel { resolved: false },
            "<@123456789012345678>",
            None,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ReferenceError::InvalidType {
                expected: EntityKind::Channel,
                sigil: "@".into()
            }
        );
    }

    #[test]
    fn test_role_requires_role_sigil() {
        let cache = cache();
        let err = decode_reference(ParamType::Role, "<@123456789012345678>", Some(&cache))
            .unwrap_err();
        assert!(matches!(
            err,
            ReferenceError::InvalidType {
                expected: EntityKind::Role,
                ..
            }
        ));

        let value =
            decode_reference(ParamType::Role, "<@&123456789012345678>", Some(&cache)).unwrap();
        assert_eq!(value, Value::Role(Role::new(Snowflake::new(ID), "moderators")));
    }

    #[test]
    fn test_role_always_requires_cache() {
        let err = decode_reference(ParamType::Role, "<@&123456789012345678>", None).unwrap_err();
        assert_eq!(err, ReferenceError::CacheRequired(EntityKind::Role));
    }

    #[test]
    fn test_animated_emoji() {
        let value = decode_reference(
            ParamType::Emoji { resolved: false },
            "<a:party:123456789012345678>",
            None,
        )
        .unwrap();
        assert_eq!(
            value,
            Value::Emoji(PartialEmoji::new(Snowflake::new(ID), "party", true))
        );
    }

    #[test]
    fn test_static_emoji_and_bad_sigils() {
        let value = decode_reference(
            ParamType::Emoji { resolved: false },
            "<:wave:123456789012345678>",
            None,
        )
        .unwrap();
        assert_eq!(
            value,
            Value::Emoji(PartialEmoji::new(Snowflake::new(ID), "wave", false))
        );

        for token in [
            "<::123456789012345678>",
            "<b:wave:123456789012345678>",
            "<#123456789012345678>",
            "<wave:123456789012345678>",
        ] {
            let err = decode_reference(ParamType::Emoji { resolved: false }, token, None)
                .unwrap_err();
            assert!(
                matches!(err, ReferenceError::InvalidType { expected: EntityKind::Emoji, .. }),
                "{token} should be rejected"
            );
        }
    }

    #[test]
    fn test_resolved_emoji() {
        let cache = cache();
        let value = decode_reference(
            ParamType::Emoji { resolved: true },
            "<a:party:123456789012345678>",
            Some(&cache),
        )
        .unwrap();
        assert_eq!(
            value,
            Value::ResolvedEmoji(Emoji::new(Snowflake::new(ID), "party", true))
        );
    }

    #[test]
    fn test_user_sigils() {
        for token in ["<@123456789012345678>", "<@!123456789012345678>"] {
            let value = decode_reference(ParamType::User { resolved: false }, token, None).unwrap();
            assert_eq!(value, Value::User(MinimalUser::new(Snowflake::new(ID))));
        }
        assert!(
            decode_reference(
                ParamType::User { resolved: false },
                "<@&123456789012345678>",
                None
            )
            .is_err()
        );
    }

    #[test]
    fn test_not_cached() {
        let cache = EntityCache::new();
        let err = decode_reference(
            ParamType::User { resolved: true },
            "<@123456789012345678>",
            Some(&cache),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ReferenceError::NotCached {
                kind: EntityKind::User,
                id: Snowflake::new(ID)
            }
        );
    }

    #[test]
    fn test_untyped_fallback_ignores_sigil() {
        for token in ["<#123456789012345678>", "<@&123456789012345678>", "<x123456789012345678>"] {
            let value = decode_reference(ParamType::Id, token, None).unwrap();
            assert_eq!(value, Value::Id(Snowflake::new(ID)));
        }
        let value = decode_reference(ParamType::Text, "<#123456789012345678>", None).unwrap();
        assert_eq!(value, Value::Id(Snowflake::new(ID)));
    }
}
