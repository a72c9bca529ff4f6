//! The mention gate.

use courier_core::Snowflake;

/// Decides whether a message's mention list addresses the bot.
///
/// Only a self-mention in the **first** position counts. Mentions of the bot
/// anywhere else are ordinary message content.
pub fn is_invocation_mention<I>(mentions: I, self_id: Snowflake, allow_mention: bool) -> bool
where
    I: IntoIterator<Item = Snowflake>,
{
    if !allow_mention {
        return false;
    }
    mentions.into_iter().next() == Some(self_id)
}
