//! The command capability interface.

use std::sync::Arc;

use async_trait::async_trait;
use courier_core::{ApiResult, BoxedClient, MessageEvent};
use tracing::warn;

use super::value::Arguments;
use crate::error::ArgumentError;

/// Everything a command instance needs from its surroundings.
///
/// Injected once through [`Command::prepare`]; the command does not own the
/// client or the message, it only holds shared handles for its own lifetime.
#[derive(Clone)]
pub struct CommandContext {
    client: BoxedClient,
    message: Arc<MessageEvent>,
}

impl CommandContext {
    pub fn new(client: BoxedClient, message: Arc<MessageEvent>) -> Self {
        Self { client, message }
    }

    pub fn client(&self) -> &BoxedClient {
        &self.client
    }

    /// The message that invoked the command.
    pub fn message(&self) -> &MessageEvent {
        &self.message
    }

    /// Sends `content` to the channel the command was invoked from.
    pub async fn reply(&self, content: &str) -> ApiResult<()> {
        self.client
            .send_message(self.message.channel_id, content)
            .await
    }
}

impl std::fmt::Debug for CommandContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandContext")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// A command implementation.
///
/// The dispatcher creates one instance per invocation and calls
/// [`prepare`](Command::prepare) exactly once, then either
/// [`execute`](Command::execute) or [`handle_error`](Command::handle_error),
/// never both.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Default)]
/// struct Echo {
///     ctx: Option<CommandContext>,
/// }
///
/// #[async_trait]
/// impl Command for Echo {
///     fn prepare(&mut self, ctx: CommandContext) {
///         self.ctx = Some(ctx);
///     }
///
///     async fn execute(&mut self, args: Arguments) {
///         if let (Some(ctx), Some(text)) = (&self.ctx, args.get::<String>("text")) {
///             let _ = ctx.reply(&text).await;
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Command: Send {
    /// Receives the invocation context before any other call.
    fn prepare(&mut self, _ctx: CommandContext) {}

    /// Runs the command with its bound arguments.
    async fn execute(&mut self, args: Arguments);

    /// Called instead of [`execute`](Command::execute) when binding fails.
    ///
    /// The default implementation only logs.
    async fn handle_error(&mut self, error: ArgumentError) {
        warn!(
            parameter = error.parameter.as_deref().unwrap_or("-"),
            raw = error.raw.as_deref().unwrap_or("-"),
            "{}",
            error.kind
        );
    }
}
