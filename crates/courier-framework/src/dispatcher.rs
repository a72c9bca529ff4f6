//! Command dispatcher for the Courier framework.
//!
//! The [`CommandDispatcher`] turns one inbound message into at most one
//! command invocation. Every message is handled in a single pass:
//!
//! 1. The mention gate decides whether a leading self-mention addresses the bot
//! 2. Messages without the prefix that do not address the bot are ignored
//! 3. The text is tokenized and the command is looked up, first by the prefixed
//!    first token, then (when addressed by mention) by the second token verbatim
//! 4. A fresh command instance is created and prepared
//! 5. The remaining tokens are bound; the command is executed on success or
//!    receives the [`ArgumentError`] through its `handle_error` on failure
//!
//! Nothing ever propagates out of [`CommandDispatcher::dispatch`]: non-matches
//! are silent and binding failures belong to the command.
//!
//! ```rust,ignore
//! use courier_framework::{CommandDispatcher, DispatcherConfig, DispatchOutcome};
//!
//! let dispatcher = CommandDispatcher::new(registry, client, DispatcherConfig::new("!"));
//!
//! match dispatcher.dispatch(message).await {
//!     DispatchOutcome::Executed { command } => println!("ran {command}"),
//!     DispatchOutcome::Rejected { command, error } => println!("{command}: {error}"),
//!     DispatchOutcome::Ignored(_) => {}
//! }
//! ```

use std::sync::Arc;

use courier_core::{BoxedClient, MessageEvent};
use tracing::{Instrument, debug, debug_span, info, warn};

use crate::command::{CommandContext, CommandDescriptor, bind, tokenize};
use crate::error::ArgumentError;
use crate::mention::is_invocation_mention;
use crate::registry::CommandRegistry;

/// Dispatcher settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// The textual prefix that marks an invocation (e.g. `!`).
    pub prefix: String,
    /// Whether a leading self-mention also counts as an invocation.
    pub allow_mention: bool,
}

impl DispatcherConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    pub fn allow_mention(mut self, enabled: bool) -> Self {
        self.allow_mention = enabled;
        self
    }
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            prefix: "!".to_string(),
            allow_mention: true,
        }
    }
}

/// Why a message was not treated as a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// No prefix and not addressed by a leading self-mention.
    NoPrefix,
    /// The named command is not registered.
    UnknownCommand,
}

/// The result of dispatching one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Not an invocation; no command was created.
    Ignored(IgnoreReason),
    /// Arguments bound and the command executed.
    Executed { command: String },
    /// Binding failed and the error went to the command's `handle_error`.
    Rejected {
        command: String,
        error: ArgumentError,
    },
}

impl DispatchOutcome {
    /// Returns `true` if a command was invoked, successfully or not.
    pub fn is_invocation(&self) -> bool {
        !matches!(self, Self::Ignored(_))
    }
}

/// Routes messages to registered commands.
///
/// Cloning is cheap; clones share the registry, client and configuration.
#[derive(Clone)]
pub struct CommandDispatcher {
    registry: Arc<CommandRegistry>,
    client: BoxedClient,
    config: Arc<DispatcherConfig>,
}

impl CommandDispatcher {
    /// Creates a dispatcher over a finished registry.
    pub fn new(registry: CommandRegistry, client: BoxedClient, config: DispatcherConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            client,
            config: Arc::new(config),
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// Dispatches one message.
    pub async fn dispatch(&self, message: Arc<MessageEvent>) -> DispatchOutcome {
        let span = debug_span!("dispatch", message_id = %message.id, channel_id = %message.channel_id);
        self.dispatch_inner(message).instrument(span).await
    }

    async fn dispatch_inner(&self, message: Arc<MessageEvent>) -> DispatchOutcome {
        let mentioned = is_invocation_mention(
            message.mention_ids(),
            self.client.self_id(),
            self.config.allow_mention,
        );

        if !message.content.starts_with(&self.config.prefix) && !mentioned {
            return DispatchOutcome::Ignored(IgnoreReason::NoPrefix);
        }

        let mut tokens = tokenize(&message.content);

        let Some(descriptor) = self.lookup(&tokens, mentioned) else {
            debug!(token = %tokens[0], "Unknown command, ignoring");
            return DispatchOutcome::Ignored(IgnoreReason::UnknownCommand);
        };

        tokens.remove(0);
        if mentioned && !tokens.is_empty() {
            tokens.remove(0);
        }

        let name = descriptor.name().to_string();
        let mut command = descriptor.instantiate();
        command.prepare(CommandContext::new(
            Arc::clone(&self.client),
            Arc::clone(&message),
        ));

        let bound = bind(
            descriptor.params(),
            &tokens,
            message.is_group(),
            self.client.store(),
        );

        match bound {
            Ok(args) => {
                info!(command = %name, args = args.len(), "Executing command");
                command.execute(args).await;
                DispatchOutcome::Executed { command: name }
            }
            Err(error) => {
                warn!(command = %name, %error, "Argument binding failed");
                command.handle_error(error.clone()).await;
                DispatchOutcome::Rejected {
                    command: name,
                    error,
                }
            }
        }
    }

    /// Resolves the invoked command from the first tokens.
    fn lookup(&self, tokens: &[String], mentioned: bool) -> Option<Arc<CommandDescriptor>> {
        let by_prefix = tokens
            .first()
            .and_then(|token| token.strip_prefix(self.config.prefix.as_str()))
            .and_then(|name| self.registry.get(name));

        let by_mention = || {
            if mentioned {
                tokens.get(1).and_then(|name| self.registry.get(name))
            } else {
                None
            }
        };

        by_prefix.or_else(by_mention).cloned()
    }
}

impl std::fmt::Debug for CommandDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandDispatcher")
            .field("command_count", &self.registry.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
