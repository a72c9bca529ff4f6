//! The demo's command set.

use courier::framework::RegistryResult;
use courier::prelude::*;
use tracing::error;

/// Sends a reply, logging delivery failures.
async fn reply(ctx: Option<&CommandContext>, content: &str) {
    let Some(ctx) = ctx else {
        return;
    };
    if let Err(e) = ctx.reply(content).await {
        error!(error = %e, "Failed to send reply");
    }
}

#[derive(Default)]
struct Ping {
    ctx: Option<CommandContext>,
}

#[async_trait]
impl Command for Ping {
    fn prepare(&mut self, ctx: CommandContext) {
        self.ctx = Some(ctx);
    }

    async fn execute(&mut self, _args: Arguments) {
        reply(self.ctx.as_ref(), "pong").await;
    }
}

#[derive(Default)]
struct Echo {
    ctx: Option<CommandContext>,
}

#[async_trait]
impl Command for Echo {
    fn prepare(&mut self, ctx: CommandContext) {
        self.ctx = Some(ctx);
    }

    async fn execute(&mut self, args: Arguments) {
        let text: String = args.get("text").unwrap_or_default();
        reply(self.ctx.as_ref(), &text).await;
    }
}

#[derive(Default)]
struct Kick {
    ctx: Option<CommandContext>,
}

#[async_trait]
impl Command for Kick {
    fn prepare(&mut self, ctx: CommandContext) {
        self.ctx = Some(ctx);
    }

    async fn execute(&mut self, args: Arguments) {
        let (Some(user), Some(reason)) = (args.get::<MinimalUser>("user"), args.get::<String>("reason"))
        else {
            return;
        };
        reply(self.ctx.as_ref(), &format!("kicked {} ({reason})", user.mention())).await;
    }

    async fn handle_error(&mut self, error: ArgumentError) {
        reply(self.ctx.as_ref(), &format!("usage: kick <@user> <reason...> ({error})")).await;
    }
}

#[derive(Default)]
struct ShowEmoji {
    ctx: Option<CommandContext>,
}

#[async_trait]
impl Command for ShowEmoji {
    fn prepare(&mut self, ctx: CommandContext) {
        self.ctx = Some(ctx);
    }

    async fn execute(&mut self, args: Arguments) {
        if let Some(emoji) = args.get::<Emoji>("emoji") {
            let kind = if emoji.animated { "animated" } else { "static" };
            reply(self.ctx.as_ref(), &format!(":{}: is a {kind} emoji ({})", emoji.name, emoji.id)).await;
        }
    }
}

#[derive(Default)]
struct ShowRole {
    ctx: Option<CommandContext>,
}

#[async_trait]
impl Command for ShowRole {
    fn prepare(&mut self, ctx: CommandContext) {
        self.ctx = Some(ctx);
    }

    async fn execute(&mut self, args: Arguments) {
        if let Some(role) = args.get::<Role>("role") {
            reply(self.ctx.as_ref(), &format!("@{} has id {}", role.name, role.id)).await;
        }
    }
}

#[derive(Default)]
struct Topic {
    ctx: Option<CommandContext>,
}

#[async_trait]
impl Command for Topic {
    fn prepare(&mut self, ctx: CommandContext) {
        self.ctx = Some(ctx);
    }

    async fn execute(&mut self, args: Arguments) {
        let (Some(channel), Some(text)) = (args.get::<Channel>("channel"), args.get::<String>("text"))
        else {
            return;
        };
        reply(self.ctx.as_ref(), &format!("#{} topic is now: {text}", channel.name)).await;
    }

    async fn handle_error(&mut self, error: ArgumentError) {
        reply(self.ctx.as_ref(), &format!("cannot set topic: {error}")).await;
    }
}

#[derive(Default)]
struct Roll {
    ctx: Option<CommandContext>,
}

#[async_trait]
impl Command for Roll {
    fn prepare(&mut self, ctx: CommandContext) {
        self.ctx = Some(ctx);
    }

    async fn execute(&mut self, args: Arguments) {
        // `sides` is optional and is never bound.
        let sides = args.get::<i64>("sides").unwrap_or(6);
        let count = args.get::<i64>("count").unwrap_or(1);
        reply(self.ctx.as_ref(), &format!("rolling {count}d{sides}")).await;
    }
}

/// Registers every demo command.
pub fn registry() -> RegistryResult<CommandRegistry> {
    CommandRegistry::from_descriptors([
        CommandDescriptor::builder("ping").build(Ping::default),
        CommandDescriptor::builder("echo")
            .param("text", ParamType::Text)
            .build(Echo::default),
        CommandDescriptor::builder("kick")
            .param("user", ParamType::User { resolved: false })
            .param("reason", ParamType::Text)
            .build(Kick::default),
        CommandDescriptor::builder("emoji")
            .param("emoji", ParamType::Emoji { resolved: true })
            .build(ShowEmoji::default),
        CommandDescriptor::builder("role")
            .param("role", ParamType::Role)
            .build(ShowRole::default),
        CommandDescriptor::builder("topic")
            .param("channel", ParamType::Channel { resolved: true })
            .param("text", ParamType::Text)
            .build(Topic::default),
        CommandDescriptor::builder("roll")
            .param("count", ParamType::Integer)
            .optional("sides", ParamType::Integer)
            .build(Roll::default),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry() {
        let registry = registry().unwrap();
        assert_eq!(registry.len(), 7);
        for name in ["ping", "echo", "kick", "emoji", "role", "topic", "roll"] {
            assert!(registry.contains(name), "missing {name}");
        }

        let roll = registry.get("roll").unwrap();
        assert!(!roll.params()[0].is_optional());
        assert!(roll.params()[1].is_optional());
    }
}
