//! Console Bot Example
//!
//! Reads chat lines from stdin, feeds them through the Courier runtime and
//! prints replies to stdout. Each line is one message from `alice`.
//!
//! # Usage
//!
//! ```bash
//! cargo run --package console-bot -- --group 42
//! ```
//!
//! Then try:
//!
//! ```text
//! !ping
//! !echo hello   world
//! !roll 3
//! !topic <#100000000000000001> release day
//! !emoji <a:partyparrot:300000000000000001>
//! !role <@&200000000000000001>
//! !kick <@400000000000000002> spamming
//! <@900000000000000001> ping
//! ```
//!
//! References are only decoded with `--group`; without it every message is
//! treated as a private message.

mod client;
mod commands;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use courier::framework::{ReferenceToken, is_reference, tokenize};
use courier::prelude::*;
use courier::runtime::ConfigLoader;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info};

use crate::client::{ALICE, ConsoleClient, GENERAL, seeded_cache};

#[derive(Parser, Debug)]
#[command(name = "console-bot", about = "Drive a Courier bot from the terminal")]
struct Cli {
    /// Configuration file (TOML); defaults are searched for when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Command prefix, overriding the configuration.
    #[arg(short, long)]
    prefix: Option<String>,

    /// The bot's own user id.
    #[arg(long, default_value_t = 900_000_000_000_000_001)]
    self_id: u64,

    /// Treat input as group messages in this guild.
    #[arg(long)]
    group: Option<u64>,
}

/// Collects the users mentioned in `content`, in order of appearance.
fn mentions(client: &ConsoleClient, content: &str) -> Vec<User> {
    tokenize(content)
        .iter()
        .filter(|token| is_reference(token))
        .filter_map(|token| ReferenceToken::parse(token).ok())
        .filter(|reference| matches!(reference.sigil(), "@" | "@!"))
        .map(|reference| client.user(reference.id()))
        .collect()
}

async fn read_stdin(events: EventSender, client: Arc<ConsoleClient>, guild: Option<Snowflake>) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut next_id = 1u64;

    while let Some(line) = lines.next_line().await? {
        let mut message = MessageEvent::new(
            Snowflake::new(next_id),
            GENERAL,
            client.user(ALICE),
            line.as_str(),
        )
        .with_mentions(mentions(&client, &line));
        if let Some(guild) = guild {
            message = message.in_guild(guild);
        }
        next_id += 1;

        events.send(message).await?;
    }

    debug!("stdin closed");
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.file(path);
    }
    let mut config = loader.load()?;
    if let Some(prefix) = cli.prefix {
        config.commands.prefix = prefix;
    }

    let self_id = Snowflake::new(cli.self_id);
    let guild = cli.group.map(Snowflake::new);
    let cache = config
        .cache
        .enabled
        .then(|| seeded_cache(guild.unwrap_or(Snowflake::new(1)), self_id));
    let client = Arc::new(ConsoleClient::new(self_id, cache));

    let runtime = CourierRuntime::new(config, client.clone(), commands::registry()?)?;

    let events = runtime.sender();
    let reader = tokio::spawn(read_stdin(events, client, guild));

    let stats = runtime.run_until_ctrl_c().await?;
    reader.abort();
    info!(?stats, "Console bot stopped");

    Ok(())
}
