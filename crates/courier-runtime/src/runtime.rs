//! The Courier event loop.
//!
//! [`CourierRuntime`] owns a [`CommandDispatcher`] and a bounded queue of
//! inbound messages. Each received message is dispatched on its own tokio
//! task, so a slow command never holds up the next message and a panicking
//! command only loses its own invocation.
//!
//! ```rust,ignore
//! use courier_runtime::CourierRuntime;
//!
//! let runtime = CourierRuntime::builder()
//!     .config_file("courier.toml")
//!     .build(client, registry)?;
//!
//! let events = runtime.sender();
//! tokio::spawn(async move {
//!     while let Some(message) = gateway.next().await {
//!         if events.send(message).await.is_err() {
//!             break;
//!         }
//!     }
//! });
//!
//! runtime.run_until_ctrl_c().await?;
//! ```

use std::path::Path;
use std::sync::Arc;

use courier_core::{BoxedClient, MessageEvent};
use courier_framework::{CommandDispatcher, CommandRegistry, DispatchOutcome};
use tokio::signal;
use tokio::sync::mpsc;
use tokio::task::{JoinError, JoinSet};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::config::{ConfigLoader, CourierConfig, validate_config};
use crate::error::{RuntimeError, RuntimeResult};
use crate::logging;

/// Handle for feeding messages into a running [`CourierRuntime`].
#[derive(Debug, Clone)]
pub struct EventSender {
    inner: mpsc::Sender<MessageEvent>,
}

impl EventSender {
    /// Queues a message, waiting while the queue is full.
    pub async fn send(&self, message: MessageEvent) -> RuntimeResult<()> {
        self.inner
            .send(message)
            .await
            .map_err(|_| RuntimeError::ChannelClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

/// Counters collected by [`CourierRuntime::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuntimeStats {
    pub received: u64,
    pub executed: u64,
    pub rejected: u64,
    pub ignored: u64,
    pub panicked: u64,
}

impl RuntimeStats {
    fn record(&mut self, joined: Result<DispatchOutcome, JoinError>) {
        match joined {
            Ok(DispatchOutcome::Executed { .. }) => self.executed += 1,
            Ok(DispatchOutcome::Rejected { .. }) => self.rejected += 1,
            Ok(DispatchOutcome::Ignored(_)) => self.ignored += 1,
            Err(e) => {
                error!(error = %e, "Command task failed");
                self.panicked += 1;
            }
        }
    }
}

/// The main Courier runtime.
pub struct CourierRuntime {
    config: CourierConfig,
    dispatcher: CommandDispatcher,
    sender: mpsc::Sender<MessageEvent>,
    receiver: mpsc::Receiver<MessageEvent>,
    shutdown: CancellationToken,
}

impl CourierRuntime {
    /// Creates a runtime builder that loads configuration through figment.
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Creates a runtime from an already loaded configuration.
    ///
    /// Validates the configuration and initializes logging from it.
    pub fn new(
        config: CourierConfig,
        client: BoxedClient,
        registry: CommandRegistry,
    ) -> RuntimeResult<Self> {
        validate_config(&config)?;
        logging::init_from_config(&config.logging);

        if config.cache.enabled != client.cache_enabled() {
            warn!(
                configured = config.cache.enabled,
                client = client.cache_enabled(),
                "Client cache state differs from configuration"
            );
        }

        info!(
            prefix = %config.commands.prefix,
            allow_mention = config.commands.allow_mention,
            commands = registry.len(),
            self_id = %client.self_id(),
            "Runtime initialized from configuration"
        );

        let dispatcher =
            CommandDispatcher::new(registry, client, config.commands.to_dispatcher_config());
        let (sender, receiver) = mpsc::channel(config.runtime.event_buffer);

        Ok(Self {
            config,
            dispatcher,
            sender,
            receiver,
            shutdown: CancellationToken::new(),
        })
    }

    pub fn config(&self) -> &CourierConfig {
        &self.config
    }

    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    /// Returns a handle for queueing inbound messages.
    pub fn sender(&self) -> EventSender {
        EventSender {
            inner: self.sender.clone(),
        }
    }

    /// Returns the token that stops [`CourierRuntime::run`] when cancelled.
    pub fn shutdown_token(&self) -> CancellationToken {
        self.shutdown.clone()
    }

    /// Runs the event loop.
    ///
    /// Returns once every [`EventSender`] is dropped and the queue is drained,
    /// or once the shutdown token is cancelled. In-flight commands are always
    /// awaited before returning; queued messages not yet received are dropped
    /// on shutdown.
    pub async fn run(self) -> RuntimeResult<RuntimeStats> {
        let Self {
            dispatcher,
            sender,
            mut receiver,
            shutdown,
            ..
        } = self;
        drop(sender);

        let mut tasks = JoinSet::new();
        let mut stats = RuntimeStats::default();

        info!("Courier runtime is now running");

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => {
                    info!("Shutdown requested");
                    break;
                }
                Some(joined) = tasks.join_next(), if !tasks.is_empty() => {
                    stats.record(joined);
                }
                event = receiver.recv() => match event {
                    Some(message) => {
                        stats.received += 1;
                        let dispatcher = dispatcher.clone();
                        tasks.spawn(async move { dispatcher.dispatch(Arc::new(message)).await });
                    }
                    None => {
                        debug!("Event channel closed");
                        break;
                    }
                },
            }
        }

        receiver.close();
        if !tasks.is_empty() {
            debug!(in_flight = tasks.len(), "Waiting for in-flight commands");
        }
        while let Some(joined) = tasks.join_next().await {
            stats.record(joined);
        }

        info!(
            received = stats.received,
            executed = stats.executed,
            rejected = stats.rejected,
            ignored = stats.ignored,
            panicked = stats.panicked,
            "Runtime stopped"
        );
        Ok(stats)
    }

    /// Runs the event loop until Ctrl+C is received.
    pub async fn run_until_ctrl_c(self) -> RuntimeResult<RuntimeStats> {
        let token = self.shutdown_token();
        let watcher = tokio::spawn(async move {
            tokio::select! {
                result = signal::ctrl_c() => match result {
                    Ok(()) => {
                        info!("Received Ctrl+C, shutting down");
                        token.cancel();
                    }
                    Err(e) => error!(error = %e, "Failed to listen for Ctrl+C"),
                },
                _ = token.cancelled() => {}
            }
        });

        let stats = self.run().await;
        watcher.abort();
        stats
    }
}

impl std::fmt::Debug for CourierRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourierRuntime")
            .field("config", &self.config)
            .field("dispatcher", &self.dispatcher)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// RuntimeBuilder
// =============================================================================

/// Builder for creating a [`CourierRuntime`] from layered configuration.
///
/// ```rust,ignore
/// let runtime = CourierRuntime::builder()
///     .config_file("config/production.toml")
///     .profile("production")
///     .build(client, registry)?;
/// ```
pub struct RuntimeBuilder {
    config_loader: ConfigLoader,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config_loader: ConfigLoader::new(),
        }
    }

    /// Sets a specific configuration file to load.
    pub fn config_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_loader = self.config_loader.file(path);
        self
    }

    /// Sets the configuration profile (e.g., "development", "production").
    pub fn profile(mut self, profile: impl AsRef<str>) -> Self {
        self.config_loader = self.config_loader.profile(profile);
        self
    }

    pub fn search_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_loader = self.config_loader.search_path(path);
        self
    }

    pub fn without_env(mut self) -> Self {
        self.config_loader = self.config_loader.without_env();
        self
    }

    /// Merges a programmatic base configuration.
    pub fn merge(mut self, config: CourierConfig) -> Self {
        self.config_loader = self.config_loader.merge(config);
        self
    }

    /// Loads the configuration and builds the runtime.
    pub fn build(
        self,
        client: BoxedClient,
        registry: CommandRegistry,
    ) -> RuntimeResult<CourierRuntime> {
        let config = self.config_loader.load()?;
        CourierRuntime::new(config, client, registry)
    }
}

impl Default for RuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}
