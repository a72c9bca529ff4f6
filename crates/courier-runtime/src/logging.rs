//! Logging setup for Courier.
//!
//! Installs a `tracing-subscriber` fmt layer described by a [`LoggingConfig`].
//! `RUST_LOG` replaces the configured level; the per-module `filters` are
//! added on top either way.

use std::ffi::OsStr;
use std::path::Path;

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{LogFormat, LogOutput, LoggingConfig};

const DEFAULT_LOG_FILE: &str = "courier.log";

/// Initializes logging from a [`LoggingConfig`].
///
/// Does nothing if a global subscriber is already installed.
pub fn init_from_config(config: &LoggingConfig) {
    let _ = try_init_from_config(config);
}

/// Installs the global subscriber, failing if one is already set.
pub fn try_init_from_config(config: &LoggingConfig) -> Result<(), TryInitError> {
    let filter = build_filter(config, EnvFilter::try_from_default_env().ok());

    match (config.output, &config.file_path) {
        (LogOutput::Stderr, _) => install(config.format, filter, std::io::stderr),
        (LogOutput::File, Some(path)) => install(config.format, filter, file_writer(path)),
        // File output without a path is rejected by validation.
        (LogOutput::Stdout | LogOutput::File, _) => {
            install(config.format, filter, std::io::stdout)
        }
    }
}

fn install<W>(format: LogFormat, filter: EnvFilter, writer: W) -> Result<(), TryInitError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_writer(writer))
            .try_init(),
        LogFormat::Pretty => registry
            .with(fmt::layer().pretty().with_writer(writer))
            .try_init(),
        #[cfg(feature = "json-log")]
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(writer))
            .try_init(),
        #[cfg(not(feature = "json-log"))]
        LogFormat::Json | LogFormat::Full => {
            registry.with(fmt::layer().with_writer(writer)).try_init()
        }
        #[cfg(feature = "json-log")]
        LogFormat::Full => registry.with(fmt::layer().with_writer(writer)).try_init(),
    }
}

fn build_filter(config: &LoggingConfig, from_env: Option<EnvFilter>) -> EnvFilter {
    let mut filter = from_env.unwrap_or_else(|| EnvFilter::new(config.level.as_str()));

    for directive in module_directives(config) {
        if let Ok(d) = directive.parse() {
            filter = filter.add_directive(d);
        }
    }

    filter
}

/// `module=level` directives, sorted so the filter does not depend on map order.
fn module_directives(config: &LoggingConfig) -> Vec<String> {
    let mut directives: Vec<_> = config
        .filters
        .iter()
        .map(|(module, level)| format!("{module}={level}"))
        .collect();
    directives.sort();
    directives
}

fn log_file_location(path: &Path) -> (&Path, &OsStr) {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .unwrap_or_else(|| OsStr::new(DEFAULT_LOG_FILE));
    (dir, name)
}

fn file_writer(path: &Path) -> RollingFileAppender {
    let (dir, name) = log_file_location(path);
    tracing_appender::rolling::never(dir, name)
}
