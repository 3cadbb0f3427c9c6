//! File log sink for the addon.
//!
//! Diagnostics are emitted through `tracing` everywhere; this module only
//! installs a subscriber that writes them to `<log_dir>/DynamicRate.txt`.
//! Hosts that already install their own subscriber skip it.

use rate_content::AddonConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::Result;

/// Keeps the buffered log writer alive. Dropping it flushes pending lines.
#[must_use = "dropping the guard stops buffered logging"]
pub struct LogGuard {
    _worker: Option<WorkerGuard>,
}

/// Installs the global subscriber writing to the addon log file.
///
/// With `flush_logs` every line is written to the file as it is emitted;
/// otherwise lines go through the non-blocking writer and are flushed when
/// the returned guard is dropped.
pub fn init_file_logging(config: &AddonConfig) -> Result<LogGuard> {
    std::fs::create_dir_all(&config.log_dir)?;

    let file_appender = tracing_appender::rolling::never(&config.log_dir, AddonConfig::LOG_FILE_NAME);

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let worker = if config.flush_logs {
        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .try_init()?;

        None
    } else {
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_file)
            .with_ansi(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .try_init()?;

        Some(guard)
    };

    tracing::info!(
        target: "rates::addon",
        "Log file: {}",
        config.log_file().display()
    );

    Ok(LogGuard { _worker: worker })
}
