//! Errors surfaced to the host integration layer.
//!
//! Award events and bootstrap never fail; these only cover reading the
//! primary configuration and installing the log sink.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AddonError>;

#[derive(Debug, Error)]
pub enum AddonError {
    #[error(transparent)]
    Config(#[from] anyhow::Error),

    #[error("failed to prepare log directory: {0}")]
    LogDirectory(#[from] std::io::Error),

    #[error("a global tracing subscriber is already installed")]
    LoggingInit(#[from] tracing_subscriber::util::TryInitError),
}
