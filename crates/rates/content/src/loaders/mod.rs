//! Content loaders for reading addon data from files.

pub mod config;
pub mod rates;

pub use config::{AddonConfig, AddonConfigLoader};
pub use rates::{RateFileError, RateFileLoader, raw_record};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
