//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check;
mod simulate;
mod tail_logs;

pub use check::Check;
pub use simulate::Simulate;
pub use tail_logs::TailLogs;

use std::path::Path;

use anyhow::{Context, Result};
use rate_content::{AddonConfig, AddonConfigLoader};
use rate_core::RateSnapshot;
use rate_runtime::DynamicRate;

/// Load an addon config file and build its snapshot the way the host would.
pub(crate) fn load_snapshot(config_path: &Path) -> Result<(AddonConfig, RateSnapshot)> {
    let config = AddonConfigLoader::load(config_path)
        .with_context(|| format!("Failed to load addon config: {}", config_path.display()))?;

    let addon = DynamicRate::new();
    let snapshot = addon.configure(&config);

    Ok((config, (*snapshot).clone()))
}
