//! Builds the rate configuration and table from the addon configuration.
//!
//! Bootstrap never fails. Anything that prevents the mechanism from working
//! (a missing or corrupted rate file) force-disables it instead, so the worst
//! case for the host is every award passing through untouched.

use rate_content::{AddonConfig, RateFileError, RateFileLoader};
use rate_core::{RateConfig, RateTable};
use tracing::{error, info, warn};

/// Resolves the configuration and loads the rate table.
///
/// The result is meant to be published as one snapshot; nothing here touches
/// state visible to award events.
pub fn build(config: &AddonConfig) -> (RateConfig, RateTable) {
    info!(target: "rates::bootstrap", "configure...");

    if !config.activated {
        info!(target: "rates::bootstrap", "addon is disabled");
        return (RateConfig::new(), RateTable::empty());
    }

    let rate_config = resolve_rate_config(config);

    info!(
        target: "rates::bootstrap",
        "set base rates default / premium: {} / {}",
        rate_config.base_default_rate,
        rate_config.base_premium_rate
    );
    info!(target: "rates::bootstrap", "set max lv: {}", rate_config.max_level);
    info!(
        target: "rates::bootstrap",
        "try to loading level rates {}...",
        config.config_path.display()
    );

    match RateFileLoader::load(&config.config_path, rate_config.max_level) {
        Ok(table) => {
            info!(
                target: "rates::bootstrap",
                records = table.len(),
                "level rates loaded"
            );
            (rate_config, table)
        }
        Err(RateFileError::NotFound(path)) => {
            info!(
                target: "rates::bootstrap",
                path = %path.display(),
                "configuration file not found, addon force disabled"
            );
            (rate_config.disabled(), RateTable::empty())
        }
        Err(e) => {
            error!(
                target: "rates::bootstrap",
                error = %e,
                "config file - corrupted, addon force disabled"
            );
            (rate_config.disabled(), RateTable::empty())
        }
    }
}

/// Applies configured overrides on top of the compiled-in defaults.
///
/// Baseline rates are divisors, so a value that is not a positive finite
/// number is replaced by the default.
pub fn resolve_rate_config(config: &AddonConfig) -> RateConfig {
    let max_level = config.max_lv.unwrap_or(RateConfig::DEFAULT_MAX_LEVEL);
    let base_default_rate = base_rate_or_default("base_default_exp_rate", config.base_default_exp_rate);
    let base_premium_rate = base_rate_or_default("base_premium_exp_rate", config.base_premium_exp_rate);

    RateConfig {
        activated: config.activated,
        max_level,
        base_default_rate,
        base_premium_rate,
    }
}

fn base_rate_or_default(field: &'static str, value: Option<f64>) -> f64 {
    match value {
        None => RateConfig::DEFAULT_BASE_RATE,
        Some(rate) if rate.is_finite() && rate > 0.0 => rate,
        Some(rate) => {
            warn!(
                target: "rates::bootstrap",
                field,
                rate,
                default = RateConfig::DEFAULT_BASE_RATE,
                "base rate must be positive, using default"
            );
            RateConfig::DEFAULT_BASE_RATE
        }
    }
}
