//! Versioned pairing of configuration and rate table.

use crate::config::RateConfig;
use crate::table::RateTable;

/// Everything an award event reads, published as one unit.
///
/// Readers hold a whole snapshot for the duration of an event, so they can
/// never observe a new configuration with an old table or the reverse.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateSnapshot {
    /// Monotonic publication counter; `0` is the initial disabled state.
    pub version: u64,
    pub config: RateConfig,
    pub table: RateTable,
}

impl RateSnapshot {
    pub fn new(version: u64, config: RateConfig, table: RateTable) -> Self {
        Self {
            version,
            config,
            table,
        }
    }

    /// Initial snapshot: mechanism off, compiled-in defaults, empty table.
    pub fn disabled() -> Self {
        Self::new(0, RateConfig::new(), RateTable::empty())
    }

    pub fn is_activated(&self) -> bool {
        self.config.activated
    }
}
