//! The dynamic experience rate addon.
//!
//! [`DynamicRate`] owns the published [`RateSnapshot`] and the last addon
//! configuration. The host drives its lifecycle:
//!
//! ```text
//! configure(config) ─▶ load(registry) ─▶ ...award events... ─▶ unload(registry)
//!        ▲                                      │
//!        └──────────── reconfigure() ◀──────────┘  (any time; events keep their snapshot)
//! ```

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use rate_content::{AddonConfig, AddonConfigLoader};
use rate_core::{ExpAward, ExpSubject, RateSnapshot, on_experience_award};
use tracing::{info, trace};

use crate::bootstrap;
use crate::error::Result;
use crate::hooks::{AlterExpInterceptor, HookRegistry, Next};
use crate::snapshot::SnapshotStore;

/// Addon that rescales experience awards per player level.
pub struct DynamicRate {
    store: Arc<SnapshotStore>,
    last_config: Mutex<Option<AddonConfig>>,
}

impl DynamicRate {
    pub const NAME: &'static str = "addon.dynamic_rate";

    /// Creates the addon in its disabled state.
    pub fn new() -> Self {
        Self {
            store: Arc::new(SnapshotStore::new()),
            last_config: Mutex::new(None),
        }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }

    /// Builds a snapshot from `config` and publishes it.
    ///
    /// Award events in flight keep the snapshot they started with. Concurrent
    /// calls are serialized so [`config`](Self::config) always matches the
    /// published snapshot.
    pub fn configure(&self, config: &AddonConfig) -> Arc<RateSnapshot> {
        let mut last_config = self
            .last_config
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let (rate_config, table) = bootstrap::build(config);
        let snapshot = self.store.publish(rate_config, table);
        *last_config = Some(config.clone());
        drop(last_config);

        info!(
            target: "rates::addon",
            version = snapshot.version,
            activated = snapshot.is_activated(),
            records = snapshot.table.len(),
            "configuration published"
        );

        snapshot
    }

    /// Configures from a node the host has already parsed.
    pub fn configure_from_node(&self, node: &serde_json::Value) -> Result<Arc<RateSnapshot>> {
        let config = AddonConfigLoader::from_json_value(node)?;
        Ok(self.configure(&config))
    }

    /// Configures from an addon configuration file (JSON or TOML).
    pub fn configure_from_file(&self, path: &Path) -> Result<Arc<RateSnapshot>> {
        let config = AddonConfigLoader::load(path)?;
        Ok(self.configure(&config))
    }

    /// Re-runs bootstrap with the last configuration, re-reading the rate file.
    ///
    /// Returns `None` if the addon was never configured.
    pub fn reconfigure(&self) -> Option<Arc<RateSnapshot>> {
        let config = self
            .last_config
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()?;

        Some(self.configure(&config))
    }

    /// Registers the award interceptor with the host.
    pub fn load(&self, registry: &mut HookRegistry) {
        registry.register(Arc::new(self.hook()));
        info!(target: "rates::addon", addon = Self::NAME, "hook enabled");
    }

    /// Removes the award interceptor from the host.
    pub fn unload(&self, registry: &mut HookRegistry) -> bool {
        let removed = registry.unregister(Self::NAME);
        info!(target: "rates::addon", addon = Self::NAME, removed, "hook cleaned up");
        removed
    }

    /// Interceptor reading this addon's published snapshots.
    pub fn hook(&self) -> DynamicRateHook {
        DynamicRateHook {
            store: Arc::clone(&self.store),
        }
    }

    /// Snapshot currently visible to award events.
    pub fn snapshot(&self) -> Arc<RateSnapshot> {
        self.store.current()
    }

    pub fn is_activated(&self) -> bool {
        self.snapshot().is_activated()
    }

    /// Last configuration passed to [`configure`](Self::configure).
    pub fn config(&self) -> Option<AddonConfig> {
        self.last_config
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for DynamicRate {
    fn default() -> Self {
        Self::new()
    }
}

/// Interceptor applying the rate policy to every "alter experience" call.
#[derive(Clone)]
pub struct DynamicRateHook {
    store: Arc<SnapshotStore>,
}

impl AlterExpInterceptor for DynamicRateHook {
    fn name(&self) -> &'static str {
        DynamicRate::NAME
    }

    fn alter_exp(&self, subject: &dyn ExpSubject, award: ExpAward, next: Next<'_>) {
        let snapshot = self.store.current();
        let decision =
            on_experience_award(&snapshot, subject, award, |award| next.run(subject, award));

        trace!(
            target: "rates::hook",
            version = snapshot.version,
            decision = %decision.kind(),
            proposed = award.amount,
            forwarded = decision.amount(),
            "alter exp"
        );
    }
}
