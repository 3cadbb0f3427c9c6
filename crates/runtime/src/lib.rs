//! Host integration for the dynamic experience rate addon.
//!
//! This crate wires the pure rate logic from `rate-core` and the loaders from
//! `rate-content` into something a host process can embed. Consumers create a
//! [`DynamicRate`], configure it, and register it with their [`HookRegistry`]
//! so every experience award passes through the rate policy.
//!
//! Modules are organized by responsibility:
//! - [`addon`] hosts the addon lifecycle and its interceptor
//! - [`hooks`] provides the interception capability for the award call
//! - [`bootstrap`] turns an addon configuration into a rate snapshot
//! - [`snapshot`] publishes snapshots atomically to award events
//! - [`logging`] installs the addon's file log sink
pub mod addon;
pub mod bootstrap;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod snapshot;

pub use addon::{DynamicRate, DynamicRateHook};
pub use error::{AddonError, Result};
pub use hooks::{AlterExpInterceptor, HookRegistry, Next, OriginalAlterExp};
pub use logging::{LogGuard, init_file_logging};
pub use snapshot::SnapshotStore;

pub use rate_content::AddonConfig;
pub use rate_core::{AwardDecision, ExpAward, ExpSubject, RateConfig, RateSnapshot, RateTable};
