//! Deterministic experience-rate logic shared by the addon runtime and tools.
//!
//! `rate-core` defines the canonical rules for overriding an experience award:
//! the per-level [`RateTable`], the process-wide [`RateConfig`], and the
//! interception [`policy`] that decides whether an award passes through, is
//! zeroed at the level cap, or is rescaled. Everything here is pure and total;
//! file access and publication live in the loader and runtime crates.
pub mod config;
pub mod policy;
pub mod snapshot;
pub mod subject;
pub mod table;

pub use config::RateConfig;
pub use policy::{AwardDecision, DecisionKind, ExpAward, on_experience_award, resolve};
pub use snapshot::RateSnapshot;
pub use subject::{ExpSubject, SubjectView};
pub use table::{RateRecord, RateTable, RawRateRecord};
