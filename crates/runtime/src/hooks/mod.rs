//! Interception capability for the host's "alter experience" call.
//!
//! The host redirects its experience-award function into a [`HookRegistry`].
//! The registry runs the registered interceptors in priority order, each one
//! receiving the call arguments and a [`Next`] continuation. The last
//! continuation in the chain invokes the host's original logic.
//!
//! # Forwarding
//!
//! - [`Next`] is consumed when run, so an interceptor can forward at most once
//! - interceptors are expected to forward exactly once; the registry traces a
//!   warning when a dispatch finishes without reaching the original logic

mod chain;
mod registry;

pub use chain::{Next, OriginalAlterExp};
pub use registry::HookRegistry;

use rate_core::{ExpAward, ExpSubject};

/// Interceptor for experience-award calls.
pub trait AlterExpInterceptor: Send + Sync {
    /// Returns a unique name for this interceptor (used for unregistering and logging).
    fn name(&self) -> &'static str;

    /// Returns the execution priority. Lower values run first, closer to the host.
    fn priority(&self) -> i32 {
        0
    }

    /// Handles one award and forwards it through `next`.
    fn alter_exp(&self, subject: &dyn ExpSubject, award: ExpAward, next: Next<'_>);
}
