//! Hook registry for dispatching experience-award calls through interceptors.

use std::sync::Arc;

use rate_core::{ExpAward, ExpSubject};
use tracing::{debug, warn};

use super::{AlterExpInterceptor, Next};

/// Registry that owns the interceptor chain for the "alter experience" call.
///
/// Interceptors are kept sorted by priority (lower values first). Registering
/// an interceptor under a name that is already present replaces the old one.
///
/// # Design Pattern
///
/// HookRegistry implements the Chain of Responsibility pattern: each
/// interceptor sees the call and hands it on through its [`Next`]
/// continuation until the original logic runs.
#[derive(Default)]
pub struct HookRegistry {
    interceptors: Vec<Arc<dyn AlterExpInterceptor>>,
}

impl HookRegistry {
    /// Creates an empty registry; dispatch calls the original logic directly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an interceptor, replacing any interceptor with the same name.
    pub fn register(&mut self, interceptor: Arc<dyn AlterExpInterceptor>) {
        let name = interceptor.name();
        if self.unregister(name) {
            debug!(target: "runtime::hooks", hook = name, "replacing interceptor");
        }

        self.interceptors.push(interceptor);
        self.interceptors.sort_by_key(|h| h.priority());

        debug!(
            target: "runtime::hooks",
            hook = name,
            total = self.interceptors.len(),
            "interceptor registered"
        );
    }

    /// Removes the interceptor with the given name.
    ///
    /// Returns true if an interceptor was removed.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.interceptors.len();
        self.interceptors.retain(|h| h.name() != name);
        before != self.interceptors.len()
    }

    /// Removes every interceptor.
    pub fn clear(&mut self) {
        self.interceptors.clear();
    }

    /// Runs one "alter experience" call through the chain.
    ///
    /// `original` is the host's own award logic. Returns true if the call
    /// reached it.
    pub fn dispatch<F>(&self, subject: &dyn ExpSubject, award: ExpAward, mut original: F) -> bool
    where
        F: FnMut(&dyn ExpSubject, ExpAward),
    {
        let mut forwarded = false;
        let mut call_original = |subject: &dyn ExpSubject, award: ExpAward| {
            forwarded = true;
            original(subject, award);
        };

        Next::new(&self.interceptors, &mut call_original).run(subject, award);

        if !forwarded {
            warn!(
                target: "runtime::hooks",
                amount = award.amount,
                "alter exp call was not forwarded to the original logic"
            );
        }

        forwarded
    }

    /// Returns true if an interceptor with the given name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.interceptors.iter().any(|h| h.name() == name)
    }

    /// Returns the number of registered interceptors.
    pub fn len(&self) -> usize {
        self.interceptors.len()
    }

    /// Returns true if no interceptors are registered.
    pub fn is_empty(&self) -> bool {
        self.interceptors.is_empty()
    }

    /// Returns an iterator over interceptor names and priorities in execution order.
    pub fn hooks(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.interceptors.iter().map(|h| (h.name(), h.priority()))
    }
}
