//! Continuation handed to interceptors.

use std::sync::Arc;

use rate_core::{ExpAward, ExpSubject};

use super::AlterExpInterceptor;

/// The host's original award logic.
pub type OriginalAlterExp<'a> = dyn FnMut(&dyn ExpSubject, ExpAward) + 'a;

/// Remainder of an interceptor chain.
///
/// Running it hands the call to the next interceptor, or to the original
/// logic once the chain is exhausted.
pub struct Next<'a> {
    chain: &'a [Arc<dyn AlterExpInterceptor>],
    original: &'a mut OriginalAlterExp<'a>,
}

impl<'a> Next<'a> {
    pub fn new(
        chain: &'a [Arc<dyn AlterExpInterceptor>],
        original: &'a mut OriginalAlterExp<'a>,
    ) -> Self {
        Self { chain, original }
    }

    /// Forwards the call.
    pub fn run(self, subject: &dyn ExpSubject, award: ExpAward) {
        match self.chain.split_first() {
            Some((head, rest)) => head.alter_exp(subject, award, Next::new(rest, self.original)),
            None => (self.original)(subject, award),
        }
    }
}
