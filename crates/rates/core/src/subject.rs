//! Read-only view of the player receiving an experience award.

/// Player query surface consumed by the interception policy.
///
/// The host owns the player model; the policy only needs the two facts below
/// and never mutates the player.
pub trait ExpSubject: Send + Sync {
    /// Current character level.
    fn level(&self) -> i32;

    /// Whether the account receives premium rates.
    fn is_premium(&self) -> bool;
}

/// Plain value implementation of [`ExpSubject`] for tools and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubjectView {
    pub level: i32,
    pub premium: bool,
}

impl SubjectView {
    pub const fn new(level: i32, premium: bool) -> Self {
        Self { level, premium }
    }
}

impl ExpSubject for SubjectView {
    fn level(&self) -> i32 {
        self.level
    }

    fn is_premium(&self) -> bool {
        self.premium
    }
}
