//! Interception policy for experience-award events.
//!
//! Every event is evaluated from scratch against a published
//! [`RateSnapshot`]; nothing carries over between events.
//!
//! ```text
//! activated?  ──no──▶ Disabled      (raw amount)
//!     │yes
//! level >= max_level ──yes──▶ Zeroed (0)
//!     │no
//! reward / recovery item / addition item / amount <= 0 ──yes──▶ PassThrough (raw amount)
//!     │no
//! Scaled: (amount / base_rate(premium)) * table.lookup(level, premium)
//! ```

use crate::snapshot::RateSnapshot;
use crate::subject::ExpSubject;

/// Arguments of one "alter experience" call as the host issues it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpAward {
    /// Proposed amount of experience.
    pub amount: f64,
    /// Award comes from a quest or event reward.
    pub reward: bool,
    /// An experience recovery item was consumed.
    pub used_recovery_item: bool,
    /// An experience addition item is active.
    pub used_addition_item: bool,
}

impl ExpAward {
    /// Plain award with no flags set.
    pub const fn new(amount: f64) -> Self {
        Self {
            amount,
            reward: false,
            used_recovery_item: false,
            used_addition_item: false,
        }
    }

    pub fn with_reward(mut self, reward: bool) -> Self {
        self.reward = reward;
        self
    }

    pub fn with_recovery_item(mut self, used: bool) -> Self {
        self.used_recovery_item = used;
        self
    }

    pub fn with_addition_item(mut self, used: bool) -> Self {
        self.used_addition_item = used;
        self
    }

    /// Same call with a replaced amount; the flags are forwarded untouched.
    pub fn with_amount(self, amount: f64) -> Self {
        Self { amount, ..self }
    }

    /// Rewards, item-assisted gains and non-positive amounts are never rescaled.
    pub fn is_scalable(&self) -> bool {
        !(self.reward || self.used_recovery_item || self.used_addition_item || self.amount <= 0.0)
    }
}

/// Outcome of evaluating one award against a snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AwardDecision {
    /// Override mechanism is switched off.
    Disabled { amount: f64 },
    /// Award is ineligible for scaling and forwarded as is.
    PassThrough { amount: f64 },
    /// Player is at or above the level cap.
    Zeroed,
    /// Award normalized by the tier baseline and multiplied by the level rate.
    Scaled {
        base: f64,
        multiplier: f64,
        amount: f64,
    },
}

/// Label of an [`AwardDecision`] without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum DecisionKind {
    Disabled,
    PassThrough,
    Zeroed,
    Scaled,
}

impl AwardDecision {
    /// Amount handed to the original award logic.
    pub const fn amount(&self) -> f64 {
        match self {
            Self::Disabled { amount } | Self::PassThrough { amount } => *amount,
            Self::Zeroed => 0.0,
            Self::Scaled { amount, .. } => *amount,
        }
    }

    pub const fn kind(&self) -> DecisionKind {
        match self {
            Self::Disabled { .. } => DecisionKind::Disabled,
            Self::PassThrough { .. } => DecisionKind::PassThrough,
            Self::Zeroed => DecisionKind::Zeroed,
            Self::Scaled { .. } => DecisionKind::Scaled,
        }
    }

    /// True when the forwarded amount differs from the proposed one by policy.
    pub const fn is_override(&self) -> bool {
        matches!(self, Self::Zeroed | Self::Scaled { .. })
    }
}

/// Decides what amount the original award logic should receive.
///
/// Total over its inputs: no I/O, no locking, no failure path.
pub fn resolve(snapshot: &RateSnapshot, subject: &dyn ExpSubject, award: &ExpAward) -> AwardDecision {
    let config = &snapshot.config;
    if !config.activated {
        return AwardDecision::Disabled {
            amount: award.amount,
        };
    }

    let level = subject.level();
    let premium = subject.is_premium();

    if level >= config.max_level {
        return AwardDecision::Zeroed;
    }

    if !award.is_scalable() {
        return AwardDecision::PassThrough {
            amount: award.amount,
        };
    }

    // Normalize to the base unit first, then apply the level multiplier.
    let base = award.amount / config.base_rate(premium);
    let multiplier = snapshot.table.lookup(level, premium);

    AwardDecision::Scaled {
        base,
        multiplier,
        amount: base * multiplier,
    }
}

/// Resolves the award and forwards it to the original logic exactly once.
///
/// `forward` receives the award with either the proposed or the replaced
/// amount; the flags are never altered.
pub fn on_experience_award<F>(
    snapshot: &RateSnapshot,
    subject: &dyn ExpSubject,
    award: ExpAward,
    forward: F,
) -> AwardDecision
where
    F: FnOnce(ExpAward),
{
    let decision = resolve(snapshot, subject, &award);
    forward(award.with_amount(decision.amount()));
    decision
}
