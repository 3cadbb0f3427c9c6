/// Process-wide rate configuration read by every award event.
///
/// Built once per (re)configuration pass and never mutated afterwards; a new
/// value is published as part of a fresh [`crate::RateSnapshot`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateConfig {
    /// Gate for the whole override mechanism.
    pub activated: bool,
    /// Awards for players at or above this level are zeroed.
    pub max_level: i32,
    /// Divisor normalizing a raw award for non-premium players.
    pub base_default_rate: f64,
    /// Divisor normalizing a raw award for premium players.
    pub base_premium_rate: f64,
}

impl RateConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_LEVEL: i32 = 65;
    pub const DEFAULT_BASE_RATE: f64 = 1.0;

    /// Disabled configuration carrying the compiled-in defaults.
    pub const fn new() -> Self {
        Self {
            activated: false,
            max_level: Self::DEFAULT_MAX_LEVEL,
            base_default_rate: Self::DEFAULT_BASE_RATE,
            base_premium_rate: Self::DEFAULT_BASE_RATE,
        }
    }

    /// Active configuration with the given cap and baseline divisors.
    pub const fn activated(max_level: i32, base_default_rate: f64, base_premium_rate: f64) -> Self {
        Self {
            activated: true,
            max_level,
            base_default_rate,
            base_premium_rate,
        }
    }

    /// Baseline divisor for the given account tier.
    pub const fn base_rate(&self, premium: bool) -> f64 {
        if premium {
            self.base_premium_rate
        } else {
            self.base_default_rate
        }
    }

    /// Returns a copy with the override mechanism switched off.
    pub fn disabled(&self) -> Self {
        Self {
            activated: false,
            ..self.clone()
        }
    }
}

impl Default for RateConfig {
    fn default() -> Self {
        Self::new()
    }
}
