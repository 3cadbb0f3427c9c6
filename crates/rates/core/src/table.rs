//! Per-level experience multipliers.
//!
//! The table is an insertion-ordered list built once from configuration.
//! Lookups are a linear scan resolving to the first record for a level, so a
//! rate file that lists a level twice keeps both entries and the earlier one
//! wins.

use tracing::{debug, info};

/// Multiplier applied when a level has no record or a rate is not given.
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// Un-validated record as it appears in the rate file.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RawRateRecord {
    /// `lv`: `None` when absent or not an integer.
    pub lv: Option<i64>,
    /// `default_exp_rate`
    pub default_exp_rate: Option<f64>,
    /// `premium_exp_rate`
    pub premium_exp_rate: Option<f64>,
}

impl RawRateRecord {
    pub const fn new(lv: i64) -> Self {
        Self {
            lv: Some(lv),
            default_exp_rate: None,
            premium_exp_rate: None,
        }
    }

    pub fn with_default_rate(mut self, rate: f64) -> Self {
        self.default_exp_rate = Some(rate);
        self
    }

    pub fn with_premium_rate(mut self, rate: f64) -> Self {
        self.premium_exp_rate = Some(rate);
        self
    }
}

/// Validated multipliers for one player level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateRecord {
    pub level: i32,
    pub default_multiplier: f64,
    pub premium_multiplier: f64,
}

impl RateRecord {
    pub const fn new(level: i32, default_multiplier: f64, premium_multiplier: f64) -> Self {
        Self {
            level,
            default_multiplier,
            premium_multiplier,
        }
    }

    /// Validates a raw record against the level cap.
    ///
    /// Returns `None` for a missing level or one outside `1..=max_level`.
    /// Rates that are absent, zero, negative or not finite fall back to their
    /// defaults: `1.0` for the default rate and the default rate for premium.
    pub fn from_raw(raw: &RawRateRecord, max_level: i32) -> Option<Self> {
        let lv = raw.lv?;
        if lv <= 0 || lv > i64::from(max_level) {
            return None;
        }

        let default_multiplier = raw
            .default_exp_rate
            .filter(|rate| is_valid_rate(*rate))
            .unwrap_or(DEFAULT_MULTIPLIER);
        let premium_multiplier = raw
            .premium_exp_rate
            .filter(|rate| is_valid_rate(*rate))
            .unwrap_or(default_multiplier);

        // lv is within 1..=max_level so it fits in i32
        Some(Self::new(lv as i32, default_multiplier, premium_multiplier))
    }

    /// Multiplier for the given account tier.
    pub const fn multiplier(&self, premium: bool) -> f64 {
        if premium {
            self.premium_multiplier
        } else {
            self.default_multiplier
        }
    }
}

fn is_valid_rate(rate: f64) -> bool {
    rate.is_finite() && rate > 0.0
}

/// Ordered collection of [`RateRecord`]s answering "which multiplier applies".
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateTable {
    records: Vec<RateRecord>,
}

impl RateTable {
    /// Table with no records; every lookup yields [`DEFAULT_MULTIPLIER`].
    pub const fn empty() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Builds a table from already validated records, keeping their order.
    pub fn from_records(records: Vec<RateRecord>) -> Self {
        Self { records }
    }

    /// Builds the table from raw configuration records.
    ///
    /// Invalid records are skipped rather than reported: a missing or
    /// non-integer level, or one outside `1..=max_level`, simply does not make
    /// it into the table. Duplicate levels are kept in source order.
    pub fn load_from_config<I>(records: I, max_level: i32) -> Self
    where
        I: IntoIterator<Item = RawRateRecord>,
    {
        let mut table = Self::empty();

        for raw in records {
            let Some(lv) = raw.lv else {
                debug!(target: "rates::table", "skipping record without integer lv");
                continue;
            };

            let Some(record) = RateRecord::from_raw(&raw, max_level) else {
                info!(
                    target: "rates::table",
                    lv,
                    max_level,
                    "skipping record with lv out of range"
                );
                continue;
            };

            info!(
                target: "rates::table",
                "created fld lv: {}, default_exp_rate: {}, premium_exp_rate: {}",
                record.level,
                record.default_multiplier,
                record.premium_multiplier
            );
            table.records.push(record);
        }

        table
    }

    /// Multiplier for `level`, or `1.0` when no record matches.
    ///
    /// The first record with a matching level wins.
    pub fn lookup(&self, level: i32, premium: bool) -> f64 {
        self.find(level)
            .map(|record| record.multiplier(premium))
            .unwrap_or(DEFAULT_MULTIPLIER)
    }

    /// First record for `level`, if any.
    pub fn find(&self, level: i32) -> Option<&RateRecord> {
        self.records.iter().find(|record| record.level == level)
    }

    pub fn records(&self) -> impl Iterator<Item = &RateRecord> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
