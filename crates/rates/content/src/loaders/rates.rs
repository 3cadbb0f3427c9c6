//! Level rate file loader.
//!
//! The rate file is a JSON array of records:
//!
//! ```json
//! [
//!     { "lv": 1, "default_exp_rate": 3.0, "premium_exp_rate": 4.0 },
//!     { "lv": 2, "default_exp_rate": 2.5 }
//! ]
//! ```
//!
//! Elements are read leniently: a record with a missing or non-integer `lv`
//! is kept as a raw record without level (and later dropped by the table
//! builder), and a rate that is not a number is treated as absent.

use std::io;
use std::path::{Path, PathBuf};

use rate_core::{RateTable, RawRateRecord};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Errors that make the rate file unusable as a whole.
#[derive(Debug, Error)]
pub enum RateFileError {
    #[error("rate file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read rate file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("rate file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("rate file must contain a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },
}

impl RateFileError {
    /// True when the file simply does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Loader for the level rate file.
pub struct RateFileLoader;

impl RateFileLoader {
    /// Load the rate table from `path`, dropping records above `max_level`.
    pub fn load(path: &Path, max_level: i32) -> Result<RateTable, RateFileError> {
        let content = std::fs::read_to_string(path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                RateFileError::NotFound(path.to_path_buf())
            } else {
                RateFileError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            }
        })?;

        let table = Self::parse(&content, max_level)?;
        debug!(
            target: "rates::content",
            path = %path.display(),
            records = table.len(),
            "rate file parsed"
        );
        Ok(table)
    }

    /// Parse rate file contents into a table.
    pub fn parse(content: &str, max_level: i32) -> Result<RateTable, RateFileError> {
        let records = Self::parse_raw(content)?;
        Ok(RateTable::load_from_config(records, max_level))
    }

    /// Parse rate file contents into raw records, in file order.
    pub fn parse_raw(content: &str) -> Result<Vec<RawRateRecord>, RateFileError> {
        let document: Value = serde_json::from_str(content)?;

        match document {
            Value::Array(entries) => Ok(entries.iter().map(raw_record).collect()),
            other => Err(RateFileError::NotAnArray {
                found: json_type_name(&other),
            }),
        }
    }
}

/// Convert one JSON element into a raw record.
pub fn raw_record(entry: &Value) -> RawRateRecord {
    RawRateRecord {
        lv: entry.get("lv").and_then(Value::as_i64),
        default_exp_rate: entry.get("default_exp_rate").and_then(Value::as_f64),
        premium_exp_rate: entry.get("premium_exp_rate").and_then(Value::as_f64),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
