//! Declarative configuration and loaders for the dynamic rate addon.
//!
//! This crate reads the two files the addon is driven by:
//! - the addon configuration (JSON or TOML), see [`AddonConfig`]
//! - the level rate file (JSON array of records), see [`RateFileLoader`]
//!
//! Parsing stays here; validation and filtering of rate records is done by
//! `rate-core` so every source of records goes through the same rules.

pub mod loaders;

pub use loaders::{
    AddonConfig, AddonConfigLoader, LoadResult, RateFileError, RateFileLoader, raw_record,
};
