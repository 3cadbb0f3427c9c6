//! Addon configuration loader.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Primary addon configuration as handed over by the host.
///
/// Every field is optional in the source; missing ones take the defaults
/// below. The baseline fields stay `None` when absent so bootstrap can tell
/// "not configured" from an explicit value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddonConfig {
    pub activated: bool,
    pub flush_logs: bool,
    /// Path to the level rate file.
    pub config_path: PathBuf,
    /// Directory receiving the addon log file.
    pub log_dir: PathBuf,
    pub max_lv: Option<i32>,
    pub base_default_exp_rate: Option<f64>,
    pub base_premium_exp_rate: Option<f64>,
}

impl AddonConfig {
    pub const DEFAULT_CONFIG_PATH: &'static str = "./YorozuyaGS/dynamic_rate.json";
    pub const DEFAULT_LOG_DIR: &'static str = "YorozuyaGS/Logs";
    pub const LOG_FILE_NAME: &'static str = "DynamicRate.txt";

    /// Active configuration reading rates from `config_path`.
    pub fn activated(config_path: impl Into<PathBuf>) -> Self {
        Self {
            activated: true,
            config_path: config_path.into(),
            ..Self::default()
        }
    }

    pub fn with_max_level(mut self, max_lv: i32) -> Self {
        self.max_lv = Some(max_lv);
        self
    }

    pub fn with_base_rates(mut self, default_rate: f64, premium_rate: f64) -> Self {
        self.base_default_exp_rate = Some(default_rate);
        self.base_premium_exp_rate = Some(premium_rate);
        self
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = log_dir.into();
        self
    }

    /// Full path of the addon log file.
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(Self::LOG_FILE_NAME)
    }
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            activated: false,
            flush_logs: true,
            config_path: PathBuf::from(Self::DEFAULT_CONFIG_PATH),
            log_dir: PathBuf::from(Self::DEFAULT_LOG_DIR),
            max_lv: None,
            base_default_exp_rate: None,
            base_premium_exp_rate: None,
        }
    }
}

/// Loader for the addon configuration.
pub struct AddonConfigLoader;

impl AddonConfigLoader {
    /// Load the addon configuration from a file.
    ///
    /// Files with a `.toml` extension are read as TOML, anything else as JSON.
    pub fn load(path: &Path) -> LoadResult<AddonConfig> {
        let content = read_file(path)?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> LoadResult<AddonConfig> {
        toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse addon config TOML: {}", e))
    }

    pub fn from_json_str(content: &str) -> LoadResult<AddonConfig> {
        serde_json::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse addon config JSON: {}", e))
    }

    /// Build the configuration from a node the host has already parsed.
    pub fn from_json_value(node: &serde_json::Value) -> LoadResult<AddonConfig> {
        AddonConfig::deserialize(node)
            .map_err(|e| anyhow::anyhow!("Failed to read addon config node: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AddonConfigLoader::from_json_str("{}").unwrap();

        assert_eq!(config, AddonConfig::default());
        assert!(!config.activated);
        assert!(config.flush_logs);
        assert_eq!(config.config_path, Path::new("./YorozuyaGS/dynamic_rate.json"));
        assert_eq!(config.log_file(), Path::new("YorozuyaGS/Logs/DynamicRate.txt"));
    }

    #[test]
    fn test_toml_config() {
        let config = AddonConfigLoader::from_toml_str(
            r#"
            activated = true
            flush_logs = false
            config_path = "rates.json"
            max_lv = 50
            base_premium_exp_rate = 2.0
            "#,
        )
        .unwrap();

        assert!(config.activated);
        assert!(!config.flush_logs);
        assert_eq!(config.config_path, Path::new("rates.json"));
        assert_eq!(config.max_lv, Some(50));
        assert_eq!(config.base_default_exp_rate, None);
        assert_eq!(config.base_premium_exp_rate, Some(2.0));
    }

    #[test]
    fn test_json_node() {
        let node = serde_json::json!({
            "activated": true,
            "config_path": "/srv/rates.json",
            "base_default_exp_rate": 1.5,
        });
        let config = AddonConfigLoader::from_json_value(&node).unwrap();

        assert!(config.activated);
        assert_eq!(config.base_default_exp_rate, Some(1.5));
        assert_eq!(config.max_lv, None);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(AddonConfigLoader::from_json_str(r#"{ "activated": "yes" }"#).is_err());
    }

    #[test]
    fn test_builders() {
        let config = AddonConfig::activated("rates.json")
            .with_max_level(40)
            .with_base_rates(2.0, 3.0)
            .with_log_dir("logs");

        assert!(config.activated);
        assert_eq!(config.max_lv, Some(40));
        assert_eq!(config.base_default_exp_rate, Some(2.0));
        assert_eq!(config.base_premium_exp_rate, Some(3.0));
        assert_eq!(config.log_file(), Path::new("logs/DynamicRate.txt"));
    }
}
