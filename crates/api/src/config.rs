//! Application Configuration

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Server address and artifact locations.
///
/// Layered: built-in defaults, then an optional `retail-pipeline.toml`
/// next to the binary, then `RETAIL_*` environment overrides.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Delimited sales table read once per dashboard request
    pub dataset_path: String,
    /// Trained regression artifact loaded once at startup
    pub model_path: String,
    /// Listen address
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: "data/grocery_sales.csv".to_string(),
            model_path: "data/sales_prediction_model.json".to_string(),
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

impl AppConfig {
    /// Load layered configuration
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = AppConfig::default();
        Config::builder()
            .set_default("dataset_path", defaults.dataset_path)?
            .set_default("model_path", defaults.model_path)?
            .set_default("bind_addr", defaults.bind_addr)?
            .add_source(File::with_name("retail-pipeline").required(false))
            .add_source(Environment::with_prefix("RETAIL"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize() {
        let config = AppConfig::load().unwrap();
        assert!(!config.bind_addr.is_empty());
        assert!(config.dataset_path.ends_with(".csv"));
    }
}
