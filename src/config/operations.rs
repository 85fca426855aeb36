//! Config loading and validation.

use super::model::Config;
use crate::error::{OneshotError, Result};
use crate::text::normalize;
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(OneshotError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            OneshotError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` when given, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the default config. The `default_answer`
    /// value is normalized before validation.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                OneshotError::ConfigError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.default_answer = normalize(&config.default_answer);
        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `default_answer` must not be blank
    /// - `banner_width` must be positive
    pub fn validate(&self) -> Result<()> {
        if normalize(&self.default_answer).is_empty() {
            return Err(OneshotError::ConfigError(
                "config validation failed: default_answer must not be empty".to_string(),
            ));
        }

        if self.banner_width == 0 {
            return Err(OneshotError::ConfigError(
                "config validation failed: banner_width must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
