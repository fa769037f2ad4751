//! Controller configuration
//!
//! Read from `ck-form.toml` when present, otherwise defaults.

use std::path::Path;

use ck_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Configuration for the contact form controller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Destination path after a successful submit
    #[serde(default = "default_dashboard_path")]
    pub dashboard_path: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            dashboard_path: default_dashboard_path(),
        }
    }
}

fn default_dashboard_path() -> String {
    "/dashboard".to_string()
}

impl FormConfig {
    /// Load from `ck-form.toml` in the current directory, or defaults
    pub fn load() -> Result<Self> {
        if Path::new("ck-form.toml").exists() {
            return Self::from_toml_file("ck-form.toml");
        }
        Ok(Self::default())
    }

    /// Load from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;
        toml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Override the post-submit destination
    pub fn with_dashboard_path(mut self, path: impl Into<String>) -> Self {
        self.dashboard_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_destination() {
        assert_eq!(FormConfig::default().dashboard_path, "/dashboard");
    }

    #[test]
    fn test_parse_toml() {
        let config: FormConfig = toml::from_str(r#"dashboard_path = "/contacts""#).unwrap();
        assert_eq!(config.dashboard_path, "/contacts");
    }

    #[test]
    fn test_parse_empty_toml_uses_default() {
        let config: FormConfig = toml::from_str("").unwrap();
        assert_eq!(config.dashboard_path, "/dashboard");
    }
}
