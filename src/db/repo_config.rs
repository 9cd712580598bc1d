//! Runtime configuration for the repository layer.
//!
//! The backend is selected from a TOML file or from environment variables.
//! Precedence: an explicit file (via `REPCURVE_CONFIG`) wins over the
//! environment, which wins over the defaults.

use serde::Deserialize;
use std::env;
use std::path::Path;

use super::repository::{RepositoryError, RepositoryResult};

fn default_backend() -> String {
    "local".to_string()
}

fn default_true() -> bool {
    true
}

/// Repository configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RepositoryConfig {
    /// Storage backend to use ("local").
    #[serde(default = "default_backend")]
    pub backend: String,
    /// Whether to seed the default exercise catalog on startup.
    #[serde(default = "default_true")]
    pub seed_catalog: bool,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            seed_catalog: true,
        }
    }
}

impl RepositoryConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> RepositoryResult<Self> {
        toml::from_str(text)
            .map_err(|e| RepositoryError::configuration(format!("Invalid config TOML: {}", e)))
    }

    /// Load a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            RepositoryError::configuration(format!(
                "Cannot read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&text)
    }

    /// Build a configuration from environment variables
    /// (`REPOSITORY_TYPE`, `SEED_CATALOG`).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(backend) = env::var("REPOSITORY_TYPE") {
            config.backend = backend;
        }
        if let Ok(seed) = env::var("SEED_CATALOG") {
            config.seed_catalog = seed != "0" && !seed.eq_ignore_ascii_case("false");
        }
        config
    }

    /// Resolve the effective configuration: `REPCURVE_CONFIG` file when set,
    /// environment otherwise.
    pub fn load() -> RepositoryResult<Self> {
        match env::var("REPCURVE_CONFIG") {
            Ok(path) => Self::from_file(path),
            Err(_) => Ok(Self::from_env()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_local_with_seeding() {
        let config = RepositoryConfig::default();
        assert_eq!(config.backend, "local");
        assert!(config.seed_catalog);
    }

    #[test]
    fn parses_toml() {
        let config = RepositoryConfig::from_toml_str(
            r#"
            backend = "local"
            seed_catalog = false
            "#,
        )
        .unwrap();
        assert_eq!(config.backend, "local");
        assert!(!config.seed_catalog);
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = RepositoryConfig::from_toml_str("").unwrap();
        assert_eq!(config, RepositoryConfig::default());
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(RepositoryConfig::from_toml_str("backend = [").is_err());
    }
}
