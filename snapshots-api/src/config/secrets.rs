//! Secrets loader for API keys.
//!
//! Keys granting access to full snapshots are kept in a separate TOML file
//! (config/secrets.toml) that should be excluded from version control.
//!
//! Example secrets.toml:
//! ```toml
//! api_keys = ["partner-key-1", "partner-key-2"]
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// Structure matching the secrets.toml file format
#[derive(Debug, Deserialize, Default)]
pub struct SecretsFile {
    #[serde(default)]
    pub api_keys: Vec<String>,
}

/// Loader for secrets from the secrets.toml file
pub struct SecretsLoader {
    secrets: SecretsFile,
}

impl SecretsLoader {
    /// Load secrets from the specified file path.
    /// Returns an empty loader if the file doesn't exist.
    pub fn load(secrets_path: &Path) -> Result<Self> {
        if !secrets_path.exists() {
            warn!(
                "Secrets file not found at {:?}, only API_KEYS will grant full snapshot access",
                secrets_path
            );
            return Ok(Self {
                secrets: SecretsFile::default(),
            });
        }

        let content = std::fs::read_to_string(secrets_path)
            .with_context(|| format!("Failed to read secrets file: {:?}", secrets_path))?;

        let secrets: SecretsFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse secrets file: {:?}", secrets_path))?;

        info!(
            "Loaded {} API keys from {:?}",
            secrets.api_keys.len(),
            secrets_path
        );

        Ok(Self { secrets })
    }

    /// Trimmed, non-empty keys
    pub fn api_keys(&self) -> Vec<String> {
        normalize_keys(self.secrets.api_keys.iter().map(String::as_str))
    }
}

pub(crate) fn normalize_keys<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<String> {
    keys.map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_secrets() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"api_keys = ["secret-key-1", " secret-key-2 ", ""]"#).unwrap();

        let loader = SecretsLoader::load(file.path()).unwrap();

        assert_eq!(
            loader.api_keys(),
            vec!["secret-key-1".to_string(), "secret-key-2".to_string()]
        );
    }

    #[test]
    fn test_missing_file() {
        let loader = SecretsLoader::load(Path::new("/nonexistent/path/secrets.toml")).unwrap();
        assert!(loader.api_keys().is_empty());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "api_keys = \"not-a-list\"").unwrap();

        assert!(SecretsLoader::load(file.path()).is_err());
    }
}
