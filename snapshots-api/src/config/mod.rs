pub mod manager;
pub mod secrets;

use serde::{Deserialize, Serialize};

pub use manager::ConfigManager;
pub use secrets::SecretsLoader;

use crate::constants::defaults;
use crate::errors::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub bucket_name: String,
    /// JSON listing endpoint of the bucket
    pub bucket_url: String,
    /// Root of the public download links; derived from `bucket_name` when unset
    pub download_base_url: Option<String>,
    pub cache_ttl_seconds: u64,
    pub request_timeout_seconds: u64,
    // Populated from secrets.toml and API_KEYS, never from main.toml
    #[serde(skip)]
    pub api_keys: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_string(),
            port: defaults::PORT,
            bucket_name: defaults::BUCKET_NAME.to_string(),
            bucket_url: defaults::BUCKET_URL.to_string(),
            download_base_url: None,
            cache_ttl_seconds: defaults::CACHE_TTL_SECONDS,
            request_timeout_seconds: defaults::REQUEST_TIMEOUT_SECONDS,
            api_keys: Vec::new(),
        }
    }
}

impl Config {
    pub fn download_base_url(&self) -> String {
        match &self.download_base_url {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => format!("{}/{}", defaults::DOWNLOAD_HOST, self.bucket_name),
        }
    }

    /// True only for a non-empty key that exactly matches a configured one
    pub fn is_valid_api_key(&self, api_key: &str) -> bool {
        !api_key.is_empty() && self.api_keys.iter().any(|key| key == api_key)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "bucket_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.bucket_name.trim().is_empty() && self.download_base_url.is_none() {
            return Err(ConfigError::InvalidValue {
                field: "bucket_name".to_string(),
                reason: "required when download_base_url is not set".to_string(),
            });
        }
        if self.request_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_seconds".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
