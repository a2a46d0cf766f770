use super::secrets::{normalize_keys, SecretsLoader};
use super::Config;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info, warn};

use crate::errors::ConfigError;

pub struct ConfigManager {
    current_config: Arc<Config>,
}

impl ConfigManager {
    pub async fn new(config_dir: String) -> Result<Self> {
        let config = Self::load_configuration(&config_dir, |key| std::env::var(key).ok()).await?;
        Ok(Self {
            current_config: Arc::new(config),
        })
    }

    pub fn get_current_config(&self) -> Arc<Config> {
        self.current_config.clone()
    }

    /// main.toml, then environment overrides, then secrets.toml keys
    async fn load_configuration<E>(config_dir: &str, env: E) -> Result<Config>
    where
        E: Fn(&str) -> Option<String>,
    {
        let main_config_path = format!("{}/main.toml", config_dir);

        let mut config = if Path::new(&main_config_path).exists() {
            debug!("Loading main config: {}", main_config_path);
            let content =
                fs::read_to_string(&main_config_path)
                    .await
                    .map_err(|e| ConfigError::LoadFailed {
                        path: main_config_path.clone(),
                        reason: e.to_string(),
                    })?;

            toml::from_str::<Config>(&content).map_err(|e| ConfigError::ParseError {
                path: main_config_path.clone(),
                reason: e.to_string(),
            })?
        } else {
            info!("No {} found, using defaults", main_config_path);
            Config::default()
        };

        apply_env_overrides(&mut config, &env);

        let secrets = SecretsLoader::load(&Path::new(config_dir).join("secrets.toml"))?;
        for key in secrets.api_keys() {
            if !config.api_keys.contains(&key) {
                config.api_keys.push(key);
            }
        }

        config.validate()?;

        info!(
            "Configuration loaded: bucket {}, cache TTL {}s, {} API keys",
            config.bucket_name,
            config.cache_ttl_seconds,
            config.api_keys.len()
        );

        Ok(config)
    }
}

fn apply_env_overrides<E>(config: &mut Config, env: &E)
where
    E: Fn(&str) -> Option<String>,
{
    if let Some(port) = env("PORT") {
        match port.parse() {
            Ok(port) => config.port = port,
            Err(_) => warn!("Ignoring invalid PORT value: {}", port),
        }
    }

    if let Some(bucket_name) = env("GCP_BUCKET_NAME").filter(|v| !v.is_empty()) {
        config.bucket_name = bucket_name;
    }

    if let Some(bucket_url) = env("GCP_BUCKET_URL").filter(|v| !v.is_empty()) {
        config.bucket_url = bucket_url;
    }

    if let Some(ttl) = env("CACHE_TTL_SECONDS") {
        match ttl.parse() {
            Ok(ttl) => config.cache_ttl_seconds = ttl,
            Err(_) => warn!("Ignoring invalid CACHE_TTL_SECONDS value: {}", ttl),
        }
    }

    if let Some(api_keys) = env("API_KEYS") {
        config.api_keys = normalize_keys(api_keys.split(','));
    }
}
