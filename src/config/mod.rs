mod types;

pub use types::*;

use crate::Result;
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration named by `CONFIG_PATH`, falling back to `config.yaml`.
///
/// Built-in defaults are used when neither is present. Environment overrides are
/// applied last.
pub async fn load() -> Result<Config> {
    load_with(|key| env::var(key).ok(), DEFAULT_CONFIG_PATH).await
}

/// Same resolution as [`load`], with the environment read through `lookup` and
/// `default_path` tried when `CONFIG_PATH` is unset.
pub async fn load_with(
    lookup: impl Fn(&str) -> Option<String>,
    default_path: &str,
) -> Result<Config> {
    let mut config = match lookup("CONFIG_PATH") {
        Some(path) => load_from(&path).await?,
        None if Path::new(default_path).exists() => load_from(default_path).await?,
        None => {
            debug!("No configuration file found, using defaults");
            Config::default()
        }
    };

    config.apply_overrides(lookup);

    Ok(config)
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Applies environment overrides through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(region) = lookup("AWS_REGION").filter(|r| !r.is_empty()) {
            debug!("Region overridden from environment: {}", region);
            self.aws.region = region;
        }
    }
}
