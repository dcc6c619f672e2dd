use crate::config::DatabaseConfig;
use figment::{providers, providers::Format, Figment};
use serde::{Deserialize, Serialize};

/// Raw configuration structure that is used to read the configuration from the file.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct RawConfig {
    /// Defines a TCP port to listen on.
    pub port: u16,
    /// Database configuration.
    pub db: DatabaseConfig,
}

impl RawConfig {
    /// Reads the configuration from the file (TOML) and merges it with the default values.
    pub fn read_from_file(path: &str) -> anyhow::Result<Self> {
        Ok(
            Figment::from(providers::Serialized::defaults(Self::default()))
                .merge(providers::Toml::file(path))
                .merge(providers::Env::prefixed("TASKBOARD_").split("__"))
                .extract()?,
        )
    }
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            port: 7878,
            db: Default::default(),
        }
    }
}
