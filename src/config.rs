mod database_config;
mod raw_config;

pub use self::{database_config::DatabaseConfig, raw_config::RawConfig};

/// Main server config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Database configuration.
    pub db: DatabaseConfig,
}

impl AsRef<Config> for Config {
    fn as_ref(&self) -> &Config {
        self
    }
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self { db: raw_config.db }
    }
}
