use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub static CONFIG: Lazy<Arc<Config>> = Lazy::new(|| Arc::new(Config::load()));

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize default config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Artificial latency applied by the mock backend to every call.
    #[serde(default = "default_latency_millis")]
    pub simulated_latency_millis: u64,
    /// Clear a form's fields once its submission is confirmed.
    #[serde(default)]
    pub reset_drafts_on_success: bool,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

impl Config {
    /// Loads the config.
    ///
    /// The frontend can't reach the file system, so the config is packaged into the
    /// binary with include_str. build.rs makes sure the file exists so this always
    /// compiles. A broken config falls back to the defaults rather than taking the
    /// whole site down.
    ///
    /// The bundle server reads the file from disk instead, see [`Config::load_from_disk`].
    pub fn load() -> Self {
        #[cfg(not(feature = "server"))]
        let loaded = Self::parse(include_str!("../../config.toml"));
        #[cfg(feature = "server")]
        let loaded = Self::load_from_disk(std::path::Path::new("config.toml"));

        loaded.unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default config");
            Self::default()
        })
    }

    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads the config at `path`, writing the defaults there first if it's missing.
    #[cfg(feature = "server")]
    pub fn load_from_disk(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            let s = toml::to_string(&Self::default())?;
            std::fs::write(path, s.as_bytes())?;
        }

        let s = std::fs::read_to_string(path)?;
        Self::parse(&s)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_millis)
    }
}

fn default_latency_millis() -> u64 {
    600
}

fn default_log_filter() -> String {
    "qe_web=debug".to_string()
}

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_dist_dir() -> String {
    "dist".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            simulated_latency_millis: default_latency_millis(),
            reset_drafts_on_success: false,
            log_filter: default_log_filter(),
            bind_address: default_bind_address(),
            dist_dir: default_dist_dir(),
        }
    }
}
