//! Host configuration
//!
//! Settings come from an optional `explorer.toml` next to the binary, with
//! environment overrides under the `CBO_EXPLORER` prefix. CLI flags win
//! over both (applied in `main`).

use std::path::Path;

use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiSettings {
    /// Directory holding the Trunk build output.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            dist_dir: default_dist_dir(),
        }
    }
}

fn default_dist_dir() -> String {
    "ui/dist".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_file(Path::new("explorer.toml"))
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("ui.dist_dir", default_dist_dir())?
            .add_source(File::from(path.to_path_buf()).required(false))
            .add_source(Environment::with_prefix("CBO_EXPLORER").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}
