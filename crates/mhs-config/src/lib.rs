//! # mhs-config
//!
//! Layered configuration loading for the activities service using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`MHS_*` prefix, `__` as separator)
//! 2. `mergington.toml` in the working directory
//! 3. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `MHS_SERVER__BIND` -> `server.bind`,
//! `MHS_DATABASE__PATH` -> `database.path`, etc. The `__` (double
//! underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use mhs_config::MhsConfig;
//!
//! let config = MhsConfig::load_with_dotenv().expect("config");
//! println!("binding on {}", config.server.bind);
//! ```

mod database;
mod error;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the project-local config file.
const CONFIG_FILE: &str = "mergington.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MhsConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl MhsConfig {
    /// Load configuration from all sources (TOML file + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`MhsConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or extract.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(Path::new(CONFIG_FILE))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical
    /// entry point for the server binary.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or extract.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load from an explicit TOML file instead of `mergington.toml`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file fails to parse or extract.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::figment(path).extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    pub fn figment(config_file: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if config_file.exists() {
            figment = figment.merge(Toml::file(config_file));
        }

        figment.merge(Env::prefixed("MHS_").split("__"))
    }
}
