//! # spark-config
//!
//! Layered configuration loading for Spark using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SPARK_*` prefix, `__` as separator)
//! 2. Project-level `.spark/config.toml`
//! 3. User-level `~/.config/spark/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SPARK_MENTOR__API_KEY` -> `mentor.api_key`,
//! `SPARK_SERVER__BIND` -> `server.bind`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use spark_config::SparkConfig;
//!
//! let config = SparkConfig::load_with_dotenv().expect("config");
//!
//! if config.mentor.is_configured() {
//!     println!("Mentor model: {}", config.mentor.model);
//! }
//! ```

mod auth;
mod database;
mod error;
mod general;
mod mentor;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use mentor::MentorConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".spark/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SparkConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub mentor: MentorConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl SparkConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// Variables already present in the process environment win over `.env`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with an explicit project config file instead of
    /// `.spark/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the file does not exist, or
    /// [`ConfigError::Figment`] if it fails to parse.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::InvalidValue {
                field: "config".into(),
                reason: format!("file not found: {}", path.display()),
            });
        }
        Self::base_figment()
            .merge(Toml::file(path))
            .merge(Self::env_provider())
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Self::base_figment();

        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Self::env_provider())
    }

    /// Defaults plus the user-global file.
    fn base_figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }
        figment
    }

    fn env_provider() -> Env {
        Env::prefixed("SPARK_").split("__")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("spark").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = SparkConfig::default();
        assert!(!config.mentor.is_configured());
        assert!(!config.auth.is_configured());
        assert!(!config.database.is_remote());
        assert_eq!(config.server.bind, "127.0.0.1:8787");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: SparkConfig = SparkConfig::figment().extract()?;
            assert_eq!(config.general.default_limit, 50);
            assert_eq!(config.mentor.timeout_secs, 60);
            Ok(())
        });
    }
}
