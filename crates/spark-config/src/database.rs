//! libSQL database configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    ".spark/spark.db".into()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file, used when `url` is empty.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://spark-ada.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Whether a remote database should be used instead of the local file.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local() {
        let config = DatabaseConfig::default();
        assert!(!config.is_remote());
        assert_eq!(config.path, ".spark/spark.db");
    }

    #[test]
    fn url_without_token_stays_local() {
        let config = DatabaseConfig {
            url: "libsql://spark.turso.io".into(),
            ..Default::default()
        };
        assert!(!config.is_remote());
    }

    #[test]
    fn remote_when_url_and_token_set() {
        let config = DatabaseConfig {
            url: "libsql://spark.turso.io".into(),
            auth_token: "token".into(),
            ..Default::default()
        };
        assert!(config.is_remote());
    }
}
