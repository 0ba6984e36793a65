//! # spark-db
//!
//! libSQL storage for Spark: ideas and the AI suggestions attached to them.
//!
//! [`SparkDb`] owns the database and its single connection and runs the
//! embedded migrations on open. [`service::SparkService`] binds a shared
//! `SparkDb` to the caller's identity; every repo method is implemented on it
//! and scoped to that identity's `user_id`.
//!
//! Uses the `libsql` crate (v0.9.29) in local-file mode, or against a remote
//! libSQL server when a URL and token are configured.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

#[cfg(test)]
mod test_support;

use error::DatabaseError;
use libsql::Builder;
use spark_config::DatabaseConfig;

/// Central database handle.
///
/// Wraps a libSQL database and one connection. Shared behind an `Arc` by
/// every `SparkService`.
pub struct SparkDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl SparkDb {
    /// Open the configured database: remote when a URL and token are set,
    /// otherwise the local file (its parent directory is created if needed).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created, the
    /// database cannot be opened, or migrations fail.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            tracing::info!(url = %config.url, "opening remote database");
            return Self::open_remote(&config.url, &config.auth_token).await;
        }
        if let Some(parent) = std::path::Path::new(&config.path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DatabaseError::Other(anyhow::anyhow!(
                        "create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }
        tracing::debug!(path = %config.path, "opening local database");
        Self::open_local(&config.path).await
    }

    /// Open a local database file, or `":memory:"` for tests.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        Self::init(db).await
    }

    /// Open a remote libSQL database (e.g. `libsql://spark-ada.turso.io`).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        Self::init(db).await
    }

    async fn init(db: libsql::Database) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;

        // Foreign keys are per-connection in SQLite; suggestion cascade needs them.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let spark_db = Self { db, conn };
        spark_db.run_migrations().await?;
        tracing::debug!("database ready");
        Ok(spark_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g. `"ida-a3f8b2c1d4e5f607"`.
    ///
    /// Uses `randomblob(8)` in SQL to produce 16 hex chars, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query("SELECT ?1 || '-' || lower(hex(randomblob(8)))", [prefix])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    async fn test_db() -> SparkDb {
        SparkDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;
        for table in ["ideas", "ai_suggestions"] {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                )
                .await
                .unwrap();
            assert!(
                rows.next().await.unwrap().is_some(),
                "table '{table}' should exist"
            );
        }
    }

    #[tokio::test]
    async fn foreign_keys_enabled() {
        let db = test_db().await;
        let mut rows = db.conn().query("PRAGMA foreign_keys", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }

    #[tokio::test]
    async fn generate_id_correct_format() {
        let db = test_db().await;
        let id = db.generate_id("ida").await.unwrap();
        assert!(id.starts_with("ida-"), "ID should start with 'ida-': {id}");
        assert_eq!(id.len(), 20, "3 prefix + 1 dash + 16 hex: {id}");
        assert!(id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn generate_id_all_prefixes() {
        let db = test_db().await;
        for prefix in spark_core::ids::ALL_PREFIXES {
            let id = db.generate_id(prefix).await.unwrap();
            assert!(id.starts_with(&format!("{prefix}-")));
        }
    }

    #[tokio::test]
    async fn generate_id_uniqueness() {
        let db = test_db().await;
        let mut ids = HashSet::new();
        for _ in 0..100 {
            let id = db.generate_id("tst").await.unwrap();
            assert!(ids.insert(id.clone()), "Duplicate ID generated: {id}");
        }
    }

    #[tokio::test]
    async fn open_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("spark.db");
        let config = DatabaseConfig {
            path: path.to_string_lossy().into_owned(),
            ..DatabaseConfig::default()
        };
        SparkDb::open(&config).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn empty_title_rejected_by_schema() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO ideas (id, user_id, title, created_at, updated_at, last_activity_at)
                 VALUES ('ida-1', 'u', '  ', 'x', 'x', 'x')",
                (),
            )
            .await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn suggestion_requires_existing_idea() {
        let db = test_db().await;
        let result = db
            .conn()
            .execute(
                "INSERT INTO ai_suggestions (id, idea_id, suggestion_type, content, created_at)
                 VALUES ('sug-1', 'ida-missing', 'refinement', 'x', 'x')",
                (),
            )
            .await;
        assert!(result.is_err(), "FK should reject orphan suggestion");
    }
}
