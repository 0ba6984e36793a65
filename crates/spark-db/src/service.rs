//! Owner-scoped service layer.
//!
//! `SparkService` pairs the shared [`SparkDb`] with the caller's identity.
//! It is cheap to build, so the HTTP server creates one per request. All repo
//! methods are implemented as `impl SparkService` blocks and filter every
//! statement by [`SparkService::owner_id`].

use std::sync::Arc;

use spark_core::identity::AuthIdentity;

use crate::SparkDb;
use crate::error::DatabaseError;

#[derive(Clone)]
pub struct SparkService {
    db: Arc<SparkDb>,
    identity: Option<AuthIdentity>,
}

impl SparkService {
    #[must_use]
    pub const fn new(db: Arc<SparkDb>, identity: Option<AuthIdentity>) -> Self {
        Self { db, identity }
    }

    /// Open a local database and bind it to `identity`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(
        path: &str,
        identity: Option<AuthIdentity>,
    ) -> Result<Self, DatabaseError> {
        let db = SparkDb::open_local(path).await?;
        Ok(Self::new(Arc::new(db), identity))
    }

    /// Access the underlying database handle.
    #[must_use]
    pub fn db(&self) -> &SparkDb {
        &self.db
    }

    /// The shared handle, for building services bound to other identities.
    #[must_use]
    pub fn shared_db(&self) -> Arc<SparkDb> {
        Arc::clone(&self.db)
    }

    #[must_use]
    pub const fn identity(&self) -> Option<&AuthIdentity> {
        self.identity.as_ref()
    }

    /// The caller's user ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Unauthenticated` when no identity is bound.
    pub fn owner_id(&self) -> Result<&str, DatabaseError> {
        self.identity
            .as_ref()
            .map(|identity| identity.user_id.as_str())
            .ok_or(DatabaseError::Unauthenticated)
    }
}
