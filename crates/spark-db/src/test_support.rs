//! Shared test utilities for spark-db tests.

pub(crate) mod helpers {
    use spark_core::identity::AuthIdentity;

    use crate::service::SparkService;

    pub const TEST_USER: &str = "user_test";

    /// In-memory service bound to [`TEST_USER`].
    pub async fn test_service() -> SparkService {
        SparkService::new_local(":memory:", Some(AuthIdentity::new(TEST_USER)))
            .await
            .unwrap()
    }

    /// In-memory service with no identity.
    pub async fn anonymous_service() -> SparkService {
        SparkService::new_local(":memory:", None).await.unwrap()
    }

    /// A second service over the same database, acting as another user.
    pub fn as_user(svc: &SparkService, user_id: &str) -> SparkService {
        SparkService::new(svc.shared_db(), Some(AuthIdentity::new(user_id)))
    }
}
