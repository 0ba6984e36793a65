use std::sync::Arc;

use anyhow::Context;
use spark_config::SparkConfig;
use spark_core::identity::AuthIdentity;
use spark_db::SparkDb;
use spark_db::service::SparkService;
use spark_mentor::{FeedbackModel, MentorClient};
use spark_server::Brainstormer;

/// Warn when the session token expires within this many seconds.
const EXPIRY_WARNING_SECS: i64 = 3600;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: SparkService,
    pub config: SparkConfig,
    pub mentor: Arc<MentorClient>,
}

impl AppContext {
    /// Open the configured database and bind it to the session identity.
    pub async fn init(config: SparkConfig) -> anyhow::Result<Self> {
        let identity = resolve_identity(&config)?;
        let db = SparkDb::open(&config.database)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;
        let mentor = MentorClient::new(&config.mentor).context("failed to build mentor client")?;

        Ok(Self {
            service: SparkService::new(Arc::new(db), Some(identity)),
            config,
            mentor: Arc::new(mentor),
        })
    }

    /// Feedback generation bound to the session identity.
    pub fn brainstormer(&self) -> Brainstormer {
        let model: Arc<dyn FeedbackModel> = self.mentor.clone();
        Brainstormer::new(self.service.clone(), model)
    }
}

/// A context on a fresh database file in `dir`, acting as `user`.
#[cfg(test)]
pub async fn test_context(dir: &tempfile::TempDir, user: &str) -> AppContext {
    let mut config = SparkConfig::default();
    config.database.path = dir.path().join("spark.db").to_string_lossy().into_owned();
    config.auth.jwt_secret = "cli-test-secret".into();
    config.auth.token =
        spark_auth::token::mint(user, None, "cli-test-secret", 24).expect("token mints");
    AppContext::init(config).await.expect("context initializes")
}

fn resolve_identity(config: &SparkConfig) -> anyhow::Result<AuthIdentity> {
    if !config.auth.has_session_token() {
        anyhow::bail!(
            "no session token configured; run `spark auth token --user <id>` and set SPARK_AUTH__TOKEN"
        );
    }
    let claims = spark_auth::token::verify(&config.auth.token, &config.auth.jwt_secret)
        .context("session token rejected")?;
    if claims.is_near_expiry(EXPIRY_WARNING_SECS) {
        tracing::warn!(expires_at = %claims.expires_at, "session token expires soon");
    }
    Ok(claims.to_identity())
}
