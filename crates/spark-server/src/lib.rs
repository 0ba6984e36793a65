//! # spark-server
//!
//! The HTTP surface of Spark, built on axum.
//!
//! - `POST /functions/v1/brainstorm` generates mentor feedback for an idea
//!   and stores it as suggestions.
//! - `/v1/ideas` and `/v1/suggestions` expose the owner-scoped idea store as
//!   JSON.
//!
//! Every route except `/healthz` needs a bearer session token. Every
//! response carries permissive CORS headers and an `x-request-id`.

pub mod auth;
pub mod brainstorm;
pub mod error;
pub mod middleware;
mod routes;

pub use brainstorm::Brainstormer;
pub use error::{ApiError, ServerError};

use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post, put};
use spark_config::SparkConfig;
use spark_core::identity::AuthIdentity;
use spark_db::SparkDb;
use spark_db::service::SparkService;
use spark_mentor::{FeedbackModel, MentorClient};
use tokio::net::TcpListener;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<SparkDb>,
    pub model: Arc<dyn FeedbackModel>,
    pub jwt_secret: Arc<str>,
    pub max_body_bytes: usize,
    pub(crate) request_seq: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(db: Arc<SparkDb>, model: Arc<dyn FeedbackModel>, jwt_secret: &str) -> Self {
        Self {
            db,
            model,
            jwt_secret: Arc::from(jwt_secret),
            max_body_bytes: spark_config::ServerConfig::default().max_body_bytes,
            request_seq: Arc::new(AtomicU64::new(1)),
        }
    }

    #[must_use]
    pub const fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    /// Open the database and mentor client described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ServerError::NotConfigured` when `auth.jwt_secret` is empty,
    /// and the database or mentor error if either cannot be built.
    pub async fn from_config(config: &SparkConfig) -> Result<Self, ServerError> {
        if !config.auth.is_configured() {
            return Err(ServerError::NotConfigured(
                "auth.jwt_secret must be set to verify session tokens".into(),
            ));
        }
        if !config.mentor.is_configured() {
            tracing::warn!("mentor.api_key is not set; brainstorm requests will fail");
        }
        let db = SparkDb::open(&config.database).await?;
        let model = MentorClient::new(&config.mentor)?;
        Ok(Self::new(Arc::new(db), Arc::new(model), &config.auth.jwt_secret)
            .with_max_body_bytes(config.server.max_body_bytes))
    }

    /// A service bound to `identity`, sharing this state's database.
    #[must_use]
    pub fn service(&self, identity: AuthIdentity) -> SparkService {
        SparkService::new(Arc::clone(&self.db), Some(identity))
    }

    #[must_use]
    pub fn brainstormer(&self, identity: AuthIdentity) -> Brainstormer {
        Brainstormer::new(self.service(identity), Arc::clone(&self.model))
    }
}

/// Build the full router with CORS, tracing, and body-limit layers.
pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.max_body_bytes;
    Router::new()
        .route("/healthz", get(routes::health::health_handler))
        .route(
            "/functions/v1/brainstorm",
            post(routes::brainstorm::brainstorm_handler),
        )
        .route(
            "/v1/ideas",
            get(routes::ideas::list_handler).post(routes::ideas::create_handler),
        )
        .route("/v1/ideas/stale", get(routes::ideas::stale_handler))
        .route("/v1/ideas/order", put(routes::ideas::reorder_handler))
        .route(
            "/v1/ideas/{id}",
            get(routes::ideas::get_handler)
                .patch(routes::ideas::update_handler)
                .delete(routes::ideas::delete_handler),
        )
        .route(
            "/v1/ideas/{id}/suggestions",
            get(routes::suggestions::list_handler),
        )
        .route(
            "/v1/suggestions/{id}/accept",
            post(routes::suggestions::accept_handler),
        )
        .route(
            "/v1/suggestions/{id}/dismiss",
            post(routes::suggestions::dismiss_handler),
        )
        .fallback(routes::not_found_handler)
        .layer(axum::middleware::from_fn(middleware::cors_middleware))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::request_tracing_middleware,
        ))
        .with_state(state)
}

/// Serve on `listener` until Ctrl-C.
///
/// # Errors
///
/// Returns `ServerError::Io` if the listener fails.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), ServerError> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "spark server listening");
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "failed to listen for shutdown signal");
            }
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}
