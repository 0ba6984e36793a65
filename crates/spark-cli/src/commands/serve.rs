use anyhow::Context;
use spark_config::SparkConfig;
use spark_server::AppState;

use crate::cli::root_commands::ServeArgs;

/// Handle `spark serve`.
pub async fn handle(args: &ServeArgs, config: &SparkConfig) -> anyhow::Result<()> {
    let bind = args.bind.as_deref().unwrap_or(&config.server.bind);
    let state = AppState::from_config(config)
        .await
        .context("failed to initialize server state")?;
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    spark_server::serve(listener, state)
        .await
        .context("server stopped with an error")
}
