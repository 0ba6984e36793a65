use std::path::Path;

use anyhow::Context;
use spark_config::SparkConfig;

use crate::cli::GlobalFlags;

/// Load `.env` from the working directory (if any), then the layered config.
/// `--config` replaces `.spark/config.toml` as the project file.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SparkConfig> {
    match flags.config.as_deref() {
        Some(path) => {
            load_dotenv();
            SparkConfig::load_from(Path::new(path))
                .with_context(|| format!("failed to load config file {path}"))
        }
        None => SparkConfig::load_with_dotenv().map_err(anyhow::Error::from),
    }
}

fn load_dotenv() {
    if let Err(error) = dotenvy::dotenv() {
        if !error.not_found() {
            tracing::warn!(%error, "failed to read .env");
        }
    }
}
