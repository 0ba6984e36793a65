use spark_config::SparkConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &SparkConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &SparkConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.mentor.is_configured() && has_env_prefix(&env_keys, "SPARK_MENTOR") {
        warnings.push(
            "Mentor config appears default while SPARK_MENTOR* env vars exist. Use double underscores (example: SPARK_MENTOR__API_KEY)."
                .to_string(),
        );
    }

    if !config.auth.is_configured() && has_env_prefix(&env_keys, "SPARK_AUTH") {
        warnings.push(
            "Auth config appears default while SPARK_AUTH* env vars exist. Use double underscores (example: SPARK_AUTH__JWT_SECRET)."
                .to_string(),
        );
    }

    if !config.database.is_remote() && has_env_prefix(&env_keys, "SPARK_DATABASE_") {
        warnings.push(
            "Database config appears default while SPARK_DATABASE_* env vars exist. Use double underscores (example: SPARK_DATABASE__URL)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key.contains("__"))
}

#[cfg(test)]
mod tests {
    use spark_config::SparkConfig;

    use super::collect_unconfigured_warnings;

    #[test]
    fn warns_for_single_underscore_keys() {
        let config = SparkConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("SPARK_MENTOR_API_KEY".to_string(), "gw-key".to_string()),
                ("SPARK_AUTH_JWT_SECRET".to_string(), "secret".to_string()),
                ("SPARK_DATABASE_URL".to_string(), "libsql://demo".to_string()),
            ],
        );

        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn does_not_warn_for_well_formed_keys() {
        let config = SparkConfig::default();
        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("SPARK_MENTOR__API_KEY".to_string(), String::new()),
                ("SPARK_AUTH__TOKEN".to_string(), String::new()),
            ],
        );

        assert!(warnings.is_empty());
    }

    #[test]
    fn does_not_warn_when_sections_are_configured() {
        let mut config = SparkConfig::default();
        config.mentor.api_key = "gw-key".into();
        config.auth.jwt_secret = "secret".into();

        let warnings = collect_unconfigured_warnings(
            &config,
            vec![
                ("SPARK_MENTOR_API_KEY".to_string(), "gw-key".to_string()),
                ("SPARK_AUTH_JWT_SECRET".to_string(), "secret".to_string()),
            ],
        );

        assert!(warnings.is_empty());
    }
}
