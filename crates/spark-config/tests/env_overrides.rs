//! Environment variables take precedence over TOML files.

use figment::Jail;
use spark_config::SparkConfig;

#[test]
fn env_var_sets_nested_field() {
    Jail::expect_with(|jail| {
        jail.set_env("SPARK_MENTOR__API_KEY", "from-env");
        let config = SparkConfig::load().expect("config loads");
        assert_eq!(config.mentor.api_key, "from-env");
        assert!(config.mentor.is_configured());
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".spark")?;
        jail.create_file(".spark/config.toml", "[auth]\njwt_secret = \"from-file\"\n")?;
        jail.set_env("SPARK_AUTH__JWT_SECRET", "from-env");

        let config = SparkConfig::load().expect("config loads");
        assert_eq!(config.auth.jwt_secret, "from-env");
        Ok(())
    });
}

#[test]
fn numeric_env_values_are_parsed() {
    Jail::expect_with(|jail| {
        jail.set_env("SPARK_MENTOR__TIMEOUT_SECS", "5");
        jail.set_env("SPARK_GENERAL__DEFAULT_LIMIT", "3");
        let config = SparkConfig::load().expect("config loads");
        assert_eq!(config.mentor.timeout_secs, 5);
        assert_eq!(config.general.default_limit, 3);
        Ok(())
    });
}

#[test]
fn dotenv_file_feeds_env_layer() {
    Jail::expect_with(|jail| {
        jail.create_file(".env", "SPARK_DATABASE__PATH=/tmp/from-dotenv.db\n")?;
        let config = SparkConfig::load_with_dotenv().expect("config loads");
        assert_eq!(config.database.path, "/tmp/from-dotenv.db");
        Ok(())
    });
}
