//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use spark_config::SparkConfig;
use spark_core::enums::IdeaColor;

#[test]
fn loads_every_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/spark/ideas.db"

[mentor]
api_key = "gw-key"
model = "google/gemini-2.5-pro"
timeout_secs = 15

[server]
bind = "0.0.0.0:9000"
max_body_bytes = 1024

[auth]
jwt_secret = "s3cret"
token_ttl_hours = 2

[general]
default_color = "cyan"
default_limit = 10
"#,
        )?;

        let config: SparkConfig = Figment::from(Serialized::defaults(SparkConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/spark/ideas.db");
        assert!(config.mentor.is_configured());
        assert_eq!(config.mentor.model, "google/gemini-2.5-pro");
        assert_eq!(config.mentor.timeout_secs, 15);
        assert!(config.mentor.endpoint.starts_with("https://ai.gateway.lovable.dev"));
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.server.max_body_bytes, 1024);
        assert!(config.auth.is_configured());
        assert_eq!(config.auth.token_ttl_hours, 2);
        assert_eq!(config.general.default_color, IdeaColor::Cyan);
        assert_eq!(config.general.default_limit, 10);
        Ok(())
    });
}

#[test]
fn project_config_file_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".spark")?;
        jail.create_file(
            ".spark/config.toml",
            r#"
[server]
bind = "127.0.0.1:5555"
"#,
        )?;

        let config = SparkConfig::load().expect("config loads");
        assert_eq!(config.server.bind, "127.0.0.1:5555");
        assert_eq!(config.server.max_body_bytes, 65536);
        Ok(())
    });
}

#[test]
fn load_from_explicit_path() {
    Jail::expect_with(|jail| {
        jail.create_file("alt.toml", "[general]\ndefault_limit = 7\n")?;
        let config = SparkConfig::load_from(std::path::Path::new("alt.toml")).expect("config loads");
        assert_eq!(config.general.default_limit, 7);
        Ok(())
    });
}

#[test]
fn load_from_absolute_path_outside_project() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("spark.toml");
    std::fs::write(
        &path,
        "[mentor]\nmodel = \"google/gemini-2.5-flash\"\n\n[server]\nbind = \"0.0.0.0:7000\"\n",
    )
    .expect("write config");

    Jail::expect_with(|_jail| {
        let config = SparkConfig::load_from(&path).expect("config loads");
        assert_eq!(config.mentor.model, "google/gemini-2.5-flash");
        assert_eq!(config.server.bind, "0.0.0.0:7000");
        Ok(())
    });
}

#[test]
fn load_from_missing_path_fails() {
    Jail::expect_with(|_jail| {
        let result = SparkConfig::load_from(std::path::Path::new("nope.toml"));
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn invalid_color_is_rejected() {
    Jail::expect_with(|jail| {
        jail.create_file("config.toml", "[general]\ndefault_color = \"mauve\"\n")?;
        let result: Result<SparkConfig, _> =
            Figment::from(Serialized::defaults(SparkConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}
