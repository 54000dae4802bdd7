use std::path::Path;

use figment::providers::{Env, Format, Yaml};
use figment::Figment;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::server::ServerConfig;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "./config.yaml";

/// Prefix for environment overrides, e.g. `STATSDESC_SERVER__BASE_URL`.
pub const ENV_PREFIX: &str = "STATSDESC_";

/// A top-level enum for versioned configurations.
#[derive(Deserialize, Serialize, JsonSchema)]
#[serde(tag = "version")]
pub enum Config {
    #[serde(rename = "1.0.0")]
    ConfigV1(ConfigV1),
}

/// Main config for v1.0.0.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ConfigV1 {
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Extract a `ConfigV1` from an already assembled figment.
pub fn extract_config(figment: Figment) -> Result<ConfigV1, figment::Error> {
    match figment.extract::<Config>()? {
        Config::ConfigV1(c) => Ok(c),
    }
    // handle configuration migration between versions here when necessary
}

/// Load config from `path`, with `STATSDESC_`-prefixed environment variables on top.
pub fn load_config_from(path: impl AsRef<Path>) -> Result<ConfigV1, figment::Error> {
    let figment = Figment::new()
        .merge(Yaml::file(path.as_ref()))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));
    extract_config(figment)
}

/// Load config from "config.yaml" in the current directory, exiting on error.
pub fn load_config() -> ConfigV1 {
    match load_config_from(DEFAULT_CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            std::process::exit(1);
        }
    }
}

/// The JSON schema for the configuration, pretty printed.
pub fn config_schema() -> Result<String, serde_json::Error> {
    let schema = schema_for!(Config);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_yaml(yaml: &str) -> Result<ConfigV1, figment::Error> {
        extract_config(Figment::new().merge(Yaml::string(yaml)))
    }

    #[test]
    fn test_full_config() {
        let config = from_yaml(
            r#"
version: "1.0.0"
server:
  base_url: "http://db.example.org:8529"
  timeout_in_ms: 1500
  username: root
  password: secret
logging:
  level: debug
  format: json
"#,
        )
        .unwrap();

        assert_eq!(config.server.base_url, "http://db.example.org:8529");
        assert_eq!(config.server.timeout_in_ms, 1500);
        assert_eq!(config.server.username.as_deref(), Some("root"));
        assert_eq!(config.server.password.as_deref(), Some("secret"));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.service_name, "statsdesc");
    }

    #[test]
    fn test_defaults_are_applied() {
        let config = from_yaml(
            r#"
version: "1.0.0"
server:
  base_url: "http://localhost:8529"
"#,
        )
        .unwrap();

        assert_eq!(config.server.timeout_in_ms, 5000);
        assert!(config.server.username.is_none());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, "console");
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let result = from_yaml(
            r#"
version: "0.9.0"
server:
  base_url: "http://localhost:8529"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_server_is_rejected() {
        assert!(from_yaml("version: \"1.0.0\"\n").is_err());
    }

    #[test]
    fn test_missing_file_leaves_required_fields_unset() {
        assert!(load_config_from("./does-not-exist/config.yaml").is_err());
    }

    #[test]
    fn test_schema_mentions_server() {
        let schema = config_schema().unwrap();
        assert!(schema.contains("base_url"));
        assert!(schema.contains("timeout_in_ms"));
    }
}
