use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Where the statistics server lives and how to reach it.
#[derive(Deserialize, Serialize, Debug, Clone, JsonSchema)]
pub struct ServerConfig {
    /// Scheme, host and port, e.g. `http://localhost:8529`.
    pub base_url: String,
    #[serde(default = "default_timeout_in_ms")]
    pub timeout_in_ms: u64,
    /// Basic auth is only sent when a username is configured.
    pub username: Option<String>,
    pub password: Option<String>,
}

fn default_timeout_in_ms() -> u64 {
    5000
}
