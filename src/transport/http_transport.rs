use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use super::base::{Transport, TransportError};
use crate::config::ServerConfig;

/// A transport that issues plain `GET` requests against the configured server.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &ServerConfig) -> Result<Self, TransportError> {
        info!(
            "Creating HTTP transport for '{}' (timeout {} ms)",
            config.base_url, config.timeout_in_ms
        );
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_in_ms))
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn get_name(&self) -> &str {
        "http"
    }

    async fn get_json(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.url_for(path);
        debug!(
            event_name = "transport.http.request",
            event_domain = "transport",
            url = url.as_str(),
            "sending GET request"
        );

        let mut request = self.client.get(&url);
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_deref());
        }

        let response = request.send().await.map_err(|e| TransportError::Request {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| TransportError::Request {
            url: url.clone(),
            message: format!("error reading response body: {}", e),
        })?;

        if !status.is_success() {
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| TransportError::Decode {
            url,
            message: e.to_string(),
        })
    }
}
