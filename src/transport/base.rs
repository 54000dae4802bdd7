use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failures raised while talking to the server. The collection layer never
/// retries; these are surfaced to the caller unchanged.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("error building HTTP client: {0}")]
    Client(String),

    #[error("error sending request to {url}: {message}")]
    Request { url: String, message: String },

    #[error("unexpected status code {status} from {url}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("error parsing JSON from {url}: {message}")]
    Decode { url: String, message: String },
}

/// A transport turns a server path into a decoded JSON document.
#[async_trait]
pub trait Transport: Send + Sync {
    fn get_name(&self) -> &str;
    async fn get_json(&self, path: &str) -> Result<Value, TransportError>;
}
