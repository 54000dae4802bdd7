//! Application startup.
//!
//! Builds the transport from configuration, populates a fresh
//! `MetricDescriptorCollection` and renders it for the terminal.

use std::error::Error;

use tracing::{info, warn};

use crate::cli::{render, OutputFormat};
use crate::collections::{Collection, MetricDescriptorCollection};
use crate::config::ConfigV1;
use crate::transport::HttpTransport;

/// Fetches the statistics description and returns the rendered output.
///
/// # Errors
///
/// Returns an error if the transport cannot be built, the fetch fails or the
/// response is not a sequence of descriptors.
pub async fn run(config: &ConfigV1, format: OutputFormat) -> Result<String, Box<dyn Error>> {
    let transport = HttpTransport::new(&config.server)?;
    let mut collection = MetricDescriptorCollection::new();

    info!(
        "Fetching {} from {} (session {})",
        collection.url(),
        config.server.base_url,
        collection.session_id()
    );
    let report = collection.fetch(&transport).await?;

    if !report.rejected.is_empty() {
        warn!(
            "{} of {} descriptors were malformed and skipped",
            report.rejected.len(),
            report.rejected.len() + report.added
        );
    }

    Ok(render(&collection, format)?)
}
