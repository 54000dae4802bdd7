use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt as layer_fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

#[derive(Error, Debug, PartialEq)]
pub enum LoggingError {
    #[error("invalid logging.level '{0}'. Valid values: trace, debug, info, warn, error")]
    InvalidLevel(String),

    #[error("invalid logging.format '{0}'. Valid values: json, console")]
    InvalidFormat(String),

    #[error("could not install tracing subscriber: {0}")]
    Init(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Console,
}

pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(LevelFilter::TRACE),
        "debug" => Ok(LevelFilter::DEBUG),
        "info" => Ok(LevelFilter::INFO),
        "warn" => Ok(LevelFilter::WARN),
        "error" => Ok(LevelFilter::ERROR),
        _ => Err(LoggingError::InvalidLevel(level.to_string())),
    }
}

pub fn parse_format(format: &str) -> Result<LogFormat, LoggingError> {
    match format.trim().to_lowercase().as_str() {
        "json" => Ok(LogFormat::Json),
        "console" => Ok(LogFormat::Console),
        _ => Err(LoggingError::InvalidFormat(format.to_string())),
    }
}

/// Collects event fields into a JSON object.
#[derive(Default)]
struct FieldCollector(Map<String, Value>);

impl Visit for FieldCollector {
    fn record_i64(&mut self, field: &Field, value: i64) {
        self.0.insert(field.name().to_string(), value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.0.insert(field.name().to_string(), value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.0.insert(field.name().to_string(), value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.0.insert(field.name().to_string(), value.into());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.into());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0
            .insert(field.name().to_string(), format!("{:?}", value).into());
    }
}

/// Writes one OpenTelemetry-shaped JSON object per event.
#[derive(Clone)]
struct OtelJsonFormatter {
    resource: Map<String, Value>,
}

impl OtelJsonFormatter {
    fn new(service_name: &str, service_version: &str) -> Self {
        let mut resource = Map::new();
        resource.insert("service.name".to_string(), service_name.into());
        resource.insert("service.version".to_string(), service_version.into());
        Self { resource }
    }

    fn severity_number(level: &Level) -> u64 {
        match *level {
            Level::TRACE => 1,
            Level::DEBUG => 5,
            Level::INFO => 9,
            Level::WARN => 13,
            Level::ERROR => 17,
        }
    }

    fn record(&self, event: &Event<'_>) -> Value {
        let metadata = event.metadata();
        let mut fields = FieldCollector::default();
        event.record(&mut fields);
        let mut attributes = fields.0;

        // `event_name` and `event_domain` are the dotted OTel attribute names.
        for (from, to) in [("event_name", "event.name"), ("event_domain", "event.domain")] {
            if let Some(value) = attributes.remove(from) {
                attributes.insert(to.to_string(), value);
            }
        }
        if let Some(file) = metadata.file() {
            attributes.insert("code.filepath".to_string(), file.into());
        }
        if let Some(line) = metadata.line() {
            attributes.insert("code.lineno".to_string(), line.into());
        }
        attributes.insert("code.target".to_string(), metadata.target().into());

        let body = match attributes.remove("message") {
            Some(Value::String(message)) => message,
            _ => metadata.name().to_string(),
        };

        serde_json::json!({
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            "severity_text": metadata.level().as_str(),
            "severity_number": Self::severity_number(metadata.level()),
            "body": body,
            "resource": Value::Object(self.resource.clone()),
            "attributes": Value::Object(attributes),
        })
    }
}

impl<S, N> FormatEvent<S, N> for OtelJsonFormatter
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
    N: for<'writer> FormatFields<'writer> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let line = serde_json::to_string(&self.record(event)).map_err(|_| fmt::Error)?;
        writeln!(writer, "{}", line)
    }
}

/// Install the global tracing subscriber described by `logging_config`.
///
/// `RUST_LOG` directives are honoured on top of the configured level.
pub fn init_logging(logging_config: &LoggingConfig) -> Result<(), LoggingError> {
    let level = parse_level(&logging_config.level)?;
    let format = parse_format(&logging_config.format)?;

    let filter_layer = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let registry = tracing_subscriber::registry().with(filter_layer);
    let result = match format {
        LogFormat::Json => registry
            .with(layer_fmt::layer().event_format(OtelJsonFormatter::new(
                &logging_config.service_name,
                &logging_config.service_version,
            )))
            .try_init(),
        LogFormat::Console => registry.with(layer_fmt::layer().pretty()).try_init(),
    };
    result.map_err(|e| LoggingError::Init(e.to_string()))
}
