use std::any::TypeId;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::transport::{Transport, TransportError};
use crate::utils::value::{json_kind, preview};

/// Why a single entry of a fetched payload could not become a record.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("expected an object, got {0}")]
    NotAnObject(&'static str),

    #[error("malformed record: {0}")]
    Malformed(String),

    #[error("record has an empty identifier")]
    MissingIdentifier,

    #[error("distribution '{0}' has no cuts")]
    MissingCuts(String),
}

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("response from {url} is not a sequence of records (got {kind})")]
    NotASequence { url: String, kind: &'static str },
}

/// A strongly typed record that can be built from an untyped payload fragment.
pub trait Record: Sized + Send + Sync + 'static {
    /// Validating constructor. Anything that does not fit the schema is rejected.
    fn from_value(value: &Value) -> Result<Self, RecordError>;

    /// The identifier records are looked up by.
    fn key(&self) -> &str;

    /// The record as a mapping from field name to value.
    fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error>;
}

/// A payload entry that was kept out of the collection.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRecord {
    /// Position of the entry in the parsed response.
    pub index: usize,
    pub value: Value,
    pub reason: RecordError,
}

/// Outcome of a single `fetch`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchReport {
    /// Records whose identifier was not in the collection yet.
    pub added: usize,
    /// Records that replaced one with the same identifier.
    pub updated: usize,
    pub rejected: Vec<RejectedRecord>,
}

/// An ordered container of records bound to one server path.
///
/// Implementors supply the path and the storage; population from the server
/// is provided by `fetch`.
#[async_trait]
pub trait Collection: Send {
    type Record: Record;

    /// Path the collection is fetched from.
    fn url(&self) -> &'static str;

    fn records(&self) -> &[Self::Record];

    fn records_mut(&mut self) -> &mut Vec<Self::Record>;

    /// Replace the entries quarantined by the previous fetch.
    fn quarantine(&mut self, rejected: Vec<RejectedRecord>);

    /// The type each member record is built as.
    fn model(&self) -> TypeId {
        TypeId::of::<Self::Record>()
    }

    /// Insert `record` keyed by `Record::key`. A record with the same key is
    /// replaced in place; otherwise it is appended. Returns `true` on append.
    fn upsert(&mut self, record: Self::Record) -> bool {
        let records = self.records_mut();
        match records.iter_mut().find(|r| r.key() == record.key()) {
            Some(existing) => {
                *existing = record;
                false
            }
            None => {
                records.push(record);
                true
            }
        }
    }

    /// Normalization hook applied to the decoded response before records are built.
    fn parse(&self, response: Value) -> Value {
        response
    }

    /// Request `url()`, run the response through `parse` and upsert one
    /// record per element of the result. Entries quarantined by an earlier
    /// fetch are dropped first, whatever the outcome of this one.
    async fn fetch(&mut self, transport: &dyn Transport) -> Result<FetchReport, CollectionError> {
        let url = self.url();
        debug!(
            event_name = "collections.fetch.start",
            event_domain = "collections",
            url,
            transport = transport.get_name(),
            "fetching collection"
        );

        self.quarantine(Vec::new());
        let response = transport.get_json(url).await?;
        let items = match self.parse(response) {
            Value::Array(items) => items,
            other => {
                warn!(
                    event_name = "collections.fetch.not_a_sequence",
                    event_domain = "collections",
                    url,
                    kind = json_kind(&other),
                    "response is not a sequence of records"
                );
                return Err(CollectionError::NotASequence {
                    url: url.to_string(),
                    kind: json_kind(&other),
                });
            }
        };

        let mut report = FetchReport::default();
        for (index, item) in items.into_iter().enumerate() {
            match Self::Record::from_value(&item) {
                Ok(record) => {
                    if self.upsert(record) {
                        report.added += 1;
                    } else {
                        report.updated += 1;
                    }
                }
                Err(reason) => {
                    warn!(
                        event_name = "collections.fetch.rejected",
                        event_domain = "collections",
                        url,
                        index,
                        reason = %reason,
                        entry = preview(&item, 120).as_str(),
                        "quarantined malformed entry"
                    );
                    report.rejected.push(RejectedRecord {
                        index,
                        value: item,
                        reason,
                    });
                }
            }
        }

        self.quarantine(report.rejected.clone());
        info!(
            event_name = "collections.fetch.done",
            event_domain = "collections",
            url,
            added = report.added,
            updated = report.updated,
            rejected = report.rejected.len(),
            total = self.records().len(),
            "collection populated"
        );
        Ok(report)
    }
}
