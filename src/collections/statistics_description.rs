use tracing::debug;
use uuid::Uuid;

use super::base::{Collection, Record, RejectedRecord};
use crate::models::MetricDescriptor;

/// Server path the descriptors are served from.
pub const STATISTICS_DESCRIPTION_PATH: &str = "/_admin/statistics-description";

/// The metric descriptors known to the server, in the order they were received.
///
/// One instance per consumer. Instances never share storage.
#[derive(Debug)]
pub struct MetricDescriptorCollection {
    session_id: Uuid,
    records: Vec<MetricDescriptor>,
    rejected: Vec<RejectedRecord>,
}

impl MetricDescriptorCollection {
    pub fn new() -> Self {
        let session_id = Uuid::new_v4();
        debug!(
            event_name = "collections.statistics_description.created",
            event_domain = "collections",
            session_id = %session_id,
            "created metric descriptor collection"
        );
        Self {
            session_id,
            records: Vec::new(),
            rejected: Vec::new(),
        }
    }

    /// Identifier of this instance, attached to its log events.
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetricDescriptor> {
        self.records.iter()
    }

    pub fn get(&self, identifier: &str) -> Option<&MetricDescriptor> {
        self.records.iter().find(|d| d.key() == identifier)
    }

    /// Append a descriptor. An existing descriptor with the same identifier is
    /// replaced in place and keeps its position.
    pub fn add(&mut self, descriptor: MetricDescriptor) {
        self.upsert(descriptor);
    }

    pub fn remove(&mut self, identifier: &str) -> Option<MetricDescriptor> {
        let position = self.records.iter().position(|d| d.key() == identifier)?;
        Some(self.records.remove(position))
    }

    /// Drop all records and any quarantined entries.
    pub fn reset(&mut self) {
        self.records.clear();
        self.rejected.clear();
    }

    /// Entries the last fetch refused to turn into descriptors.
    pub fn rejected(&self) -> &[RejectedRecord] {
        &self.rejected
    }

    /// Descriptors grouped by their `group`, groups in first-seen order.
    pub fn groups(&self) -> Vec<(&str, Vec<&MetricDescriptor>)> {
        let mut groups: Vec<(&str, Vec<&MetricDescriptor>)> = Vec::new();
        for descriptor in &self.records {
            match groups
                .iter_mut()
                .find(|(group, _)| *group == descriptor.group)
            {
                Some((_, members)) => members.push(descriptor),
                None => groups.push((descriptor.group.as_str(), vec![descriptor])),
            }
        }
        groups
    }
}

impl Default for MetricDescriptorCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl Collection for MetricDescriptorCollection {
    type Record = MetricDescriptor;

    fn url(&self) -> &'static str {
        STATISTICS_DESCRIPTION_PATH
    }

    fn records(&self) -> &[MetricDescriptor] {
        &self.records
    }

    fn records_mut(&mut self) -> &mut Vec<MetricDescriptor> {
        &mut self.records
    }

    fn quarantine(&mut self, rejected: Vec<RejectedRecord>) {
        self.rejected = rejected;
    }
}

impl<'a> IntoIterator for &'a MetricDescriptorCollection {
    type Item = &'a MetricDescriptor;
    type IntoIter = std::slice::Iter<'a, MetricDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
