//! Typed record collections populated from the server.

pub mod base;
pub mod statistics_description;

pub use base::*;
pub use statistics_description::{MetricDescriptorCollection, STATISTICS_DESCRIPTION_PATH};
