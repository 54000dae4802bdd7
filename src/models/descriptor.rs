use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::collections::{Record, RecordError};
use crate::utils::value::json_kind;

/// How a figure accumulates over time.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FigureType {
    Current,
    Accumulated,
    Distribution,
}

impl FigureType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FigureType::Current => "current",
            FigureType::Accumulated => "accumulated",
            FigureType::Distribution => "distribution",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Seconds,
    Bytes,
    Percent,
    Number,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Seconds => "seconds",
            Units::Bytes => "bytes",
            Units::Percent => "percent",
            Units::Number => "number",
        }
    }
}

/// The schema of one statistics figure published by the server.
///
/// This only describes a metric; it never carries a measured value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MetricDescriptor {
    pub identifier: String,
    pub group: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub figure_type: FigureType,
    pub units: Units,
    /// Bucket boundaries, only present for distributions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuts: Option<Vec<f64>>,
    /// Attributes the server sends that are not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MetricDescriptor {
    /// Construct a descriptor with no cuts and no extra attributes.
    pub fn new(
        identifier: impl Into<String>,
        group: impl Into<String>,
        name: impl Into<String>,
        figure_type: FigureType,
        units: Units,
    ) -> Self {
        MetricDescriptor {
            identifier: identifier.into(),
            group: group.into(),
            name: name.into(),
            description: String::new(),
            figure_type,
            units,
            cuts: None,
            extra: Map::new(),
        }
    }

    /// Human readable label, falling back to the identifier when unnamed.
    pub fn label(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.identifier
        } else {
            &self.name
        }
    }

    fn validate(&self) -> Result<(), RecordError> {
        if self.identifier.trim().is_empty() {
            return Err(RecordError::MissingIdentifier);
        }
        if self.figure_type == FigureType::Distribution
            && self.cuts.as_ref().map_or(true, |cuts| cuts.is_empty())
        {
            return Err(RecordError::MissingCuts(self.identifier.clone()));
        }
        Ok(())
    }
}

impl Record for MetricDescriptor {
    fn from_value(value: &Value) -> Result<Self, RecordError> {
        if !value.is_object() {
            return Err(RecordError::NotAnObject(json_kind(value)));
        }
        let descriptor =
            MetricDescriptor::deserialize(value).map_err(|e| RecordError::Malformed(e.to_string()))?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    fn key(&self) -> &str {
        &self.identifier
    }

    fn to_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "descriptor serialized to {} instead of an object",
                json_kind(&other)
            ))),
        }
    }
}
