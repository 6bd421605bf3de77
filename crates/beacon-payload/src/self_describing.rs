//! Self-describing JSON envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Payload;

/// A schema-tagged JSON envelope: `{"schema": ..., "data": ...}`.
///
/// The schema URI tells a downstream consumer how to interpret the data
/// block without out-of-band knowledge. Envelopes nest: the data block
/// of one envelope may itself be another envelope, which is how context
/// entities ride along inside a wrapping payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelfDescribingJson {
    schema: String,
    data: Value,
}

impl SelfDescribingJson {
    /// Wraps an arbitrary JSON value under `schema`.
    pub fn new(schema: impl Into<String>, data: Value) -> Self {
        Self {
            schema: schema.into(),
            data,
        }
    }

    /// Wraps a payload's entries under `schema`.
    pub fn from_payload(schema: impl Into<String>, payload: Payload) -> Self {
        Self::new(schema, payload.into_value())
    }

    /// Wraps another envelope under `schema`, nesting it as the data
    /// block.
    pub fn from_envelope(schema: impl Into<String>, inner: SelfDescribingJson) -> Self {
        Self::new(schema, inner.to_value())
    }

    /// The schema URI.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// The data block.
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Renders the envelope as a JSON value.
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "schema": self.schema,
            "data": self.data,
        })
    }
}
