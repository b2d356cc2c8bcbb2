//! Document snapshots: the host's in-memory record at lifecycle time.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value::FieldValue;

/// Read-only view of a host document.
///
/// Hooks only ever see a document through this trait; ownership stays with the host.
pub trait Document {
    /// Document type name (e.g. "Sales Invoice").
    fn doctype(&self) -> &str;

    /// Document name, if the host already assigned one.
    fn name(&self) -> Option<&str>;

    /// Field lookup. `None` means the field is absent, `Some(FieldValue::Null)`
    /// that it is present but null.
    fn get(&self, field: &str) -> Option<&FieldValue>;
}

/// Generic snapshot of any doctype, in the host's JSON shape:
/// `{"doctype": "...", "name": "...", "<field>": <value>, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocSnapshot {
    doctype: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(flatten)]
    fields: BTreeMap<String, FieldValue>,
}

impl DocSnapshot {
    pub fn new(doctype: impl Into<String>) -> Self {
        Self {
            doctype: doctype.into(),
            name: None,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Parse a snapshot as serialized by the host.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("invalid document snapshot: {e}")))
    }

    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }
}

impl Document for DocSnapshot {
    fn doctype(&self) -> &str {
        &self.doctype
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }
}
