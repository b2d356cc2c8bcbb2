use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Document lifecycle extension points a host fires before committing a document.
///
/// Names match the host's event names (e.g. "validate").
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocEvent {
    /// Fired on every save, before anything is written.
    Validate,
    /// Fired after validation, right before the row is written.
    BeforeSave,
    /// Fired when a saved document is submitted.
    OnSubmit,
}

impl DocEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            DocEvent::Validate => "validate",
            DocEvent::BeforeSave => "before_save",
            DocEvent::OnSubmit => "on_submit",
        }
    }
}

impl core::fmt::Display for DocEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown document event: {0}")]
pub struct UnknownDocEvent(pub String);

impl FromStr for DocEvent {
    type Err = UnknownDocEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "validate" => Ok(DocEvent::Validate),
            "before_save" => Ok(DocEvent::BeforeSave),
            "on_submit" => Ok(DocEvent::OnSubmit),
            other => Err(UnknownDocEvent(other.to_string())),
        }
    }
}
