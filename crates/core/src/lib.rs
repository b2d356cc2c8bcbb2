//! `tims-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no host framework concerns):
//! field values, document snapshots, and the error model hooks report with.

pub mod document;
pub mod error;
pub mod value;

pub use document::{DocSnapshot, Document};
pub use error::{DomainError, DomainResult};
pub use value::{FieldValue, display_field, is_empty_field};
