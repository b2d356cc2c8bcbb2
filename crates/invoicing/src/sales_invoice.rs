use serde::{Deserialize, Serialize};

use tims_core::{DocSnapshot, Document, DomainError, DomainResult, FieldValue};

use crate::tax_category::{CUSTOMER, TAX_CATEGORY};

/// Read-only view of a "Sales Invoice" snapshot.
///
/// Wraps the host snapshot rather than copying fields out of it, so fields the
/// hooks never look at (items, totals, ...) survive untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DocSnapshot", into = "DocSnapshot")]
pub struct SalesInvoice(DocSnapshot);

impl SalesInvoice {
    pub const DOCTYPE: &'static str = "Sales Invoice";

    /// Build an unsaved invoice for `customer`. `None` leaves `tax_category` absent.
    pub fn new(customer: impl Into<FieldValue>, tax_category: Option<FieldValue>) -> Self {
        let mut doc = DocSnapshot::new(Self::DOCTYPE).with_field(CUSTOMER, customer);
        if let Some(tax_category) = tax_category {
            doc = doc.with_field(TAX_CATEGORY, tax_category);
        }
        Self(doc)
    }

    pub fn with_name(self, name: impl Into<String>) -> Self {
        Self(self.0.with_name(name))
    }

    pub fn from_json(json: &str) -> DomainResult<Self> {
        DocSnapshot::from_json(json)?.try_into()
    }

    pub fn tax_category(&self) -> Option<&FieldValue> {
        self.0.get(TAX_CATEGORY)
    }

    pub fn customer(&self) -> Option<&FieldValue> {
        self.0.get(CUSTOMER)
    }

    pub fn snapshot(&self) -> &DocSnapshot {
        &self.0
    }
}

impl TryFrom<DocSnapshot> for SalesInvoice {
    type Error = DomainError;

    fn try_from(doc: DocSnapshot) -> Result<Self, Self::Error> {
        if doc.doctype() != Self::DOCTYPE {
            return Err(DomainError::validation(format!(
                "expected a {} snapshot, got {}",
                Self::DOCTYPE,
                doc.doctype()
            )));
        }
        Ok(Self(doc))
    }
}

impl From<SalesInvoice> for DocSnapshot {
    fn from(invoice: SalesInvoice) -> Self {
        invoice.0
    }
}

impl Document for SalesInvoice {
    fn doctype(&self) -> &str {
        self.0.doctype()
    }

    fn name(&self) -> Option<&str> {
        self.0.name()
    }

    fn get(&self, field: &str) -> Option<&FieldValue> {
        self.0.get(field)
    }
}
