//! Tax category presence check for Sales Invoices.

use tims_core::{Document, DomainError, DomainResult, FieldValue, display_field, is_empty_field};
use tims_hooks::{DocEvent, DocumentHook};

pub const TAX_CATEGORY: &str = "tax_category";
pub const CUSTOMER: &str = "customer";

/// User-facing message for a missing tax category.
pub fn missing_tax_category_message(customer: Option<&FieldValue>) -> String {
    format!(
        "Please select the Customer {}'s Tax Category",
        display_field(customer)
    )
}

/// Reject a document whose `tax_category` is empty (see [`FieldValue::is_empty`]).
///
/// `customer` is only read for the message; it is not itself checked.
pub fn validate_tax_category<D>(doc: &D) -> DomainResult<()>
where
    D: Document + ?Sized,
{
    if is_empty_field(doc.get(TAX_CATEGORY)) {
        return Err(DomainError::missing_field(
            TAX_CATEGORY,
            missing_tax_category_message(doc.get(CUSTOMER)),
        ));
    }
    Ok(())
}

/// Runs [`validate_tax_category`] on `validate`; other events pass through.
#[derive(Debug, Default, Clone, Copy)]
pub struct TaxCategoryRequired;

impl DocumentHook for TaxCategoryRequired {
    fn name(&self) -> &'static str {
        "tax_category_required"
    }

    fn run(&self, event: DocEvent, doc: &dyn Document) -> DomainResult<()> {
        match event {
            DocEvent::Validate => validate_tax_category(doc),
            DocEvent::BeforeSave | DocEvent::OnSubmit => Ok(()),
        }
    }
}
