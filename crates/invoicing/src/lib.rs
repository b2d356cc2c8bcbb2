//! Invoicing hooks for the TIMS integration.
//!
//! Business rules for Sales Invoices, implemented as deterministic hooks over
//! host snapshots (no IO, no HTTP, no storage).

pub mod sales_invoice;
pub mod settings;
pub mod tax_category;

pub use sales_invoice::SalesInvoice;
pub use settings::{SettingsError, TimsSettings};
pub use tax_category::{TaxCategoryRequired, missing_tax_category_message, validate_tax_category};

use tims_hooks::HookRegistry;

/// Register this crate's document hooks with the host registry.
pub fn register_hooks(registry: &mut HookRegistry) {
    registry.register(SalesInvoice::DOCTYPE, TaxCategoryRequired);
}
