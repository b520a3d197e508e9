//! Domain models for invoicing-core.

mod entity;
mod invoice;
mod line_item;
mod tax_mode;

pub use entity::{CodeInfo, CodeMonth, Coded, EntityKind};
pub use invoice::{InvoiceDraft, InvoiceTotals, TaxBreakdown};
pub use line_item::{LineItem, LineItemInput};
pub use tax_mode::TaxMode;
