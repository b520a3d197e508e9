//! Services module for invoicing-core.

pub mod cache;
pub mod clock;
pub mod code_generator;
pub mod computation;
pub mod formatting;
pub mod metrics;
pub mod words;

pub use cache::TtlCache;
pub use clock::{Clock, FixedClock, SystemClock};
pub use code_generator::{
    extract_code_info, generate_unique_id, next_sequential_code, CodeGenerator,
};
pub use computation::{
    compute_invoice_totals, compute_subtotal, compute_tax, compute_total, tax_breakdown,
    GST_RATE, HALF_GST_RATE,
};
pub use formatting::format_inr;
pub use metrics::{get_metrics, init_metrics};
pub use words::{amount_in_words, rupees_in_words, AMOUNT_TOO_LARGE};
