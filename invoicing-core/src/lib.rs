//! invoicing-core: sequential entity codes and GST invoice computation.
//!
//! Everything in [`services::code_generator`] and [`services::computation`]
//! is a pure function of its input. Callers supply a snapshot of existing
//! records and persist the results; duplicate codes from concurrent callers
//! must be caught by a uniqueness constraint where the codes are stored.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

use crate::config::InvoicingConfig;
use service_core::observability::init_tracing;

pub use error::InvoicingError;

/// Install logging and register metrics for a process embedding this crate.
pub fn init_observability(config: &InvoicingConfig) {
    init_tracing(&config.service_name, &config.log_level, config.log_format);
    services::init_metrics();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        default_tax_mode = %config.default_tax_mode,
        "invoicing-core initialized"
    );
}
