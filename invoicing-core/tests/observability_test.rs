//! Logging and metrics wiring tests for invoicing-core.

mod common;

use common::{generator_at, item, records};
use invoicing_core::config::InvoicingConfig;
use invoicing_core::init_observability;
use invoicing_core::models::TaxMode;
use invoicing_core::services::{compute_invoice_totals, get_metrics};
use serial_test::serial;

#[test]
#[serial]
fn init_observability_is_repeatable() {
    let config = InvoicingConfig::default();
    init_observability(&config);
    init_observability(&config);
}

#[test]
#[serial]
fn generation_and_totals_are_counted() {
    let (generator, _) = generator_at(2025, 1, 15);
    generator.generate_client_code(&records(&["CLT-2025-0001", "CLT-2025-bad"]));
    compute_invoice_totals(&[item("Audit", "1", "1000")], TaxMode::Igst).unwrap();

    let metrics = get_metrics();
    assert!(metrics.contains("invoicing_codes_generated_total"));
    assert!(metrics.contains("invoicing_malformed_codes_skipped_total"));
    assert!(metrics.contains("invoicing_totals_computed_total"));
    assert!(metrics.contains(r#"tax_mode="igst""#));
}
