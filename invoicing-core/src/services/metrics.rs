//! Prometheus metrics for invoicing-core.

use once_cell::sync::Lazy;
use prometheus::{register_counter_vec, CounterVec, TextEncoder};

/// Codes issued, by entity prefix.
pub static CODES_GENERATED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "invoicing_codes_generated_total",
        "Total number of sequential codes generated",
        &["entity"]
    )
    .expect("Failed to register codes_generated_total")
});

/// Existing codes in scope that did not match the expected shape.
pub static MALFORMED_CODES_SKIPPED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "invoicing_malformed_codes_skipped_total",
        "Total number of malformed existing codes skipped during generation",
        &["entity"]
    )
    .expect("Failed to register malformed_codes_skipped_total")
});

/// Invoice total computations by tax mode.
pub static TOTALS_COMPUTED_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "invoicing_totals_computed_total",
        "Total number of invoice total computations by tax mode",
        &["tax_mode"] // igst, sgst-cgst, no-gst
    )
    .expect("Failed to register totals_computed_total")
});

/// Cache lookups by outcome.
pub static CACHE_LOOKUPS_TOTAL: Lazy<CounterVec> = Lazy::new(|| {
    register_counter_vec!(
        "invoicing_cache_lookups_total",
        "Total number of TTL cache lookups by outcome",
        &["outcome"] // hit, miss, expired
    )
    .expect("Failed to register cache_lookups_total")
});

/// Initialize all metrics (forces lazy initialization).
pub fn init_metrics() {
    Lazy::force(&CODES_GENERATED_TOTAL);
    Lazy::force(&MALFORMED_CODES_SKIPPED_TOTAL);
    Lazy::force(&TOTALS_COMPUTED_TOTAL);
    Lazy::force(&CACHE_LOOKUPS_TOTAL);
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder
        .encode_to_string(&metric_families)
        .unwrap_or_default()
}
