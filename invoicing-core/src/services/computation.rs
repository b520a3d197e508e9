//! Invoice subtotal, GST and grand total.
//!
//! All values are exact decimals. Nothing here rounds; rounding to paise is
//! a presentation concern (see `formatting::format_inr`). Arithmetic is
//! checked: a figure beyond `Decimal::MAX` comes back as
//! `InvoicingError::AmountOverflow` naming the figure.

use crate::error::InvoicingError;
use crate::models::{InvoiceTotals, LineItem, TaxBreakdown, TaxMode};
use crate::services::metrics::TOTALS_COMPUTED_TOTAL;
use rust_decimal::Decimal;

/// Aggregate GST rate, 18%.
pub const GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Rate of each intra-state head (SGST and CGST), 9%.
pub const HALF_GST_RATE: Decimal = Decimal::from_parts(9, 0, 0, false, 2);

/// Sum of line item totals.
pub fn compute_subtotal(items: &[LineItem]) -> Result<Decimal, InvoicingError> {
    items.iter().try_fold(Decimal::ZERO, |sum, item| {
        sum.checked_add(item.total())
            .ok_or(InvoicingError::AmountOverflow { field: "subtotal" })
    })
}

/// Total tax for `subtotal` under `mode`.
///
/// IGST and SGST+CGST both come to 18% of the subtotal.
pub fn compute_tax(subtotal: Decimal, mode: TaxMode) -> Result<Decimal, InvoicingError> {
    match mode {
        TaxMode::Igst | TaxMode::SgstCgst => rate_of(subtotal, GST_RATE),
        TaxMode::NoGst => Ok(Decimal::ZERO),
    }
}

/// Tax per GST head for `subtotal` under `mode`.
pub fn tax_breakdown(subtotal: Decimal, mode: TaxMode) -> Result<TaxBreakdown, InvoicingError> {
    let breakdown = match mode {
        TaxMode::Igst => TaxBreakdown {
            igst: compute_tax(subtotal, mode)?,
            ..TaxBreakdown::default()
        },
        TaxMode::SgstCgst => {
            let half = rate_of(subtotal, HALF_GST_RATE)?;
            TaxBreakdown {
                igst: Decimal::ZERO,
                sgst: half,
                cgst: half,
            }
        }
        TaxMode::NoGst => TaxBreakdown::default(),
    };
    Ok(breakdown)
}

pub fn compute_total(subtotal: Decimal, tax_amount: Decimal) -> Result<Decimal, InvoicingError> {
    subtotal
        .checked_add(tax_amount)
        .ok_or(InvoicingError::AmountOverflow { field: "total" })
}

/// Subtotal, tax and total for a set of items in one pass.
pub fn compute_invoice_totals(
    items: &[LineItem],
    mode: TaxMode,
) -> Result<InvoiceTotals, InvoicingError> {
    let subtotal = compute_subtotal(items)?;
    let breakdown = tax_breakdown(subtotal, mode)?;
    let tax_amount = breakdown.total()?;
    let total = compute_total(subtotal, tax_amount)?;

    TOTALS_COMPUTED_TOTAL
        .with_label_values(&[mode.as_str()])
        .inc();

    Ok(InvoiceTotals {
        tax_mode: mode,
        subtotal,
        breakdown,
        tax_amount,
        total,
    })
}

fn rate_of(amount: Decimal, rate: Decimal) -> Result<Decimal, InvoicingError> {
    amount
        .checked_mul(rate)
        .ok_or(InvoicingError::AmountOverflow { field: "tax_amount" })
}
