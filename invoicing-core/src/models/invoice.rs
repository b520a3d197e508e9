//! Invoice draft model for invoicing-core.

use super::{LineItem, TaxMode};
use crate::config::InvoicingConfig;
use crate::error::InvoicingError;
use crate::services::computation::compute_invoice_totals;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax split across the GST heads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub igst: Decimal,
    pub sgst: Decimal,
    pub cgst: Decimal,
}

impl TaxBreakdown {
    pub fn total(&self) -> Result<Decimal, InvoicingError> {
        self.igst
            .checked_add(self.sgst)
            .and_then(|sum| sum.checked_add(self.cgst))
            .ok_or(InvoicingError::AmountOverflow { field: "tax_amount" })
    }
}

/// Derived invoice figures. Never edited directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub tax_mode: TaxMode,
    pub subtotal: Decimal,
    pub breakdown: TaxBreakdown,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

/// Invoice being edited: its line items and the selected tax mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceDraft {
    pub items: Vec<LineItem>,
    pub tax_mode: TaxMode,
}

impl InvoiceDraft {
    pub fn new(tax_mode: TaxMode) -> Self {
        Self {
            items: Vec::new(),
            tax_mode,
        }
    }

    /// Empty draft using the configured default tax mode.
    pub fn from_config(config: &InvoicingConfig) -> Self {
        Self::new(config.default_tax_mode)
    }

    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Remove the item at `index`, if there is one.
    pub fn remove_item(&mut self, index: usize) -> Option<LineItem> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    pub fn set_tax_mode(&mut self, tax_mode: TaxMode) {
        self.tax_mode = tax_mode;
    }

    /// Recompute subtotal, tax and total from the current items and mode.
    pub fn totals(&self) -> Result<InvoiceTotals, InvoicingError> {
        compute_invoice_totals(&self.items, self.tax_mode)
    }
}
