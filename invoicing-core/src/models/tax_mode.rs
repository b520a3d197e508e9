//! GST tax mode model for invoicing-core.

use crate::error::InvoicingError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How GST is applied to an invoice.
///
/// `Igst` is used for inter-state supply, `SgstCgst` for intra-state supply.
/// Both charge the same aggregate rate; they differ only in how the tax is
/// split across tax heads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaxMode {
    Igst,
    #[default]
    SgstCgst,
    NoGst,
}

impl TaxMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaxMode::Igst => "igst",
            TaxMode::SgstCgst => "sgst-cgst",
            TaxMode::NoGst => "no-gst",
        }
    }
}

impl FromStr for TaxMode {
    type Err = InvoicingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "igst" => Ok(TaxMode::Igst),
            "sgst-cgst" => Ok(TaxMode::SgstCgst),
            "no-gst" => Ok(TaxMode::NoGst),
            other => Err(InvoicingError::UnknownTaxMode(other.to_string())),
        }
    }
}

impl fmt::Display for TaxMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
