//! Line item model for invoicing-core.

use crate::error::InvoicingError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Line item on an invoice.
///
/// `total` is always `quantity * unit_price`. It is recomputed by every
/// setter and cannot be written directly; deserialization recomputes it too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LineItemInput")]
pub struct LineItem {
    description: String,
    quantity: Decimal,
    unit_price: Decimal,
    total: Decimal,
}

/// Wire shape accepted when deserializing a line item. Any `total` sent by a
/// client is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct LineItemInput {
    #[serde(default)]
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl LineItem {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Result<Self, InvoicingError> {
        let quantity = non_negative("quantity", quantity)?;
        let unit_price = non_negative("unit_price", unit_price)?;

        Ok(Self {
            description: description.into(),
            quantity,
            unit_price,
            total: line_total(quantity, unit_price)?,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn total(&self) -> Decimal {
        self.total
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// A rejected edit leaves the item untouched.
    pub fn set_quantity(&mut self, quantity: Decimal) -> Result<(), InvoicingError> {
        let quantity = non_negative("quantity", quantity)?;
        self.total = line_total(quantity, self.unit_price)?;
        self.quantity = quantity;
        Ok(())
    }

    /// A rejected edit leaves the item untouched.
    pub fn set_unit_price(&mut self, unit_price: Decimal) -> Result<(), InvoicingError> {
        let unit_price = non_negative("unit_price", unit_price)?;
        self.total = line_total(self.quantity, unit_price)?;
        self.unit_price = unit_price;
        Ok(())
    }
}

impl TryFrom<LineItemInput> for LineItem {
    type Error = InvoicingError;

    fn try_from(input: LineItemInput) -> Result<Self, Self::Error> {
        LineItem::new(input.description, input.quantity, input.unit_price)
    }
}

fn line_total(quantity: Decimal, unit_price: Decimal) -> Result<Decimal, InvoicingError> {
    quantity
        .checked_mul(unit_price)
        .ok_or(InvoicingError::AmountOverflow { field: "total" })
}

fn non_negative(field: &'static str, value: Decimal) -> Result<Decimal, InvoicingError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(InvoicingError::NegativeAmount { field, value });
    }
    Ok(value)
}
