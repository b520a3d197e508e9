//! Shared helpers for invoicing-core integration tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use invoicing_core::models::LineItem;
use invoicing_core::services::{CodeGenerator, FixedClock};
use rust_decimal::Decimal;
use std::str::FromStr;

/// A record as the persistence layer would hand it back.
#[derive(Debug, Clone)]
pub struct StoredRecord {
    pub id: u32,
    pub code: Option<String>,
}

impl invoicing_core::models::Coded for StoredRecord {
    fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

pub fn records(codes: &[&str]) -> Vec<StoredRecord> {
    codes
        .iter()
        .enumerate()
        .map(|(i, code)| StoredRecord {
            id: i as u32 + 1,
            code: Some(code.to_string()),
        })
        .collect()
}

/// Generator whose clock reads noon UTC on the given day.
pub fn generator_at(year: i32, month: u32, day: u32) -> (CodeGenerator<FixedClock>, FixedClock) {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap());
    (CodeGenerator::with_clock(clock.clone()), clock)
}

pub fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).expect("valid decimal literal")
}

pub fn item(description: &str, quantity: &str, unit_price: &str) -> LineItem {
    LineItem::new(description, dec(quantity), dec(unit_price)).expect("valid line item")
}
