//! Entity kinds and the pieces of a sequential entity code.

use crate::error::InvoicingError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Business entity that receives a sequential code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Client,
    Project,
    Timesheet,
    Invoice,
    Expense,
    Receipt,
    Payment,
}

impl EntityKind {
    /// Every kind, in the order `extract_code_info` tries them.
    pub const ALL: [EntityKind; 7] = [
        EntityKind::Client,
        EntityKind::Project,
        EntityKind::Timesheet,
        EntityKind::Invoice,
        EntityKind::Expense,
        EntityKind::Receipt,
        EntityKind::Payment,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            EntityKind::Client => "CLT",
            EntityKind::Project => "PRJ",
            EntityKind::Timesheet => "TMS",
            EntityKind::Invoice => "INV",
            EntityKind::Expense => "EXP",
            EntityKind::Receipt => "RCP",
            EntityKind::Payment => "PAY",
        }
    }

    pub fn from_prefix(prefix: &str) -> Result<Self, InvoicingError> {
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.prefix() == prefix)
            .ok_or_else(|| InvoicingError::UnknownEntityPrefix(prefix.to_string()))
    }

    /// Month-scoped kinds carry `-MM` in their codes and restart every month.
    pub fn is_month_scoped(&self) -> bool {
        matches!(
            self,
            EntityKind::Timesheet | EntityKind::Expense | EntityKind::Receipt | EntityKind::Payment
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Client => "client",
            EntityKind::Project => "project",
            EntityKind::Timesheet => "timesheet",
            EntityKind::Invoice => "invoice",
            EntityKind::Expense => "expense",
            EntityKind::Receipt => "receipt",
            EntityKind::Payment => "payment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

const MIN_YEAR: i32 = 1000;
const MAX_YEAR: i32 = 9999;

/// Calendar month a month-scoped code is generated into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CodeMonth {
    year: i32,
    month: u32,
}

impl CodeMonth {
    /// Returns `None` unless `month` is 1..=12 and `year` has four digits.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (MIN_YEAR..=MAX_YEAR).contains(&year) && (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }
}

/// Years outside 1000..=9999 are clamped to the nearest four-digit year.
impl From<NaiveDate> for CodeMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year().clamp(MIN_YEAR, MAX_YEAR),
            month: date.month(),
        }
    }
}

impl FromStr for CodeMonth {
    type Err = InvoicingError;

    /// Accepts `YYYY-MM` or a full `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvoicingError::InvalidMonth(s.to_string());
        let trimmed = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return CodeMonth::new(date.year(), date.month()).ok_or_else(invalid);
        }

        let (year, month) = trimmed.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        CodeMonth::new(year, month).ok_or_else(invalid)
    }
}

impl fmt::Display for CodeMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Parsed form of an entity code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeInfo {
    pub kind: EntityKind,
    pub year: i32,
    pub month: Option<u32>,
    pub sequence: u64,
}

/// Anything that may carry a previously issued code.
///
/// Records without a code yet (or with an empty one) report `None` and are
/// left out of sequence derivation.
pub trait Coded {
    fn code(&self) -> Option<&str>;
}

impl Coded for str {
    fn code(&self) -> Option<&str> {
        Some(self).filter(|s| !s.is_empty())
    }
}

impl Coded for String {
    fn code(&self) -> Option<&str> {
        self.as_str().code()
    }
}

impl<T: Coded> Coded for Option<T> {
    fn code(&self) -> Option<&str> {
        self.as_ref().and_then(Coded::code)
    }
}

impl<T: Coded + ?Sized> Coded for &T {
    fn code(&self) -> Option<&str> {
        (**self).code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_prefix(kind.prefix()).unwrap(), kind);
        }
        assert!(matches!(
            EntityKind::from_prefix("XYZ"),
            Err(InvoicingError::UnknownEntityPrefix(_))
        ));
    }

    #[test]
    fn test_month_scoped_kinds() {
        assert!(EntityKind::Timesheet.is_month_scoped());
        assert!(EntityKind::Expense.is_month_scoped());
        assert!(EntityKind::Receipt.is_month_scoped());
        assert!(EntityKind::Payment.is_month_scoped());
        assert!(!EntityKind::Client.is_month_scoped());
        assert!(!EntityKind::Project.is_month_scoped());
        assert!(!EntityKind::Invoice.is_month_scoped());
    }

    #[test]
    fn test_parse_code_month() {
        let month: CodeMonth = "2025-03".parse().unwrap();
        assert_eq!(month.year(), 2025);
        assert_eq!(month.month(), 3);
        assert_eq!(month.to_string(), "2025-03");

        let from_date: CodeMonth = "2024-12-31".parse().unwrap();
        assert_eq!(from_date, CodeMonth::new(2024, 12).unwrap());
    }

    #[test]
    fn test_from_date_keeps_four_digit_year() {
        let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
        assert_eq!(CodeMonth::from(date), CodeMonth::new(2025, 7).unwrap());

        let far = CodeMonth::from(NaiveDate::from_ymd_opt(10_000, 3, 1).unwrap());
        assert_eq!(far, CodeMonth::new(9999, 3).unwrap());
        assert_eq!(far.to_string(), "9999-03");

        let early = CodeMonth::from(NaiveDate::from_ymd_opt(999, 11, 1).unwrap());
        assert_eq!(early.to_string(), "1000-11");

        let bce = CodeMonth::from(NaiveDate::from_ymd_opt(-44, 3, 15).unwrap());
        assert_eq!(bce.year(), 1000);
    }

    #[test]
    fn test_parse_code_month_rejects_garbage() {
        for input in ["", "2025", "2025-13", "2025-00", "25-03", "2025-3", "abcd-ef"] {
            assert!(
                matches!(input.parse::<CodeMonth>(), Err(InvoicingError::InvalidMonth(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_coded_impls() {
        assert_eq!("CLT-2025-0001".code(), Some("CLT-2025-0001"));
        assert_eq!("".code(), None);
        assert_eq!(Some("INV-2025-0002".to_string()).code(), Some("INV-2025-0002"));
        assert_eq!(None::<String>.code(), None);
    }
}
