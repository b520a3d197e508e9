//! Amounts in words, Indian grouping (Thousand, Lakh).

use crate::error::InvoicingError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Returned for amounts of one crore and above.
pub const AMOUNT_TOO_LARGE: &str = "Amount too large";

const ONES: [&str; 10] = [
    "", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine",
];

const TEENS: [&str; 10] = [
    "Ten", "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen",
    "Eighteen", "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

const THOUSAND: u64 = 1_000;
const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;

/// Render a whole amount in words, e.g. `118000` as "One Lakh Eighteen Thousand".
///
/// Amounts of 1,00,00,000 and above return [`AMOUNT_TOO_LARGE`].
pub fn amount_in_words(amount: u64) -> String {
    if amount == 0 {
        return "Zero".to_string();
    }
    if amount >= CRORE {
        return AMOUNT_TOO_LARGE.to_string();
    }
    words(amount)
}

// `n` is in 1..CRORE.
fn words(n: u64) -> String {
    match n {
        0 => String::new(),
        1..=9 => ONES[n as usize].to_string(),
        10..=19 => TEENS[(n - 10) as usize].to_string(),
        20..=99 => join(TENS[(n / 10) as usize].to_string(), n % 10),
        100..=999 => join(format!("{} Hundred", ONES[(n / 100) as usize]), n % 100),
        1_000..=99_999 => join(format!("{} Thousand", words(n / THOUSAND)), n % THOUSAND),
        _ => join(format!("{} Lakh", words(n / LAKH)), n % LAKH),
    }
}

fn join(head: String, remainder: u64) -> String {
    if remainder == 0 {
        head
    } else {
        format!("{} {}", head, words(remainder))
    }
}

/// "Rupees <words> Only" for the whole-rupee part of `amount`.
///
/// Out-of-range amounts return the bare [`AMOUNT_TOO_LARGE`] sentinel.
pub fn rupees_in_words(amount: Decimal) -> Result<String, InvoicingError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(InvoicingError::NegativeAmount {
            field: "amount",
            value: amount,
        });
    }

    let rupees = match amount.trunc().to_u64() {
        Some(rupees) => rupees,
        None => return Ok(AMOUNT_TOO_LARGE.to_string()),
    };

    let words = amount_in_words(rupees);
    if words == AMOUNT_TOO_LARGE {
        return Ok(words);
    }
    Ok(format!("Rupees {} Only", words))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_small_numbers() {
        assert_eq!(amount_in_words(0), "Zero");
        assert_eq!(amount_in_words(7), "Seven");
        assert_eq!(amount_in_words(10), "Ten");
        assert_eq!(amount_in_words(19), "Nineteen");
        assert_eq!(amount_in_words(20), "Twenty");
        assert_eq!(amount_in_words(45), "Forty Five");
        assert_eq!(amount_in_words(99), "Ninety Nine");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(amount_in_words(100), "One Hundred");
        assert_eq!(amount_in_words(101), "One Hundred One");
        assert_eq!(amount_in_words(512), "Five Hundred Twelve");
        assert_eq!(amount_in_words(999), "Nine Hundred Ninety Nine");
    }

    #[test]
    fn test_thousands_and_lakhs() {
        assert_eq!(amount_in_words(1_000), "One Thousand");
        assert_eq!(amount_in_words(1_005), "One Thousand Five");
        assert_eq!(amount_in_words(18_000), "Eighteen Thousand");
        assert_eq!(
            amount_in_words(99_999),
            "Ninety Nine Thousand Nine Hundred Ninety Nine"
        );
        assert_eq!(amount_in_words(100_000), "One Lakh");
        assert_eq!(amount_in_words(118_000), "One Lakh Eighteen Thousand");
        assert_eq!(
            amount_in_words(250_075),
            "Two Lakh Fifty Thousand Seventy Five"
        );
    }

    #[test]
    fn test_upper_bound() {
        assert_eq!(
            amount_in_words(9_999_999),
            "Ninety Nine Lakh Ninety Nine Thousand Nine Hundred Ninety Nine"
        );
        assert_eq!(amount_in_words(10_000_000), AMOUNT_TOO_LARGE);
        assert_eq!(amount_in_words(u64::MAX), AMOUNT_TOO_LARGE);
    }

    #[test]
    fn test_rupees_in_words() {
        let amount = Decimal::from_str("118000.75").unwrap();
        assert_eq!(
            rupees_in_words(amount).unwrap(),
            "Rupees One Lakh Eighteen Thousand Only"
        );
        assert_eq!(rupees_in_words(Decimal::ZERO).unwrap(), "Rupees Zero Only");
        assert_eq!(
            rupees_in_words(Decimal::new(10_000_000, 0)).unwrap(),
            AMOUNT_TOO_LARGE
        );
        assert!(rupees_in_words(Decimal::new(-1, 0)).is_err());
    }
}
