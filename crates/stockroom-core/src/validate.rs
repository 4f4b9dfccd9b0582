// Rust guideline compliant 2026-10-15

//! Validation of raw form input.
//!
//! Rules are checked in a fixed order and the first failing rule decides the
//! rejection:
//!
//! 1. Name is blank after trimming → [`Rejection::EmptyName`]
//! 2. Name matches a live record → [`Rejection::DuplicateName`]
//! 3. Category is not configured → [`Rejection::InvalidCategory`]
//! 4. Price is not a finite, non-negative number → [`Rejection::InvalidPrice`].
//!    Literals too large for `f64` (such as `1e400`) overflow to infinity and
//!    are rejected along with `inf` and `NaN`.

use crate::models::name_key;
use crate::{Candidate, CategorySet, Record, Rejection};

/// Validates raw field values against the current records.
///
/// # Arguments
///
/// * `name` - Free-text item name
/// * `category` - Selected category name, blank when nothing is selected
/// * `price` - Price as typed; blank reads as zero
/// * `existing` - Live records, used for the duplicate check
/// * `categories` - Categories the session accepts
///
/// # Returns
///
/// The accepted [`Candidate`] with the name trimmed and the category and
/// price parsed.
///
/// # Errors
///
/// Returns the [`Rejection`] of the first rule that fails.
pub fn validate(
    name: &str,
    category: &str,
    price: &str,
    existing: &[Record],
    categories: &CategorySet,
) -> Result<Candidate, Rejection> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Rejection::EmptyName);
    }

    let key = name_key(name);
    if existing.iter().any(|record| record.name_key() == key) {
        return Err(Rejection::DuplicateName);
    }

    let category = categories
        .parse(category)
        .ok_or(Rejection::InvalidCategory)?;

    let price = parse_price(price).ok_or(Rejection::InvalidPrice)?;

    Ok(Candidate {
        name: name.to_string(),
        category,
        price,
    })
}

/// Parses a price, returning `None` unless it is a finite number `>= 0`.
///
/// Finiteness is checked after parsing, so out-of-range literals like `1e400`
/// that parse to infinity fail the same way as the `inf` and `NaN` spellings.
fn parse_price(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }

    let price: f64 = raw.parse().ok()?;
    if !price.is_finite() || price < 0.0 {
        return None;
    }

    // -0 compares equal to 0 and is stored as plain 0
    Some(if price == 0.0 { 0.0 } else { price })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_accepts_zero_and_decimals() {
        assert_eq!(parse_price("0"), Some(0.0));
        assert_eq!(parse_price("1.50"), Some(1.5));
        assert_eq!(parse_price(" 12 "), Some(12.0));
        assert_eq!(parse_price(""), Some(0.0));
    }

    #[test]
    fn test_parse_price_normalises_negative_zero() {
        let price = parse_price("-0").unwrap();
        assert!(price.is_sign_positive());
    }

    #[test]
    fn test_parse_price_rejects_invalid() {
        assert_eq!(parse_price("-5"), None);
        assert_eq!(parse_price("-0.01"), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
    }

    #[test]
    fn test_parse_price_rejects_overflow_to_infinity() {
        assert_eq!(parse_price("1e400"), None);
        assert_eq!(parse_price("-1e400"), None);
        assert_eq!(parse_price("1e300"), Some(1e300));
    }

    #[test]
    fn test_parse_price_accepts_sign_and_padding() {
        assert_eq!(parse_price("+5"), Some(5.0));
        assert_eq!(parse_price(" -0 "), Some(0.0));
    }
}
