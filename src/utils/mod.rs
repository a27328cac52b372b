//! # Utilities Module
//!
//! Helper functions shared across the backend service.

use chrono::NaiveDate;

/// Format a minor-unit amount as a human-readable price.
///
/// Money is stored as `i64` minor units (cents), so 12050 renders as
/// "120.50".
///
/// ## Examples
///
/// ```rust
/// use hotel_booking_backend::utils::format_price;
/// assert_eq!(format_price(12050), "120.50");
/// assert_eq!(format_price(0), "0.00");
/// ```
pub fn format_price(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Number of nights in a half-open stay `[check_in, check_out)`.
///
/// Callers validate the range first; a non-positive difference comes
/// back as 0 rather than a negative count.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12050), "120.50");
        assert_eq!(format_price(100), "1.00");
        assert_eq!(format_price(5), "0.05");
        assert_eq!(format_price(0), "0.00");
        assert_eq!(format_price(-12050), "-120.50");
    }

    #[test]
    fn test_nights_between() {
        let check_in = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let check_out = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        assert_eq!(nights_between(check_in, check_out), 4);
        assert_eq!(nights_between(check_in, check_in), 0);
        assert_eq!(nights_between(check_out, check_in), 0);
    }
}
