//! Number formatting for display and export.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats a decimal with exactly `places` fractional digits, rounding
/// half away from zero.
///
/// # Examples
///
/// ```
/// use earnings_estimator::calculation::format_fixed;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_fixed(Decimal::new(75, 1), 2), "7.50");
/// ```
pub fn format_fixed(value: Decimal, places: u32) -> String {
    let mut rounded = round_half_up(value, places);
    rounded.rescale(places);
    rounded.to_string()
}

/// Rounds to `places` fractional digits, half away from zero.
pub fn round_half_up(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats a monetary amount with a currency prefix, thousands grouping and
/// two decimals, e.g. `$1,234.50`.
pub fn format_money(value: Decimal, currency_symbol: &str) -> String {
    let fixed = format_fixed(value.abs(), 2);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < Decimal::ZERO { "-" } else { "" };
    format!("{}{}{}.{}", sign, currency_symbol, grouped, fraction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_format_fixed_pads_zeros() {
        assert_eq!(format_fixed(dec("8"), 2), "8.00");
        assert_eq!(format_fixed(dec("0"), 2), "0.00");
    }

    #[test]
    fn test_format_fixed_rounds_half_up() {
        assert_eq!(format_fixed(dec("2.345"), 2), "2.35");
        assert_eq!(format_fixed(dec("2.344"), 2), "2.34");
    }

    #[test]
    fn test_format_fixed_repeating_fraction() {
        // 25 minutes = 0.41666... hours
        let hours = Decimal::from(25) / Decimal::from(60);
        assert_eq!(format_fixed(hours, 2), "0.42");
    }

    #[test]
    fn test_format_money_small_amount() {
        assert_eq!(format_money(dec("480"), "$"), "$480.00");
        assert_eq!(format_money(dec("0"), "$"), "$0.00");
    }

    #[test]
    fn test_format_money_groups_thousands() {
        assert_eq!(format_money(dec("1234.5"), "$"), "$1,234.50");
        assert_eq!(format_money(dec("1234567.891"), "$"), "$1,234,567.89");
        assert_eq!(format_money(dec("100000"), "€"), "€100,000.00");
    }

    #[test]
    fn test_format_money_negative() {
        assert_eq!(format_money(dec("-1500"), "$"), "-$1,500.00");
    }
}
