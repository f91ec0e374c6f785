//! Price presentation for the es-MX locale (currency MXN).
//!
//! Stored prices stay plain `f64`; this is display only.

use num_format::{Locale, ToFormattedString};

const LOCALE: Locale = Locale::es_MX;

/// Format `value` the way es-MX renders MXN amounts: `$` prefix, grouped
/// thousands, exactly two decimals (half away from zero).
///
/// `1234.5` becomes `"$1,234.50"`; negatives get a leading `-`.
pub fn format_mxn(value: f64) -> String {
    if value.is_nan() {
        return "$NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-$∞" } else { "$∞" }.to_string();
    }

    let cents = (value.abs() * 100.0).round();
    let units = (cents / 100.0).trunc();
    // Past 2^53 cents the fraction is noise; keep it in range.
    let fraction = (cents - units * 100.0).clamp(0.0, 99.0) as u8;
    let sign = if value.is_sign_negative() && cents > 0.0 { "-" } else { "" };

    format!(
        "{sign}${}{}{fraction:02}",
        format_units(units),
        LOCALE.decimal()
    )
}

/// Group a whole, non-negative amount.
fn format_units(units: f64) -> String {
    if units < u128::MAX as f64 {
        return (units as u128).to_formatted_string(&LOCALE);
    }

    // Beyond u128: f64 still prints every integer digit without an exponent.
    let digits = format!("{units:.0}");
    let mut grouped = String::with_capacity(digits.len() * 4 / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(LOCALE.separator());
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_grouped_amount_with_two_decimals() {
        assert_eq!(format_mxn(1234.5), "$1,234.50");
    }

    #[test]
    fn formats_small_and_zero_amounts() {
        assert_eq!(format_mxn(0.0), "$0.00");
        assert_eq!(format_mxn(10.5), "$10.50");
        assert_eq!(format_mxn(0.07), "$0.07");
    }

    #[test]
    fn formats_millions() {
        assert_eq!(format_mxn(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_mxn(0.125), "$0.13");
        assert_eq!(format_mxn(99.999), "$100.00");
    }

    #[test]
    fn negative_amounts_get_leading_minus() {
        assert_eq!(format_mxn(-1234.5), "-$1,234.50");
        assert_eq!(format_mxn(-0.001), "$0.00");
    }

    #[test]
    fn large_amounts_keep_every_digit() {
        assert_eq!(format_mxn(2e17), "$200,000,000,000,000,000.00");
        assert_eq!(format_mxn(1e20), "$100,000,000,000,000,000,000.00");
        assert_eq!(format_mxn(-1e20), "-$100,000,000,000,000,000,000.00");
    }

    #[test]
    fn amounts_beyond_u128_are_grouped() {
        assert_eq!(
            format_mxn(2f64.powi(140)),
            "$1,393,796,574,908,163,946,345,982,392,040,522,594,123,776.00"
        );
    }

    #[test]
    fn non_finite_values_do_not_panic() {
        assert_eq!(format_mxn(f64::NAN), "$NaN");
        assert_eq!(format_mxn(f64::INFINITY), "$∞");
    }
}
