//! Conversions between typed numerals and `f64`.
//!
//! Numerals are plain decimal strings: an optional leading `-`, digits, and
//! at most one `.`. They never carry an exponent, so anything produced here
//! parses back with `str::parse::<f64>`.

/// The sentinel numeral shown after start-up and clear.
pub const ZERO: &str = "0";

/// Parse a numeral, falling back to `0.0` for anything unparsable or
/// non-finite.
pub fn parse_number(numeral: &str) -> f64 {
    match numeral.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Render a finite value as a numeral.
///
/// Negative zero renders as `"0"` and non-finite values fall back to the
/// sentinel.
pub fn to_numeral(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return ZERO.to_string();
    }
    format!("{value}")
}

/// Round to `places` decimal places: `round(x * 10^p) / 10^p`.
///
/// Values whose scaled form reaches 2^53 have no digits left to round and
/// are returned untouched.
pub fn round_to(value: f64, places: u32) -> f64 {
    let scale = 10f64.powi(places as i32);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= 9_007_199_254_740_992.0 {
        return value;
    }
    let rounded = scaled.round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// True if `numeral` is a single digit or a lone sign-and-digit that
/// backspace should collapse to the sentinel.
pub(crate) fn is_last_character(numeral: &str) -> bool {
    let unsigned = numeral.strip_prefix('-').unwrap_or(numeral);
    unsigned.chars().count() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_partial_decimals() {
        assert_eq!(parse_number("3."), 3.0);
        assert_eq!(parse_number("0."), 0.0);
        assert_eq!(parse_number("-12.5"), -12.5);
    }

    #[test]
    fn parse_falls_back_to_zero() {
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("-"), 0.0);
        assert_eq!(parse_number("inf"), 0.0);
        assert_eq!(parse_number("NaN"), 0.0);
    }

    #[test]
    fn numerals_have_no_exponent() {
        assert_eq!(to_numeral(1e21), "1000000000000000000000");
        assert_eq!(to_numeral(0.0000001), "0.0000001");
        assert_eq!(to_numeral(10.0), "10");
        assert_eq!(to_numeral(0.3), "0.3");
    }

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(to_numeral(-0.0), "0");
        assert_eq!(to_numeral(f64::NAN), "0");
        assert_eq!(to_numeral(f64::INFINITY), "0");
    }

    #[test]
    fn rounding_suppresses_float_noise() {
        assert_eq!(round_to(0.1 + 0.2, 8), 0.3);
        assert_eq!(round_to(1.0 / 3.0, 8), 0.33333333);
        assert_eq!(round_to(2.0 / 3.0, 2), 0.67);
    }

    #[test]
    fn rounding_leaves_overflowing_values_alone() {
        assert_eq!(round_to(1e305, 8), 1e305);
        assert_eq!(round_to(f64::MAX, 8), f64::MAX);
    }

    #[test]
    fn rounding_large_values_is_exact() {
        assert_eq!(round_to(999_999_999_999.0, 8), 999_999_999_999.0);
        assert_eq!(round_to(-999_999_999_999.0, 8), -999_999_999_999.0);
        assert_eq!(round_to(90_000_000.5, 8), 90_000_000.5);
    }

    #[test]
    fn rounding_to_zero_drops_sign() {
        let rounded = round_to(-0.000000001, 8);
        assert_eq!(rounded, 0.0);
        assert!(rounded.is_sign_positive());
    }

    #[test]
    fn last_character_detection() {
        assert!(is_last_character("7"));
        assert!(is_last_character("-7"));
        assert!(!is_last_character("12"));
        assert!(!is_last_character("-1."));
    }
}
