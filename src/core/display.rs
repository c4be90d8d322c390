//! Projection of a numeral onto the bounded-width display.

use super::numeral::parse_number;
use crate::config::DisplayConfig;

/// Format a numeral for display.
///
/// - Numerals longer than `max_length` switch to scientific notation
///   (`1.23457e+13`) when their magnitude reaches `scientific_threshold` or
///   when cutting them would drop integer digits.
/// - Other over-long numerals lose trailing fractional digits.
/// - Integers get `,` thousands separators when grouping is enabled.
///
/// Without grouping the result never exceeds `max_length` characters. This
/// never fails and never mutates anything.
///
/// # Example
///
/// ```rust
/// use pocketcalc::config::DisplayConfig;
/// use pocketcalc::core::format_for_display;
///
/// let display = DisplayConfig::default();
/// assert_eq!(format_for_display("12345678901234", &display), "1.23457e+13");
/// assert_eq!(format_for_display("1000000000000", &display), "1.00000e+12");
/// assert_eq!(format_for_display("0.1234567890123", &display), "0.1234567890");
/// assert_eq!(format_for_display("42.", &display), "42.");
/// ```
pub fn format_for_display(numeral: &str, display: &DisplayConfig) -> String {
    if numeral.chars().count() > display.max_length {
        let value = parse_number(numeral);
        if value.abs() >= display.scientific_threshold
            || integer_width(numeral) > display.max_length
        {
            return scientific(value, display.scientific_digits, display.max_length);
        }
        return truncate(numeral, display.max_length);
    }

    if display.grouping && !numeral.contains(['.', 'e', 'E']) {
        return group_thousands(numeral);
    }

    numeral.to_string()
}

/// Characters before the decimal point, sign included.
fn integer_width(numeral: &str) -> usize {
    match numeral.split_once('.') {
        Some((integer, _)) => integer.chars().count(),
        None => numeral.chars().count(),
    }
}

/// Scientific notation with at most `digits` fractional digits, dropping
/// digits until the result fits `max_length`.
fn scientific(value: f64, digits: usize, max_length: usize) -> String {
    let mut shown = exponential(value, digits);
    for fewer in (0..digits).rev() {
        if shown.chars().count() <= max_length {
            break;
        }
        shown = exponential(value, fewer);
    }
    shown
}

/// `{:e}` with an explicitly signed exponent.
fn exponential(value: f64, digits: usize) -> String {
    let formatted = format!("{value:.digits$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

fn truncate(numeral: &str, max_length: usize) -> String {
    let cut: String = numeral.chars().take(max_length).collect();
    match cut.strip_suffix('.') {
        Some(without_point) => without_point.to_string(),
        None => cut,
    }
}

fn group_thousands(numeral: &str) -> String {
    let (sign, digits) = match numeral.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", numeral),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}
