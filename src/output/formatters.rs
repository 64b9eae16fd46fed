//! Reusable formatting utilities for CLI output
//!
//! Number and date formatting shared by the dashboard, account and
//! calculator views.

use chrono::NaiveDate;

/// Format a stat date (`YYYY-MM-DD`, optionally followed by a time) as
/// `DD.MM.YYYY`. Unparseable input is returned unchanged.
pub fn format_stat_date(date: &str) -> String {
    date.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| date.to_string())
}

/// Fractional digits needed to print any `f64` exactly
const EXACT_DIGITS: usize = 1074;

/// Fixed-point text with `digits` decimals, rounding exact ties away from
/// zero (`2.125` -> `"2.13"`, `-1.125` -> `"-1.13"`).
///
/// Rounding looks at the full decimal expansion of the float, so a value
/// stored just below a tie (`1.005` is really `1.00499...`) rounds down.
/// NaN prints as `NaN` and infinities as `Infinity` / `-Infinity`.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();

    if frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5') {
        increment_decimal(&mut kept);
    }

    let (int_digits, frac_digits) = kept.split_at(kept.len() - digits);
    let int_digits = String::from_utf8_lossy(int_digits);
    if digits == 0 {
        format!("{}{}", sign, int_digits)
    } else {
        format!("{}{}.{}", sign, int_digits, String::from_utf8_lossy(frac_digits))
    }
}

/// Add one unit in the last place of a string of ASCII digits
fn increment_decimal(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// USD amount with two decimals: `$12.50`
pub fn format_usd(amount: f64) -> String {
    format!("${}", to_fixed(amount, 2))
}

/// BTC amount with satoshi precision: `0.00030000`
pub fn format_btc(amount: f64) -> String {
    to_fixed(amount, 8)
}

/// Hashrate with one decimal: `150.5 TH/s`
pub fn format_hashrate(ths: f64) -> String {
    format!("{} TH/s", to_fixed(ths, 1))
}
