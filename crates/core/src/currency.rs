//! Currency formatting for the fixed en-GB / GBP convention.

use serde::{Deserialize, Serialize};

/// Symbol and separators used to render an amount.
///
/// The default is pound sterling as written in the United Kingdom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyStyle {
    #[serde(default = "default_symbol")]
    pub symbol: String,

    #[serde(default = "default_group_separator")]
    pub group_separator: char,

    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: char,

    #[serde(default = "default_fraction_digits")]
    pub fraction_digits: usize,
}

impl Default for CurrencyStyle {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            group_separator: default_group_separator(),
            decimal_separator: default_decimal_separator(),
            fraction_digits: default_fraction_digits(),
        }
    }
}

fn default_symbol() -> String {
    "£".to_string()
}

const fn default_group_separator() -> char {
    ','
}

const fn default_decimal_separator() -> char {
    '.'
}

const fn default_fraction_digits() -> usize {
    2
}

/// Formats amounts as currency strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrencyFormatter {
    style: CurrencyStyle,
}

impl CurrencyFormatter {
    #[must_use]
    pub const fn new(style: CurrencyStyle) -> Self {
        Self { style }
    }

    #[must_use]
    pub const fn style(&self) -> &CurrencyStyle {
        &self.style
    }

    /// Formats `amount` with grouping and a fixed number of fraction digits.
    ///
    /// Halves round away from zero. Non-finite amounts are formatted as zero,
    /// and an amount that rounds to zero never carries a minus sign.
    ///
    /// ```
    /// use projector_core::currency::CurrencyFormatter;
    ///
    /// let formatter = CurrencyFormatter::default();
    /// assert_eq!(formatter.format(1234.5), "£1,234.50");
    /// assert_eq!(formatter.format(0.125), "£0.13");
    /// assert_eq!(formatter.format(-12.0), "-£12.00");
    /// assert_eq!(formatter.format(f64::NAN), "£0.00");
    /// ```
    #[must_use]
    pub fn format(&self, amount: f64) -> String {
        let amount = if amount.is_finite() { amount } else { 0.0 };
        let (whole, fraction) = round_half_away(amount.abs(), self.style.fraction_digits);

        let is_zero = whole.bytes().chain(fraction.bytes()).all(|b| b == b'0');
        let sign = if amount.is_sign_negative() && !is_zero { "-" } else { "" };

        let mut out = String::new();
        out.push_str(sign);
        out.push_str(&self.style.symbol);
        out.push_str(&group_thousands(&whole, self.style.group_separator));
        if !fraction.is_empty() {
            out.push(self.style.decimal_separator);
            out.push_str(&fraction);
        }
        out
    }
}

/// Fraction digits needed to write any finite `f64` exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Rounds a non-negative `magnitude` to `digits` fraction digits, halves
/// away from zero, returning the whole and fraction digit strings.
///
/// Works on the exact decimal expansion, so `2.675` (stored just below the
/// half) still rounds down.
fn round_half_away(magnitude: f64, digits: usize) -> (String, String) {
    let digits = digits.min(EXACT_FRACTION_DIGITS);
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, magnitude);
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let (kept, dropped) = fraction.split_at_checked(digits).unwrap_or((fraction, ""));

    let mut number: Vec<u8> = whole.bytes().chain(kept.bytes()).collect();
    if dropped.bytes().next().is_some_and(|b| b >= b'5') {
        increment_digits(&mut number);
    }

    let split = number.len().saturating_sub(kept.len());
    let (whole, fraction) = number.split_at_checked(split).unwrap_or((number.as_slice(), &[]));
    (
        String::from_utf8_lossy(whole).into_owned(),
        String::from_utf8_lossy(fraction).into_owned(),
    )
}

/// Adds one to the last digit of an ASCII decimal, carrying leftwards.
fn increment_digits(number: &mut Vec<u8>) {
    for digit in number.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit = digit.saturating_add(1);
            return;
        }
    }
    number.insert(0, b'1');
}

/// Inserts `separator` between every group of three digits, from the right.
fn group_thousands(digits: &str, separator: char) -> String {
    let reversed: Vec<char> = digits.chars().rev().collect();
    let groups: Vec<String> = reversed
        .chunks(3)
        .rev()
        .map(|group| group.iter().rev().collect())
        .collect();
    groups.join(&separator.to_string())
}
