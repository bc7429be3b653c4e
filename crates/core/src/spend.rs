//! Average spend parsed from the raw input text.
//!
//! Input is read leniently: leading whitespace is skipped and the longest
//! decimal prefix is taken, so `"12abc"` reads as 12 and `"abc"` as 0.
//! The result is always finite and non-negative.

use std::fmt;

/// Non-negative, finite average spend.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct AverageSpend(f64);

impl AverageSpend {
    pub const ZERO: Self = Self(0.0);

    /// Clamps an arbitrary number into a valid spend.
    ///
    /// NaN, infinities and negatives all become zero.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        if value.is_finite() && value > 0.0 {
            Self(value)
        } else {
            Self::ZERO
        }
    }

    /// Parses raw input text, falling back to zero.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        numeric_prefix(raw)
            .and_then(|prefix| prefix.parse::<f64>().ok())
            .map_or(Self::ZERO, Self::from_f64)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for AverageSpend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Longest prefix of `raw` (after leading whitespace) shaped like
/// `[+-]digits[.digits][(e|E)[+-]digits]`, with at least one mantissa digit.
fn numeric_prefix(raw: &str) -> Option<&str> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();

    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digit_run(bytes, sign);
    let mut end = sign.saturating_add(int_digits);
    let mut mantissa_digits = int_digits;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end.saturating_add(1);
        let frac_digits = digit_run(bytes, frac_start);
        if mantissa_digits > 0 || frac_digits > 0 {
            end = frac_start.saturating_add(frac_digits);
            mantissa_digits = mantissa_digits.saturating_add(frac_digits);
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    // An exponent only counts when it carries at least one digit.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_start = end.saturating_add(1);
        if matches!(bytes.get(exp_start), Some(b'+' | b'-')) {
            exp_start = exp_start.saturating_add(1);
        }
        let exp_digits = digit_run(bytes, exp_start);
        if exp_digits > 0 {
            end = exp_start.saturating_add(exp_digits);
        }
    }

    text.get(..end)
}

/// Number of ASCII digits in `bytes` starting at `start`.
fn digit_run(bytes: &[u8], start: usize) -> usize {
    bytes
        .get(start..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}
