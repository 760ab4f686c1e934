//! Human-formatted monetary amounts.
//!
//! Amounts are printed the English way (`1,234.50`): comma thousands
//! separators, a period decimal point and exactly two decimal places. The
//! currency code is never part of the amount; callers prefix it, usually
//! through [`format_amount`].

use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places shown for every amount.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Shape every printed amount must have: grouped integer part, a literal
/// dot and exactly two digits.
static AMOUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?[0-9,]+\.[0-9]{2}").expect("amount pattern is a valid regex")
});

/// Prints numbers with a fixed regional grouping convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LocalePrinter {
    group_separator: char,
    group_size: NonZeroUsize,
    decimal_point: char,
}

/// English (US) convention: `1,234,567.89`.
pub(crate) const ENGLISH: LocalePrinter = LocalePrinter::new(',', 3, '.');

impl LocalePrinter {
    /// Builds a printer. A group size of zero is a compile-time error for
    /// constants and a panic otherwise.
    pub(crate) const fn new(group_separator: char, group_size: usize, decimal_point: char) -> Self {
        let Some(group_size) = NonZeroUsize::new(group_size) else {
            panic!("digit group size must be non-zero");
        };
        Self {
            group_separator,
            group_size,
            decimal_point,
        }
    }

    /// Prints `value` rounded to two places with grouped thousands.
    ///
    /// Non-finite values are printed as-is (`NaN`, `inf`) and carry no
    /// decimal part.
    pub(crate) fn print(&self, value: f64) -> String {
        let fixed = fixed_two_places(value);
        let (sign, unsigned) = match fixed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", fixed.as_str()),
        };
        let Some((integer, fraction)) = unsigned.split_once('.') else {
            return fixed;
        };

        format!(
            "{sign}{}{}{fraction}",
            self.group(integer),
            self.decimal_point
        )
    }

    fn group(&self, digits: &str) -> String {
        let size = self.group_size.get();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / size);
        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % size == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(digit);
        }
        grouped
    }
}

/// Inserts comma separators every three digits of an unsigned integer string.
///
/// # Examples
///
/// ```
/// use invoice_config::currency::group_thousands;
///
/// assert_eq!(group_thousands("1234567"), "1,234,567");
/// assert_eq!(group_thousands("999"), "999");
/// ```
pub fn group_thousands(digits: &str) -> String {
    ENGLISH.group(digits)
}

/// Formats an amount as a monetary string with two decimal places.
///
/// Halfway cases round away from zero on the shortest decimal text of the
/// value, so `999.995` prints as `1,000.00`.
///
/// # Panics
///
/// Panics when the printed value has no two-digit decimal part. That never
/// happens for finite input; NaN and infinities trip it.
///
/// # Examples
///
/// ```
/// use invoice_config::currency::nice_float_str;
///
/// assert_eq!(nice_float_str(1234.5), "1,234.50");
/// assert_eq!(nice_float_str(0.0), "0.00");
/// assert_eq!(nice_float_str(-42.1), "-42.10");
/// ```
pub fn nice_float_str(value: f64) -> String {
    let printed = ENGLISH.print(value);
    match AMOUNT_PATTERN.find(&printed) {
        Some(amount) => amount.as_str().to_string(),
        None => panic!("formatted amount {printed:?} has no two-digit decimal part"),
    }
}

/// Formats `amount` prefixed with its currency code, e.g. `USD 1,234.50`.
pub fn format_amount(currency: &str, amount: f64) -> String {
    format!("{currency} {}", nice_float_str(amount))
}

/// Rounds to cents and prints without grouping (`-1234.50`).
fn fixed_two_places(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    match Decimal::from_str(&value.to_string()) {
        Ok(exact) => {
            let mut cents = exact.round_dp_with_strategy(
                CURRENCY_DECIMAL_PLACES,
                RoundingStrategy::MidpointAwayFromZero,
            );
            if cents.is_zero() {
                cents.set_sign_positive(true);
            }
            format!("{cents:.2}")
        }
        // Beyond Decimal's range or precision.
        Err(_) => {
            let fixed = format!("{value:.2}");
            if fixed == "-0.00" {
                "0.00".to_string()
            } else {
                fixed
            }
        }
    }
}
