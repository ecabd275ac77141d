use std::str::FromStr;

use rust_decimal::{
    Decimal,
    prelude::{FromPrimitive, ToPrimitive},
};

/// Parses the normalized text of a numeric literal.
///
/// Plain decimals (`"1000.50"`) and scientific notation (`"2.5e-3"`) are
/// accepted. The text must already be stripped of thousands separators.
///
/// # Returns
/// `None` if the text is malformed or the value does not fit a [`Decimal`].
///
/// # Example
/// ```
/// use calcnote::util::num::parse_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_decimal("1000.50"), Some(Decimal::new(100_050, 2)));
/// assert_eq!(parse_decimal("1.5e3"), Some(Decimal::from(1500)));
/// assert_eq!(parse_decimal("12x"), None);
/// ```
#[must_use]
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    if text.contains(['e', 'E']) {
        Decimal::from_scientific(text).ok()
    } else {
        Decimal::from_str(text).ok()
    }
}

/// Returns `value` as an `i64` if it has no fractional part.
#[must_use]
pub fn integral_value(value: Decimal) -> Option<i64> {
    if value.fract().is_zero() {
        value.to_i64()
    } else {
        None
    }
}

/// Raises `base` to a non-negative integer power with exact decimal
/// arithmetic.
///
/// Uses square-and-multiply, so the cost is logarithmic in `exponent`.
///
/// # Returns
/// `None` if any intermediate product overflows.
///
/// # Example
/// ```
/// use calcnote::util::num::pow_exact;
/// use rust_decimal::Decimal;
///
/// assert_eq!(pow_exact(Decimal::from(2), 10), Some(Decimal::from(1024)));
/// assert_eq!(pow_exact(Decimal::new(15, 1), 2), Some(Decimal::new(225, 2)));
/// assert_eq!(pow_exact(Decimal::from(10), 40), None);
/// ```
#[must_use]
pub fn pow_exact(base: Decimal, exponent: u64) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    let mut factor = base;
    let mut remaining = exponent;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.checked_mul(factor)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            factor = factor.checked_mul(factor)?;
        }
    }

    Some(result)
}

/// Converts a decimal to `f64`. Precision beyond `f64` is lost.
#[must_use]
pub fn decimal_to_f64(value: Decimal) -> Option<f64> {
    value.to_f64()
}

/// Converts a finite `f64` back to a decimal.
///
/// # Returns
/// `None` for NaN, infinities, and magnitudes outside the decimal range.
#[must_use]
pub fn f64_to_decimal(value: f64) -> Option<Decimal> {
    if value.is_finite() {
        Decimal::from_f64(value)
    } else {
        None
    }
}

/// Converts a count to a decimal.
#[must_use]
pub fn usize_to_decimal(value: usize) -> Option<Decimal> {
    Decimal::from_usize(value)
}
