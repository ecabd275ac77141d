use rust_decimal::Decimal;

use crate::{
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, environment::Environment, utils::overflow},
    span::Span,
    util::num::{decimal_to_f64, f64_to_decimal, integral_value, pow_exact},
};

impl Environment {
    /// Raises `base` to `exponent`.
    ///
    /// - A non-negative integer exponent is computed exactly.
    /// - A negative integer exponent is `1 / base^|exponent|`, so a zero base
    ///   is a division by zero.
    /// - Any other exponent falls back to `f64`, losing precision beyond
    ///   about 15 significant digits.
    ///
    /// # Example
    /// ```
    /// use calcnote::{interpreter::evaluator::Environment, span::Span};
    /// use rust_decimal::Decimal;
    ///
    /// let exact = Environment::eval_power(Decimal::new(11, 1), Decimal::from(2), Span::default());
    /// assert_eq!(exact.unwrap(), Decimal::new(121, 2));
    ///
    /// let inverse = Environment::eval_power(Decimal::from(2), Decimal::from(-2), Span::default());
    /// assert_eq!(inverse.unwrap(), Decimal::new(25, 2));
    ///
    /// // A negative base has no real root.
    /// assert!(Environment::eval_power(Decimal::from(-8), Decimal::new(5, 1), Span::default()).is_err());
    /// ```
    pub fn eval_power(base: Decimal, exponent: Decimal, span: Span) -> EvalResult<Decimal> {
        if let Some(n) = integral_value(exponent) {
            let power = pow_exact(base, n.unsigned_abs()).ok_or_else(|| overflow(span))?;
            if n >= 0 {
                return Ok(power);
            }
            if base.is_zero() {
                return Err(EvalError::DivisionByZero { line:   span.line,
                                                       column: span.column, });
            }
            return Decimal::ONE.checked_div(power)
                               .ok_or_else(|| overflow(span));
        }

        let b = decimal_to_f64(base).ok_or_else(|| overflow(span))?;
        let e = decimal_to_f64(exponent).ok_or_else(|| overflow(span))?;
        let result = b.powf(e);

        if result.is_nan() {
            return Err(EvalError::Domain { function: "^",
                                           details:  format!("{base} cannot be raised to the \
                                                              fractional power {exponent}"),
                                           line:     span.line,
                                           column:   span.column, });
        }
        f64_to_decimal(result).ok_or_else(|| overflow(span))
    }
}
