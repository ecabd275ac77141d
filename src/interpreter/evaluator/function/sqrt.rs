use rust_decimal::{Decimal, MathematicalOps};

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{core::EvalResult, utils::overflow},
        value::core::Value,
    },
    span::Span,
};

/// Digits kept when a root is snapped to an exact value.
const SNAP_DIGITS: u32 = 20;

/// Square root of a single non-negative number or amount.
///
/// A currency argument keeps its symbol. Roots that are exact to
/// [`SNAP_DIGITS`] places are returned in that rounded form, so
/// `sqrt(2.25)` is exactly `1.5`.
pub fn sqrt(args: &[Value], span: Span) -> EvalResult<Value> {
    let [arg] = args else {
        return Err(EvalError::ArgumentCount { function: "sqrt",
                                              expected: "1".to_string(),
                                              found:    args.len(),
                                              line:     span.line,
                                              column:   span.column, });
    };

    let x = arg.expect_amount("sqrt", span)?;
    if x.is_sign_negative() && !x.is_zero() {
        return Err(EvalError::Domain { function: "sqrt",
                                       details:  format!("cannot take the square root of \
                                                          negative number {x}"),
                                       line:     span.line,
                                       column:   span.column, });
    }

    let root = x.sqrt().ok_or_else(|| overflow(span))?;
    Ok(arg.with_amount(snap(root, x)))
}

/// Rounds `root` when the rounded value squares back to `x` exactly.
fn snap(root: Decimal, x: Decimal) -> Decimal {
    let rounded = root.round_dp(SNAP_DIGITS).normalize();
    if rounded.checked_mul(rounded) == Some(x) {
        rounded
    } else {
        root
    }
}
