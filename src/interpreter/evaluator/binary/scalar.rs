use rust_decimal::Decimal;

use crate::{
    ast::BinaryOperator,
    error::EvalError,
    interpreter::evaluator::{core::EvalResult, environment::Environment, utils::overflow},
    span::Span,
};

impl Environment {
    /// Applies `+ - * / %` to two decimals with overflow and zero checks.
    ///
    /// `%` is the truncated remainder, so its sign follows the dividend.
    /// `^` is passed on to [`Environment::eval_power`].
    pub fn eval_scalar_op(op: BinaryOperator,
                          a: Decimal,
                          b: Decimal,
                          span: Span)
                          -> EvalResult<Decimal> {
        let result = match op {
            BinaryOperator::Add => a.checked_add(b),
            BinaryOperator::Sub => a.checked_sub(b),
            BinaryOperator::Mul => a.checked_mul(b),
            BinaryOperator::Div => {
                if b.is_zero() {
                    return Err(EvalError::DivisionByZero { line:   span.line,
                                                           column: span.column, });
                }
                a.checked_div(b)
            },
            BinaryOperator::Mod => {
                if b.is_zero() {
                    return Err(EvalError::ModulusByZero { line:   span.line,
                                                          column: span.column, });
                }
                a.checked_rem(b)
            },
            BinaryOperator::Pow => return Self::eval_power(a, b, span),
        };

        result.ok_or_else(|| overflow(span))
    }
}
