use rust_decimal::Decimal;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{core::EvalResult, environment::Environment, utils::overflow},
        value::core::Value,
    },
    span::Span,
    util::num::usize_to_decimal,
};

/// Arithmetic mean of the arguments.
///
/// The result is in a currency only when every argument is an amount in
/// that same currency. Any mix, including a currency with a plain number,
/// gives a plain number.
pub fn average(args: &[Value], span: Span) -> EvalResult<Value> {
    let mut total = Decimal::ZERO;
    for arg in args {
        let amount = arg.expect_amount("avg", span)?;
        total = total.checked_add(amount)
                     .ok_or_else(|| overflow(span))?;
    }

    let count = usize_to_decimal(args.len()).ok_or_else(|| overflow(span))?;
    let mean = Environment::eval_scalar_op(BinaryOperator::Div, total, count, span)?;

    Ok(match shared_symbol(args) {
           Some(symbol) => Value::currency(mean, symbol),
           None => Value::number(mean),
       })
}

fn shared_symbol(args: &[Value]) -> Option<&str> {
    let first = args.first()?.symbol()?;
    args.iter()
        .all(|arg| arg.symbol() == Some(first))
        .then_some(first)
}
