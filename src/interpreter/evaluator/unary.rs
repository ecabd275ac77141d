use crate::{
    ast::UnaryOperator,
    interpreter::{
        evaluator::{
            core::EvalResult,
            environment::Environment,
            utils::type_mismatch,
        },
        value::core::Value,
    },
    span::Span,
};

impl Environment {
    /// Evaluates a prefix `+` or `-`.
    ///
    /// Both keep the operand's variant, so `-$5` is still a currency amount.
    /// Negating a percentage gives a percentage. Booleans are rejected.
    ///
    /// # Example
    /// ```
    /// use calcnote::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::Environment, value::core::Value},
    ///     span::Span,
    /// };
    /// use rust_decimal::Decimal;
    ///
    /// let price = Value::currency(Decimal::from(5), "$");
    /// let v = Environment::eval_unary(UnaryOperator::Negate, &price, Span::default()).unwrap();
    /// assert_eq!(v, Value::currency(Decimal::from(-5), "$"));
    ///
    /// assert!(Environment::eval_unary(UnaryOperator::Negate, &Value::from(true), Span::default()).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, span: Span) -> EvalResult<Value> {
        let amount = value.amount().ok_or_else(|| {
                                        type_mismatch(format!("cannot apply unary '{op}' to a boolean"),
                                                      span)
                                    })?;

        match op {
            UnaryOperator::Plus => Ok(value.clone()),
            UnaryOperator::Negate => {
                let negated = -amount;
                if value.is_percentage() {
                    Ok(Value::percentage(negated))
                } else {
                    Ok(value.with_amount(negated))
                }
            },
        }
    }
}
