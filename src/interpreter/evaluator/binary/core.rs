use rust_decimal::Decimal;

use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{core::EvalResult, environment::Environment},
        value::core::Value,
    },
    span::Span,
};

impl Environment {
    /// Evaluates an arithmetic operator on two values.
    ///
    /// `+` and `-` with a percentage operand go through
    /// [`Environment::eval_percentage_op`]. Everything else is computed on
    /// the two amounts by [`Environment::eval_scalar_op`] and the unit is then chosen by
    /// [`Environment::propagate_unit`].
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`, `right`: Evaluated operands.
    /// - `span`: Source range of the whole operation, for errors.
    ///
    /// # Returns
    /// The computed value, without source formatting unless it is a
    /// percentage.
    ///
    /// # Example
    /// ```
    /// use calcnote::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::Environment, value::core::Value},
    ///     span::Span,
    /// };
    /// use rust_decimal::Decimal;
    ///
    /// let dollars = Value::currency(Decimal::from(100), "$");
    /// let euros = Value::currency(Decimal::from(50), "€");
    ///
    /// let same = Environment::eval_binary(BinaryOperator::Add, &dollars, &dollars, Span::default());
    /// assert_eq!(same.unwrap(), Value::currency(Decimal::from(200), "$"));
    ///
    /// // Different currencies drop the unit.
    /// let mixed = Environment::eval_binary(BinaryOperator::Add, &dollars, &euros, Span::default());
    /// assert_eq!(mixed.unwrap(), Value::from(150));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       span: Span)
                       -> EvalResult<Value> {
        if matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
           && (left.is_percentage() || right.is_percentage())
        {
            return Self::eval_percentage_op(op, left, right, span);
        }

        let context = format!("'{op}'");
        let a = left.expect_amount(&context, span)?;
        let b = right.expect_amount(&context, span)?;

        let amount = Self::eval_scalar_op(op, a, b, span)?;
        Ok(Self::propagate_unit(op, left, right, amount))
    }

    /// Chooses the unit of an arithmetic result.
    ///
    /// - Two amounts in the same currency keep it.
    /// - Two different currencies give a plain number.
    /// - One currency operand lends its symbol to the result, except that a
    ///   number divided by a currency amount is a plain number.
    /// - Two numbers give a number.
    #[must_use]
    pub fn propagate_unit(op: BinaryOperator, left: &Value, right: &Value, amount: Decimal) -> Value {
        match (left.symbol(), right.symbol()) {
            (Some(l), Some(r)) if l == r => Value::currency(amount, l),
            (Some(_), Some(_)) => Value::number(amount),
            (None, Some(_)) if op == BinaryOperator::Div => Value::number(amount),
            (Some(symbol), None) | (None, Some(symbol)) => Value::currency(amount, symbol),
            (None, None) => Value::number(amount),
        }
    }
}
