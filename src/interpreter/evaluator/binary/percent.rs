use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{core::EvalResult, environment::Environment, utils::overflow},
        value::core::Value,
    },
    span::Span,
};

impl Environment {
    /// Evaluates `+` or `-` where at least one operand is a percentage.
    ///
    /// The percentage is always a share of the other operand, which is the
    /// base: `100 + 20%` is `100 + 100 × 0.2`. The order does not matter, so
    /// `20% - 2` computes `2 - 2 × 0.2`. The result keeps the base's
    /// currency.
    ///
    /// When both operands are percentages the right one is the share and the
    /// left one the base, so `20% + 5%` is `0.2 + 0.2 × 0.05 = 0.21`.
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
    /// let base = Value::currency(Decimal::from(80), "$");
    /// let tip = Value::percentage(Decimal::new(25, 2));
    ///
    /// let total = Environment::eval_percentage_op(BinaryOperator::Add, &base, &tip, Span::default());
    /// assert_eq!(total.unwrap(), Value::currency(Decimal::from(100), "$"));
    /// ```
    pub fn eval_percentage_op(op: BinaryOperator,
                              left: &Value,
                              right: &Value,
                              span: Span)
                              -> EvalResult<Value> {
        let context = format!("'{op}'");
        let a = left.expect_amount(&context, span)?;
        let b = right.expect_amount(&context, span)?;

        let (base, base_amount, fraction) = if right.is_percentage() {
            (left, a, b)
        } else {
            (right, b, a)
        };

        let share = base_amount.checked_mul(fraction)
                               .ok_or_else(|| overflow(span))?;
        let amount = Self::eval_scalar_op(op, base_amount, share, span)?;
        Ok(base.with_amount(amount))
    }
}
