use crate::{
    ast::ComparisonOperator,
    interpreter::{
        evaluator::{core::EvalResult, environment::Environment, utils::type_mismatch},
        value::core::Value,
    },
    span::Span,
};

impl Environment {
    /// Evaluates a comparison, which always yields a boolean.
    ///
    /// Numbers and currency amounts compare by amount alone; the currency
    /// symbol is ignored, so `$5 == €5` is true. Two booleans support only
    /// `==` and `!=`. Any other pairing with a boolean is a type mismatch.
    ///
    /// # Example
    /// ```
    /// use calcnote::{
    ///     ast::ComparisonOperator,
    ///     interpreter::{evaluator::Environment, value::core::Value},
    ///     span::Span,
    /// };
    /// use rust_decimal::Decimal;
    ///
    /// let price = Value::currency(Decimal::from(120), "$");
    /// let budget = Value::from(100);
    ///
    /// let over = Environment::eval_comparison(ComparisonOperator::Greater, &price, &budget, Span::default());
    /// assert_eq!(over.unwrap(), Value::Boolean(true));
    /// ```
    pub fn eval_comparison(op: ComparisonOperator,
                           left: &Value,
                           right: &Value,
                           span: Span)
                           -> EvalResult<Value> {
        if let (Value::Boolean(a), Value::Boolean(b)) = (left, right) {
            return match op {
                ComparisonOperator::Equal => Ok(Value::Boolean(a == b)),
                ComparisonOperator::NotEqual => Ok(Value::Boolean(a != b)),
                _ => Err(type_mismatch(format!("booleans cannot be ordered with '{op}'"), span)),
            };
        }

        let (Some(a), Some(b)) = (left.amount(), right.amount()) else {
            return Err(type_mismatch(format!("cannot compare {} with {} using '{op}'",
                                             left.type_name(),
                                             right.type_name()),
                                     span));
        };

        let result = match op {
            ComparisonOperator::Equal => a == b,
            ComparisonOperator::NotEqual => a != b,
            ComparisonOperator::Less => a < b,
            ComparisonOperator::LessEqual => a <= b,
            ComparisonOperator::Greater => a > b,
            ComparisonOperator::GreaterEqual => a >= b,
        };
        Ok(Value::Boolean(result))
    }
}
