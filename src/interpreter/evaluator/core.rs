use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    ast::{Expr, QuantityUnit, Statement},
    error::EvalError,
    interpreter::{
        evaluator::environment::Environment, parser::core::parse_from_line, value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Parses and evaluates every statement in `src`, threading `env` through
/// them in order.
///
/// Each statement produces one value; an assignment produces the value it
/// stored. Evaluation stops at the first failure. Statements before it keep
/// their effect on `env`, and a failing assignment binds nothing.
///
/// # Errors
/// Any lex or parse failure, wrapped in [`EvalError::Parse`], or the first
/// runtime failure.
///
/// # Example
/// ```
/// use calcnote::interpreter::{
///     evaluator::{Environment, evaluate},
///     value::core::Value,
/// };
///
/// let mut env = Environment::new();
/// let values = evaluate("x = 5\nx * 2", &mut env).unwrap();
/// assert_eq!(values, vec![Value::from(5), Value::from(10)]);
///
/// // A failed line leaves the environment as it was.
/// assert!(evaluate("y = 10 / 0", &mut env).is_err());
/// assert!(!env.is_defined("y"));
/// ```
pub fn evaluate(src: &str, env: &mut Environment) -> EvalResult<Vec<Value>> {
    evaluate_from_line(src, 1, env)
}

/// Like [`evaluate`], numbering the first line of `src` as `first_line`.
pub fn evaluate_from_line(src: &str,
                          first_line: usize,
                          env: &mut Environment)
                          -> EvalResult<Vec<Value>> {
    let statements = parse_from_line(src, first_line)?;
    statements.iter()
              .map(|statement| env.eval_statement(statement))
              .collect()
}

impl Environment {
    /// Executes one statement.
    ///
    /// An assignment evaluates its right-hand side first and only then writes
    /// it, overwriting any earlier value. The stored value is also the
    /// statement's result.
    ///
    /// # Parameters
    /// - `statement`: The statement to run.
    ///
    /// # Returns
    /// The statement's value.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<Value> {
        match statement {
            Statement::Assignment { name,
                                    name_span,
                                    value,
                                    .. } => {
                let result = self.eval_expr(value)?;
                self.assign(name.clone(), result.clone(), *name_span)?;
                debug!(name = %name, value = %result, "assigned variable");
                Ok(result)
            },
            Statement::Expression { expr, .. } => self.eval_expr(expr),
        }
    }

    /// Evaluates an expression against this environment without modifying
    /// it.
    ///
    /// Literals keep their source text as display format. Identifiers
    /// resolve through [`Environment::resolve`].
    pub fn eval_expr(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Number { value, source, .. } => {
                Ok(Value::number(*value).with_format(source.as_str()))
            },
            Expr::Quantity { value,
                             unit,
                             source,
                             .. } => Ok(Self::eval_quantity(*value, unit, source)),
            Expr::Boolean { value, name, .. } => {
                Ok(self.get(name).cloned().unwrap_or(Value::Boolean(*value)))
            },
            Expr::Identifier { name, span } => {
                self.resolve(name)
                    .ok_or_else(|| EvalError::UndefinedVariable { name:   name.clone(),
                                                                  line:   span.line,
                                                                  column: span.column, })
            },
            Expr::Unary { op, operand, span } => {
                let value = self.eval_expr(operand)?;
                Self::eval_unary(*op, &value, *span)
            },
            Expr::Binary { left,
                           op,
                           right,
                           span, } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Self::eval_binary(*op, &left, &right, *span)
            },
            Expr::Comparison { left,
                               op,
                               right,
                               span, } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                Self::eval_comparison(*op, &left, &right, *span)
            },
            Expr::FunctionCall { function,
                                 arguments,
                                 span, } => {
                let values = arguments.iter()
                                      .map(|argument| self.eval_expr(argument))
                                      .collect::<EvalResult<Vec<_>>>()?;
                Self::eval_function(*function, &values, *span)
            },
        }
    }

    /// A currency literal keeps its symbol. A measured quantity is a plain
    /// number that still displays with its unit.
    fn eval_quantity(value: Decimal, unit: &QuantityUnit, source: &str) -> Value {
        match unit {
            QuantityUnit::Currency(symbol) => {
                Value::currency(value, symbol.as_str()).with_format(source)
            },
            QuantityUnit::Measure(_) => Value::number(value).with_format(source),
        }
    }
}
