use std::collections::BTreeMap;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            utils::{boolean_keyword_value, constant_value, is_reserved_constant},
        },
        value::core::Value,
    },
    span::Span,
};

/// The mutable name-to-value store of one evaluation session.
///
/// An environment is an ordinary owned value. Hosts that want a persistent
/// session keep one and pass it by reference to every call; a validation
/// pass uses a fresh one. Names are never removed except by
/// [`Environment::reset`], so once defined a name stays defined.
///
/// # Example
/// ```
/// use calcnote::interpreter::{evaluator::Environment, value::core::Value};
///
/// let mut env = Environment::new();
/// assert!(!env.is_defined("rent"));
///
/// env.set("rent", Value::from(1200)).unwrap();
/// assert!(env.is_defined("rent"));
/// assert_eq!(env.get("rent"), Some(&Value::from(1200)));
///
/// // Constants are always defined and cannot be overwritten.
/// assert!(env.is_defined("Pi"));
/// assert!(env.set("pi", Value::from(3)).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: BTreeMap<String, Value>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The value stored under `name`, ignoring constants and keywords.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Resolves a name the way an expression does.
    ///
    /// Lookup order: a stored variable, then `pi` or `e` in any case, then a
    /// boolean keyword. Stored names are case-sensitive.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.variables.get(name) {
            return Some(value.clone());
        }
        if let Some(constant) = constant_value(name) {
            return Some(Value::number(constant));
        }
        boolean_keyword_value(name).map(Value::Boolean)
    }

    /// Whether `name` is stored or names a constant.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.variables.contains_key(name) || is_reserved_constant(name)
    }

    /// Stores `value` under `name`, replacing any previous value.
    ///
    /// # Errors
    /// [`EvalError::ReservedAssignment`] if `name` is `pi` or `e`.
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> EvalResult<()> {
        self.assign(name.into(), value, Span::default())
    }

    pub(crate) fn assign(&mut self, name: String, value: Value, span: Span) -> EvalResult<()> {
        if is_reserved_constant(&name) {
            return Err(EvalError::ReservedAssignment { name,
                                                       line: span.line,
                                                       column: span.column });
        }
        self.variables.insert(name, value);
        Ok(())
    }

    /// Forgets every stored variable.
    pub fn reset(&mut self) {
        self.variables.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Stored variables in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.variables.iter().map(|(name, value)| (name.as_str(), value))
    }
}
