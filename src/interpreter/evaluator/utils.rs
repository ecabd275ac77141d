use rust_decimal::Decimal;

use crate::{
    error::EvalError,
    interpreter::lexer::word::Word,
    span::Span,
};

/// Names that always resolve to a mathematical constant and can never be
/// assigned. Matched without regard to case.
pub const RESERVED_CONSTANTS: &[&str] = &["pi", "e"];

/// Whether `name` is `pi` or `e` in any letter case.
///
/// # Example
/// ```
/// use calcnote::interpreter::evaluator::utils::is_reserved_constant;
///
/// assert!(is_reserved_constant("PI"));
/// assert!(is_reserved_constant("e"));
/// assert!(!is_reserved_constant("tau"));
/// ```
#[must_use]
pub fn is_reserved_constant(name: &str) -> bool {
    RESERVED_CONSTANTS.iter()
                      .any(|reserved| reserved.eq_ignore_ascii_case(name))
}

/// The value of a reserved constant, or `None` for any other name.
#[must_use]
pub fn constant_value(name: &str) -> Option<Decimal> {
    match name.to_ascii_lowercase().as_str() {
        "pi" => Some(Decimal::PI),
        "e" => Some(Decimal::E),
        _ => None,
    }
}

/// The truth value a boolean keyword spells, such as `yes` or `F`.
#[must_use]
pub fn boolean_keyword_value(name: &str) -> Option<bool> {
    match Word::classify(name) {
        Some(Word::Boolean(value)) => Some(value),
        _ => None,
    }
}

#[must_use]
pub fn is_boolean_keyword(name: &str) -> bool {
    Word::is_boolean(name)
}

pub(crate) const fn overflow(span: Span) -> EvalError {
    EvalError::Overflow { line:   span.line,
                          column: span.column, }
}

pub(crate) fn type_mismatch(details: impl Into<String>, span: Span) -> EvalError {
    EvalError::TypeMismatch { details: details.into(),
                              line:    span.line,
                              column:  span.column, }
}
