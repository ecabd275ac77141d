use thiserror::Error;

use crate::error::ParseError;

/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Tried to use a name with no value.
    #[error("Error on line {line}, column {column}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Attempted to divide by zero.
    #[error("Error on line {line}, column {column}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Attempted to take a remainder modulo zero.
    #[error("Error on line {line}, column {column}: Modulus by zero.")]
    ModulusByZero {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A builtin function received the wrong number of arguments.
    #[error("Error on line {line}, column {column}: {function} expects {expected} argument(s), got {found}.")]
    ArgumentCount {
        /// The name of the function.
        function: &'static str,
        /// A description of the accepted counts.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// A builtin function received an argument outside its domain.
    #[error("Error on line {line}, column {column}: {function}: {details}.")]
    Domain {
        /// The name of the function or operation.
        function: &'static str,
        /// Details about why the argument is invalid.
        details:  String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        column:   usize,
    },
    /// Tried to assign to `pi` or `e`.
    #[error("Error on line {line}, column {column}: '{name}' is a constant and cannot be assigned.")]
    ReservedAssignment {
        /// The reserved name.
        name:   String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A value had an unexpected or incompatible type.
    #[error("Error on line {line}, column {column}: {details}.")]
    TypeMismatch {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
    /// The result does not fit the decimal representation.
    #[error("Error on line {line}, column {column}: Numeric overflow.")]
    Overflow {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl EvalError {
    /// The 1-based line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::UndefinedVariable { line, .. }
            | Self::DivisionByZero { line, .. }
            | Self::ModulusByZero { line, .. }
            | Self::ArgumentCount { line, .. }
            | Self::Domain { line, .. }
            | Self::ReservedAssignment { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::Overflow { line, .. } => *line,
        }
    }

    /// The 1-based column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Parse(e) => e.column(),
            Self::UndefinedVariable { column, .. }
            | Self::DivisionByZero { column, .. }
            | Self::ModulusByZero { column, .. }
            | Self::ArgumentCount { column, .. }
            | Self::Domain { column, .. }
            | Self::ReservedAssignment { column, .. }
            | Self::TypeMismatch { column, .. }
            | Self::Overflow { column, .. } => *column,
        }
    }
}
