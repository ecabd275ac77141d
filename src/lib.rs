//! # calcnote
//!
//! calcnote finds and evaluates the calculations embedded in ordinary
//! prose. Each line of a document is classified as a calculation, prose or
//! blank, and calculation lines are evaluated against one environment that
//! carries variables from line to line.
//!
//! Values are exact decimals. Currency amounts keep their symbol through
//! arithmetic, percentages apply to the other operand of `+` and `-`, and
//! literals display exactly as they were written.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::interpreter::{
    classifier::{LineType, classify},
    evaluator::{Environment, evaluate},
    lexer::tokenize,
    parser::parse,
    value::core::Value,
};
use crate::{
    error::{EvalError, LexError, ParseError},
    interpreter::{classifier::classify_at, evaluator::evaluate_from_line},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent one
/// parsed line as a tree. The AST is built by the parser and traversed by
/// the evaluator and the classifier.
pub mod ast;
/// Provides error types for lexing, parsing and evaluation.
///
/// Every error carries the line and column it points at, and each later
/// phase wraps the errors of the earlier ones.
pub mod error;
/// Orchestrates the process of classifying and evaluating text.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and classification.
pub mod interpreter;
/// Byte ranges with line and column positions.
pub mod span;
/// General utilities for decimal arithmetic and conversion.
pub mod util;

/// What happened to one line of a document.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOutcome {
    /// The 1-based line number.
    pub line:           usize,
    /// The line's type, or the reserved-construct error that stopped
    /// classification.
    pub classification: Result<LineType, LexError>,
    /// For calculation lines, the value of the line or why it failed.
    pub value:          Option<Result<Value, EvalError>>,
}

impl LineOutcome {
    #[must_use]
    pub const fn is_calculation(&self) -> bool {
        matches!(self.classification, Ok(LineType::Calculation))
    }
}

/// Classifies every line of `text` and evaluates the calculations in order.
///
/// Lines are classified against the live environment, so a variable
/// assigned on one line makes a later line that reads it a calculation. A
/// line that fails never stops the lines after it, and a failed assignment
/// binds nothing.
///
/// # Example
/// ```
/// use calcnote::{Environment, LineType, Value, process_document};
///
/// let text = "# Groceries\n\nbread = 3\nmilk = 2\nbread + milk\nthat was cheap";
/// let mut env = Environment::new();
/// let outcomes = process_document(text, &mut env);
///
/// assert_eq!(outcomes.len(), 6);
/// assert_eq!(outcomes[0].classification, Ok(LineType::Prose));
/// assert_eq!(outcomes[1].classification, Ok(LineType::Blank));
/// assert_eq!(outcomes[4].value, Some(Ok(Value::from(5))));
/// assert_eq!(outcomes[5].classification, Ok(LineType::Prose));
/// ```
pub fn process_document(text: &str, env: &mut Environment) -> Vec<LineOutcome> {
    let mut outcomes = Vec::new();

    for (index, source) in text.lines().enumerate() {
        let line = index + 1;
        let classification = classify_at(source, line, env);
        let value = matches!(classification, Ok(LineType::Calculation))
                    .then(|| evaluate_line(source, line, env));
        outcomes.push(LineOutcome { line,
                                    classification,
                                    value });
    }

    debug!(lines = outcomes.len(),
           calculations = outcomes.iter().filter(|o| o.is_calculation()).count(),
           "processed document");
    outcomes
}

/// Evaluates a calculation line to the value of its last statement.
fn evaluate_line(source: &str, line: usize, env: &mut Environment) -> Result<Value, EvalError> {
    evaluate_from_line(source, line, env)?
        .pop()
        .ok_or(EvalError::Parse(ParseError::UnexpectedEndOfInput { line, column: 1 }))
}
