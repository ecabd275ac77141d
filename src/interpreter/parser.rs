/// Entry points and the top of the precedence ladder.
///
/// Holds [`core::parse`], the per-line statement loop that enforces full
/// consumption, and [`core::parse_expression`].
pub mod core;

/// Statement parsing.
///
/// Decides between assignments and bare expression statements.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the comparison, additive, multiplicative and exponent levels
/// of the precedence ladder.
pub mod binary;

/// Unary and primary expressions.
///
/// Handles prefix signs, literals, identifiers, parenthesized
/// sub-expressions and builtin function calls.
pub mod unary;

/// Parsing helpers.
///
/// Comma-separated lists, literal conversion and error construction shared
/// by the other parser modules.
pub mod utils;

pub use self::core::{ParseResult, parse, parse_expression, parse_tokens};
