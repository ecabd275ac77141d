/// Lexing errors.
///
/// Raised by the tokenizer for characters it cannot place, inputs that exceed
/// the length limits, and reserved constructs used in the wrong position.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building a statement from a
/// token sequence: unexpected or missing tokens, trailing tokens after a
/// complete statement, and literals that cannot be represented.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while walking a syntax tree:
/// undefined names, division by zero, bad builtin arguments, type mismatches
/// and attempts to assign to a reserved constant.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use parse_error::ParseError;
