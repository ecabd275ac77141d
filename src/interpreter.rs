/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST against an [`evaluator::Environment`],
/// applies the currency and percentage rules to arithmetic, calls builtin
/// functions, and writes assignments back into the environment.
///
/// # Responsibilities
/// - Evaluates expressions and statements to [`value::core::Value`]s.
/// - Resolves names through variables, constants and boolean keywords.
/// - Reports runtime errors such as division by zero or undefined names.
pub mod evaluator;
/// The lexer module tokenizes one or more lines of text.
///
/// Besides numbers, identifiers and operators it recognises the compound
/// literals of prose calculations: currency amounts, percentages, magnitude
/// suffixes, unit phrases, dates and durations.
///
/// # Responsibilities
/// - Converts the input into tokens with normalized value, original text and
///   source range.
/// - Enforces the identifier and number length limits.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// Recursive descent over the precedence ladder comparison, additive,
/// multiplicative, exponent, unary, primary. A line must be consumed
/// completely or it fails as a whole.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Numbers, currency amounts and booleans, with the source formatting of
/// literals kept for display.
pub mod value;
/// Static unit and currency tables queried by the lexer.
pub mod units;
/// Line classification.
///
/// Labels each line of a document as a calculation, prose or blank by
/// trying to compile it and checking the names it reads.
pub mod classifier;
