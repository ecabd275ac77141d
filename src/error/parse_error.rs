use thiserror::Error;

use crate::error::LexError;

/// Represents all errors that can occur during lexing or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}, column {column}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// Reached the end of the line while an operand was still expected.
    #[error("Error on line {line}, column {column}: Unexpected end of input.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}, column {column}: Expected closing parenthesis ')' but found {found}.")]
    ExpectedClosingParen {
        /// What was there instead.
        found:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A complete statement was followed by more tokens on the same line.
    #[error("Error on line {line}, column {column}: Extra tokens after expression, starting at '{token}'.")]
    TrailingTokens {
        /// The first token that was not consumed.
        token:  String,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An expression nested deeper than the parser accepts.
    #[error("Error on line {line}, column {column}: Expression is nested more than {limit} levels deep.")]
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit:  usize,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A line holds more operators than the parser accepts.
    #[error("Error on line {line}, column {column}: More than {limit} operators on one line.")]
    TooManyOperators {
        /// The most operators accepted.
        limit:  usize,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column of the first operator over the limit.
        column: usize,
    },
    /// A literal value was too large to be represented.
    #[error("Error on line {line}, column {column}: Literal '{literal}' is too large.")]
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
    },
}

impl ParseError {
    /// The 1-based line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lex(e) => e.line(),
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::ExpectedClosingParen { line, .. }
            | Self::TrailingTokens { line, .. }
            | Self::NestingTooDeep { line, .. }
            | Self::TooManyOperators { line, .. }
            | Self::LiteralTooLarge { line, .. } => *line,
        }
    }

    /// The 1-based column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Lex(e) => e.column(),
            Self::UnexpectedToken { column, .. }
            | Self::UnexpectedEndOfInput { column, .. }
            | Self::ExpectedClosingParen { column, .. }
            | Self::TrailingTokens { column, .. }
            | Self::NestingTooDeep { column, .. }
            | Self::TooManyOperators { column, .. }
            | Self::LiteralTooLarge { column, .. } => *column,
        }
    }
}
