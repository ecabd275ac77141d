use thiserror::Error;

/// Represents all errors that can occur while tokenizing a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("Error on line {line}, column {column}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
        /// The source column where the error occurred.
        column:    usize,
    },
    /// An identifier longer than the tokenizer accepts.
    #[error("Error on line {line}, column {column}: Identifier is longer than {limit} characters.")]
    IdentifierTooLong {
        /// The maximum accepted length.
        limit:  usize,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A numeric literal longer than the tokenizer accepts.
    #[error("Error on line {line}, column {column}: Number is longer than {limit} characters.")]
    NumberTooLong {
        /// The maximum accepted length.
        limit:  usize,
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
    /// An identifier directly followed by `%`, which reads as neither a
    /// percentage nor a modulus.
    #[error("Error on line {line}, column {column}: '{identifier}%' is ambiguous. Put a space before '%' for modulus.")]
    AmbiguousPercent {
        /// The identifier in front of the `%`.
        identifier: String,
        /// The source line where the error occurred.
        line:       usize,
        /// The source column where the error occurred.
        column:     usize,
    },
    /// `#` anywhere but the start of a line.
    #[error("Error on line {line}, column {column}: '#' marks a heading and is only allowed at the start of a line.")]
    InlineHeading {
        /// The source line where the error occurred.
        line:   usize,
        /// The source column where the error occurred.
        column: usize,
    },
}

impl LexError {
    /// The 1-based line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::IdentifierTooLong { line, .. }
            | Self::NumberTooLong { line, .. }
            | Self::AmbiguousPercent { line, .. }
            | Self::InlineHeading { line, .. } => *line,
        }
    }

    /// The 1-based column the error points at.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { column, .. }
            | Self::IdentifierTooLong { column, .. }
            | Self::NumberTooLong { column, .. }
            | Self::AmbiguousPercent { column, .. }
            | Self::InlineHeading { column, .. } => *column,
        }
    }

    /// Whether this error comes from misusing a reserved construct.
    ///
    /// Line classification downgrades every other lexing failure to prose;
    /// these are surfaced to the caller instead.
    #[must_use]
    pub const fn is_reserved_construct(&self) -> bool {
        matches!(self, Self::InlineHeading { .. })
    }
}
