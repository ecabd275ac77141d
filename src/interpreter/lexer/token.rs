use std::fmt;

use rust_decimal::Decimal;

use crate::{ast::BuiltinFunction, interpreter::units::UnitDef, span::Span};

/// A multiplier suffix written directly after a number, as in `5k` or `2M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Magnitude {
    /// `k` or `K`, 10^3.
    Thousand,
    /// `M`, 10^6.
    Million,
    /// `B`, 10^9.
    Billion,
    /// `T`, 10^12.
    Trillion,
}

impl Magnitude {
    /// Maps a suffix letter to its magnitude.
    #[must_use]
    pub const fn from_suffix(c: char) -> Option<Self> {
        match c {
            'k' | 'K' => Some(Self::Thousand),
            'M' => Some(Self::Million),
            'B' => Some(Self::Billion),
            'T' => Some(Self::Trillion),
            _ => None,
        }
    }

    /// The factor the literal is multiplied by.
    #[must_use]
    pub fn factor(self) -> Decimal {
        match self {
            Self::Thousand => Decimal::from(1_000_u64),
            Self::Million => Decimal::from(1_000_000_u64),
            Self::Billion => Decimal::from(1_000_000_000_u64),
            Self::Trillion => Decimal::from(1_000_000_000_000_u64),
        }
    }
}

/// Reserved words. They are never identifiers and never start an
/// expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    And,
    Or,
    Not,
    Xor,
    If,
    Then,
    Else,
    While,
    For,
    Return,
    Today,
    Tomorrow,
    Yesterday,
    Now,
}

/// The closed set of token kinds.
///
/// Kinds that need disambiguated data carry it, so later stages never
/// re-inspect the source text to learn what a token is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// A plain number, `42`, `1,000`, `.5`.
    Number,
    /// A number in scientific notation, `2.5e-3`.
    Scientific,
    /// A number with a `%` suffix, `20%`.
    Percentage,
    /// A number with a multiplier suffix, `5k`.
    Magnitude(Magnitude),
    /// A number with a prefixed currency sign or code, `$100`, `EUR50`.
    Currency {
        /// `"$"`, `"€"` or a three-letter code as written.
        symbol:    String,
        /// A multiplier suffix on the amount, as in `$5k`.
        magnitude: Option<Magnitude>,
    },
    /// A number followed by a unit phrase, `5 kg`, `3 square meters`.
    Quantity(&'static UnitDef),
    Identifier,
    /// Three uppercase letters standing alone, `USD`.
    CurrencyCode,
    /// `true`, `false` and their short forms.
    Boolean(bool),
    Keyword(Keyword),
    /// A builtin name used as a call, `sqrt(`, or a merged phrase,
    /// `average of`.
    Function(BuiltinFunction),
    /// A month name with optional day and year, `March 15, 2024`.
    Date,
    /// A number with a time unit, possibly chained, `2 weeks and 3 days`.
    Duration,
    Plus,
    Minus,
    Star,
    Slash,
    /// `%` used as the modulus operator.
    Percent,
    Caret,
    DoubleStar,
    Assign,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    LParen,
    RParen,
    Comma,
    NewLine,
    Eof,
}

impl TokenKind {
    /// Numeric, currency, quantity and boolean literals.
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self,
                 Self::Number
                 | Self::Scientific
                 | Self::Percentage
                 | Self::Magnitude(_)
                 | Self::Currency { .. }
                 | Self::Quantity(_)
                 | Self::Boolean(_))
    }

    #[must_use]
    pub const fn is_arithmetic_operator(&self) -> bool {
        matches!(self,
                 Self::Plus
                 | Self::Minus
                 | Self::Star
                 | Self::Slash
                 | Self::Percent
                 | Self::Caret
                 | Self::DoubleStar)
    }

    #[must_use]
    pub const fn is_comparison_operator(&self) -> bool {
        matches!(self,
                 Self::Equal
                 | Self::NotEqual
                 | Self::Less
                 | Self::LessEqual
                 | Self::Greater
                 | Self::GreaterEqual)
    }

    /// Tokens that become an operator or call node in the syntax tree.
    #[must_use]
    pub const fn builds_node(&self) -> bool {
        self.is_arithmetic_operator()
        || self.is_comparison_operator()
        || matches!(self, Self::Function(_))
    }

    /// Newline and end-of-input carry no content.
    #[must_use]
    pub const fn is_terminator(&self) -> bool {
        matches!(self, Self::NewLine | Self::Eof)
    }
}

/// A single token.
///
/// `value` is the normalized form: separators stripped from numbers,
/// suffixes and signs removed, and keywords lowercased. `text` is the exact
/// source slice and is what values use to redisplay a literal as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind:  TokenKind,
    pub value: String,
    pub text:  String,
    pub span:  Span,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, value: String, text: String, span: Span) -> Self {
        Self { kind,
               value,
               text,
               span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::NewLine => write!(f, "end of line"),
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "{}", self.text),
        }
    }
}
