use logos::Logos;

use crate::interpreter::lexer::token::TokenKind;

/// Operators and punctuation.
///
/// The main lexer hands the unscanned remainder of the line to this matcher
/// whenever the next character cannot start a number, currency amount or
/// word. Only the first match is used.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Symbol {
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `*`, `×`
    #[token("*")]
    #[token("×")]
    Star,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`, `−`
    #[token("-")]
    #[token("−")]
    Minus,
    /// `/`, `÷`
    #[token("/")]
    #[token("÷")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `%`
    #[token("%")]
    Percent,
    /// `==`
    #[token("==")]
    Equal,
    /// `=`
    #[token("=")]
    Assign,
    /// `!=`, `≠`
    #[token("!=")]
    #[token("≠")]
    NotEqual,
    /// `<=`, `≤`
    #[token("<=")]
    #[token("≤")]
    LessEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>=`, `≥`
    #[token(">=")]
    #[token("≥")]
    GreaterEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `\n`, `\r\n`
    #[token("\n")]
    #[token("\r\n")]
    NewLine,
}

impl Symbol {
    /// Matches the longest symbol at the start of `text`.
    ///
    /// # Returns
    /// The symbol and its length in bytes, or `None` if `text` does not start
    /// with one.
    pub fn match_prefix(text: &str) -> Option<(Self, usize)> {
        let mut lexer = Self::lexer(text);
        match lexer.next() {
            Some(Ok(symbol)) if lexer.span().start == 0 => Some((symbol, lexer.span().end)),
            _ => None,
        }
    }

    pub const fn kind(self) -> TokenKind {
        match self {
            Self::DoubleStar => TokenKind::DoubleStar,
            Self::Star => TokenKind::Star,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Slash => TokenKind::Slash,
            Self::Caret => TokenKind::Caret,
            Self::Percent => TokenKind::Percent,
            Self::Equal => TokenKind::Equal,
            Self::Assign => TokenKind::Assign,
            Self::NotEqual => TokenKind::NotEqual,
            Self::LessEqual => TokenKind::LessEqual,
            Self::Less => TokenKind::Less,
            Self::GreaterEqual => TokenKind::GreaterEqual,
            Self::Greater => TokenKind::Greater,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Comma => TokenKind::Comma,
            Self::NewLine => TokenKind::NewLine,
        }
    }
}
