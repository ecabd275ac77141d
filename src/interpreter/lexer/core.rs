use tracing::trace;

use crate::{
    error::LexError,
    interpreter::{
        lexer::{
            merge::merge_function_phrases,
            scanner::{Checkpoint, Scanner},
            symbol::Symbol,
            token::{Token, TokenKind},
            word::Word,
        },
        units::{is_currency_code_shape, is_currency_symbol},
    },
    span::Span,
};

pub type LexResult<T> = Result<T, LexError>;

/// Longest identifier accepted, in characters.
pub const MAX_IDENTIFIER_LEN: usize = 256;
/// Longest numeric literal accepted, in bytes, separators included.
pub const MAX_NUMBER_LEN: usize = 64;
/// Most words a unit phrase after a number may span.
pub const MAX_UNIT_WORDS: usize = 3;
/// Deepest nesting of parentheses, prefix signs, exponent chains and phrase
/// calls the parser accepts in one expression.
pub const MAX_NESTING_DEPTH: usize = 64;
/// Most operators and function calls the parser accepts on one line.
pub const MAX_LINE_OPERATORS: usize = 256;

/// Tokenizes `src`, numbering lines from 1.
///
/// The result always ends with a [`TokenKind::Eof`] token. Newlines are
/// emitted as [`TokenKind::NewLine`] tokens, so multi-line input is accepted.
///
/// # Errors
/// Returns a [`LexError`] for characters that start no token, identifiers or
/// numbers over the length limits, an identifier directly followed by `%`,
/// and any `#`.
///
/// # Example
/// ```
/// use calcnote::interpreter::lexer::{TokenKind, tokenize};
///
/// let tokens = tokenize("price = $1,200").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| &t.kind).collect();
///
/// assert_eq!(kinds[0], &TokenKind::Identifier);
/// assert_eq!(kinds[1], &TokenKind::Assign);
/// assert!(matches!(kinds[2], TokenKind::Currency { .. }));
/// assert_eq!(tokens[2].value, "1200");
/// assert_eq!(tokens[2].text, "$1,200");
/// assert_eq!(kinds[3], &TokenKind::Eof);
/// ```
pub fn tokenize(src: &str) -> LexResult<Vec<Token>> {
    tokenize_from_line(src, 1)
}

/// Tokenizes `src`, numbering its first line `first_line`.
///
/// Used when a single line of a larger document is processed on its own but
/// errors should still point at the document line.
pub fn tokenize_from_line(src: &str, first_line: usize) -> LexResult<Vec<Token>> {
    let tokens = Lexer::new(src, first_line).run()?;
    let tokens = merge_function_phrases(src, tokens);
    trace!(count = tokens.len(), "tokenized line");
    Ok(tokens)
}

/// Whether `c` may start an identifier.
#[must_use]
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || is_emoji(c)
}

/// Whether `c` may continue an identifier.
#[must_use]
pub fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || c.is_numeric() || is_combining_mark(c)
}

const fn is_combining_mark(c: char) -> bool {
    matches!(c,
             '\u{0300}'..='\u{036F}'
             | '\u{1AB0}'..='\u{1AFF}'
             | '\u{1DC0}'..='\u{1DFF}'
             | '\u{20D0}'..='\u{20FF}'
             | '\u{FE00}'..='\u{FE0F}'
             | '\u{FE20}'..='\u{FE2F}'
             | '\u{200D}')
}

const fn is_emoji(c: char) -> bool {
    matches!(c,
             '\u{1F300}'..='\u{1F5FF}'
             | '\u{1F600}'..='\u{1F64F}'
             | '\u{1F680}'..='\u{1F6FF}'
             | '\u{1F900}'..='\u{1F9FF}'
             | '\u{1FA70}'..='\u{1FAFF}'
             | '\u{1F1E6}'..='\u{1F1FF}'
             | '\u{2600}'..='\u{26FF}'
             | '\u{2700}'..='\u{27BF}')
}

/// Single-use tokenizer state for one source string.
pub(in crate::interpreter::lexer) struct Lexer<'a> {
    pub(in crate::interpreter::lexer) scanner: Scanner<'a>,
    tokens:                                    Vec<Token>,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str, first_line: usize) -> Self {
        Self { scanner: Scanner::new(src, first_line),
               tokens:  Vec::new(), }
    }

    fn run(mut self) -> LexResult<Vec<Token>> {
        loop {
            self.skip_blanks();
            let Some(c) = self.scanner.peek() else {
                break;
            };
            let token = self.next_token(c)?;
            self.tokens.push(token);
        }

        let span = self.scanner.here();
        self.tokens
            .push(Token::new(TokenKind::Eof, String::new(), String::new(), span));
        Ok(self.tokens)
    }

    /// Skips whitespace other than line breaks.
    fn skip_blanks(&mut self) {
        while let Some(c) = self.scanner.peek() {
            let line_break = c == '\n' || (c == '\r' && self.scanner.peek_nth(1) == Some('\n'));
            if !c.is_whitespace() || line_break {
                break;
            }
            self.scanner.bump();
        }
    }

    fn next_token(&mut self, c: char) -> LexResult<Token> {
        let next_is_digit = self.scanner.peek_nth(1).is_some_and(|n| n.is_ascii_digit());

        match c {
            '#' => {
                let span = self.scanner.here();
                Err(LexError::InlineHeading { line:   span.line,
                                              column: span.column, })
            },
            '0'..='9' => self.lex_number(),
            '.' if next_is_digit => self.lex_number(),
            c if is_currency_symbol(c) && self.amount_follows(1) => self.lex_currency_symbol(),
            c if is_identifier_start(c) => {
                if self.at_currency_code_amount() {
                    self.lex_currency_code()
                } else {
                    self.lex_word()
                }
            },
            c => self.lex_symbol(c),
        }
    }

    /// Whether a number starts `offset` characters ahead.
    pub(in crate::interpreter::lexer) fn amount_follows(&self, offset: usize) -> bool {
        match self.scanner.peek_nth(offset) {
            Some(d) if d.is_ascii_digit() => true,
            Some('.') => self.scanner
                             .peek_nth(offset + 1)
                             .is_some_and(|d| d.is_ascii_digit()),
            _ => false,
        }
    }

    /// Three uppercase ASCII letters directly followed by a digit.
    fn at_currency_code_amount(&self) -> bool {
        let rest = self.scanner.rest();
        rest.get(..3).is_some_and(is_currency_code_shape)
        && rest.as_bytes().get(3).is_some_and(u8::is_ascii_digit)
    }

    fn lex_symbol(&mut self, c: char) -> LexResult<Token> {
        let start = self.scanner.checkpoint();

        let Some((symbol, len)) = Symbol::match_prefix(self.scanner.rest()) else {
            let span = self.scanner.here();
            return Err(LexError::UnexpectedCharacter { character: c,
                                                       line:      span.line,
                                                       column:    span.column, });
        };

        if symbol == Symbol::NewLine {
            // Line breaks go through `bump` so the scanner advances its line count.
            for _ in 0..len {
                self.scanner.bump();
            }
        } else {
            self.scanner.advance_bytes(len);
        }

        Ok(self.token_from(start, symbol.kind()))
    }

    /// Scans an identifier and decides what kind of word it is.
    fn lex_word(&mut self) -> LexResult<Token> {
        let start = self.scanner.checkpoint();
        self.scanner.bump();
        self.scanner.bump_while(is_identifier_continue);

        let text = self.scanner.slice_from(start);
        let span = self.scanner.span_from(start);

        if text.chars().count() > MAX_IDENTIFIER_LEN {
            return Err(LexError::IdentifierTooLong { limit:  MAX_IDENTIFIER_LEN,
                                                     line:   span.line,
                                                     column: span.column, });
        }
        if self.scanner.peek() == Some('%') {
            return Err(LexError::AmbiguousPercent { identifier: text.to_string(),
                                                    line:       span.line,
                                                    column:     span.column, });
        }

        let kind = match Word::classify(text) {
            Some(Word::Boolean(value)) => TokenKind::Boolean(value),
            Some(Word::Keyword(keyword)) => TokenKind::Keyword(keyword),
            Some(Word::Month(_)) => return Ok(self.lex_date(start)),
            Some(Word::MonthAbbrev(_)) if self.day_or_year_follows() => {
                return Ok(self.lex_date(start));
            },
            _ if is_currency_code_shape(text) => TokenKind::CurrencyCode,
            _ => TokenKind::Identifier,
        };

        let value = match kind {
            TokenKind::Boolean(_) | TokenKind::Keyword(_) => text.to_lowercase(),
            _ => text.to_string(),
        };
        Ok(Token::new(kind, value, text.to_string(), span))
    }

    /// Builds a token whose normalized value equals its source text.
    pub(in crate::interpreter::lexer) fn token_from(&self,
                                                    start: Checkpoint,
                                                    kind: TokenKind)
                                                    -> Token {
        let text = self.scanner.slice_from(start).to_string();
        Token::new(kind, text.clone(), text, self.scanner.span_from(start))
    }

    pub(in crate::interpreter::lexer) fn span_from(&self, start: Checkpoint) -> Span {
        self.scanner.span_from(start)
    }
}
