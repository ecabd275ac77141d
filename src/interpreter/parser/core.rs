use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{MAX_LINE_OPERATORS, Token, TokenKind, core::tokenize_from_line},
        parser::{binary::parse_comparison, statement::parse_statement},
    },
    span::Span,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses source text into statements, one per non-empty line.
///
/// # Errors
/// Returns a [`ParseError`] if the text fails to tokenize, if a line is not a
/// valid statement, or if a line has tokens left over after a complete
/// statement.
///
/// # Example
/// ```
/// use calcnote::{ast::Statement, interpreter::parser::parse};
///
/// let statements = parse("total = 5 + 3").unwrap();
/// assert_eq!(statements.len(), 1);
/// assert!(matches!(&statements[0], Statement::Assignment { name, .. } if name == "total"));
///
/// // A valid prefix followed by more words fails as a whole.
/// assert!(parse("5 + 3 equals eight").is_err());
///
/// // Blank input has no statements.
/// assert!(parse("   ").unwrap().is_empty());
/// ```
pub fn parse(src: &str) -> ParseResult<Vec<Statement>> {
    parse_from_line(src, 1)
}

/// Like [`parse`], numbering the first line of `src` as `first_line`.
pub fn parse_from_line(src: &str, first_line: usize) -> ParseResult<Vec<Statement>> {
    let tokens = tokenize_from_line(src, first_line)?;
    parse_tokens(&tokens)
}

/// Parses an already tokenized sequence.
///
/// Each line must hold exactly one statement or nothing. After a statement
/// the next token must end the line; anything else is
/// [`ParseError::TrailingTokens`]. A sequence that does not end in
/// [`TokenKind::Eof`] is treated as if it did, so running out of tokens is
/// reported at the last token.
pub fn parse_tokens(tokens: &[Token]) -> ParseResult<Vec<Statement>> {
    let terminated;
    let tokens = match tokens.last() {
        Some(last) if last.kind != TokenKind::Eof => {
            terminated = with_eof(tokens, last);
            terminated.as_slice()
        },
        _ => tokens,
    };
    check_operator_count(tokens)?;

    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        while iter.next_if(|t| t.kind == TokenKind::NewLine).is_some() {}

        match iter.peek() {
            None => break,
            Some(token) if token.kind == TokenKind::Eof => break,
            Some(_) => {},
        }

        let statement = parse_statement(&mut iter).inspect_err(|e| debug!(%e, "parse failed"))?;
        statements.push(statement);
        expect_end_of_statement(&mut iter)?;
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, comparison, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `tokens`: Token iterator, ending in a [`TokenKind::Eof`] token.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_nested(tokens, 0)
}

/// Parses an expression found `depth` levels inside another one.
pub(crate) fn parse_nested<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    parse_comparison(tokens, depth)
}

/// Rejects any line with more than [`MAX_LINE_OPERATORS`] operator or call
/// tokens, which bounds the height of the trees built from it.
fn check_operator_count(tokens: &[Token]) -> ParseResult<()> {
    for line in tokens.split(|t| t.kind == TokenKind::NewLine) {
        if let Some(token) = line.iter()
                                 .filter(|t| t.kind.builds_node())
                                 .nth(MAX_LINE_OPERATORS)
        {
            return Err(ParseError::TooManyOperators { limit:  MAX_LINE_OPERATORS,
                                                      line:   token.span.line,
                                                      column: token.span.column, });
        }
    }
    Ok(())
}

/// Copies `tokens` and appends an empty [`TokenKind::Eof`] at the end of `last`.
fn with_eof(tokens: &[Token], last: &Token) -> Vec<Token> {
    let end = last.span.end;
    let mut terminated = tokens.to_vec();
    terminated.push(Token::new(TokenKind::Eof,
                               String::new(),
                               String::new(),
                               Span::new(end, end, last.span.line, last.span.column)));
    terminated
}

/// Consumes the newline after a statement, or accepts end of input.
fn expect_end_of_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token> + Clone
{
    match tokens.peek() {
        Some(token) if token.kind == TokenKind::NewLine => {
            tokens.next();
            Ok(())
        },
        Some(token) if token.kind == TokenKind::Eof => Ok(()),
        Some(token) => Err(ParseError::TrailingTokens { token:  token.text.clone(),
                                                        line:   token.span.line,
                                                        column: token.span.column, }),
        None => Ok(()),
    }
}
