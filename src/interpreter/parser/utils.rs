use std::iter::Peekable;

use rust_decimal::Decimal;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
    span::Span,
    util::num::parse_decimal,
};

/// Parses a comma-separated list of items until a closing token.
///
/// It repeatedly calls `parse_item` to parse one element, expecting either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `open`: The already consumed opening token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token kind that terminates the list.
///
/// # Returns
/// The parsed items and the span of the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    open: &Token,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &TokenKind)
    -> ParseResult<(Vec<T>, Span)>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if let Some(close) = tokens.next_if(|t| &t.kind == closing) {
        return Ok((items, close.span));
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some(token) if token.kind == TokenKind::Comma => {},
            Some(token) if &token.kind == closing => return Ok((items, token.span)),
            Some(token) if token.kind.is_terminator() => {
                return Err(ParseError::ExpectedClosingParen { found:  token.to_string(),
                                                              line:   token.span.line,
                                                              column: token.span.column, });
            },
            Some(token) => return Err(unexpected_token(token)),
            None => return Err(end_of_input(Some(open))),
        }
    }
}

/// Converts a numeric token's normalized text to its value.
///
/// Percentages become fractions and magnitude suffixes are multiplied out,
/// including on currency amounts such as `$5k`.
///
/// # Errors
/// [`ParseError::LiteralTooLarge`] if the number does not fit a decimal.
pub(in crate::interpreter::parser) fn literal_value(token: &Token) -> ParseResult<Decimal> {
    let too_large = || ParseError::LiteralTooLarge { literal: token.text.clone(),
                                                     line:    token.span.line,
                                                     column:  token.span.column, };

    let value = parse_decimal(&token.value).ok_or_else(too_large)?;
    let scaled = match &token.kind {
        TokenKind::Percentage => value.checked_div(Decimal::ONE_HUNDRED),
        TokenKind::Magnitude(magnitude)
        | TokenKind::Currency { magnitude: Some(magnitude), .. } => {
            value.checked_mul(magnitude.factor())
        },
        _ => Some(value),
    };
    scaled.ok_or_else(too_large)
}

/// Builds the error for a token that cannot appear where it was found.
pub(in crate::interpreter::parser) fn unexpected_token(token: &Token) -> ParseError {
    if token.kind.is_terminator() {
        ParseError::UnexpectedEndOfInput { line:   token.span.line,
                                           column: token.span.column, }
    } else {
        ParseError::UnexpectedToken { token:  token.text.clone(),
                                      line:   token.span.line,
                                      column: token.span.column, }
    }
}

/// Builds the error for a token stream that stops without an end-of-input
/// token. Points at `after`, the last token known to have been consumed, or
/// at the start of the input when there is none.
pub(in crate::interpreter::parser) fn end_of_input(after: Option<&Token>) -> ParseError {
    let span = after.map(|t| t.span).unwrap_or_default();
    ParseError::UnexpectedEndOfInput { line:   span.line.max(1),
                                       column: span.column.max(1), }
}
