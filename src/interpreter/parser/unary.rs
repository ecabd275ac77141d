use std::iter::Peekable;

use crate::{
    ast::{BuiltinFunction, Expr, QuantityUnit, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{MAX_NESTING_DEPTH, Token, TokenKind},
        parser::{
            binary::parse_exponent,
            core::{ParseResult, parse_nested},
            utils::{end_of_input, literal_value, parse_comma_separated, unexpected_token},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix `+` and `-`. Unary operators nest, so `--x` is parsed as
/// `-( -x )`.
///
/// Every path into a deeper level of the grammar passes through here, so this
/// is where nesting is bounded.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: How deeply the current expression is nested.
///
/// # Returns
/// An [`Expr::Unary`] or a primary expression.
///
/// # Errors
/// [`ParseError::NestingTooDeep`] once `depth` passes [`MAX_NESTING_DEPTH`].
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if depth > MAX_NESTING_DEPTH {
        let span = tokens.peek().map(|t| t.span).unwrap_or_default();
        return Err(ParseError::NestingTooDeep { limit:  MAX_NESTING_DEPTH,
                                                line:   span.line.max(1),
                                                column: span.column.max(1), });
    }

    let op = match tokens.peek().map(|t| &t.kind) {
        Some(TokenKind::Minus) => UnaryOperator::Negate,
        Some(TokenKind::Plus) => UnaryOperator::Plus,
        _ => return parse_primary(tokens, depth),
    };

    let Some(sign) = tokens.next() else {
        return parse_primary(tokens, depth);
    };
    let operand = parse_unary(tokens, depth + 1)?;
    let span = sign.span.to(operand.span());

    Ok(Expr::Unary { op,
                     operand: Box::new(operand),
                     span })
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric, currency, quantity and boolean literals
/// - identifiers and currency codes
/// - builtin function calls
/// - parenthesized expressions
///
/// Dates, durations and reserved keywords are tokens but not expressions;
/// meeting one here is an error.
///
/// Grammar (simplified):
/// ```text
///     primary := literal
///              | identifier
///              | function_call
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: How deeply the current expression is nested.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = tokens.peek()
                      .copied()
                      .ok_or_else(|| end_of_input(None))?;

    match &token.kind {
        TokenKind::Number
        | TokenKind::Scientific
        | TokenKind::Percentage
        | TokenKind::Magnitude(_) => {
            tokens.next();
            Ok(Expr::Number { value:  literal_value(token)?,
                              source: token.text.clone(),
                              span:   token.span, })
        },
        TokenKind::Currency { symbol, .. } => {
            tokens.next();
            Ok(Expr::Quantity { value:  literal_value(token)?,
                                unit:   QuantityUnit::Currency(symbol.clone()),
                                source: token.text.clone(),
                                span:   token.span, })
        },
        TokenKind::Quantity(unit) => {
            tokens.next();
            Ok(Expr::Quantity { value:  literal_value(token)?,
                                unit:   QuantityUnit::Measure(*unit),
                                source: token.text.clone(),
                                span:   token.span, })
        },
        TokenKind::Boolean(value) => {
            tokens.next();
            Ok(Expr::Boolean { value: *value,
                               name:  token.text.clone(),
                               span:  token.span, })
        },
        TokenKind::Identifier | TokenKind::CurrencyCode => {
            tokens.next();
            Ok(Expr::Identifier { name: token.text.clone(),
                                  span: token.span, })
        },
        TokenKind::Function(function) => {
            tokens.next();
            parse_function_call(tokens, token, *function, depth)
        },
        TokenKind::LParen => {
            tokens.next();
            parse_grouping(tokens, token, depth)
        },
        _ => Err(unexpected_token(token)),
    }
}

/// Parses a builtin call in either of its two forms.
///
/// ```text
///     function_call := FUNCTION "(" (expression ("," expression)*)? ")"
///                    | FUNCTION exponent ("," exponent)*
/// ```
///
/// The second form is for phrases such as `square root of 16` or
/// `average of 10, 20, 30`. Its arguments bind at exponent level, so
/// `square root of 16 + 9` is `sqrt(16) + 9`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned just after the function token.
/// - `name`: The function token itself.
/// - `function`: The builtin the token names.
/// - `depth`: Nesting depth of the call; its arguments sit one deeper.
///
/// # Returns
/// An [`Expr::FunctionCall`] node.
fn parse_function_call<'a, I>(tokens: &mut Peekable<I>,
                              name: &Token,
                              function: BuiltinFunction,
                              depth: usize)
                              -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(open) = tokens.next_if(|t| t.kind == TokenKind::LParen) {
        let (arguments, close) = parse_comma_separated(tokens,
                                                       open,
                                                       |tokens| parse_nested(tokens, depth + 1),
                                                       &TokenKind::RParen)?;
        return Ok(Expr::FunctionCall { function,
                                       arguments,
                                       span: name.span.to(close) });
    }

    let mut arguments = vec![parse_exponent(tokens, depth + 1)?];
    while tokens.next_if(|t| t.kind == TokenKind::Comma).is_some() {
        arguments.push(parse_exponent(tokens, depth + 1)?);
    }
    let span = arguments.last()
                        .map_or(name.span, |last| name.span.to(last.span()));

    Ok(Expr::FunctionCall { function,
                            arguments,
                            span })
}

/// Parses a parenthesized expression.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// The opening parenthesis has already been consumed and is passed as
/// `open`.
///
/// # Errors
/// [`ParseError::ExpectedClosingParen`] if the expression is not followed by
/// `)`.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: &Token, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let expr = parse_nested(tokens, depth + 1)?;

    match tokens.next() {
        Some(token) if token.kind == TokenKind::RParen => Ok(expr),
        Some(token) => Err(ParseError::ExpectedClosingParen { found:  token.to_string(),
                                                              line:   token.span.line,
                                                              column: token.span.column, }),
        None => Err(end_of_input(Some(open))),
    }
}
