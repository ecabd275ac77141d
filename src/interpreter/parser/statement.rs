use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement is an assignment if and only if it begins with an
/// identifier, boolean keyword or currency code immediately followed by `=`.
/// Everything else is parsed as an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let expr = parse_expression(tokens)?;
    let span = expr.span();

    Ok(Statement::Expression { expr, span })
}

/// Parses `name = expression`.
///
/// Looks two tokens ahead on a cloned iterator, so nothing is consumed when
/// the statement is not an assignment.
///
/// # Returns
/// - `Ok(Some(Statement::Assignment))` if an assignment is parsed,
/// - `Ok(None)` if the tokens do not start one.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    let Some(target) = lookahead.next() else {
        return Ok(None);
    };

    let assignable = matches!(target.kind,
                              TokenKind::Identifier | TokenKind::Boolean(_) | TokenKind::CurrencyCode);
    if !assignable || !lookahead.next().is_some_and(|t| t.kind == TokenKind::Assign) {
        return Ok(None);
    }

    tokens.next();
    tokens.next();
    let value = parse_expression(tokens)?;

    Ok(Some(Statement::Assignment { name: target.text.clone(),
                                    name_span: target.span,
                                    span: target.span.to(value.span()),
                                    value }))
}
