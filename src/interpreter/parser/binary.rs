use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, ComparisonOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses relational and equality operators.
///
/// Handles `<`, `>`, `<=`, `>=`, `==` and `!=`, left-associative. A chain
/// such as `a < b == c` folds to `(a < b) == c`.
///
/// The rule is: `comparison := additive (cmp_op additive)*`
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `depth`: How deeply the current expression is nested.
///
/// # Returns
/// An `Expr::Comparison` tree, or the additive expression if no comparison
/// operator follows.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_additive(tokens, depth)?;
    while let Some(op) = tokens.peek().and_then(|t| token_to_comparison_operator(&t.kind)) {
        tokens.next();
        let right = parse_additive(tokens, depth)?;
        let span = left.span().to(right.span());
        left = Expr::Comparison { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  span };
    }
    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(&token.kind)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens, depth)?;
            let span = left.span().to(right.span());
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  span };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `%`. The tokenizer only
/// produces a `%` operator when the sign is separated from the number before
/// it; `20%` is a percentage literal.
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut left = parse_exponent(tokens, depth)?;
    loop {
        if let Some(token) = tokens.peek()
           && let Some(op) = token_to_binary_operator(&token.kind)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_exponent(tokens, depth)?;
            let span = left.span().to(right.span());
            left = Expr::Binary { left: Box::new(left),
                                  op,
                                  right: Box::new(right),
                                  span };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation expressions.
///
/// `^` and `**` are right-associative: `a ^ b ^ c` parses as `a ^ (b ^ c)`.
/// Both operands are unary expressions, so `-2 ^ 2` is `(-2) ^ 2`. Each
/// right-nested exponent counts as one level of nesting.
///
/// The rule is: `exponent := unary (("^" | "**") exponent)?`
pub fn parse_exponent<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let base = parse_unary(tokens, depth)?;
    if tokens.next_if(|t| matches!(t.kind, TokenKind::Caret | TokenKind::DoubleStar))
             .is_some()
    {
        let exponent = parse_exponent(tokens, depth + 1)?;
        let span = base.span().to(exponent.span());
        return Ok(Expr::Binary { left: Box::new(base),
                                 op: BinaryOperator::Pow,
                                 right: Box::new(exponent),
                                 span });
    }
    Ok(base)
}

/// Maps a token to its arithmetic operator, if it is one.
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        TokenKind::Percent => Some(BinaryOperator::Mod),
        TokenKind::Caret | TokenKind::DoubleStar => Some(BinaryOperator::Pow),
        _ => None,
    }
}

/// Maps a token to its comparison operator, if it is one.
#[must_use]
pub const fn token_to_comparison_operator(kind: &TokenKind) -> Option<ComparisonOperator> {
    match kind {
        TokenKind::Equal => Some(ComparisonOperator::Equal),
        TokenKind::NotEqual => Some(ComparisonOperator::NotEqual),
        TokenKind::Less => Some(ComparisonOperator::Less),
        TokenKind::LessEqual => Some(ComparisonOperator::LessEqual),
        TokenKind::Greater => Some(ComparisonOperator::Greater),
        TokenKind::GreaterEqual => Some(ComparisonOperator::GreaterEqual),
        _ => None,
    }
}
