use std::fmt;

use tracing::debug;

use crate::{
    ast::Statement,
    error::LexError,
    interpreter::{
        classifier::walk::undefined_identifiers,
        evaluator::{environment::Environment, utils::is_boolean_keyword},
        lexer::{Token, TokenKind, core::tokenize_from_line},
        parser::core::parse_tokens,
    },
};

/// What a line of a document is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineType {
    /// A complete, self-contained calculation.
    Calculation,
    /// Anything else with visible content.
    Prose,
    /// Empty, or only spaces, tabs and line breaks.
    Blank,
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Calculation => "calc",
            Self::Prose => "prose",
            Self::Blank => "blank",
        };
        write!(f, "{s}")
    }
}

/// Decides whether `line` is a calculation, prose or blank.
///
/// A line is a calculation only when it compiles completely as one and
/// every name it reads is known to `env`. Everything else with content is
/// prose. The same `env` always gives the same answer for the same line.
///
/// # Errors
/// Only [`LexError::InlineHeading`]: a `#` inside a line that did not start
/// with one. Every other lex or parse failure makes the line prose.
///
/// # Example
/// ```
/// use calcnote::interpreter::{
///     classifier::{LineType, classify},
///     evaluator::{Environment, evaluate},
/// };
///
/// let mut env = Environment::new();
/// assert_eq!(classify("x", &env).unwrap(), LineType::Prose);
///
/// evaluate("x = 5", &mut env).unwrap();
/// assert_eq!(classify("x", &env).unwrap(), LineType::Calculation);
///
/// assert_eq!(classify("5 + 3 equals eight", &env).unwrap(), LineType::Prose);
/// assert_eq!(classify("# Budget", &env).unwrap(), LineType::Prose);
/// assert_eq!(classify(" \t", &env).unwrap(), LineType::Blank);
/// ```
pub fn classify(line: &str, env: &Environment) -> Result<LineType, LexError> {
    classify_at(line, 1, env)
}

/// Like [`classify`], reporting errors against document line `line_number`.
pub fn classify_at(line: &str, line_number: usize, env: &Environment) -> Result<LineType, LexError> {
    let (line_type, rule) = decide(line, line_number, env)?;
    debug!(line = line_number, %line_type, rule, "classified line");
    Ok(line_type)
}

/// Runs the rules in order. The second value names the rule that decided.
fn decide(line: &str,
          line_number: usize,
          env: &Environment)
          -> Result<(LineType, &'static str), LexError> {
    if line.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n')) {
        return Ok((LineType::Blank, "whitespace"));
    }
    if has_markdown_prefix(line.trim_start()) {
        return Ok((LineType::Prose, "markdown prefix"));
    }

    let tokens = match tokenize_from_line(line, line_number) {
        Ok(tokens) => tokens,
        Err(e) if e.is_reserved_construct() => return Err(e),
        Err(_) => return Ok((LineType::Prose, "lex failure")),
    };

    if tokens.iter().any(|t| t.kind == TokenKind::Assign) {
        let assigns = single_statement(&tokens).is_some_and(|s| s.is_assignment());
        return Ok((calculation_if(assigns), "assignment"));
    }

    if tokens.iter().any(|t| matches!(t.kind, TokenKind::Function(_))) {
        return Ok((calculation_if(single_statement(&tokens).is_some()), "function call"));
    }

    if tokens.iter()
             .any(|t| t.kind.is_arithmetic_operator() || t.kind.is_comparison_operator())
    {
        let resolved = single_statement(&tokens).is_some_and(|statement| {
                                                     undefined_identifiers(&statement, env).is_empty()
                                                 });
        return Ok((calculation_if(resolved), "operator expression"));
    }

    let content: Vec<&Token> = tokens.iter().filter(|t| !t.kind.is_terminator()).collect();
    if let [token] = content.as_slice() {
        let known = match token.kind {
            TokenKind::Identifier | TokenKind::CurrencyCode => {
                env.is_defined(&token.text) || is_boolean_keyword(&token.text)
            },
            _ => token.kind.is_literal(),
        };
        return Ok((calculation_if(known), "single token"));
    }

    Ok((LineType::Prose, "fallthrough"))
}

/// `# heading`, `> quote`, `- item`, `* item` and `1. item`.
fn has_markdown_prefix(line: &str) -> bool {
    if line.starts_with(['#', '>']) || line.starts_with("- ") || line.starts_with("* ") {
        return true;
    }
    let digits = line.chars().take_while(char::is_ascii_digit).count();
    digits > 0 && line.get(digits..).is_some_and(|rest| rest.starts_with(". "))
}

/// Parses the tokens, returning the statement if there is exactly one.
fn single_statement(tokens: &[Token]) -> Option<Statement> {
    let mut statements = parse_tokens(tokens).ok()?;
    if statements.len() == 1 {
        statements.pop()
    } else {
        None
    }
}

const fn calculation_if(condition: bool) -> LineType {
    if condition {
        LineType::Calculation
    } else {
        LineType::Prose
    }
}
