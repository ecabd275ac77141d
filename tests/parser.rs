use calcnote::{
    ast::{BinaryOperator, BuiltinFunction, ComparisonOperator, Expr, QuantityUnit, Statement, UnaryOperator},
    error::{LexError, ParseError},
    interpreter::{
        lexer::{MAX_LINE_OPERATORS, MAX_NESTING_DEPTH, TokenKind},
        parser::parse_tokens,
    },
    parse, tokenize,
};
use rust_decimal::Decimal;

fn parse_one(src: &str) -> Statement {
    let mut statements = parse(src).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));
    assert_eq!(statements.len(), 1, "expected one statement for {src:?}");
    statements.remove(0)
}

fn parse_expr(src: &str) -> Expr {
    match parse_one(src) {
        Statement::Expression { expr, .. } => expr,
        other => panic!("expected an expression statement for {src:?}, got {other:?}"),
    }
}

fn assert_parse_failure(src: &str) {
    if let Ok(statements) = parse(src) {
        panic!("{src:?} parsed but was expected to fail: {statements:?}")
    }
}

fn number(expr: &Expr) -> Decimal {
    match expr {
        Expr::Number { value, .. } => *value,
        other => panic!("expected a number, got {other:?}"),
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let Expr::Binary { left, op, right, .. } = parse_expr("1 + 2 * 3") else {
        panic!("expected a binary node");
    };
    assert_eq!(op, BinaryOperator::Add);
    assert_eq!(number(&left), Decimal::ONE);
    assert!(matches!(*right, Expr::Binary { op: BinaryOperator::Mul, .. }));
}

#[test]
fn subtraction_is_left_associative() {
    let Expr::Binary { left, op, right, .. } = parse_expr("10 - 4 - 3") else {
        panic!("expected a binary node");
    };
    assert_eq!(op, BinaryOperator::Sub);
    assert!(matches!(*left, Expr::Binary { op: BinaryOperator::Sub, .. }));
    assert_eq!(number(&right), Decimal::from(3));
}

#[test]
fn exponent_is_right_associative() {
    let Expr::Binary { left, op, right, .. } = parse_expr("2 ^ 3 ** 2") else {
        panic!("expected a binary node");
    };
    assert_eq!(op, BinaryOperator::Pow);
    assert_eq!(number(&left), Decimal::TWO);
    assert!(matches!(*right, Expr::Binary { op: BinaryOperator::Pow, .. }));
}

#[test]
fn unary_minus_binds_tighter_than_exponent() {
    let Expr::Binary { left, op, .. } = parse_expr("-2 ^ 2") else {
        panic!("expected a binary node");
    };
    assert_eq!(op, BinaryOperator::Pow);
    assert!(matches!(*left, Expr::Unary { op: UnaryOperator::Negate, .. }));
}

#[test]
fn comparisons_fold_left() {
    let Expr::Comparison { left, op, .. } = parse_expr("1 < 2 >= 3") else {
        panic!("expected a comparison node");
    };
    assert_eq!(op, ComparisonOperator::GreaterEqual);
    assert!(matches!(*left, Expr::Comparison { op: ComparisonOperator::Less, .. }));
}

#[test]
fn parentheses_override_precedence() {
    let Expr::Binary { left, op, .. } = parse_expr("(1 + 2) * 3") else {
        panic!("expected a binary node");
    };
    assert_eq!(op, BinaryOperator::Mul);
    assert!(matches!(*left, Expr::Binary { op: BinaryOperator::Add, .. }));
}

#[test]
fn literals_keep_source_text() {
    let Expr::Number { value, source, .. } = parse_expr("1,000.50") else {
        panic!("expected a number");
    };
    assert_eq!(value, Decimal::new(100_050, 2));
    assert_eq!(source, "1,000.50");

    assert_eq!(number(&parse_expr("20%")), Decimal::new(2, 1));
    assert_eq!(number(&parse_expr("5k")), Decimal::from(5000));

    let Expr::Quantity { value, unit, source, .. } = parse_expr("$2.5M") else {
        panic!("expected a quantity");
    };
    assert_eq!(value, Decimal::from(2_500_000));
    assert_eq!(unit, QuantityUnit::Currency("$".to_string()));
    assert_eq!(source, "$2.5M");
}

#[test]
fn assignments() {
    let Statement::Assignment { name, value, .. } = parse_one("total = 5 + 3") else {
        panic!("expected an assignment");
    };
    assert_eq!(name, "total");
    assert!(matches!(value, Expr::Binary { op: BinaryOperator::Add, .. }));

    // Boolean keywords and currency codes may be assigned to.
    assert!(parse_one("yes = 1").is_assignment());
    assert!(parse_one("EUR = 1.08").is_assignment());

    // `==` is a comparison, not an assignment.
    assert!(!parse_one("x == 1").is_assignment());
}

#[test]
fn function_calls_in_both_forms() {
    let Expr::FunctionCall { function, arguments, .. } = parse_expr("avg(1, 2, 3)") else {
        panic!("expected a call");
    };
    assert_eq!(function, BuiltinFunction::Average);
    assert_eq!(arguments.len(), 3);

    let Expr::FunctionCall { arguments, .. } = parse_expr("average of 10, 20, 30") else {
        panic!("expected a call");
    };
    assert_eq!(arguments.len(), 3);

    // Phrase arguments bind at exponent level.
    let Expr::Binary { left, op, .. } = parse_expr("square root of 16 + 9") else {
        panic!("expected a binary node");
    };
    assert_eq!(op, BinaryOperator::Add);
    assert!(matches!(*left, Expr::FunctionCall { function: BuiltinFunction::SquareRoot, .. }));
}

#[test]
fn trailing_tokens_fail_the_whole_line() {
    assert!(matches!(parse("5 + 3 equals eight"),
                     Err(ParseError::TrailingTokens { token, column: 7, .. }) if token == "equals"));
    assert!(matches!(parse("$100 budget"), Err(ParseError::TrailingTokens { .. })));
    assert!(matches!(parse("100 USD"), Err(ParseError::TrailingTokens { .. })));
}

#[test]
fn malformed_expressions() {
    assert!(matches!(parse("(1 + 2"), Err(ParseError::ExpectedClosingParen { .. })));
    assert!(matches!(parse("1 +"), Err(ParseError::UnexpectedEndOfInput { .. })));
    assert_parse_failure("* 3");
    assert_parse_failure("avg(1, 2");
    assert_parse_failure("x = ");
}

#[test]
fn dates_durations_and_keywords_are_not_expressions() {
    assert!(matches!(parse("March 15"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse("3 days + 1"), Err(ParseError::UnexpectedToken { .. })));
    assert!(matches!(parse("if x > 1"), Err(ParseError::UnexpectedToken { .. })));
}

#[test]
fn lex_errors_pass_through() {
    assert!(matches!(parse("1 + 2 # sum"), Err(ParseError::Lex(LexError::InlineHeading { .. }))));
}

#[test]
fn one_statement_per_line() {
    let statements = parse("a = 1\n\nb = a + 1\n").unwrap();
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[1].span().line, 3);
    assert!(parse("").unwrap().is_empty());
}

#[test]
fn oversized_literals_fail() {
    let huge = format!("{}k", "9".repeat(28));
    assert!(matches!(parse(&huge), Err(ParseError::LiteralTooLarge { .. })));
}

fn parenthesized(depth: usize) -> String {
    format!("1 + {}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn parenthesis_nesting_is_bounded() {
    assert!(parse(&parenthesized(MAX_NESTING_DEPTH)).is_ok());

    let first_past_limit = 5 + MAX_NESTING_DEPTH + 1;
    assert!(matches!(parse(&parenthesized(MAX_NESTING_DEPTH + 1)),
                     Err(ParseError::NestingTooDeep { line: 1, column, .. }) if column == first_past_limit));

    for depth in [2_000, 10_000, 100_000] {
        assert!(matches!(parse(&parenthesized(depth)), Err(ParseError::NestingTooDeep { .. })));
    }
}

#[test]
fn sign_and_exponent_nesting_is_bounded() {
    let signs = |count: usize| format!("{}1", "- ".repeat(count));
    assert!(parse(&signs(MAX_NESTING_DEPTH)).is_ok());
    assert!(matches!(parse(&signs(MAX_NESTING_DEPTH + 1)), Err(ParseError::NestingTooDeep { .. })));

    let powers = |count: usize| format!("2{}", " ^ 2".repeat(count));
    assert!(parse(&powers(MAX_NESTING_DEPTH)).is_ok());
    assert!(matches!(parse(&powers(MAX_NESTING_DEPTH + 1)), Err(ParseError::NestingTooDeep { .. })));

    let roots = |count: usize| format!("{}16", "square root of ".repeat(count));
    assert!(parse(&roots(MAX_NESTING_DEPTH)).is_ok());
    assert!(matches!(parse(&roots(MAX_NESTING_DEPTH + 1)), Err(ParseError::NestingTooDeep { .. })));
}

#[test]
fn operator_count_per_line_is_bounded() {
    let chain = |count: usize| format!("1{}", " + 1".repeat(count));
    assert!(parse(&chain(MAX_LINE_OPERATORS)).is_ok());
    assert!(matches!(parse(&chain(MAX_LINE_OPERATORS + 1)),
                     Err(ParseError::TooManyOperators { line: 1, .. })));
    assert!(matches!(parse(&chain(100_000)), Err(ParseError::TooManyOperators { .. })));

    // The limit applies per line.
    let two_lines = format!("{}\n{}", chain(MAX_LINE_OPERATORS), chain(MAX_LINE_OPERATORS));
    assert_eq!(parse(&two_lines).unwrap().len(), 2);
}

#[test]
fn running_out_of_tokens_points_at_the_last_token() {
    let mut tokens = tokenize("(1 +").unwrap();
    assert_eq!(tokens.pop().map(|t| t.kind), Some(TokenKind::Eof));

    assert_eq!(parse_tokens(&tokens),
               Err(ParseError::UnexpectedEndOfInput { line: 1, column: 4 }));
    assert!(parse_tokens(&[]).unwrap().is_empty());

    let mut call = tokenize("avg(1,").unwrap();
    call.pop();
    let Err(e) = parse_tokens(&call) else {
        panic!("an unfinished call should not parse");
    };
    assert_eq!((e.line(), e.column()), (1, 6));
}
