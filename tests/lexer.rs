use calcnote::{
    ast::BuiltinFunction,
    error::LexError,
    interpreter::{
        lexer::{
            MAX_IDENTIFIER_LEN, MAX_NUMBER_LEN, Token, TokenKind,
            token::{Keyword, Magnitude},
        },
        units::{Dimension, UNITS, currency_for_code, currency_for_symbol, lookup_unit},
    },
    span::Span,
    tokenize,
};

fn lex(src: &str) -> Vec<Token> {
    tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"))
}

fn kinds(src: &str) -> Vec<TokenKind> {
    lex(src).into_iter().map(|t| t.kind).collect()
}

fn assert_single(src: &str, kind: &TokenKind, value: &str) {
    let tokens = lex(src);
    assert_eq!(tokens.len(), 2, "expected one token for {src:?}, got {tokens:?}");
    assert_eq!(&tokens[0].kind, kind, "kind of {src:?}");
    assert_eq!(tokens[0].value, value, "value of {src:?}");
    assert_eq!(tokens[0].text, src, "text of {src:?}");
}

#[test]
fn plain_numbers_strip_separators() {
    assert_single("42", &TokenKind::Number, "42");
    assert_single("1,000", &TokenKind::Number, "1000");
    assert_single("1_000_000", &TokenKind::Number, "1000000");
    assert_single("1,000.50", &TokenKind::Number, "1000.50");
    assert_single(".5", &TokenKind::Number, "0.5");
}

#[test]
fn separator_needs_exactly_three_digits() {
    assert_eq!(kinds("1,2"),
               vec![TokenKind::Number, TokenKind::Comma, TokenKind::Number, TokenKind::Eof]);
    assert_eq!(kinds("1,0000"),
               vec![TokenKind::Number, TokenKind::Comma, TokenKind::Number, TokenKind::Eof]);
}

#[test]
fn scientific_percentage_and_magnitude() {
    assert_single("2.5e-3", &TokenKind::Scientific, "2.5e-3");
    assert_single("1E6", &TokenKind::Scientific, "1E6");
    assert_single("20%", &TokenKind::Percentage, "20");
    assert_single("5k", &TokenKind::Magnitude(Magnitude::Thousand), "5");
    assert_single("2M", &TokenKind::Magnitude(Magnitude::Million), "2");
    assert_single("3B", &TokenKind::Magnitude(Magnitude::Billion), "3");
}

#[test]
fn magnitude_suffix_must_end_the_word() {
    assert_eq!(kinds("5km"), vec![TokenKind::Number, TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn currency_amounts() {
    let tokens = lex("$1,200.50");
    assert_eq!(tokens[0].kind,
               TokenKind::Currency { symbol:    "$".to_string(),
                                     magnitude: None, });
    assert_eq!(tokens[0].value, "1200.50");
    assert_eq!(tokens[0].text, "$1,200.50");
    assert_eq!(tokens[0].span.len(), "$1,200.50".len());
    assert!(tokens[1].span.is_empty());

    let tokens = lex("€5k");
    assert_eq!(tokens[0].kind,
               TokenKind::Currency { symbol:    "€".to_string(),
                                     magnitude: Some(Magnitude::Thousand), });

    let tokens = lex("EUR50");
    assert_eq!(tokens[0].kind,
               TokenKind::Currency { symbol:    "EUR".to_string(),
                                     magnitude: None, });
    assert_eq!(tokens[0].value, "50");
}

#[test]
fn lone_currency_sign_is_an_error() {
    assert!(matches!(tokenize("$"), Err(LexError::UnexpectedCharacter { character: '$', .. })));
}

#[test]
fn postfix_currency_code_stays_separate() {
    assert_eq!(kinds("100 USD"),
               vec![TokenKind::Number, TokenKind::CurrencyCode, TokenKind::Eof]);
    assert_eq!(kinds("USD"), vec![TokenKind::CurrencyCode, TokenKind::Eof]);
    assert_eq!(kinds("Usd"), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn unit_phrases_attach_to_numbers() {
    let tokens = lex("5 kg");
    assert!(matches!(tokens[0].kind, TokenKind::Quantity(unit) if unit.symbol == "kg"));
    assert_eq!(tokens[0].value, "5");
    assert_eq!(tokens[0].text, "5 kg");

    let tokens = lex("3 square meters + 2");
    assert!(matches!(tokens[0].kind, TokenKind::Quantity(unit) if unit.dimension == Dimension::Area));
    assert_eq!(tokens[0].text, "3 square meters");
    assert_eq!(tokens[1].kind, TokenKind::Plus);
}

#[test]
fn unit_symbols_that_are_not_words() {
    for (src, symbol) in [("5 °C", "°C"), ("5°C", "°C"), ("98.6 °F", "°F"), ("12″", "″"), ("2 ″", "″")] {
        let tokens = lex(src);
        assert!(matches!(tokens[0].kind, TokenKind::Quantity(unit) if unit.symbol == symbol),
                "{src:?} gave {tokens:?}");
        assert_eq!(tokens[0].text, src);
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    assert_eq!(kinds("-5 °C + 3")[1..3], [TokenKind::Quantity(lookup_unit("°C").unwrap()), TokenKind::Plus]);
    assert!(matches!(tokenize("5 °Celsius"), Err(LexError::UnexpectedCharacter { .. })));
}

#[test]
fn every_unit_alias_is_reachable_after_a_number() {
    for unit in UNITS {
        for alias in unit.aliases {
            let src = format!("5 {alias}");
            let tokens = lex(&src);
            assert!(matches!(tokens[0].kind, TokenKind::Quantity(found) if found.name == unit.name),
                    "{src:?} gave {tokens:?}");
            assert_eq!(tokens.len(), 2, "{src:?} left tokens over");
        }
    }
}

#[test]
fn unknown_words_after_numbers_are_left_alone() {
    assert_eq!(kinds("5 apples"), vec![TokenKind::Number, TokenKind::Identifier, TokenKind::Eof]);
    // Two spaces end the lookahead.
    assert_eq!(kinds("5  kg"), vec![TokenKind::Number, TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn durations_and_dates() {
    assert_single("2 weeks and 3 days", &TokenKind::Duration, "2 weeks and 3 days");
    assert_single("90 Minutes", &TokenKind::Duration, "90 minutes");
    assert_single("March 15, 2024", &TokenKind::Date, "march 15, 2024");
    assert_single("Sep 2024", &TokenKind::Date, "sep 2024");
    assert_eq!(kinds("mar"), vec![TokenKind::Identifier, TokenKind::Eof]);
}

#[test]
fn words_are_classified() {
    assert_single("True", &TokenKind::Boolean(true), "true");
    assert_single("no", &TokenKind::Boolean(false), "no");
    assert_single("IF", &TokenKind::Keyword(Keyword::If), "if");
    assert_single("today", &TokenKind::Keyword(Keyword::Today), "today");
    assert_single("café", &TokenKind::Identifier, "café");
    assert_single("total_2", &TokenKind::Identifier, "total_2");
}

#[test]
fn identifiers_take_combining_marks_and_emoji() {
    assert_single("cafe\u{301}", &TokenKind::Identifier, "cafe\u{301}");
    assert_single("🍕", &TokenKind::Identifier, "🍕");
    assert_single("☕\u{fe0f}", &TokenKind::Identifier, "☕\u{fe0f}");
    assert_single("👨\u{200d}👩\u{200d}👧", &TokenKind::Identifier, "👨\u{200d}👩\u{200d}👧");
    assert_single("🍕_count2", &TokenKind::Identifier, "🍕_count2");

    let tokens = lex("🍕 * x");
    assert_eq!(tokens[1].span.column, 3);
    assert_eq!(tokens[2].span.column, 5);
}

#[test]
fn function_names_and_phrases() {
    let tokens = lex("Average of 1, 2");
    assert_eq!(tokens[0].kind, TokenKind::Function(BuiltinFunction::Average));
    assert_eq!(tokens[0].value, "avg");
    assert_eq!(tokens[0].text, "Average of");

    let tokens = lex("square root of 16");
    assert_eq!(tokens[0].kind, TokenKind::Function(BuiltinFunction::SquareRoot));
    assert_eq!(tokens[0].text, "square root of");

    assert_eq!(kinds("sqrt(4)")[0], TokenKind::Function(BuiltinFunction::SquareRoot));
    assert_eq!(kinds("sqrt")[0], TokenKind::Identifier);
}

#[test]
fn operators_including_unicode_forms() {
    assert_eq!(kinds("1 × 2 ÷ 3 − 4"),
               vec![TokenKind::Number,
                    TokenKind::Star,
                    TokenKind::Number,
                    TokenKind::Slash,
                    TokenKind::Number,
                    TokenKind::Minus,
                    TokenKind::Number,
                    TokenKind::Eof]);
    assert_eq!(kinds("a ** b ^ c"),
               vec![TokenKind::Identifier,
                    TokenKind::DoubleStar,
                    TokenKind::Identifier,
                    TokenKind::Caret,
                    TokenKind::Identifier,
                    TokenKind::Eof]);
    assert_eq!(kinds("a <= b != c ≥ d")
                   .into_iter()
                   .filter(TokenKind::is_comparison_operator)
                   .count(),
               3);
    assert_eq!(kinds("10 % 3")[1], TokenKind::Percent);
}

#[test]
fn spans_track_lines_and_columns() {
    let tokens = lex("x = 5\n  total");
    assert_eq!(tokens[0].span, Span::new(0, 1, 1, 1));
    assert_eq!(tokens[1].span.column, 3);
    assert_eq!(tokens[2].span.column, 5);
    assert_eq!(tokens[3].kind, TokenKind::NewLine);
    assert_eq!(tokens[4].span.line, 2);
    assert_eq!(tokens[4].span.column, 3);
    assert_eq!(tokens[5].kind, TokenKind::Eof);
}

#[test]
fn columns_count_characters() {
    let tokens = lex("€5 + x");
    assert_eq!(tokens[2].span.column, 6);
    assert_eq!(tokens[2].span.start, 7);
}

#[test]
fn lex_errors_carry_positions() {
    assert_eq!(tokenize("x = 5 # note"),
               Err(LexError::InlineHeading { line: 1, column: 7 }));
    assert_eq!(tokenize("a\nb @ c"),
               Err(LexError::UnexpectedCharacter { character: '@',
                                                   line:      2,
                                                   column:    3, }));
    assert!(matches!(tokenize("rate%"), Err(LexError::AmbiguousPercent { identifier, .. }) if identifier == "rate"));
}

#[test]
fn only_inline_heading_is_reserved() {
    assert!(tokenize("#").unwrap_err().is_reserved_construct());
    assert!(!tokenize("@").unwrap_err().is_reserved_construct());
}

#[test]
fn length_limits() {
    let long_name = "a".repeat(MAX_IDENTIFIER_LEN + 1);
    assert!(matches!(tokenize(&long_name), Err(LexError::IdentifierTooLong { .. })));
    assert!(tokenize(&"a".repeat(MAX_IDENTIFIER_LEN)).is_ok());

    let long_number = "9".repeat(MAX_NUMBER_LEN + 1);
    assert!(matches!(tokenize(&long_number), Err(LexError::NumberTooLong { .. })));
}

#[test]
fn unit_and_currency_tables() {
    assert_eq!(lookup_unit("m").map(|u| u.name), Some("meter"));
    assert!(lookup_unit("M").is_none());
    assert_eq!(lookup_unit("Metric Tons").map(|u| u.symbol), Some("t"));
    assert_eq!(currency_for_symbol('£').map(|c| c.code), Some("GBP"));
    assert_eq!(currency_for_code("CHF").and_then(|c| c.symbol), None);
    assert!(currency_for_code("XYZ").is_none());
}

#[test]
fn blank_input_has_only_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds(" \t "), vec![TokenKind::Eof]);
}
