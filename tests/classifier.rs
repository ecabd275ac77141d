use calcnote::{
    Environment, LineType, classify,
    error::LexError,
    evaluate,
    interpreter::lexer::{MAX_LINE_OPERATORS, MAX_NESTING_DEPTH},
};

fn assert_line(src: &str, env: &Environment, expected: LineType) {
    match classify(src, env) {
        Ok(found) => assert_eq!(found, expected, "classification of {src:?}"),
        Err(e) => panic!("classifying {src:?} failed: {e}"),
    }
}

fn defined(names: &[&str]) -> Environment {
    let mut env = Environment::new();
    for name in names {
        evaluate(&format!("{name} = 1"), &mut env).unwrap_or_else(|e| panic!("{e}"));
    }
    env
}

#[test]
fn blank_lines() {
    let env = Environment::new();
    assert_line("", &env, LineType::Blank);
    assert_line("   ", &env, LineType::Blank);
    assert_line(" \t\r\n", &env, LineType::Blank);
}

#[test]
fn markdown_prefixes_are_prose() {
    let env = defined(&["x"]);
    assert_line("# Header", &env, LineType::Prose);
    assert_line("  ## Budget", &env, LineType::Prose);
    assert_line("> x", &env, LineType::Prose);
    assert_line("- x", &env, LineType::Prose);
    assert_line("* x", &env, LineType::Prose);
    assert_line("12. x", &env, LineType::Prose);
}

#[test]
fn signs_without_a_space_are_not_bullets() {
    let env = Environment::new();
    assert_line("-5 + 3", &env, LineType::Calculation);
    assert_line("12.5 * 2", &env, LineType::Calculation);
}

#[test]
fn lex_failures_are_prose() {
    let env = Environment::new();
    assert_line("Note: call Bob @ 5", &env, LineType::Prose);
    assert_line("growth%", &env, LineType::Prose);
}

#[test]
fn inline_heading_is_surfaced() {
    let env = Environment::new();
    assert!(matches!(classify("x = 5 # five", &env), Err(LexError::InlineHeading { column: 7, .. })));
}

#[test]
fn any_complete_assignment_is_a_calculation() {
    let env = Environment::new();
    assert_line("x = 5", &env, LineType::Calculation);
    assert_line("total = price * quantity", &env, LineType::Calculation);
    assert_line("pi = 3", &env, LineType::Calculation);
    assert_line("x = 5 apples", &env, LineType::Prose);
    assert_line("x == 5 = y", &env, LineType::Prose);
}

#[test]
fn function_calls_skip_the_definedness_check() {
    let env = Environment::new();
    assert_line("sqrt(16)", &env, LineType::Calculation);
    assert_line("average of a, b", &env, LineType::Calculation);
    assert_line("sqrt(16) is four", &env, LineType::Prose);
}

#[test]
fn operator_lines_need_every_name_defined() {
    let env = defined(&["x"]);
    assert_line("x + 1", &env, LineType::Calculation);
    assert_line("x + unknown", &env, LineType::Prose);
    assert_line("(x * 2) > -(unknown)", &env, LineType::Prose);
    assert_line("x * pi", &env, LineType::Calculation);
    assert_line("x > yes", &env, LineType::Calculation);
    assert_line("5 + 3 equals eight", &env, LineType::Prose);
    assert_line("$100 + €50", &env, LineType::Calculation);
}

#[test]
fn single_tokens() {
    let env = defined(&["x"]);
    assert_line("42", &env, LineType::Calculation);
    assert_line("$1,000", &env, LineType::Calculation);
    assert_line("20%", &env, LineType::Calculation);
    assert_line("5 kg", &env, LineType::Calculation);
    assert_line("true", &env, LineType::Calculation);
    assert_line("x", &env, LineType::Calculation);
    assert_line("pi", &env, LineType::Calculation);
    assert_line("y", &env, LineType::Calculation);
    assert_line("hello", &env, LineType::Prose);
    assert_line("USD", &env, LineType::Prose);
    assert_line("March 15", &env, LineType::Prose);
    assert_line("today", &env, LineType::Prose);
}

#[test]
fn multiple_words_without_operators_are_prose() {
    let env = defined(&["x"]);
    assert_line("$100 budget", &env, LineType::Prose);
    assert_line("100 USD", &env, LineType::Prose);
    assert_line("x x", &env, LineType::Prose);
    assert_line("Remember to buy milk", &env, LineType::Prose);
}

#[test]
fn defining_a_name_turns_prose_into_calculation() {
    let mut env = Environment::new();
    assert_line("x", &env, LineType::Prose);
    evaluate("x = 5", &mut env).unwrap();
    assert_line("x", &env, LineType::Calculation);
    assert_eq!(evaluate("x", &mut env).unwrap(), vec![calcnote::Value::from(5)]);
}

#[test]
fn classification_is_repeatable() {
    let env = defined(&["rent"]);
    for line in ["rent * 12", "rent and food", "", "# Costs", "sqrt(rent)"] {
        assert_eq!(classify(line, &env), classify(line, &env), "{line:?}");
    }
}

#[test]
fn classifying_never_changes_the_environment() {
    let env = defined(&["a"]);
    let before = env.clone();
    let _ = classify("b = a + 1", &env);
    assert_eq!(env, before);
}

#[test]
fn pathologically_nested_lines_are_prose() {
    let env = Environment::new();
    for depth in [MAX_NESTING_DEPTH + 1, 2_000, 100_000] {
        let line = format!("1 + {}1{}", "(".repeat(depth), ")".repeat(depth));
        assert_line(&line, &env, LineType::Prose);
    }
    assert_line(&format!("1 + {}1{}", "(".repeat(MAX_NESTING_DEPTH), ")".repeat(MAX_NESTING_DEPTH)),
                &env,
                LineType::Calculation);
}

#[test]
fn overlong_operator_chains_are_prose() {
    let env = Environment::new();
    let chain = |count: usize| format!("1{}", " + 1".repeat(count));
    assert_line(&chain(MAX_LINE_OPERATORS), &env, LineType::Calculation);
    assert_line(&chain(MAX_LINE_OPERATORS + 1), &env, LineType::Prose);
    assert_line(&chain(100_000), &env, LineType::Prose);
}

#[test]
fn emoji_names_follow_definedness() {
    let mut env = Environment::new();
    assert_line("🍕", &env, LineType::Prose);
    evaluate("🍕 = 12", &mut env).unwrap();
    assert_line("🍕", &env, LineType::Calculation);
    assert_line("🍕 * 2", &env, LineType::Calculation);
    assert_line("👨\u{200d}👩\u{200d}👧 * 2", &env, LineType::Prose);
}
