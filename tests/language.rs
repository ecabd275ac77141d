use std::fs;

use calcnote::{Environment, LineType, Value, error::EvalError, process_document};
use walkdir::WalkDir;

#[test]
fn demo_documents_evaluate_as_documented() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, (document, expected)) in extract_demo_pairs(&content).into_iter().enumerate() {
            count += 1;
            let rendered = render_calculations(&document);
            assert_eq!(rendered,
                       expected,
                       "demo {} in {:?} produced different results:\n{}",
                       i + 1,
                       path,
                       document);
        }
    }

    assert!(count > 0, "No demo blocks found in demos/");
}

/// Display strings of every calculation line, `error` for failures.
fn render_calculations(document: &str) -> Vec<String> {
    process_document(document, &mut Environment::new()).into_iter()
                                                        .filter_map(|outcome| outcome.value)
                                                        .map(|value| match value {
                                                            Ok(v) => v.to_string(),
                                                            Err(_) => "error".to_string(),
                                                        })
                                                        .collect()
}

/// Pairs each ```` ```calc ```` block with the ```` ```expect ```` block after
/// it.
fn extract_demo_pairs(content: &str) -> Vec<(String, Vec<String>)> {
    let mut pairs = Vec::new();
    let mut pending: Option<String> = None;
    let mut inside: Option<&str> = None;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if inside.is_none() {
            if trimmed.starts_with("```calc") {
                inside = Some("calc");
                buf.clear();
            } else if trimmed.starts_with("```expect") {
                inside = Some("expect");
                buf.clear();
            }
            continue;
        }
        if trimmed.starts_with("```") {
            match inside.take() {
                Some("calc") => pending = Some(buf.clone()),
                _ => {
                    if let Some(document) = pending.take() {
                        pairs.push((document, buf.lines().map(str::to_string).collect()));
                    }
                },
            }
            continue;
        }
        buf.push_str(line);
        buf.push('\n');
    }

    pairs
}

fn assert_results(src: &str, expected: &[&str]) {
    let rendered = render_calculations(src);
    assert_eq!(rendered, expected, "results for:\n{src}");
}

fn line_types(src: &str) -> Vec<LineType> {
    process_document(src, &mut Environment::new()).into_iter()
                                                  .map(|o| {
                                                      o.classification
                                                       .unwrap_or_else(|e| panic!("{e}"))
                                                  })
                                                  .collect()
}

#[test]
fn prose_and_calculations_interleave() {
    let src = "# Trip budget\n\
               \n\
               Flights are the big one.\n\
               flights = $420\n\
               hotel = $95 * 3\n\
               flights + hotel\n\
               That leaves some room.";
    assert_eq!(line_types(src),
               vec![LineType::Prose,
                    LineType::Blank,
                    LineType::Prose,
                    LineType::Calculation,
                    LineType::Calculation,
                    LineType::Calculation,
                    LineType::Prose]);
    assert_results(src, &["$420", "$285", "$705"]);
}

#[test]
fn failing_lines_do_not_stop_the_document() {
    let src = "a = 10\nb = a / 0\nc = a * 2\nb";
    let outcomes = process_document(src, &mut Environment::new());

    assert!(matches!(outcomes[1].value, Some(Err(EvalError::DivisionByZero { line: 2, .. }))));
    assert_eq!(outcomes[2].value, Some(Ok(Value::from(20))));
    // `b` was never bound, so the last line is prose.
    assert_eq!(outcomes[3].classification, Ok(LineType::Prose));
}

#[test]
fn errors_point_at_document_lines() {
    let src = "x = 1\n\n\ny = x + missing";
    let outcomes = process_document(src, &mut Environment::new());
    let Some(Err(e)) = &outcomes[3].value else {
        panic!("expected the last line to fail");
    };
    assert_eq!((e.line(), e.column()), (4, 9));
}

#[test]
fn inline_heading_is_reported_per_line() {
    let src = "x = 1\nx + 1 # comment\nx * 3";
    let outcomes = process_document(src, &mut Environment::new());
    assert!(outcomes[1].classification.is_err());
    assert_eq!(outcomes[1].value, None);
    assert_eq!(outcomes[2].value, Some(Ok(Value::from(3))));
}

#[test]
fn percentages_and_currencies() {
    assert_results("price = $80\ntip = 15%\nprice + tip",
                   &["$80", "15%", "$92"]);
    assert_results("$100 + €50\n100 / $4", &["150", "25"]);
}

#[test]
fn functions_in_documents() {
    assert_results("scores = 3\naverage of 70, 80, 90\nsquare root of 81\nsqrt(scores * 3)",
                   &["3", "80", "9", "3"]);
}

#[test]
fn variables_persist_across_calls() {
    let mut env = Environment::new();
    process_document("rate = 4%", &mut env);
    let outcomes = process_document("1,000 + rate", &mut env);
    assert_eq!(outcomes[0].value, Some(Ok(Value::from(1040))));
}

#[test]
fn reset_forgets_variables() {
    let mut env = Environment::new();
    process_document("x = 2", &mut env);
    env.reset();
    assert!(env.is_empty());
    assert_eq!(process_document("x", &mut env)[0].classification, Ok(LineType::Prose));
}
