use crate::{
    ast::BuiltinFunction,
    interpreter::lexer::token::{Token, TokenKind},
};

/// Word sequences that name a builtin function.
const PHRASES: &[(&[&str], BuiltinFunction)] = &[(&["average", "of"], BuiltinFunction::Average),
                                                 (&["square", "root", "of"],
                                                  BuiltinFunction::SquareRoot)];

/// Rewrites a token sequence so builtin functions are single tokens.
///
/// Two rewrites happen:
/// - `average of` and `square root of`, in any letter case, become one
///   [`TokenKind::Function`] token spanning all of the words.
/// - An identifier spelling a builtin name (`avg`, `average`, `sqrt`)
///   followed by `(` becomes a function token in place.
///
/// The merged token's text is the source slice it covers, so its range still
/// reports the phrase as written.
pub fn merge_function_phrases(src: &str, tokens: Vec<Token>) -> Vec<Token> {
    let mut merged = Vec::with_capacity(tokens.len());
    let mut i = 0;

    while i < tokens.len() {
        if let Some((function, width)) = phrase_at(&tokens[i..]) {
            let span = tokens[i].span.to(tokens[i + width - 1].span);
            let text = src.get(span.start..span.end).unwrap_or_default();
            merged.push(Token::new(TokenKind::Function(function),
                                   function.name().to_string(),
                                   text.to_string(),
                                   span));
            i += width;
            continue;
        }

        let mut token = tokens[i].clone();
        if token.kind == TokenKind::Identifier
           && let Some(function) = BuiltinFunction::from_call_name(&token.text)
           && tokens.get(i + 1).is_some_and(|next| next.kind == TokenKind::LParen)
        {
            token.kind = TokenKind::Function(function);
            token.value = function.name().to_string();
        }
        merged.push(token);
        i += 1;
    }

    merged
}

/// Returns the function and word count of a phrase starting at `tokens[0]`.
fn phrase_at(tokens: &[Token]) -> Option<(BuiltinFunction, usize)> {
    PHRASES.iter().find_map(|(words, function)| {
                      let matches = words.len() <= tokens.len()
                                    && words.iter().zip(tokens).all(|(word, token)| {
                                                                   token.kind
                                                                   == TokenKind::Identifier
                                                                   && token.text
                                                                           .eq_ignore_ascii_case(word)
                                                               });
                      matches.then_some((*function, words.len()))
                  })
}
