use logos::Logos;

use crate::interpreter::lexer::token::Keyword;

/// Words with a fixed meaning, matched without regard to case.
///
/// The lexer scans a whole identifier first and only then asks this matcher
/// about it, so a word counts only if the match covers all of it: `true`
/// matches, `trueish` does not.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    /// `true`, `yes`, `t`, `y` and their negative forms.
    #[token("true", |_| true, ignore(case))]
    #[token("yes", |_| true, ignore(case))]
    #[token("t", |_| true, ignore(case))]
    #[token("y", |_| true, ignore(case))]
    #[token("false", |_| false, ignore(case))]
    #[token("no", |_| false, ignore(case))]
    #[token("f", |_| false, ignore(case))]
    #[token("n", |_| false, ignore(case))]
    Boolean(bool),
    /// Reserved words.
    #[token("and", |_| Keyword::And, ignore(case))]
    #[token("or", |_| Keyword::Or, ignore(case))]
    #[token("not", |_| Keyword::Not, ignore(case))]
    #[token("xor", |_| Keyword::Xor, ignore(case))]
    #[token("if", |_| Keyword::If, ignore(case))]
    #[token("then", |_| Keyword::Then, ignore(case))]
    #[token("else", |_| Keyword::Else, ignore(case))]
    #[token("while", |_| Keyword::While, ignore(case))]
    #[token("for", |_| Keyword::For, ignore(case))]
    #[token("return", |_| Keyword::Return, ignore(case))]
    #[token("today", |_| Keyword::Today, ignore(case))]
    #[token("tomorrow", |_| Keyword::Tomorrow, ignore(case))]
    #[token("yesterday", |_| Keyword::Yesterday, ignore(case))]
    #[token("now", |_| Keyword::Now, ignore(case))]
    Keyword(Keyword),
    /// Full month names, numbered from 1.
    #[token("january", |_| 1_u8, ignore(case))]
    #[token("february", |_| 2_u8, ignore(case))]
    #[token("march", |_| 3_u8, ignore(case))]
    #[token("april", |_| 4_u8, ignore(case))]
    #[token("may", |_| 5_u8, ignore(case))]
    #[token("june", |_| 6_u8, ignore(case))]
    #[token("july", |_| 7_u8, ignore(case))]
    #[token("august", |_| 8_u8, ignore(case))]
    #[token("september", |_| 9_u8, ignore(case))]
    #[token("october", |_| 10_u8, ignore(case))]
    #[token("november", |_| 11_u8, ignore(case))]
    #[token("december", |_| 12_u8, ignore(case))]
    Month(u8),
    /// Three- and four-letter month abbreviations.
    #[token("jan", |_| 1_u8, ignore(case))]
    #[token("feb", |_| 2_u8, ignore(case))]
    #[token("mar", |_| 3_u8, ignore(case))]
    #[token("apr", |_| 4_u8, ignore(case))]
    #[token("jun", |_| 6_u8, ignore(case))]
    #[token("jul", |_| 7_u8, ignore(case))]
    #[token("aug", |_| 8_u8, ignore(case))]
    #[token("sep", |_| 9_u8, ignore(case))]
    #[token("sept", |_| 9_u8, ignore(case))]
    #[token("oct", |_| 10_u8, ignore(case))]
    #[token("nov", |_| 11_u8, ignore(case))]
    #[token("dec", |_| 12_u8, ignore(case))]
    MonthAbbrev(u8),
    /// Units a duration can be counted in.
    #[token("second", ignore(case))]
    #[token("seconds", ignore(case))]
    #[token("sec", ignore(case))]
    #[token("secs", ignore(case))]
    #[token("minute", ignore(case))]
    #[token("minutes", ignore(case))]
    #[token("min", ignore(case))]
    #[token("mins", ignore(case))]
    #[token("hour", ignore(case))]
    #[token("hours", ignore(case))]
    #[token("hr", ignore(case))]
    #[token("hrs", ignore(case))]
    #[token("day", ignore(case))]
    #[token("days", ignore(case))]
    #[token("week", ignore(case))]
    #[token("weeks", ignore(case))]
    #[token("fortnight", ignore(case))]
    #[token("fortnights", ignore(case))]
    #[token("month", ignore(case))]
    #[token("months", ignore(case))]
    #[token("year", ignore(case))]
    #[token("years", ignore(case))]
    TimeUnit,
}

impl Word {
    /// Classifies a complete word, or returns `None` for ordinary
    /// identifiers.
    ///
    /// # Example
    /// ```
    /// use calcnote::interpreter::lexer::{token::Keyword, word::Word};
    ///
    /// assert_eq!(Word::classify("TRUE"), Some(Word::Boolean(true)));
    /// assert_eq!(Word::classify("And"), Some(Word::Keyword(Keyword::And)));
    /// assert_eq!(Word::classify("Sept"), Some(Word::MonthAbbrev(9)));
    /// assert_eq!(Word::classify("nothing"), None);
    /// ```
    #[must_use]
    pub fn classify(word: &str) -> Option<Self> {
        let mut lexer = Self::lexer(word);
        match lexer.next() {
            Some(Ok(found)) if lexer.span() == (0..word.len()) => Some(found),
            _ => None,
        }
    }

    /// Whether `word` is one of the boolean spellings.
    #[must_use]
    pub fn is_boolean(word: &str) -> bool {
        matches!(Self::classify(word), Some(Self::Boolean(_)))
    }
}
