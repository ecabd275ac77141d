use crate::interpreter::lexer::{
    core::{Lexer, is_identifier_continue},
    scanner::Checkpoint,
    token::{Keyword, Token, TokenKind},
    word::Word,
};

impl Lexer<'_> {
    /// Tries to extend the number that ends at the cursor into a duration.
    ///
    /// Accepts `N unit` followed by any number of `and N unit` terms, where
    /// each unit is a time-unit word. Restores the cursor and returns `None`
    /// if the first word is not a time unit; a trailing `and ...` that does
    /// not complete a term is left unconsumed.
    pub(in crate::interpreter::lexer) fn try_duration(&mut self, start: Checkpoint) -> Option<Token> {
        let after_number = self.scanner.checkpoint();
        if !self.eat_time_unit() {
            self.scanner.restore(after_number);
            return None;
        }

        loop {
            let before_term = self.scanner.checkpoint();
            if !self.eat_and_term() {
                self.scanner.restore(before_term);
                break;
            }
        }

        let text = self.scanner.slice_from(start);
        Some(Token::new(TokenKind::Duration,
                        text.to_lowercase(),
                        text.to_string(),
                        self.span_from(start)))
    }

    fn eat_time_unit(&mut self) -> bool {
        self.eat_spaced_word()
            .is_some_and(|word| Word::classify(word) == Some(Word::TimeUnit))
    }

    fn eat_and_term(&mut self) -> bool {
        let joined = self.eat_spaced_word()
                         .is_some_and(|word| {
                             Word::classify(word) == Some(Word::Keyword(Keyword::And))
                         });
        if !joined || self.scanner.peek() != Some(' ') || !self.amount_follows(1) {
            return false;
        }
        self.scanner.bump();
        self.scan_digits();
        self.eat_time_unit()
    }

    /// Lexes a date whose month word has already been consumed.
    ///
    /// Takes an optional one- or two-digit day and then an optional four-digit
    /// year, the year optionally preceded by a comma: `March`, `March 15`,
    /// `March 2024`, `Mar 15, 2024`.
    pub(in crate::interpreter::lexer) fn lex_date(&mut self, start: Checkpoint) -> Token {
        let before_day = self.scanner.checkpoint();
        if !self.eat_spaced_digits(1, 2) {
            self.scanner.restore(before_day);
        }

        let before_year = self.scanner.checkpoint();
        if self.scanner.peek() == Some(',') {
            self.scanner.bump();
        }
        if !self.eat_spaced_digits(4, 4) {
            self.scanner.restore(before_year);
        }

        let text = self.scanner.slice_from(start);
        Token::new(TokenKind::Date,
                   text.to_lowercase(),
                   text.to_string(),
                   self.span_from(start))
    }

    /// Whether a month abbreviation is followed by a day or year number.
    pub(in crate::interpreter::lexer) fn day_or_year_follows(&self) -> bool {
        self.scanner.peek() == Some(' ')
        && self.scanner
               .peek_nth(1)
               .is_some_and(|d| d.is_ascii_digit())
    }

    /// One space, then between `min` and `max` digits that do not run on into
    /// a longer word.
    fn eat_spaced_digits(&mut self, min: usize, max: usize) -> bool {
        if self.scanner.peek() != Some(' ') {
            return false;
        }
        self.scanner.bump();
        let count = self.scanner.bump_while(|d| d.is_ascii_digit());
        let ends_cleanly = !self.scanner.peek().is_some_and(is_identifier_continue);
        (min..=max).contains(&count) && ends_cleanly
    }
}
