use crate::{
    error::LexError,
    interpreter::{
        lexer::{
            core::{
                LexResult, Lexer, MAX_NUMBER_LEN, MAX_UNIT_WORDS, is_identifier_continue,
                is_identifier_start,
            },
            scanner::Checkpoint,
            token::{Magnitude, Token, TokenKind},
        },
        units::{UnitDef, lookup_unit},
    },
};

impl Lexer<'_> {
    /// Lexes a numeric literal and whatever is glued to it.
    ///
    /// After the digits, in order:
    /// - `e`/`E` with a signed digit run makes the literal scientific.
    /// - A directly following `%` makes it a percentage.
    /// - A directly following `k`, `K`, `M`, `B` or `T` that does not run on
    ///   into a longer word makes it a magnitude.
    /// - A unit symbol that is not a word, `°C`, `°F` or `″`, either glued on
    ///   or after one space, makes it a quantity.
    /// - Exactly one space and a word starts the duration and unit lookahead.
    ///   If neither matches, the cursor goes back to just after the digits.
    pub(in crate::interpreter::lexer) fn lex_number(&mut self) -> LexResult<Token> {
        let start = self.scanner.checkpoint();
        let mut value = self.scan_digits();
        let mut kind = TokenKind::Number;

        if self.exponent_follows() {
            if let Some(e) = self.scanner.bump() {
                value.push(e);
            }
            if let Some(sign @ ('+' | '-')) = self.scanner.peek() {
                self.scanner.bump();
                value.push(sign);
            }
            while let Some(d) = self.scanner.peek()
                  && d.is_ascii_digit()
            {
                self.scanner.bump();
                value.push(d);
            }
            kind = TokenKind::Scientific;
        }

        self.check_number_length(start)?;

        if self.scanner.peek() == Some('%') {
            self.scanner.bump();
            return Ok(self.number_token(start, TokenKind::Percentage, value));
        }
        if let Some(magnitude) = self.eat_magnitude() {
            return Ok(self.number_token(start, TokenKind::Magnitude(magnitude), value));
        }
        if let Some(unit) = self.try_unit_symbol() {
            return Ok(self.number_token(start, TokenKind::Quantity(unit), value));
        }
        if self.word_follows_single_space() {
            if let Some(duration) = self.try_duration(start) {
                return Ok(duration);
            }
            if let Some(unit) = self.try_unit_phrase() {
                return Ok(self.number_token(start, TokenKind::Quantity(unit), value));
            }
        }

        Ok(self.number_token(start, kind, value))
    }

    /// Lexes `$100`, `€1,000.50` or `£5k`. The cursor is on the sign.
    pub(in crate::interpreter::lexer) fn lex_currency_symbol(&mut self) -> LexResult<Token> {
        let start = self.scanner.checkpoint();
        let symbol = self.scanner.bump().map(String::from).unwrap_or_default();
        self.lex_currency_amount(start, symbol)
    }

    /// Lexes `USD100` or `EUR1,000`. The cursor is on the first letter of a
    /// three-letter uppercase code that is directly followed by a digit.
    pub(in crate::interpreter::lexer) fn lex_currency_code(&mut self) -> LexResult<Token> {
        let start = self.scanner.checkpoint();
        let code = self.scanner.rest().get(..3).unwrap_or_default().to_string();
        self.scanner.advance_bytes(code.len());
        self.lex_currency_amount(start, code)
    }

    fn lex_currency_amount(&mut self, start: Checkpoint, symbol: String) -> LexResult<Token> {
        let value = self.scan_digits();
        self.check_number_length(start)?;
        let magnitude = self.eat_magnitude();

        Ok(self.number_token(start, TokenKind::Currency { symbol, magnitude }, value))
    }

    /// Scans a digit run with thousands separators and an optional fraction,
    /// returning it with the separators removed.
    ///
    /// A `,` or `_` belongs to the number only when exactly three digits
    /// follow it. `1,000` is one number; `1,2` and `1,0000` are not.
    pub(in crate::interpreter::lexer) fn scan_digits(&mut self) -> String {
        let mut digits = String::new();

        while let Some(c) = self.scanner.peek() {
            if c.is_ascii_digit() {
                digits.push(c);
                self.scanner.bump();
            } else if matches!(c, ',' | '_') && !digits.is_empty() && self.separator_group_follows()
            {
                self.scanner.bump();
            } else {
                break;
            }
        }

        if self.scanner.peek() == Some('.')
           && self.scanner
                  .peek_nth(1)
                  .is_some_and(|d| d.is_ascii_digit())
        {
            if digits.is_empty() {
                digits.push('0');
            }
            digits.push('.');
            self.scanner.bump();
            while let Some(d) = self.scanner.peek()
                  && d.is_ascii_digit()
            {
                digits.push(d);
                self.scanner.bump();
            }
        }

        digits
    }

    fn separator_group_follows(&self) -> bool {
        (1..=3).all(|i| self.scanner.peek_nth(i).is_some_and(|d| d.is_ascii_digit()))
        && !self.scanner.peek_nth(4).is_some_and(|d| d.is_ascii_digit())
    }

    fn exponent_follows(&self) -> bool {
        if !matches!(self.scanner.peek(), Some('e' | 'E')) {
            return false;
        }
        let digit_at = if matches!(self.scanner.peek_nth(1), Some('+' | '-')) {
            2
        } else {
            1
        };
        self.scanner
            .peek_nth(digit_at)
            .is_some_and(|d| d.is_ascii_digit())
    }

    fn eat_magnitude(&mut self) -> Option<Magnitude> {
        let magnitude = Magnitude::from_suffix(self.scanner.peek()?)?;
        if self.scanner.peek_nth(1).is_some_and(is_identifier_continue) {
            return None;
        }
        self.scanner.bump();
        Some(magnitude)
    }

    fn check_number_length(&self, start: Checkpoint) -> LexResult<()> {
        if self.scanner.slice_from(start).len() > MAX_NUMBER_LEN {
            let span = self.span_from(start);
            return Err(LexError::NumberTooLong { limit:  MAX_NUMBER_LEN,
                                                 line:   span.line,
                                                 column: span.column, });
        }
        Ok(())
    }

    /// Exactly one space, then something that can start a word.
    pub(in crate::interpreter::lexer) fn word_follows_single_space(&self) -> bool {
        self.scanner.peek() == Some(' ')
        && self.scanner.peek_nth(1).is_some_and(is_identifier_start)
    }

    /// Consumes one space and the word after it, returning the word.
    pub(in crate::interpreter::lexer) fn eat_spaced_word(&mut self) -> Option<&str> {
        if !self.word_follows_single_space() {
            return None;
        }
        self.scanner.bump();
        let word_start = self.scanner.checkpoint();
        self.scanner.bump();
        self.scanner.bump_while(is_identifier_continue);
        Some(self.scanner.slice_from(word_start))
    }

    /// Tries to read a unit phrase of up to [`MAX_UNIT_WORDS`] words after a
    /// number, preferring the longest phrase that names a unit.
    ///
    /// On success the cursor sits after the last matched word. On failure it
    /// is restored to where it was on entry.
    fn try_unit_phrase(&mut self) -> Option<&'static UnitDef> {
        let after_number = self.scanner.checkpoint();
        let phrase_start = after_number.offset() + 1;
        let mut word_ends = Vec::with_capacity(MAX_UNIT_WORDS);

        while word_ends.len() < MAX_UNIT_WORDS && self.eat_spaced_word().is_some() {
            word_ends.push(self.scanner.checkpoint());
        }

        for end in word_ends.iter().rev() {
            let phrase = self.scanner
                             .source()
                             .get(phrase_start..end.offset())
                             .unwrap_or_default();
            if let Some(unit) = lookup_unit(phrase) {
                self.scanner.restore(*end);
                return Some(unit);
            }
        }

        self.scanner.restore(after_number);
        None
    }

    /// Reads a unit written as a symbol, which the word lookahead never sees
    /// because `°` and `″` cannot start an identifier.
    fn try_unit_symbol(&mut self) -> Option<&'static UnitDef> {
        let after_number = self.scanner.checkpoint();
        if self.scanner.peek() == Some(' ') {
            self.scanner.bump();
        }

        let symbol_start = self.scanner.checkpoint();
        match self.scanner.peek() {
            Some('°') => {
                self.scanner.bump();
                self.scanner.bump_while(|c| c.is_ascii_alphabetic());
            },
            Some('″') => {
                self.scanner.bump();
            },
            _ => {},
        }

        let unit = lookup_unit(self.scanner.slice_from(symbol_start));
        let ends_cleanly = !self.scanner.peek().is_some_and(is_identifier_continue);
        match unit {
            Some(unit) if ends_cleanly => Some(unit),
            _ => {
                self.scanner.restore(after_number);
                None
            },
        }
    }

    fn number_token(&self, start: Checkpoint, kind: TokenKind, value: String) -> Token {
        Token::new(kind,
                   value,
                   self.scanner.slice_from(start).to_string(),
                   self.span_from(start))
    }
}
