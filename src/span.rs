/// A region of source text.
///
/// `start` and `end` are byte offsets into the tokenized text (`end` is
/// exclusive). `line` and `column` are 1-based and describe where `start`
/// sits; columns count characters, not bytes, so they line up with what an
/// editor shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first character.
    pub start:  usize,
    /// Byte offset one past the last character.
    pub end:    usize,
    /// 1-based line number of `start`.
    pub line:   usize,
    /// 1-based character column of `start`.
    pub column: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self { start,
               end,
               line,
               column }
    }

    /// Returns a span covering `self` through the end of `other`.
    ///
    /// # Example
    /// ```
    /// use calcnote::span::Span;
    ///
    /// let left = Span::new(0, 1, 1, 1);
    /// let right = Span::new(4, 5, 1, 5);
    /// assert_eq!(left.to(right), Span::new(0, 5, 1, 1));
    /// ```
    #[must_use]
    pub const fn to(self, other: Self) -> Self {
        Self { start:  self.start,
               end:    other.end,
               line:   self.line,
               column: self.column, }
    }

    /// Length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
