use crate::span::Span;

/// A saved scanner position. Restoring it undoes everything consumed since.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    pos:        usize,
    line:       usize,
    line_start: usize,
}

impl Checkpoint {
    /// Byte offset of the saved position.
    pub const fn offset(self) -> usize {
        self.pos
    }
}

/// A character cursor over one source string.
///
/// Tracks the byte offset together with the current line and the byte offset
/// at which that line starts, so spans can report character columns.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    src:        &'a str,
    pos:        usize,
    line:       usize,
    line_start: usize,
}

impl<'a> Scanner<'a> {
    pub const fn new(src: &'a str, first_line: usize) -> Self {
        Self { src,
               pos: 0,
               line: first_line,
               line_start: 0 }
    }

    pub const fn source(&self) -> &'a str {
        self.src
    }

    pub fn rest(&self) -> &'a str {
        self.src.get(self.pos..).unwrap_or_default()
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Looks `n` characters past the current one.
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    /// Consumes one character.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.line_start = self.pos;
        }
        Some(c)
    }

    /// Consumes `len` bytes that are known not to contain a newline.
    pub fn advance_bytes(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.src.len());
    }

    /// Consumes characters while `pred` holds and returns how many.
    pub fn bump_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek()
              && pred(c)
        {
            self.bump();
            count += 1;
        }
        count
    }

    pub const fn checkpoint(&self) -> Checkpoint {
        Checkpoint { pos:        self.pos,
                     line:       self.line,
                     line_start: self.line_start, }
    }

    pub const fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.line = checkpoint.line;
        self.line_start = checkpoint.line_start;
    }

    /// The source consumed since `from`.
    pub fn slice_from(&self, from: Checkpoint) -> &'a str {
        self.src.get(from.pos..self.pos).unwrap_or_default()
    }

    /// The span from `from` to the current position.
    pub fn span_from(&self, from: Checkpoint) -> Span {
        let column = self.src
                         .get(from.line_start..from.pos)
                         .map_or(0, |prefix| prefix.chars().count())
                     + 1;
        Span::new(from.pos, self.pos, from.line, column)
    }

    /// A zero-width span at the current position.
    pub fn here(&self) -> Span {
        self.span_from(self.checkpoint())
    }
}
