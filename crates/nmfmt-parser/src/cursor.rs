/// A cursor over template text that tracks a byte offset.
///
/// Provides low-level character access with peek/advance semantics and
/// cheap backtracking via [`reset`](Self::reset), which the placeholder
/// scanner needs when a candidate form fails part-way through.
pub struct Cursor<'src> {
    /// The template text being scanned.
    source: &'src str,
    /// Remaining text (slice starting at current position).
    rest: &'src str,
    /// Current byte offset from start of source.
    offset: usize,
}

impl<'src> Cursor<'src> {
    /// Create a cursor positioned at `offset`.
    ///
    /// `offset` must lie on a character boundary.
    pub fn at(source: &'src str, offset: usize) -> Self {
        debug_assert!(source.is_char_boundary(offset));
        Self {
            source,
            rest: &source[offset..],
            offset,
        }
    }

    /// Current byte offset from start of source.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move back (or forward) to a previously observed offset.
    #[inline]
    pub fn reset(&mut self, offset: usize) {
        self.rest = &self.source[offset..];
        self.offset = offset;
    }

    /// Peek at the current character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let first = *self.rest.as_bytes().first()?;
        if first < 128 {
            Some(first as char)
        } else {
            self.rest.chars().next()
        }
    }

    /// Check if the current character satisfies a predicate.
    #[inline]
    pub fn check(&self, f: impl Fn(char) -> bool) -> bool {
        self.peek().is_some_and(f)
    }

    /// Consume the current character and advance.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        let len = ch.len_utf8();
        self.rest = &self.rest[len..];
        self.offset += len;
        Some(ch)
    }

    /// Consume if the current character matches.
    #[inline]
    pub fn eat(&mut self, ch: char) -> bool {
        if self.peek() == Some(ch) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume ASCII characters while the predicate matches.
    ///
    /// Stops at the first non-ASCII byte. Returns the consumed slice.
    #[inline]
    pub fn eat_while_ascii(&mut self, f: impl Fn(u8) -> bool) -> &'src str {
        let start = self.offset;
        let n = self
            .rest
            .bytes()
            .take_while(|&b| b < 128 && f(b))
            .count();
        self.rest = &self.rest[n..];
        self.offset += n;
        &self.source[start..self.offset]
    }

    /// Consume characters up to (not including) the first one matching `stop`.
    ///
    /// Returns the consumed slice.
    pub fn eat_until(&mut self, stop: impl Fn(char) -> bool) -> &'src str {
        let start = self.offset;
        while self.check(|c| !stop(c)) {
            self.advance();
        }
        &self.source[start..self.offset]
    }

    /// Get a slice of source from a starting offset to current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'src str {
        &self.source[start..self.offset]
    }
}

/// Word characters: `[A-Za-z0-9_]`.
#[inline]
pub fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Word-character check for `char`s.
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii() && is_word(c as u8)
}
