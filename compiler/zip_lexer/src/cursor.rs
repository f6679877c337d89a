//! Code-point cursor over a source string.
//!
//! The cursor keeps a byte offset just past the most recently decoded
//! character. `current()` is that character; `peek()` decodes the next one
//! without moving. Both return `None` at end of input.

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    /// Byte offset one past `current`.
    pos: usize,
    current: Option<char>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            current: None,
        }
    }

    /// The most recently consumed character.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.current
    }

    /// The character after `current`, without consuming it.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Consume one character and make it `current`.
    #[inline]
    pub(crate) fn advance(&mut self) -> Option<char> {
        self.current = self.peek();
        if let Some(c) = self.current {
            self.pos += c.len_utf8();
        }
        self.current
    }

    /// Byte offset where `current` starts.
    #[inline]
    pub(crate) fn current_start(&self) -> usize {
        self.pos - self.current.map_or(0, char::len_utf8)
    }

    /// Source text from `start` up to and including `current`.
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    /// Consume everything up to, but not including, the next `\n`.
    ///
    /// `current` ends up as the last consumed character.
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        let remaining = &self.source.as_bytes()[self.pos..];
        let end = memchr::memchr(b'\n', remaining).map_or(self.source.len(), |at| self.pos + at);
        if end > self.pos {
            self.pos = end;
            self.current = self.source[..end].chars().next_back();
        }
    }
}

#[cfg(test)]
mod tests;
