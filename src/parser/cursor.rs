//! Read position over an immutable input buffer.

/// Monotonic byte offset into the document.
///
/// The cursor only moves forward. All slicing happens at ASCII delimiters,
/// so returned spans are always valid `str` boundaries.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Unread part of the input.
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.pos + offset).copied()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// Move forward `n` bytes, clamped to the end of input.
    pub fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Jump to absolute offset `pos`. Never moves backwards.
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(pos >= self.pos, "cursor moved backwards");
        self.pos = pos.clamp(self.pos, self.input.len());
    }

    /// Text between two absolute offsets.
    pub fn span(&self, start: usize, end: usize) -> &'a str {
        &self.input[start..end]
    }

    /// Skip whitespace and `#` comments up to the next significant byte.
    pub fn skip_whitespace(&mut self) {
        let bytes = self.input.as_bytes();
        while let Some(&b) = bytes.get(self.pos) {
            match b {
                b' ' | b'\t' | b'\r' | b'\n' => self.pos += 1,
                b'#' => {
                    while let Some(&c) = bytes.get(self.pos) {
                        if c == b'\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                _ => break,
            }
        }
    }

    /// Offset of the first non-whitespace byte at or after `pos + offset`,
    /// without moving the cursor. Comments are not skipped.
    pub fn next_significant(&self, offset: usize) -> Option<(usize, u8)> {
        self.input.as_bytes()[self.pos..]
            .iter()
            .enumerate()
            .skip(offset)
            .find(|(_, b)| !matches!(b, b' ' | b'\t' | b'\r' | b'\n'))
            .map(|(i, b)| (self.pos + i, *b))
    }

    /// The run of bytes up to (not including) the first byte in `stop`,
    /// without moving the cursor.
    ///
    /// A trailing `.` directly before the stop byte (or end of input) is left
    /// out so it can be read back as a statement terminator.
    pub fn peek_word(&self, stop: &[u8]) -> &'a str {
        let bytes = self.input.as_bytes();
        let mut end = self.pos;
        while end < bytes.len() && !stop.contains(&bytes[end]) {
            end += 1;
        }
        if end > self.pos + 1 && bytes[end - 1] == b'.' {
            end -= 1;
        }
        &self.input[self.pos..end]
    }

    /// [`peek_word`](Self::peek_word), consuming the word.
    pub fn take_word(&mut self, stop: &[u8]) -> &'a str {
        let word = self.peek_word(stop);
        self.pos += word.len();
        word
    }
}
