//! Byte offset <-> line/column conversion
//!
//! Scanner output is expressed in byte offsets. Editors want 0-based lines and columns,
//! and the Language Server Protocol counts columns in UTF-16 code units, so every
//! conversion goes through this index.

use std::ops::Range;

/// 0-based line and UTF-16 column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct LineCol {
    pub line: u32,
    pub character: u32,
}

impl LineCol {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    content: &'a str,
    line_starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    pub fn new(content: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(content.match_indices('\n').map(|(idx, _)| idx + 1));
        Self { content, line_starts }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte offset into a line/column pair.
    ///
    /// Offsets past the end clamp to the end of the content; offsets inside a multi-byte
    /// character are rounded down to the character start.
    pub fn position_of(&self, offset: usize) -> LineCol {
        let mut offset = offset.min(self.content.len());
        while !self.content.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        let character = self.content[line_start..offset]
            .chars()
            .map(char::len_utf16)
            .sum::<usize>();

        LineCol::new(line as u32, character as u32)
    }

    /// Convert a byte range into a pair of positions
    pub fn range_of(&self, range: &Range<usize>) -> (LineCol, LineCol) {
        (self.position_of(range.start), self.position_of(range.end))
    }

    /// Convert a line/column pair back into a byte offset.
    ///
    /// Lines past the end map to the end of the content, columns past the end of a line
    /// map to the end of that line (before its terminator).
    pub fn offset_of(&self, position: LineCol) -> usize {
        let Some(&line_start) = self.line_starts.get(position.line as usize) else {
            return self.content.len();
        };
        let line_end = self
            .line_starts
            .get(position.line as usize + 1)
            .map_or(self.content.len(), |&next| next - 1);
        let line_text = self.content[line_start..line_end].trim_end_matches('\r');

        let mut remaining = position.character as usize;
        for (idx, ch) in line_text.char_indices() {
            if remaining == 0 {
                return line_start + idx;
            }
            remaining = remaining.saturating_sub(ch.len_utf16());
        }
        line_start + line_text.len()
    }

    /// Convert a pair of positions back into a byte range
    pub fn offset_range(&self, start: LineCol, end: LineCol) -> Range<usize> {
        let start = self.offset_of(start);
        let end = self.offset_of(end);
        start.min(end)..end.max(start)
    }
}
