//! Conversion between flat character offsets and 1-based line/column pairs.
//!
//! Offsets count Unicode scalar values, not bytes. Lines end at `\n`; a `\r`
//! directly before it belongs to the terminator, so a CRLF line and the same
//! LF line map to identical (line, column) pairs. A lone `\r` is ordinary
//! line content.

use serde::Serialize;

/// A 1-based line/column location inside a record text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LineColumn {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, in characters)
    pub column: usize,
}

impl LineColumn {
    /// Create a new location
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// One physical line of a text, without its terminator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// Line content with the terminator stripped
    pub text: &'a str,
    /// Character offset of the first character of the line
    pub start: usize,
    /// Length of the content in characters
    pub len: usize,
    /// Terminator length in characters: 1 for LF, 2 for CRLF, 0 on the final line
    pub terminator: usize,
}

impl<'a> Line<'a> {
    /// Character offset one past the terminator
    pub fn end(&self) -> usize {
        self.start + self.len + self.terminator
    }

    /// Character column (0-based) of a byte index inside the line content
    pub fn char_column(&self, byte_index: usize) -> usize {
        self.text
            .get(..byte_index)
            .map(|prefix| prefix.chars().count())
            .unwrap_or(self.len)
    }
}

/// Line table for a text, built once and queried many times.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    lines: Vec<Line<'a>>,
    char_len: usize,
}

impl<'a> LineIndex<'a> {
    /// Split `text` into lines, recording each line's true terminator length
    pub fn new(text: &'a str) -> Self {
        let mut lines = Vec::new();
        let mut start = 0;
        let mut rest = text;

        loop {
            match rest.find('\n') {
                Some(newline) => {
                    let raw = &rest[..newline];
                    let (content, terminator) = match raw.strip_suffix('\r') {
                        Some(stripped) => (stripped, 2),
                        None => (raw, 1),
                    };
                    let len = content.chars().count();
                    lines.push(Line {
                        text: content,
                        start,
                        len,
                        terminator,
                    });
                    start += len + terminator;
                    rest = &rest[newline + 1..];
                }
                None => {
                    let len = rest.chars().count();
                    lines.push(Line {
                        text: rest,
                        start,
                        len,
                        terminator: 0,
                    });
                    start += len;
                    break;
                }
            }
        }

        Self {
            lines,
            char_len: start,
        }
    }

    /// All lines of the text; never empty
    pub fn lines(&self) -> &[Line<'a>] {
        &self.lines
    }

    /// Number of lines (a trailing terminator yields a final empty line)
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; even the empty text has one (empty) line
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total length of the text in characters
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    /// Convert a character offset to a 1-based location.
    ///
    /// Offsets past the end are clamped to the end of the text. An offset
    /// pointing into a terminator reports a column just past the content.
    pub fn offset_to_line_column(&self, offset: usize) -> LineColumn {
        let offset = offset.min(self.char_len);
        let last = self.lines.len().saturating_sub(1);

        for (i, line) in self.lines.iter().enumerate() {
            if offset < line.end() || i == last {
                return LineColumn::new(i + 1, offset - line.start + 1);
            }
        }

        LineColumn::new(1, 1)
    }

    /// Convert a 1-based location back to a character offset.
    ///
    /// The line is clamped into the text and the result into `[0, char_len]`.
    pub fn line_column_to_offset(&self, line: usize, column: usize) -> usize {
        let index = line.saturating_sub(1).min(self.lines.len().saturating_sub(1));
        let start = self.lines.get(index).map(|l| l.start).unwrap_or(0);
        (start + column.saturating_sub(1)).min(self.char_len)
    }
}

/// Convert a character offset in `text` to a 1-based (line, column)
pub fn offset_to_line_column(text: &str, offset: usize) -> LineColumn {
    LineIndex::new(text).offset_to_line_column(offset)
}

/// Convert a 1-based (line, column) in `text` to a character offset
pub fn line_column_to_offset(text: &str, line: usize, column: usize) -> usize {
    LineIndex::new(text).line_column_to_offset(line, column)
}
