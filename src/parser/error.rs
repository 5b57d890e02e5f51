use crate::position::LineIndex;

/// Message for a non-blank line that is neither a field nor table data
pub const INVALID_LINE_MESSAGE: &str = "invalid line format: expected key:value or table data";

/// Message for a record without an `ACCESSION` value
pub const MISSING_ACCESSION_MESSAGE: &str = "ACCESSION field is required";

/// A structural failure while parsing a record, with its exact location
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} (line {line}, column {column})")]
pub struct ParseError {
    /// Character offset in the input, clamped to `[0, len]`
    pub offset: usize,
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based)
    pub column: usize,
    /// Description of the problem
    pub message: String,
}

impl ParseError {
    /// Build an error at a character offset of the indexed text
    pub fn at(index: &LineIndex<'_>, offset: usize, message: impl Into<String>) -> Self {
        let offset = offset.min(index.char_len());
        let location = index.offset_to_line_column(offset);
        Self {
            offset,
            line: location.line,
            column: location.column,
            message: message.into(),
        }
    }
}

/// Errors raised by field dispatchers while interpreting a value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// `PK$NUM_PEAK` is not an integer
    #[error("Invalid PK$NUM_PEAK value: {0}")]
    InvalidNumPeak(String),
}
