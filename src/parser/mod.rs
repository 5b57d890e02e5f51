//! # MassBank Record Parser
//!
//! Single top-to-bottom pass over the lines of a record:
//!
//! 1. Blank lines are skipped.
//! 2. A line that trims to `//` ends the record.
//! 3. Every other line must contain `:`. The text before the first colon is
//!    the key, the text after it the value (both trimmed).
//! 4. Table keys (`PK$PEAK`, `PK$ANNOTATION`) hand the following lines to a
//!    [`TableParser`], which reports how many it consumed.
//! 5. Other keys go to the first matching [`FieldParser`]. Keys nobody
//!    claims are ignored here; the unrecognized-field rule reports them.
//!
//! A record without `ACCESSION` fails with a [`ParseError`] at offset 0.
//!
//! ```rust
//! use massbank::parser::parse_record;
//!
//! let record = parse_record("ACCESSION: TEST\n//").unwrap();
//! assert_eq!(record.accession, "TEST");
//! ```

use log::trace;

use crate::position::LineIndex;
use crate::record::Record;

pub use error::{FieldError, ParseError, INVALID_LINE_MESSAGE, MISSING_ACCESSION_MESSAGE};
pub use fields::{
    default_field_parsers, AnalyticalFieldParser, CompoundFieldParser, FieldParser,
    HeaderFieldParser, MassSpectrometryFieldParser, PeakFieldParser, SpeciesFieldParser,
    ANNOTATION_TABLE_KEY, HEADER_FIELDS, PEAK_TABLE_KEY,
};
pub use tables::{default_table_parsers, AnnotationTableParser, PeakTableParser, TableParser};

mod error;
mod fields;
pub mod numeric;
mod tables;

#[cfg(test)]
mod tests;

/// Line that terminates a record
pub const RECORD_TERMINATOR: &str = "//";

/// Record parser holding its field and table dispatchers
pub struct RecordParser {
    field_parsers: Vec<Box<dyn FieldParser>>,
    table_parsers: Vec<Box<dyn TableParser>>,
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordParser {
    /// Create a parser with the default dispatchers
    pub fn new() -> Self {
        Self::with_parsers(default_field_parsers(), default_table_parsers())
    }

    /// Create a parser with explicit dispatchers, asked in the given order
    pub fn with_parsers(
        field_parsers: Vec<Box<dyn FieldParser>>,
        table_parsers: Vec<Box<dyn TableParser>>,
    ) -> Self {
        Self {
            field_parsers,
            table_parsers,
        }
    }

    /// Parse record text into a [`Record`]
    pub fn parse(&self, text: &str) -> Result<Record, ParseError> {
        let index = LineIndex::new(text);
        let lines = index.lines();
        let mut record = Record::default();
        let mut i = 0;

        while i < lines.len() {
            let line = &lines[i];
            let trimmed = line.text.trim();

            if trimmed.is_empty() {
                i += 1;
                continue;
            }

            if trimmed == RECORD_TERMINATOR {
                break;
            }

            let Some(colon) = line.text.find(':') else {
                return Err(ParseError::at(&index, line.start, INVALID_LINE_MESSAGE));
            };

            let key = line.text[..colon].trim();
            let raw_value = &line.text[colon + 1..];
            let value = raw_value.trim();

            if let Some(table) = self.table_parsers.iter().find(|p| p.can_parse(key)) {
                i += 1;
                let consumed = table.parse(line.text, &lines[i..], &mut record);
                trace!("{} table consumed {} lines", key, consumed);
                i += consumed;
                continue;
            }

            if let Some(field) = self.field_parsers.iter().find(|p| p.can_parse(key)) {
                field.parse(key, value, &mut record).map_err(|err| {
                    let leading = raw_value.len() - raw_value.trim_start().len();
                    let column = line.char_column(colon + 1 + leading) + 1;
                    ParseError::at(
                        &index,
                        index.line_column_to_offset(i + 1, column),
                        err.to_string(),
                    )
                })?;
            }

            i += 1;
        }

        if record.accession.is_empty() {
            return Err(ParseError::at(&index, 0, MISSING_ACCESSION_MESSAGE));
        }

        Ok(record)
    }
}

/// Parse record text with the default parser
pub fn parse_record(text: &str) -> Result<Record, ParseError> {
    RecordParser::new().parse(text)
}
