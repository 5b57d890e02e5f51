use super::super::{ErrorKind, RuleOptions, ValidationError, ValidationRule};
use crate::position::LineIndex;
use crate::record::Record;
use crate::serializer::serialize_record;

/// Error text when serialization does not reproduce the input
pub const ROUNDTRIP_MESSAGE: &str =
    "File content differs from generated record string. This might be a code problem. Please Report!";

/// Re-serializes the record and reports the first character where the
/// output departs from the source text.
///
/// In legacy mode trailing whitespace at the end of the file is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerializationRule;

/// Replace `\r\n` and lone `\r` with `\n`
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Character offset of the first difference, or `None` when equal.
///
/// A strict prefix differs at the length of the shorter string.
pub fn first_difference(a: &str, b: &str) -> Option<usize> {
    let mut left = a.chars();
    let mut right = b.chars();
    let mut offset = 0;

    loop {
        match (left.next(), right.next()) {
            (None, None) => return None,
            (Some(x), Some(y)) if x == y => offset += 1,
            _ => return Some(offset),
        }
    }
}

impl ValidationRule for SerializationRule {
    fn name(&self) -> &'static str {
        "serialization"
    }

    fn validate(
        &self,
        record: &Record,
        text: &str,
        source: &str,
        options: &RuleOptions,
    ) -> Vec<ValidationError> {
        let mut original = normalize_line_endings(text);
        let mut serialized = serialize_record(record);

        if options.legacy {
            original.truncate(original.trim_end().len());
            serialized.truncate(serialized.trim_end().len());
        }

        let Some(offset) = first_difference(&original, &serialized) else {
            return Vec::new();
        };

        let location = LineIndex::new(&original).offset_to_line_column(offset);
        vec![
            ValidationError::new(source, ErrorKind::Serialization, ROUNDTRIP_MESSAGE)
                .at(location.line, location.column),
        ]
    }
}
