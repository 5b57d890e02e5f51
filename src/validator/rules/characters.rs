use super::super::{RuleOptions, ValidationRule, ValidationWarning};
use crate::position::LineIndex;
use crate::record::Record;

/// Punctuation and symbols accepted besides ASCII letters, digits and `_`
const ALLOWED_SYMBOLS: &str = "\n\r -[].\"\\;:–=+,|(){}/$%@'°!?#`^*&<>µáćÉéóäöü©";

/// Warning text for a character outside the allowed set
pub const NON_STANDARD_CHAR_MESSAGE: &str =
    "Non standard ASCII character found. This might be an error. Please check carefully.";

/// Warns about the first character outside the MassBank character set.
///
/// Deprecated records are not scanned.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonStandardCharsRule;

/// True when `c` belongs to the accepted character set
pub fn is_standard_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || ALLOWED_SYMBOLS.contains(c)
}

impl ValidationRule for NonStandardCharsRule {
    fn name(&self) -> &'static str {
        "non-standard-characters"
    }

    fn warnings(
        &self,
        record: &Record,
        text: &str,
        source: &str,
        _options: &RuleOptions,
    ) -> Vec<ValidationWarning> {
        if record.is_deprecated() {
            return Vec::new();
        }

        let Some(offset) = text.chars().position(|c| !is_standard_char(c)) else {
            return Vec::new();
        };

        let location = LineIndex::new(text).offset_to_line_column(offset);
        vec![ValidationWarning::new(source, NON_STANDARD_CHAR_MESSAGE).at(location.line, location.column)]
    }
}
