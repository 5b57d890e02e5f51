use std::path::Path;

use super::super::{ErrorKind, RuleOptions, ValidationError, ValidationRule};
use crate::record::Record;

/// `ACCESSION` must equal the file name without its extension.
///
/// Only meaningful for inputs read from a real path; in-memory validation
/// drops this rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessionMatchRule;

impl AccessionMatchRule {
    fn base_name(source: &str) -> &str {
        Path::new(source)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(source)
    }
}

impl ValidationRule for AccessionMatchRule {
    fn name(&self) -> &'static str {
        "accession-match"
    }

    fn requires_source_path(&self) -> bool {
        true
    }

    fn validate(
        &self,
        record: &Record,
        _text: &str,
        source: &str,
        _options: &RuleOptions,
    ) -> Vec<ValidationError> {
        if record.accession == Self::base_name(source) {
            return Vec::new();
        }

        vec![ValidationError::new(
            source,
            ErrorKind::Validation,
            format!(
                "ACCESSION {} does not match filename '{}'",
                record.accession, source
            ),
        )
        .at_line(1)]
    }
}
