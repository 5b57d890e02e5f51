use super::super::{RuleOptions, ValidationRule, ValidationWarning};
use crate::record::Record;

/// Every field name of the MassBank 2.6.0 record format
pub const KNOWN_FIELDS: [&str; 31] = [
    "ACCESSION",
    "RECORD_TITLE",
    "DATE",
    "AUTHORS",
    "LICENSE",
    "COPYRIGHT",
    "PUBLICATION",
    "PROJECT",
    "COMMENT",
    "DEPRECATED",
    "CH$NAME",
    "CH$COMPOUND_CLASS",
    "CH$FORMULA",
    "CH$EXACT_MASS",
    "CH$SMILES",
    "CH$IUPAC",
    "CH$LINK",
    "AC$INSTRUMENT",
    "AC$INSTRUMENT_TYPE",
    "AC$MASS_SPECTROMETRY",
    "AC$CHROMATOGRAPHY",
    "MS$FOCUSED_ION",
    "MS$DATA_PROCESSING",
    "PK$SPLASH",
    "PK$NUM_PEAK",
    "PK$PEAK",
    "PK$ANNOTATION",
    "SP$SCIENTIFIC_NAME",
    "SP$LINEAGE",
    "SP$LINK",
    "SP$SAMPLE",
];

/// Largest edit distance for which a field name is suggested
const MAX_SUGGESTION_DISTANCE: usize = 2;

/// Warns about `KEY:` lines whose key is not a known field.
///
/// Works on the raw text, independent of what the parser accepted.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnrecognizedFieldRule;

impl UnrecognizedFieldRule {
    /// Closest known field within the suggestion distance; earlier entries win ties
    pub fn suggest(key: &str) -> Option<&'static str> {
        let mut best: Option<(&'static str, usize)> = None;

        for field in KNOWN_FIELDS {
            let distance = levenshtein(key, field);
            if distance <= MAX_SUGGESTION_DISTANCE && best.map_or(true, |(_, d)| distance < d) {
                best = Some((field, distance));
            }
        }

        best.map(|(field, _)| field)
    }
}

impl ValidationRule for UnrecognizedFieldRule {
    fn name(&self) -> &'static str {
        "unrecognized-field"
    }

    fn warnings(
        &self,
        _record: &Record,
        text: &str,
        source: &str,
        _options: &RuleOptions,
    ) -> Vec<ValidationWarning> {
        let mut warnings = Vec::new();

        for (i, line) in text.split('\n').enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }

            let Some((key, _)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();

            if KNOWN_FIELDS.contains(&key) {
                continue;
            }

            let mut message = format!(
                "Unrecognized field '{}'. Not a valid MassBank 2.6.0 field.",
                key
            );
            match Self::suggest(key) {
                Some(field) => message.push_str(&format!(" Did you mean '{}'?", field)),
                None => message
                    .push_str(" Remove this line or check the MassBank format specification."),
            }

            warnings.push(ValidationWarning::new(source, message).at_line(i + 1));
        }

        warnings
    }
}

/// Edit distance over characters
fn levenshtein(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut previous: Vec<usize> = (0..=b.len()).collect();
    let mut current = vec![0; b.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        current[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = previous[j] + usize::from(ca != *cb);
            current[j + 1] = substitution.min(previous[j + 1] + 1).min(current[j] + 1);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[b.len()]
}
