//! Table sub-parsers for `PK$PEAK` and `PK$ANNOTATION`.
//!
//! A table runs from the line after its header while rows are non-blank,
//! are not the `//` terminator and contain no `:`. A data row holding a
//! literal colon therefore ends the table early; the parser then reads it
//! as a field line.
//!
//! Rows whose numbers cannot be read are dropped rather than reported.

use super::fields::{ANNOTATION_TABLE_KEY, PEAK_TABLE_KEY};
use super::numeric::{is_numeric, parse_leading_f64};
use crate::position::Line;
use crate::record::{Annotation, Peak, PeakSource, Record};

/// Consumes the data rows that follow a table header
pub trait TableParser: Send + Sync {
    /// True when `key` names this table (exact match)
    fn can_parse(&self, key: &str) -> bool;

    /// Parse rows starting at `rows[0]` (the line after `header`).
    ///
    /// Returns the number of lines consumed.
    fn parse(&self, header: &str, rows: &[Line<'_>], record: &mut Record) -> usize;
}

/// The default table parsers
pub fn default_table_parsers() -> Vec<Box<dyn TableParser>> {
    vec![Box::new(PeakTableParser), Box::new(AnnotationTableParser)]
}

/// Number of leading lines that belong to a table body
fn table_extent(rows: &[Line<'_>]) -> usize {
    rows.iter()
        .take_while(|row| {
            let trimmed = row.text.trim();
            !trimmed.is_empty() && trimmed != "//" && !trimmed.contains(':')
        })
        .count()
}

/// `PK$PEAK: m/z int. rel.int.`
#[derive(Debug, Clone, Copy, Default)]
pub struct PeakTableParser;

impl PeakTableParser {
    fn parse_row(row: &str) -> Option<Peak> {
        let parts: Vec<&str> = row.split_whitespace().collect();
        if parts.len() < 2 {
            return None;
        }

        let mz = parse_leading_f64(parts[0])?;
        let intensity = parse_leading_f64(parts[1])?;
        let relative = parts.get(2).copied();

        Some(Peak {
            mz,
            intensity,
            relative_intensity: relative.and_then(parse_leading_f64).unwrap_or(0.0),
            source: Some(PeakSource {
                mz: parts[0].to_string(),
                intensity: parts[1].to_string(),
                relative_intensity: relative.unwrap_or("0").to_string(),
            }),
        })
    }
}

impl TableParser for PeakTableParser {
    fn can_parse(&self, key: &str) -> bool {
        key == PEAK_TABLE_KEY
    }

    fn parse(&self, _header: &str, rows: &[Line<'_>], record: &mut Record) -> usize {
        let consumed = table_extent(rows);
        record.peak_data.peaks = rows[..consumed]
            .iter()
            .filter_map(|row| Self::parse_row(row.text))
            .collect();
        consumed
    }
}

/// `PK$ANNOTATION: m/z annotation exact_mass error(ppm)` and variants
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnotationTableParser;

impl AnnotationTableParser {
    fn parse_row(row: &str) -> Option<Annotation> {
        let trimmed = row.trim();
        let parts: Vec<&str> = trimmed.split_whitespace().collect();
        let mz = parse_leading_f64(parts.first()?)?;

        let mut annotation = Annotation::new(mz);
        annotation.source = Some(trimmed.to_string());

        match parts.len() {
            1 => {}
            4 => {
                annotation.label = Some(parts[1].to_string());
                annotation.exact_mass = parse_leading_f64(parts[2]);
                annotation.error_ppm = parse_leading_f64(parts[3]);
            }
            3 => match (is_numeric(parts[1]), parse_leading_f64(parts[2])) {
                (true, Some(third)) => {
                    annotation.exact_mass = parse_leading_f64(parts[1]);
                    annotation.error_ppm = Some(third);
                }
                (false, Some(third)) => {
                    annotation.label = Some(parts[1].to_string());
                    annotation.exact_mass = Some(third);
                }
                (_, None) => annotation.label = Some(parts[1].to_string()),
            },
            _ => annotation.label = Some(parts[1].to_string()),
        }

        Some(annotation)
    }
}

impl TableParser for AnnotationTableParser {
    fn can_parse(&self, key: &str) -> bool {
        key == ANNOTATION_TABLE_KEY
    }

    fn parse(&self, header: &str, rows: &[Line<'_>], record: &mut Record) -> usize {
        if let Some((_, columns)) = header.split_once(':') {
            record.peak_data.set_annotation_header(columns.trim());
        }

        let consumed = table_extent(rows);
        record.peak_data.annotations = rows[..consumed]
            .iter()
            .filter_map(|row| Self::parse_row(row.text))
            .collect();
        consumed
    }
}
