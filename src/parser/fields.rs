//! Field dispatchers for single-line `KEY: value` fields.
//!
//! Each dispatcher claims keys by predicate. The parser asks them in a fixed
//! order and hands the value to the first one that matches; exact header
//! names come before the namespace prefixes. Keys inside a claimed namespace
//! that the dispatcher does not know are accepted and dropped.

use super::error::FieldError;
use crate::record::Record;

/// Key of the peak table
pub const PEAK_TABLE_KEY: &str = "PK$PEAK";
/// Key of the annotation table
pub const ANNOTATION_TABLE_KEY: &str = "PK$ANNOTATION";

/// Exact header field names
pub const HEADER_FIELDS: [&str; 10] = [
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
];

/// Populates the record from a single `KEY: value` line
pub trait FieldParser: Send + Sync {
    /// True when this dispatcher handles `key`
    fn can_parse(&self, key: &str) -> bool;

    /// Store `value` (already trimmed) under `key`
    fn parse(&self, key: &str, value: &str, record: &mut Record) -> Result<(), FieldError>;
}

/// The default dispatchers in priority order
pub fn default_field_parsers() -> Vec<Box<dyn FieldParser>> {
    vec![
        Box::new(HeaderFieldParser),
        Box::new(CompoundFieldParser),
        Box::new(AnalyticalFieldParser),
        Box::new(MassSpectrometryFieldParser),
        Box::new(PeakFieldParser),
        Box::new(SpeciesFieldParser),
    ]
}

/// Plain header fields (`ACCESSION`, `DATE`, `COMMENT`, ...)
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderFieldParser;

impl FieldParser for HeaderFieldParser {
    fn can_parse(&self, key: &str) -> bool {
        HEADER_FIELDS.contains(&key)
    }

    fn parse(&self, key: &str, value: &str, record: &mut Record) -> Result<(), FieldError> {
        let value = value.to_string();
        match key {
            "ACCESSION" => record.accession = value,
            "RECORD_TITLE" => record.record_title = Some(value),
            "DATE" => record.date = Some(value),
            "AUTHORS" => record.authors = Some(value),
            "LICENSE" => record.license = Some(value),
            "COPYRIGHT" => record.copyright = Some(value),
            "PUBLICATION" => record.publication = Some(value),
            "PROJECT" => record.project = Some(value),
            "COMMENT" => record.comments.push(value),
            "DEPRECATED" => record.deprecated = Some(value),
            _ => {}
        }
        Ok(())
    }
}

/// Compound fields (`CH$`)
#[derive(Debug, Clone, Copy, Default)]
pub struct CompoundFieldParser;

impl FieldParser for CompoundFieldParser {
    fn can_parse(&self, key: &str) -> bool {
        key.starts_with("CH$")
    }

    fn parse(&self, key: &str, value: &str, record: &mut Record) -> Result<(), FieldError> {
        let compound = &mut record.compound;
        let value = value.to_string();
        match key {
            "CH$NAME" => compound.names.push(value),
            "CH$COMPOUND_CLASS" => compound.compound_class = Some(value),
            "CH$FORMULA" => compound.formula = Some(value),
            "CH$EXACT_MASS" => compound.exact_mass = Some(value),
            "CH$SMILES" => compound.smiles = Some(value),
            "CH$IUPAC" => compound.iupac = Some(value),
            "CH$LINK" => compound.links.push(value),
            _ => {}
        }
        Ok(())
    }
}

/// Analytical condition fields (`AC$`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticalFieldParser;

impl FieldParser for AnalyticalFieldParser {
    fn can_parse(&self, key: &str) -> bool {
        key.starts_with("AC$")
    }

    fn parse(&self, key: &str, value: &str, record: &mut Record) -> Result<(), FieldError> {
        let analytical = &mut record.analytical;
        let value = value.to_string();
        match key {
            "AC$INSTRUMENT" => analytical.instrument = Some(value),
            "AC$INSTRUMENT_TYPE" => analytical.instrument_type = Some(value),
            "AC$MASS_SPECTROMETRY" => analytical.mass_spectrometry.push(value),
            "AC$CHROMATOGRAPHY" => analytical.chromatography.push(value),
            _ => {}
        }
        Ok(())
    }
}

/// Mass spectrometry fields (`MS$`)
#[derive(Debug, Clone, Copy, Default)]
pub struct MassSpectrometryFieldParser;

impl FieldParser for MassSpectrometryFieldParser {
    fn can_parse(&self, key: &str) -> bool {
        key.starts_with("MS$")
    }

    fn parse(&self, key: &str, value: &str, record: &mut Record) -> Result<(), FieldError> {
        let ms = &mut record.mass_spectrometry;
        match key {
            "MS$FOCUSED_ION" => ms.focused_ion.push(value.to_string()),
            "MS$DATA_PROCESSING" => ms.data_processing.push(value.to_string()),
            _ => {}
        }
        Ok(())
    }
}

/// Non-table peak fields (`PK$SPLASH`, `PK$NUM_PEAK`)
#[derive(Debug, Clone, Copy, Default)]
pub struct PeakFieldParser;

impl FieldParser for PeakFieldParser {
    fn can_parse(&self, key: &str) -> bool {
        key.starts_with("PK$") && key != PEAK_TABLE_KEY && key != ANNOTATION_TABLE_KEY
    }

    fn parse(&self, key: &str, value: &str, record: &mut Record) -> Result<(), FieldError> {
        match key {
            "PK$SPLASH" => record.peak_data.splash = Some(value.to_string()),
            "PK$NUM_PEAK" => {
                let num_peak = value
                    .parse::<i64>()
                    .map_err(|_| FieldError::InvalidNumPeak(value.to_string()))?;
                record.peak_data.num_peak = Some(num_peak);
            }
            _ => {}
        }
        Ok(())
    }
}

/// Species fields (`SP$`)
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeciesFieldParser;

impl FieldParser for SpeciesFieldParser {
    fn can_parse(&self, key: &str) -> bool {
        key.starts_with("SP$")
    }

    fn parse(&self, key: &str, value: &str, record: &mut Record) -> Result<(), FieldError> {
        let species = &mut record.species;
        let value = value.to_string();
        match key {
            "SP$SCIENTIFIC_NAME" => species.scientific_name = Some(value),
            "SP$LINEAGE" => species.lineage = Some(value),
            "SP$LINK" => species.links.push(value),
            "SP$SAMPLE" => species.sample = Some(value),
            _ => {}
        }
        Ok(())
    }
}
