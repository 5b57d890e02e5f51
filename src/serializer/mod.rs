//! # MassBank Record Serializer
//!
//! Writes a [`Record`] back to MassBank text in the canonical field order.
//! Parsed table rows are written from their source text, so for any record
//! text `T` in canonical order, `serialize_record(&parse_record(T)?)` equals
//! `T` with line endings normalized to `\n`.
//!
//! Output always ends with `//` followed by a single `\n`.

use crate::parser::{ANNOTATION_TABLE_KEY, PEAK_TABLE_KEY, RECORD_TERMINATOR};
use crate::record::{Annotation, Peak, Record};


/// Header used when a record has annotations but no captured header text
pub const DEFAULT_ANNOTATION_HEADER: &str = "m/z annotation exact_mass error(ppm)";

/// Header of the peak table
pub const PEAK_HEADER: &str = "m/z int. rel.int.";

/// Indentation of table rows
const ROW_INDENT: &str = "  ";

/// Serializer for MassBank records
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordSerializer;

impl RecordSerializer {
    /// Create a serializer
    pub fn new() -> Self {
        Self
    }

    /// Serialize a record to MassBank text
    pub fn serialize(&self, record: &Record) -> String {
        let mut out = String::new();

        push_field(&mut out, "ACCESSION", &record.accession);
        push_optional(&mut out, "DEPRECATED", &record.deprecated);
        push_optional(&mut out, "RECORD_TITLE", &record.record_title);
        push_optional(&mut out, "DATE", &record.date);
        push_optional(&mut out, "AUTHORS", &record.authors);
        push_optional(&mut out, "LICENSE", &record.license);
        push_optional(&mut out, "COPYRIGHT", &record.copyright);
        push_optional(&mut out, "PUBLICATION", &record.publication);
        push_optional(&mut out, "PROJECT", &record.project);
        push_repeated(&mut out, "COMMENT", &record.comments);

        let compound = &record.compound;
        push_repeated(&mut out, "CH$NAME", &compound.names);
        push_optional(&mut out, "CH$COMPOUND_CLASS", &compound.compound_class);
        push_optional(&mut out, "CH$FORMULA", &compound.formula);
        push_optional(&mut out, "CH$EXACT_MASS", &compound.exact_mass);
        push_optional(&mut out, "CH$SMILES", &compound.smiles);
        push_optional(&mut out, "CH$IUPAC", &compound.iupac);
        push_repeated(&mut out, "CH$LINK", &compound.links);

        let species = &record.species;
        push_optional(&mut out, "SP$SCIENTIFIC_NAME", &species.scientific_name);
        push_optional(&mut out, "SP$LINEAGE", &species.lineage);
        push_repeated(&mut out, "SP$LINK", &species.links);
        push_optional(&mut out, "SP$SAMPLE", &species.sample);

        let analytical = &record.analytical;
        push_optional(&mut out, "AC$INSTRUMENT", &analytical.instrument);
        push_optional(&mut out, "AC$INSTRUMENT_TYPE", &analytical.instrument_type);
        push_repeated(&mut out, "AC$MASS_SPECTROMETRY", &analytical.mass_spectrometry);
        push_repeated(&mut out, "AC$CHROMATOGRAPHY", &analytical.chromatography);

        let ms = &record.mass_spectrometry;
        push_repeated(&mut out, "MS$FOCUSED_ION", &ms.focused_ion);
        push_repeated(&mut out, "MS$DATA_PROCESSING", &ms.data_processing);

        let peak_data = &record.peak_data;
        push_optional(&mut out, "PK$SPLASH", &peak_data.splash);

        if !peak_data.annotations.is_empty() {
            let header = peak_data
                .annotation_header()
                .filter(|h| !h.is_empty())
                .unwrap_or(DEFAULT_ANNOTATION_HEADER);
            push_field(&mut out, ANNOTATION_TABLE_KEY, header);
            for annotation in &peak_data.annotations {
                push_row(&mut out, &annotation_row(annotation));
            }
        }

        if let Some(num_peak) = peak_data.num_peak {
            push_field(&mut out, "PK$NUM_PEAK", &num_peak.to_string());
        }

        if !peak_data.peaks.is_empty() {
            push_field(&mut out, PEAK_TABLE_KEY, PEAK_HEADER);
            for peak in &peak_data.peaks {
                push_row(&mut out, &peak_row(peak));
            }
        }

        out.push_str(RECORD_TERMINATOR);
        out.push('\n');
        out
    }
}

/// Serialize a record with the default serializer
pub fn serialize_record(record: &Record) -> String {
    RecordSerializer::new().serialize(record)
}

fn push_field(out: &mut String, key: &str, value: &str) {
    out.push_str(&format!("{}: {}\n", key, value));
}

fn push_optional(out: &mut String, key: &str, value: &Option<String>) {
    if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        push_field(out, key, value);
    }
}

fn push_repeated(out: &mut String, key: &str, values: &[String]) {
    for value in values {
        push_field(out, key, value);
    }
}

fn push_row(out: &mut String, row: &str) {
    out.push_str(ROW_INDENT);
    out.push_str(row);
    out.push('\n');
}

fn peak_row(peak: &Peak) -> String {
    match &peak.source {
        Some(source) => format!(
            "{} {} {}",
            source.mz, source.intensity, source.relative_intensity
        ),
        None => format!("{} {} {}", peak.mz, peak.intensity, peak.relative_intensity),
    }
}

fn annotation_row(annotation: &Annotation) -> String {
    if let Some(source) = &annotation.source {
        return source.clone();
    }

    let mut parts = vec![annotation.mz.to_string()];
    if let Some(label) = annotation.label.as_deref().filter(|l| !l.is_empty()) {
        parts.push(label.to_string());
    }
    if let Some(exact_mass) = annotation.exact_mass {
        parts.push(exact_mass.to_string());
    }
    if let Some(error_ppm) = annotation.error_ppm {
        parts.push(error_ppm.to_string());
    }
    parts.join(" ")
}
