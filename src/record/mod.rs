//! # MassBank Record Model
//!
//! In-memory form of one MassBank record. Header fields sit directly on
//! [`Record`]; namespaced fields are grouped by their prefix:
//!
//! | Prefix | Struct |
//! |--------|--------|
//! | `CH$`  | [`CompoundInfo`] |
//! | `SP$`  | [`SpeciesInfo`] |
//! | `AC$`  | [`AnalyticalConditions`] |
//! | `MS$`  | [`MassSpectrometry`] |
//! | `PK$`  | [`PeakData`] |
//!
//! Single-valued fields are `Option<String>` and are overwritten when a key
//! repeats. Repeated fields are `Vec<String>` in insertion order.
//!
//! Peak and annotation rows keep the exact source tokens next to the parsed
//! numbers. Serialization always prefers the source text, so a record that
//! was parsed from text reproduces that text without float reformatting.

use serde::Serialize;

/// A single MassBank record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    /// Unique record identifier; non-empty after a successful parse
    pub accession: String,
    /// Deprecation note; deprecated records skip character checks
    pub deprecated: Option<String>,
    /// `RECORD_TITLE`
    pub record_title: Option<String>,
    /// `DATE`, kept as written
    pub date: Option<String>,
    /// `AUTHORS`
    pub authors: Option<String>,
    /// `LICENSE`
    pub license: Option<String>,
    /// `COPYRIGHT`
    pub copyright: Option<String>,
    /// `PUBLICATION`
    pub publication: Option<String>,
    /// `PROJECT`
    pub project: Option<String>,
    /// `COMMENT` lines in file order
    pub comments: Vec<String>,

    /// `CH$` fields
    pub compound: CompoundInfo,
    /// `SP$` fields
    pub species: SpeciesInfo,
    /// `AC$` fields
    pub analytical: AnalyticalConditions,
    /// `MS$` fields
    pub mass_spectrometry: MassSpectrometry,
    /// `PK$` fields
    pub peak_data: PeakData,
}

impl Record {
    /// Create an otherwise empty record with the given accession
    pub fn new(accession: impl Into<String>) -> Self {
        Self {
            accession: accession.into(),
            ..Default::default()
        }
    }

    /// True when the record carries a non-empty `DEPRECATED` field
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.as_deref().is_some_and(|d| !d.is_empty())
    }
}

/// Compound information (`CH$`)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompoundInfo {
    /// `CH$NAME`, repeated
    pub names: Vec<String>,
    /// `CH$COMPOUND_CLASS`
    pub compound_class: Option<String>,
    /// `CH$FORMULA`
    pub formula: Option<String>,
    /// Kept as text; exact mass digits are significant
    pub exact_mass: Option<String>,
    /// `CH$SMILES`
    pub smiles: Option<String>,
    /// `CH$IUPAC`
    pub iupac: Option<String>,
    /// `CH$LINK`, repeated
    pub links: Vec<String>,
}

/// Species information (`SP$`)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SpeciesInfo {
    /// `SP$SCIENTIFIC_NAME`
    pub scientific_name: Option<String>,
    /// `SP$LINEAGE`
    pub lineage: Option<String>,
    /// `SP$LINK`, repeated
    pub links: Vec<String>,
    /// `SP$SAMPLE`
    pub sample: Option<String>,
}

/// Analytical conditions (`AC$`)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalyticalConditions {
    /// `AC$INSTRUMENT`
    pub instrument: Option<String>,
    /// `AC$INSTRUMENT_TYPE`
    pub instrument_type: Option<String>,
    /// `AC$MASS_SPECTROMETRY`, repeated
    pub mass_spectrometry: Vec<String>,
    /// `AC$CHROMATOGRAPHY`, repeated
    pub chromatography: Vec<String>,
}

/// Mass spectrometry details (`MS$`)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MassSpectrometry {
    /// `MS$FOCUSED_ION`, repeated
    pub focused_ion: Vec<String>,
    /// `MS$DATA_PROCESSING`, repeated
    pub data_processing: Vec<String>,
}

/// Peak section (`PK$`)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PeakData {
    /// `PK$SPLASH`
    pub splash: Option<String>,
    /// `PK$NUM_PEAK`
    pub num_peak: Option<i64>,
    /// Rows of the `PK$PEAK` table
    pub peaks: Vec<Peak>,
    /// Rows of the `PK$ANNOTATION` table
    pub annotations: Vec<Annotation>,
    /// Text after the colon of the `PK$ANNOTATION` header line
    #[serde(skip)]
    annotation_header: Option<String>,
}

impl PeakData {
    /// Column header text captured from the parsed `PK$ANNOTATION` line
    pub fn annotation_header(&self) -> Option<&str> {
        self.annotation_header.as_deref()
    }

    pub(crate) fn set_annotation_header(&mut self, header: impl Into<String>) {
        self.annotation_header = Some(header.into());
    }

    /// (m/z, intensity) pairs for checksum calculation
    pub fn points(&self) -> Vec<PeakPoint> {
        self.peaks
            .iter()
            .map(|p| PeakPoint {
                mz: p.mz,
                intensity: p.intensity,
            })
            .collect()
    }
}

/// Minimal peak representation used for SPLASH calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeakPoint {
    /// Mass-to-charge ratio
    pub mz: f64,
    /// Absolute intensity
    pub intensity: f64,
}

/// One row of the `PK$PEAK` table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Peak {
    /// Mass-to-charge ratio
    pub mz: f64,
    /// Absolute intensity
    pub intensity: f64,
    /// Relative intensity; 0 when the column was absent or unparseable
    pub relative_intensity: f64,
    /// Source tokens, present for parsed rows
    pub source: Option<PeakSource>,
}

impl Peak {
    /// Create a peak without source text; it serializes from the numbers
    pub fn new(mz: f64, intensity: f64, relative_intensity: f64) -> Self {
        Self {
            mz,
            intensity,
            relative_intensity,
            source: None,
        }
    }
}

/// Verbatim tokens of a parsed peak row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeakSource {
    /// m/z token as written
    pub mz: String,
    /// Intensity token as written
    pub intensity: String,
    /// `"0"` when the row had only two columns
    pub relative_intensity: String,
}

/// One row of the `PK$ANNOTATION` table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    /// Mass-to-charge ratio of the annotated peak
    pub mz: f64,
    /// Formula or fragment label
    pub label: Option<String>,
    /// Theoretical mass of the label
    pub exact_mass: Option<f64>,
    /// Mass error in ppm
    pub error_ppm: Option<f64>,
    /// Trimmed source row, present for parsed rows
    pub source: Option<String>,
}

impl Annotation {
    /// Create an annotation with only an m/z value
    pub fn new(mz: f64) -> Self {
        Self {
            mz,
            label: None,
            exact_mass: None,
            error_ppm: None,
            source: None,
        }
    }
}
