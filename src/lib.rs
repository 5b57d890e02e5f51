//! # massbank - MassBank Record Parsing and Validation
//!
//! `massbank` reads, writes and checks records in the MassBank text format:
//! namespaced `KEY: value` header fields followed by a peak table and an
//! optional annotation table, terminated by `//`.
//!
//! ## Key Features
//!
//! - **Lossless Round-Trip**: Numeric table cells keep their source text, so
//!   serializing a parsed record reproduces the original file exactly
//!   (line endings normalized to LF).
//!
//! - **Exact Locations**: Parse failures and validation findings carry a
//!   1-based line and column, counted in characters and identical for LF and
//!   CRLF input.
//!
//! - **Pluggable Rules**: Validation is an ordered list of independent
//!   [`validator::ValidationRule`] objects that can be replaced or extended.
//!
//! - **Batch Validation**: Whole directories are validated on all cores with
//!   a deterministic report and a cross-file duplicate accession check.
//!
//! ## Quick Start
//!
//! ```rust
//! use massbank::parser::parse_record;
//! use massbank::serializer::serialize_record;
//!
//! let text = "ACCESSION: MSBNK-test-TST00001\nPK$PEAK: m/z int. rel.int.\n  185.1073 120000 100\n//\n";
//! let record = parse_record(text)?;
//!
//! assert_eq!(record.accession, "MSBNK-test-TST00001");
//! assert_eq!(record.peak_data.peaks[0].mz, 185.1073);
//! assert_eq!(serialize_record(&record), text);
//! # Ok::<(), massbank::parser::ParseError>(())
//! ```
//!
//! ## Validating Files
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use massbank::batch::validate_batch;
//! use massbank::validator::ValidationOptions;
//!
//! let result = validate_batch(&[PathBuf::from("records/")], &ValidationOptions::default());
//! if !result.success {
//!     eprintln!("{}", result);
//! }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`position`]: Offset to line/column conversion
//! - [`record`]: The record model
//! - [`parser`]: Line-oriented parser with field and table dispatch
//! - [`serializer`]: Deterministic record to text conversion
//! - [`validator`]: Validation rules and result types
//! - [`batch`]: Multi-file validation with duplicate detection
//! - [`splash`]: Optional, fail-open SPLASH checksum verification

// Documentation lints
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod batch;
pub mod parser;
pub mod position;
pub mod record;
pub mod serializer;
pub mod splash;
pub mod validator;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::batch::{validate_batch, validate_text, BatchValidator, FsSource, InputSource};
    pub use crate::parser::{parse_record, ParseError, RecordParser};
    pub use crate::position::{line_column_to_offset, offset_to_line_column, LineColumn};
    pub use crate::record::{Annotation, Peak, PeakData, Record};
    pub use crate::serializer::{serialize_record, RecordSerializer};
    pub use crate::splash::{SplashCalculator, SplashVerifier};
    pub use crate::validator::{
        is_valid, run_validation, ErrorKind, RecordValidator, RuleOptions, ValidationError,
        ValidationOptions, ValidationResult, ValidationRule, ValidationWarning,
    };
}
