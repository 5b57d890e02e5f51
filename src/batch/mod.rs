//! # Batch Validation
//!
//! Parses and validates many record files and checks that no accession is
//! used twice across the batch.
//!
//! Inputs are validated independently, in parallel on the rayon pool by
//! default. Each input gets its own [`Record`](crate::record::Record) and only
//! reads the shared rule list, so results are collected by input position
//! and the report is identical to a sequential run.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use massbank::batch::validate_batch;
//! use massbank::validator::ValidationOptions;
//!
//! let result = validate_batch(&[PathBuf::from("records/")], &ValidationOptions::default());
//! println!("{}", result);
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use rayon::prelude::*;

use crate::parser::parse_record;
use crate::validator::{
    ErrorKind, RecordValidator, RuleOptions, ValidationError, ValidationOptions,
    ValidationResult, ValidationRule, ValidationWarning, IN_MEMORY_SOURCE,
};

mod error;
mod source;

pub use error::SourceError;
pub use source::{FsSource, InputSource, RECORD_EXTENSION};

#[cfg(test)]
mod tests;

/// Message of the error returned when path resolution yields nothing
pub const NO_FILES_MESSAGE: &str = "No files found for validation.";

/// Findings for a single input
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputOutcome {
    /// Source identifier the findings refer to
    pub source: String,
    /// Accession of the record, when it parsed
    pub accession: Option<String>,
    /// Blocking findings
    pub errors: Vec<ValidationError>,
    /// Advisory findings
    pub warnings: Vec<ValidationWarning>,
}

impl InputOutcome {
    fn failed(source: &str, error: ValidationError) -> Self {
        Self {
            source: source.to_string(),
            accession: None,
            errors: vec![error],
            warnings: Vec::new(),
        }
    }

    /// True when the input produced no errors
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validates batches of inputs read through an [`InputSource`]
pub struct BatchValidator<S: InputSource = FsSource> {
    source: S,
    validator: RecordValidator,
}

impl Default for BatchValidator<FsSource> {
    fn default() -> Self {
        Self::new(FsSource)
    }
}

impl<S: InputSource> BatchValidator<S> {
    /// Create a batch validator with the default rules
    pub fn new(source: S) -> Self {
        Self::with_validator(source, RecordValidator::new())
    }

    /// Create a batch validator with a custom rule registry
    pub fn with_validator(source: S, validator: RecordValidator) -> Self {
        Self { source, validator }
    }

    /// Append a rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.validator.add_rule(rule);
    }

    /// The input source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Resolve `paths`, validate every input and check accession uniqueness
    pub fn validate(&self, paths: &[PathBuf], options: &ValidationOptions) -> ValidationResult {
        let inputs = self.source.resolve_inputs(paths);

        if inputs.is_empty() {
            let requested: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
            warn!("{}", NO_FILES_MESSAGE);
            return ValidationResult {
                success: false,
                errors: vec![ValidationError::new(
                    requested.join(", "),
                    ErrorKind::Other,
                    NO_FILES_MESSAGE,
                )],
                ..Default::default()
            };
        }

        info!("Found {} files for processing", inputs.len());

        let rule_options = options.rule_options();
        let outcomes: Vec<InputOutcome> = if options.parallel {
            inputs
                .par_iter()
                .map(|path| self.validate_input(path, &rule_options))
                .collect()
        } else {
            inputs
                .iter()
                .map(|path| self.validate_input(path, &rule_options))
                .collect()
        };

        aggregate(outcomes, inputs.len())
    }

    fn validate_input(&self, path: &Path, options: &RuleOptions) -> InputOutcome {
        let source = path.display().to_string();

        match self.source.read_text(path) {
            Ok(text) => validate_with(&self.validator, &source, &text, true, options),
            Err(err) => {
                debug!("{}", err);
                InputOutcome::failed(
                    &source,
                    ValidationError::new(
                        source.as_str(),
                        ErrorKind::Other,
                        format!("Error processing file: {}", err),
                    ),
                )
            }
        }
    }
}

/// Parse `text` and run every rule of `validator` against it
fn validate_with(
    validator: &RecordValidator,
    source: &str,
    text: &str,
    has_path: bool,
    options: &RuleOptions,
) -> InputOutcome {
    let record = match parse_record(text) {
        Ok(record) => record,
        Err(err) => {
            debug!("{}: {}", source, err);
            return InputOutcome::failed(
                source,
                ValidationError::new(source, ErrorKind::Parse, err.message)
                    .at(err.line, err.column),
            );
        }
    };

    let outcome = if has_path {
        validator.validate(&record, text, source, options)
    } else {
        validator.validate_in_memory(&record, text, source, options)
    };
    InputOutcome {
        source: source.to_string(),
        accession: Some(record.accession),
        errors: outcome.errors,
        warnings: outcome.warnings,
    }
}

/// Accessions that occur more than once, in order of their first repetition
pub fn find_duplicates<'a>(accessions: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();

    for accession in accessions {
        if !seen.insert(accession) && !duplicates.contains(&accession) {
            duplicates.push(accession);
        }
    }

    duplicates
}

/// Merge per-input outcomes, in input order, into one result
fn aggregate(outcomes: Vec<InputOutcome>, files_processed: usize) -> ValidationResult {
    let mut result = ValidationResult {
        files_processed,
        ..Default::default()
    };
    let mut all_accessions = Vec::new();

    for outcome in outcomes {
        result.errors.extend(outcome.errors);
        result.warnings.extend(outcome.warnings);
        if let Some(accession) = outcome.accession {
            all_accessions.push(accession);
        }
    }

    let duplicates = find_duplicates(all_accessions.iter().map(String::as_str));
    if !duplicates.is_empty() {
        warn!("Duplicate accessions: {}", duplicates.join(", "));
        result.errors.push(ValidationError::new(
            "",
            ErrorKind::Duplicate,
            format!(
                "There are duplicates in all accessions: {}",
                duplicates.join(", ")
            ),
        ));
    }

    let mut seen = HashSet::new();
    result.accessions = all_accessions
        .into_iter()
        .filter(|accession| seen.insert(accession.clone()))
        .collect();
    result.success = result.errors.is_empty();

    result
}

/// Validate files and directories on the local filesystem with the default rules
pub fn validate_batch(paths: &[PathBuf], options: &ValidationOptions) -> ValidationResult {
    BatchValidator::default().validate(paths, options)
}

/// Validate one in-memory input with the default rules.
///
/// With `Some(path)` the text is checked as if it had been read from `path`,
/// so the accession-match rule compares against its base name. With `None`
/// rules that need a file path are skipped and findings are attributed to
/// [`IN_MEMORY_SOURCE`].
pub fn validate_text(path: Option<&str>, text: &str, options: &ValidationOptions) -> InputOutcome {
    let source = path.unwrap_or(IN_MEMORY_SOURCE);
    validate_with(
        &RecordValidator::new(),
        source,
        text,
        path.is_some(),
        &options.rule_options(),
    )
}
