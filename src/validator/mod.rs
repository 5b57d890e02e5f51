//! # MassBank Validation Module
//!
//! Rule-based validation of parsed records. Each rule implements
//! [`ValidationRule`] and sees the parsed [`Record`], the raw source text and
//! the source identifier. Rules are stateless and never modify their inputs,
//! so one rule list can be shared by any number of concurrent validations.
//!
//! ## Default Rules
//!
//! 1. **Accession match**: `ACCESSION` equals the file name (error)
//! 2. **Non-standard characters**: first character outside the allowed set (warning)
//! 3. **Serialization**: re-serialized record equals the source text (error)
//! 4. **Unrecognized fields**: keys outside the MassBank field list (warning)
//!
//! ## Usage
//!
//! ```rust
//! use massbank::parser::parse_record;
//! use massbank::validator::{run_validation, RuleOptions};
//!
//! let text = "ACCESSION: MSBNK-test-TST00001\n//\n";
//! let record = parse_record(text).unwrap();
//! let outcome = run_validation(&record, text, "MSBNK-test-TST00001.txt", &RuleOptions::default());
//! assert!(outcome.errors.is_empty());
//! ```

use log::{debug, warn};

use crate::parser::parse_record;
use crate::record::Record;

pub use report::{ErrorKind, ValidationError, ValidationResult, ValidationWarning};
pub use rules::{
    AccessionMatchRule, NonStandardCharsRule, SerializationRule, UnrecognizedFieldRule,
};

mod report;
pub mod rules;


/// Source identifier used when validating text that has no file
pub const IN_MEMORY_SOURCE: &str = "<string>";

/// Options passed to every rule
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleOptions {
    /// Relaxed checks for legacy records; see each rule for what changes
    pub legacy: bool,
}

/// Options for validating inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Relaxed checks for legacy records
    pub legacy: bool,
    /// Validate batch inputs on the rayon thread pool
    pub parallel: bool,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            legacy: false,
            parallel: true,
        }
    }
}

impl ValidationOptions {
    /// Options forwarded to the rules
    pub fn rule_options(&self) -> RuleOptions {
        RuleOptions {
            legacy: self.legacy,
        }
    }
}

/// A single, independent validation check.
///
/// Both methods must be pure functions of their arguments.
pub trait ValidationRule: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Blocking findings
    fn validate(
        &self,
        _record: &Record,
        _text: &str,
        _source: &str,
        _options: &RuleOptions,
    ) -> Vec<ValidationError> {
        Vec::new()
    }

    /// Advisory findings
    fn warnings(
        &self,
        _record: &Record,
        _text: &str,
        _source: &str,
        _options: &RuleOptions,
    ) -> Vec<ValidationWarning> {
        Vec::new()
    }

    /// True when the rule compares against a real file path
    fn requires_source_path(&self) -> bool {
        false
    }
}

/// Errors and warnings produced for one record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RuleOutcome {
    /// Blocking findings
    pub errors: Vec<ValidationError>,
    /// Advisory findings
    pub warnings: Vec<ValidationWarning>,
}

impl RuleOutcome {
    /// True when no rule reported an error
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// The default rules, in evaluation order
pub fn default_rules() -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(AccessionMatchRule),
        Box::new(NonStandardCharsRule),
        Box::new(SerializationRule),
        Box::new(UnrecognizedFieldRule),
    ]
}

/// Ordered registry of validation rules
pub struct RecordValidator {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl Default for RecordValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordValidator {
    /// Create a validator with the default rules
    pub fn new() -> Self {
        Self::with_rules(default_rules())
    }

    /// Create a validator with an explicit rule list
    pub fn with_rules(rules: Vec<Box<dyn ValidationRule>>) -> Self {
        Self { rules }
    }

    /// Append a rule; it runs after the existing ones
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// The rules in evaluation order
    pub fn rules(&self) -> &[Box<dyn ValidationRule>] {
        &self.rules
    }

    /// Run every rule against one record
    pub fn validate(
        &self,
        record: &Record,
        text: &str,
        source: &str,
        options: &RuleOptions,
    ) -> RuleOutcome {
        Self::run(self.rules.iter(), record, text, source, options)
    }

    /// Run the rules that do not need a real file path
    pub fn validate_in_memory(
        &self,
        record: &Record,
        text: &str,
        source: &str,
        options: &RuleOptions,
    ) -> RuleOutcome {
        let rules = self.rules.iter().filter(|rule| !rule.requires_source_path());
        Self::run(rules, record, text, source, options)
    }

    fn run<'a>(
        rules: impl Iterator<Item = &'a Box<dyn ValidationRule>>,
        record: &Record,
        text: &str,
        source: &str,
        options: &RuleOptions,
    ) -> RuleOutcome {
        let mut outcome = RuleOutcome::default();

        for rule in rules {
            let errors = rule.validate(record, text, source, options);
            let warnings = rule.warnings(record, text, source, options);
            debug!(
                "{}: rule '{}' produced {} errors, {} warnings",
                source,
                rule.name(),
                errors.len(),
                warnings.len()
            );
            outcome.errors.extend(errors);
            outcome.warnings.extend(warnings);
        }

        outcome
    }
}

/// Run the default rules against a record read from `source`
pub fn run_validation(
    record: &Record,
    text: &str,
    source: &str,
    options: &RuleOptions,
) -> RuleOutcome {
    RecordValidator::new().validate(record, text, source, options)
}

/// Run the default rules against a record that has no file path
pub fn run_validation_in_memory(record: &Record, text: &str, options: &RuleOptions) -> RuleOutcome {
    RecordValidator::new().validate_in_memory(record, text, IN_MEMORY_SOURCE, options)
}

/// Quick yes/no check of record text.
///
/// Parses `text` and runs the default rules that need no file path; any rule
/// error rejects the text. The serialized record is then compared with the
/// input once more, ignoring line-ending style and trailing whitespace at the
/// end of the text. Reasons for rejection are logged.
pub fn is_valid(text: &str, options: &RuleOptions) -> bool {
    let record = match parse_record(text) {
        Ok(record) => record,
        Err(err) => {
            warn!("Validation failed: {}", err);
            return false;
        }
    };

    let outcome = run_validation_in_memory(&record, text, options);
    if !outcome.errors.is_empty() {
        for error in &outcome.errors {
            warn!("Validation error: {}", error.message);
        }
        return false;
    }

    let original = rules::normalize_line_endings(text);
    let serialized = crate::serializer::serialize_record(&record);
    if original.trim_end() != serialized.trim_end() {
        warn!("Serialization round-trip failed");
        return false;
    }

    true
}
