use std::fmt;

use serde::Serialize;

#[cfg(feature = "colorized_output")]
use console::style;

/// Category of a validation error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Record text could not be parsed
    Parse,
    /// Record content violates a rule (e.g. accession/filename mismatch)
    Validation,
    /// Serialized record differs from its source text
    Serialization,
    /// Accession used by more than one input in a batch
    Duplicate,
    /// I/O or other unexpected failure
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::Parse => "parse",
            ErrorKind::Validation => "validation",
            ErrorKind::Serialization => "serialization",
            ErrorKind::Duplicate => "duplicate",
            ErrorKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// A blocking validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Input the error belongs to (empty for batch-level errors)
    pub file: String,
    /// Line number (1-based)
    pub line: Option<usize>,
    /// Column number (1-based)
    pub column: Option<usize>,
    /// Human readable description
    pub message: String,
    /// Category, serialized as `type`
    #[serde(rename = "type")]
    pub kind: ErrorKind,
}

impl ValidationError {
    /// Error without a location
    pub fn new(file: impl Into<String>, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: None,
            column: None,
            message: message.into(),
            kind,
        }
    }

    /// Attach a line number
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attach a line and column
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

/// An advisory validation finding; never affects success
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationWarning {
    /// Input the warning belongs to
    pub file: String,
    /// Line number (1-based)
    pub line: Option<usize>,
    /// Column number (1-based)
    pub column: Option<usize>,
    /// Human readable description
    pub message: String,
}

impl ValidationWarning {
    /// Warning without a location
    pub fn new(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line: None,
            column: None,
            message: message.into(),
        }
    }

    /// Attach a line number
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attach a line and column
    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

/// Aggregated outcome of validating one or more inputs
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True when there are no errors
    pub success: bool,
    /// Blocking findings, per input in input order
    pub errors: Vec<ValidationError>,
    /// Advisory findings
    pub warnings: Vec<ValidationWarning>,
    /// Distinct accessions of successfully parsed inputs, in input order
    pub accessions: Vec<String>,
    /// Number of inputs that were processed
    pub files_processed: usize,
}

impl ValidationResult {
    /// Check if any errors were reported
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if any warnings were reported
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Count errors of one kind
    pub fn count_kind(&self, kind: ErrorKind) -> usize {
        self.errors.iter().filter(|e| e.kind == kind).count()
    }

    /// Format the report with colors (requires console feature)
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            use console::Emoji;

            static WARN: Emoji<'_, '_> = Emoji("⚠", "[WARN]");
            static FAIL: Emoji<'_, '_> = Emoji("✗", "[FAIL]");

            let mut output = String::new();

            output.push_str(&format!("{}\n", style("MassBank Validation Report").bold().cyan()));
            output.push_str(&format!("{}\n", style("==========================").cyan()));
            output.push_str(&format!(
                "{}: {}\n\n",
                style("Files").bold(),
                self.files_processed
            ));

            for error in &self.errors {
                output.push_str(&format!(
                    "[{}] {} - {}: {}\n",
                    FAIL,
                    style(location(&error.file, error.line, error.column)).red(),
                    style(error.kind.to_string().to_uppercase()).red().bold(),
                    error.message
                ));
            }

            for warning in &self.warnings {
                output.push_str(&format!(
                    "[{}] {} - {}: {}\n",
                    WARN,
                    style(location(&warning.file, warning.line, warning.column)).yellow(),
                    style("WARNING").yellow().bold(),
                    warning.message
                ));
            }

            output.push('\n');
            output.push_str(&format!(
                "{}: {} files, {} errors, {} warnings\n",
                style("Summary").bold(),
                style(self.files_processed).green(),
                style(self.errors.len()).red(),
                style(self.warnings.len()).yellow()
            ));

            output.push('\n');
            if !self.success {
                output.push_str(&format!("{}\n", style("Validation FAILED").red().bold()));
            } else if self.has_warnings() {
                output.push_str(&format!(
                    "{}\n",
                    style("Validation PASSED with warnings").yellow().bold()
                ));
            } else {
                output.push_str(&format!("{}\n", style("Validation PASSED").green().bold()));
            }

            output
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            format!("{}", self)
        }
    }
}

/// `file:line:column` with absent parts left out
fn location(file: &str, line: Option<usize>, column: Option<usize>) -> String {
    let file = if file.is_empty() { "<batch>" } else { file };
    match (line, column) {
        (Some(line), Some(column)) => format!("{}:{}:{}", file, line, column),
        (Some(line), None) => format!("{}:{}", file, line),
        _ => file.to_string(),
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MassBank Validation Report")?;
        writeln!(f, "==========================")?;
        writeln!(f, "Files: {}", self.files_processed)?;
        writeln!(f)?;

        for error in &self.errors {
            writeln!(
                f,
                "[✗] {} - {}: {}",
                location(&error.file, error.line, error.column),
                error.kind.to_string().to_uppercase(),
                error.message
            )?;
        }

        for warning in &self.warnings {
            writeln!(
                f,
                "[⚠] {} - WARNING: {}",
                location(&warning.file, warning.line, warning.column),
                warning.message
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "Summary: {} files, {} errors, {} warnings",
            self.files_processed,
            self.errors.len(),
            self.warnings.len()
        )?;

        writeln!(f)?;
        if !self.success {
            writeln!(f, "Validation FAILED")?;
        } else if self.has_warnings() {
            writeln!(f, "Validation PASSED with warnings")?;
        } else {
            writeln!(f, "Validation PASSED")?;
        }

        Ok(())
    }
}
