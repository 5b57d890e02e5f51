use super::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const TST00001: &str = include_str!("../../tests/data/MSBNK-test-TST00001.txt");
const TST00002: &str = include_str!("../../tests/data/MSBNK-test-TST00002.txt");
const TST00003: &str = include_str!("../../tests/data/MSBNK-test-TST00003.txt");

fn sequential() -> ValidationOptions {
    ValidationOptions {
        parallel: false,
        ..Default::default()
    }
}

fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// In-memory source; unknown paths fail to read
struct MapSource(HashMap<PathBuf, String>);

impl InputSource for MapSource {
    fn resolve_inputs(&self, paths: &[PathBuf]) -> Vec<PathBuf> {
        paths.to_vec()
    }

    fn read_text(&self, path: &Path) -> Result<String, SourceError> {
        self.0.get(path).cloned().ok_or_else(|| SourceError::Read {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such input"),
        })
    }
}

// ==================== Filesystem Batches ====================

#[test]
fn test_directory_of_valid_records() {
    let dir = tempdir().unwrap();
    write(dir.path(), "MSBNK-test-TST00001.txt", TST00001);
    write(dir.path(), "MSBNK-test-TST00002.txt", TST00002);
    write(dir.path(), "MSBNK-test-TST00003.txt", TST00003);

    let result = validate_batch(&[dir.path().to_path_buf()], &ValidationOptions::default());

    assert!(result.success, "{}", result);
    assert_eq!(result.files_processed, 3);
    assert_eq!(
        result.accessions,
        vec![
            "MSBNK-test-TST00001",
            "MSBNK-test-TST00002",
            "MSBNK-test-TST00003"
        ]
    );
}

#[test]
fn test_directory_walk_is_recursive_sorted_and_filtered() {
    let dir = tempdir().unwrap();
    write(dir.path(), "b/MSBNK-test-TST00002.txt", TST00002);
    write(dir.path(), "a/MSBNK-test-TST00001.txt", TST00001);
    write(dir.path(), "a/notes.md", "not a record");
    write(dir.path(), "README", "not a record");

    let inputs = FsSource.resolve_inputs(&[dir.path().to_path_buf()]);

    assert_eq!(inputs.len(), 2);
    assert!(inputs[0].ends_with("a/MSBNK-test-TST00001.txt"));
    assert!(inputs[1].ends_with("b/MSBNK-test-TST00002.txt"));
}

#[test]
fn test_explicit_file_and_missing_path() {
    let dir = tempdir().unwrap();
    let file = write(dir.path(), "MSBNK-test-TST00001.record", TST00001);
    let missing = dir.path().join("missing.txt");

    let inputs = FsSource.resolve_inputs(&[missing, file.clone()]);
    assert_eq!(inputs, vec![file]);
}

#[test]
fn test_no_inputs_found() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nothing-here");

    let result = validate_batch(&[missing.clone()], &ValidationOptions::default());

    assert!(!result.success);
    assert_eq!(result.files_processed, 0);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::Other);
    assert_eq!(result.errors[0].message, NO_FILES_MESSAGE);
    assert_eq!(result.errors[0].file, missing.display().to_string());
}

#[test]
fn test_duplicate_accessions_across_directories() {
    let dir = tempdir().unwrap();
    let first = write(dir.path(), "one/MSBNK-test-TST00001.txt", TST00001);
    let second = write(dir.path(), "two/MSBNK-test-TST00001.txt", TST00001);

    for path in [&first, &second] {
        let alone = validate_batch(&[path.clone()], &ValidationOptions::default());
        assert!(alone.success, "{}", alone);
    }

    let result = validate_batch(&[dir.path().to_path_buf()], &ValidationOptions::default());

    assert!(!result.success);
    assert_eq!(result.count_kind(ErrorKind::Duplicate), 1);
    let duplicate = &result.errors[result.errors.len() - 1];
    assert_eq!(duplicate.file, "");
    assert_eq!(
        duplicate.message,
        "There are duplicates in all accessions: MSBNK-test-TST00001"
    );
    assert_eq!(result.accessions, vec!["MSBNK-test-TST00001"]);
    assert_eq!(result.files_processed, 2);
}

#[test]
fn test_parse_failure_does_not_abort_batch() {
    let dir = tempdir().unwrap();
    write(dir.path(), "MSBNK-test-TST00001.txt", TST00001);
    write(dir.path(), "broken.txt", "ACCESSION: broken\nthis line has no separator\n//\n");

    let result = validate_batch(&[dir.path().to_path_buf()], &sequential());

    assert!(!result.success);
    assert_eq!(result.files_processed, 2);
    assert_eq!(result.errors.len(), 1);

    let error = &result.errors[0];
    assert_eq!(error.kind, ErrorKind::Parse);
    assert!(error.file.ends_with("broken.txt"));
    assert_eq!(error.line, Some(2));
    assert_eq!(error.column, Some(1));
    assert_eq!(result.accessions, vec!["MSBNK-test-TST00001"]);
}

#[test]
fn test_parallel_and_sequential_agree() {
    let dir = tempdir().unwrap();
    for i in 0..24 {
        let accession = format!("MSBNK-test-P{:05}", i);
        let text = if i % 5 == 0 {
            format!("ACCESSION: {}\nRECRD_TITLE: typo\n//\n", accession)
        } else {
            format!("ACCESSION: {}\n//\n", accession)
        };
        write(dir.path(), &format!("{}.txt", accession), &text);
    }
    write(dir.path(), "MSBNK-test-P00003-copy.txt", "ACCESSION: MSBNK-test-P00003\n//\n");

    let paths = [dir.path().to_path_buf()];
    let parallel = validate_batch(&paths, &ValidationOptions::default());
    let serial = validate_batch(&paths, &sequential());

    assert_eq!(parallel, serial);
    assert_eq!(parallel.files_processed, 25);
    assert_eq!(parallel.warnings.len(), 5);
    assert_eq!(parallel.accessions.len(), 24);
}

// ==================== Custom Sources ====================

#[test]
fn test_read_failure_is_other_error() {
    let mut inputs = HashMap::new();
    inputs.insert(PathBuf::from("MSBNK-A.txt"), "ACCESSION: MSBNK-A\n//\n".to_string());
    let validator = BatchValidator::new(MapSource(inputs));

    let paths = [PathBuf::from("MSBNK-A.txt"), PathBuf::from("gone.txt")];
    let result = validator.validate(&paths, &sequential());

    assert!(!result.success);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, ErrorKind::Other);
    assert_eq!(result.errors[0].file, "gone.txt");
    assert!(result.errors[0]
        .message
        .starts_with("Error processing file: Error reading file gone.txt"));
    assert_eq!(result.accessions, vec!["MSBNK-A"]);
}

#[test]
fn test_legacy_option_reaches_rules() {
    let mut inputs = HashMap::new();
    inputs.insert(PathBuf::from("MSBNK-A.txt"), "ACCESSION: MSBNK-A\n//".to_string());
    let validator = BatchValidator::new(MapSource(inputs));
    let paths = [PathBuf::from("MSBNK-A.txt")];

    let strict = validator.validate(&paths, &sequential());
    assert_eq!(strict.count_kind(ErrorKind::Serialization), 1);

    let legacy = validator.validate(
        &paths,
        &ValidationOptions {
            legacy: true,
            parallel: false,
        },
    );
    assert!(legacy.success);
}

// ==================== Helpers ====================

#[test]
fn test_find_duplicates_order() {
    let accessions = ["A", "B", "C", "B", "A", "B"];
    assert_eq!(find_duplicates(accessions), vec!["B", "A"]);
    assert!(find_duplicates(["A", "B"]).is_empty());
}

#[test]
fn test_validate_text() {
    let outcome = validate_text(Some("MSBNK-test-TST00001.txt"), TST00001, &ValidationOptions::default());
    assert!(outcome.is_ok());
    assert_eq!(outcome.accession.as_deref(), Some("MSBNK-test-TST00001"));

    let outcome = validate_text(Some("other.txt"), TST00001, &ValidationOptions::default());
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].kind, ErrorKind::Validation);

    let outcome = validate_text(Some("x.txt"), "RECORD_TITLE: Test\n//", &ValidationOptions::default());
    assert_eq!(outcome.accession, None);
    assert_eq!(outcome.errors[0].kind, ErrorKind::Parse);
    assert_eq!(outcome.errors[0].line, Some(1));
    assert_eq!(outcome.errors[0].column, Some(1));
}

#[test]
fn test_validate_text_without_path_skips_accession_match() {
    let text = TST00001.replace("ACCESSION: MSBNK-test-TST00001", "ACCESSION: MSBNK-test-OTHER01");
    let outcome = validate_text(None, &text, &ValidationOptions::default());
    assert!(outcome.is_ok(), "{:?}", outcome.errors);
    assert_eq!(outcome.source, IN_MEMORY_SOURCE);
    assert_eq!(outcome.accession.as_deref(), Some("MSBNK-test-OTHER01"));

    let outcome = validate_text(None, "ACCESSION: TEST\n//", &ValidationOptions::default());
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].kind, ErrorKind::Serialization);
    assert_eq!(outcome.errors[0].file, IN_MEMORY_SOURCE);
}
