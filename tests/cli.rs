use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn validate_fixture_directory_via_cli() {
    let mut cmd = cargo_bin_cmd!("massbank-validate");
    cmd.arg(fixture_path(""));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"));
}

#[test]
fn json_output_via_cli() {
    let mut cmd = cargo_bin_cmd!("massbank-validate");
    cmd.arg("--json")
        .arg("--sequential")
        .arg(fixture_path("MSBNK-test-TST00001.txt"));

    let output_pred = predicate::str::contains("\"success\": true")
        .and(predicate::str::contains("\"filesProcessed\": 1"))
        .and(predicate::str::contains("MSBNK-test-TST00001"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn invalid_record_exits_with_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("MSBNK-test-BROKEN.txt");
    fs::write(&path, "ACCESSION: MSBNK-test-BROKEN\nnot a field\n//\n").unwrap();

    let mut cmd = cargo_bin_cmd!("massbank-validate");
    cmd.arg("--json").arg(&path);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("\"type\": \"parse\""))
        .stdout(predicate::str::contains("invalid line format"));
}

#[test]
fn legacy_flag_and_config_file() {
    let dir = tempdir().unwrap();
    let record = dir.path().join("MSBNK-test-LEGACY.txt");
    fs::write(&record, "ACCESSION: MSBNK-test-LEGACY\n//").unwrap();

    let mut strict = cargo_bin_cmd!("massbank-validate");
    strict.arg(&record);
    strict.assert().failure();

    let mut legacy = cargo_bin_cmd!("massbank-validate");
    legacy.arg("--legacy").arg(&record);
    legacy.assert().success();

    let config = dir.path().join("massbank.toml");
    fs::write(&config, "[validation]\nlegacy = true\nparallel = false\n").unwrap();

    let mut configured = cargo_bin_cmd!("massbank-validate");
    configured.arg("--config").arg(&config).arg(&record);
    configured.assert().success();
}

#[test]
fn missing_inputs_fail() {
    let dir = tempdir().unwrap();

    let mut cmd = cargo_bin_cmd!("massbank-validate");
    cmd.arg(dir.path().join("does-not-exist"));

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("No files found for validation."));
}

#[test]
fn bad_config_file_is_reported() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("massbank.toml");
    fs::write(&config, "[validation\n").unwrap();

    let mut cmd = cargo_bin_cmd!("massbank-validate");
    cmd.arg("--config").arg(&config).arg(fixture_path("MSBNK-test-TST00001.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse TOML configuration"));
}
