//! End-to-end tests for the `pubcheck` binary: exit codes, report rendering,
//! and determinism over real directory trees.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;

fn pubcheck() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pubcheck"))
}

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn clean_tree_exits_zero_with_success_line() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "publications/alpha/manifest.json",
        &json!({"identifier": "alpha", "title": "Alpha"}).to_string(),
    );
    write(
        dir.path(),
        "publications/recent.json",
        &json!([{"id": "alpha", "author": "A. Author"}]).to_string(),
    );

    pubcheck()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ All validations passed."));
}

#[test]
fn defaults_to_current_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "publications/alpha/manifest.json",
        &json!({"identifier": "alpha", "title": "Alpha"}).to_string(),
    );

    pubcheck()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All validations passed."));
}

#[test]
fn violations_exit_one_with_counted_report() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "publications/alpha/manifest.json",
        &json!({"identifier": "beta", "title": "Alpha"}).to_string(),
    );

    pubcheck()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 1 issues:"))
        .stdout(predicate::str::contains("Parent dir 'alpha' != identifier 'beta'"))
        .stdout(predicate::str::contains("All validations passed.").not());
}

#[test]
fn manifest_without_identifier_reports_two_issues() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "publications/alpha/manifest.json",
        &json!({"title": "Alpha"}).to_string(),
    );

    pubcheck()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 2 issues:"))
        .stdout(predicate::str::contains("Missing required manifest field 'identifier'"))
        .stdout(predicate::str::contains("manifest missing identifier field"));
}

#[test]
fn parse_error_is_reported_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "publications/alpha/manifest.json", "{ broken json");

    pubcheck()
        .arg("--root")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("JSON parse error"));
}

#[test]
fn output_is_identical_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "publications/zeta/manifest.json",
        &json!({"title": "Z"}).to_string(),
    );
    write(
        dir.path(),
        "publications/recent.json",
        &json!([{"published": "2024-01-01"}]).to_string(),
    );

    let first = pubcheck().arg("--root").arg(dir.path()).output().unwrap();
    let second = pubcheck().arg("--root").arg(dir.path()).output().unwrap();
    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn missing_root_fails() {
    pubcheck()
        .arg("--root")
        .arg("/definitely/not/a/real/root")
        .assert()
        .failure();
}

#[test]
fn help_describes_the_tool() {
    pubcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("publication repository tree"));
}
