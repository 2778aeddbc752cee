//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("stylemark")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stylemark checks Markdown documents"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("stylemark")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("stylemark")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("stylemark")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_lint_help() {
    cargo_bin_cmd!("stylemark")
        .args(["lint", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--tree"));
}

#[test]
fn test_lint_requires_tree() {
    cargo_bin_cmd!("stylemark")
        .args(["lint", "README.md"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--tree"));
}

#[test]
fn test_rules_lists_every_rule() {
    cargo_bin_cmd!("stylemark")
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("blockquote-indentation"))
        .stdout(predicate::str::contains("no-duplicate-headings-in-section"))
        .stdout(predicate::str::contains("unordered-list-marker-style"));
}
