//! Lint subcommand tests

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use stylemark::stylemark_tree::builder::*;
use stylemark::stylemark_tree::{Locator, Node, to_json};
use tempfile::TempDir;

/// Write `input` and its tree into a fresh directory; returns the paths of
/// the Markdown file and the JSON tree.
fn write_document(dir: &TempDir, input: &str, tree: &Node) -> (PathBuf, PathBuf) {
    let md = dir.path().join("doc.md");
    let json = dir.path().join("doc.json");
    fs::write(&md, input).unwrap();
    fs::write(&json, to_json(tree).unwrap()).unwrap();
    (md, json)
}

fn stylemark(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("stylemark");
    cmd.env("XDG_CONFIG_HOME", dir.path()).current_dir(dir.path());
    cmd
}

fn clean_document(input: &str) -> Node {
    let locator = Locator::new(input);
    let pos = |needle: &str| locator.find(needle, 0).unwrap();
    root(vec![
        heading(1, vec![text("Heading").at(pos("Heading"))]).at(pos("# Heading")),
        heading(2, vec![text("Subheading").at(pos("Subheading"))]).at(pos("## Subheading")),
        paragraph(vec![text("Paragraph.").at(pos("Paragraph."))]).at(pos("Paragraph.")),
    ])
}

fn skipped_level_document(input: &str) -> Node {
    let locator = Locator::new(input);
    let pos = |needle: &str| locator.find(needle, 0).unwrap();
    root(vec![
        heading(1, vec![text("Heading").at(pos("Heading"))]).at(pos("# Heading")),
        heading(3, vec![text("Subheading").at(pos("Subheading"))]).at(pos("### Subheading")),
    ])
}

#[test]
fn test_lint_clean_file() {
    let dir = TempDir::new().unwrap();
    let input = "# Heading\n\n## Subheading\n\nParagraph.\n";
    let (md, json) = write_document(&dir, input, &clean_document(input));

    stylemark(&dir)
        .args(["lint", md.to_str().unwrap(), "--tree", json.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_lint_with_violations() {
    let dir = TempDir::new().unwrap();
    let input = "# Heading\n\n### Subheading";
    let (md, json) = write_document(&dir, input, &skipped_level_document(input));

    stylemark(&dir)
        .args(["lint", md.to_str().unwrap(), "--tree", json.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("warning"))
        .stdout(predicate::str::contains("[heading-increment]: Heading levels should increment"))
        .stdout(predicate::str::contains("doc.md:3:1"))
        .stdout(predicate::str::contains("[final-newline]"))
        .stdout(predicate::str::contains("Found 2 issue(s)"));
}

#[test]
fn test_lint_check_mode_clean() {
    let dir = TempDir::new().unwrap();
    let input = "# Heading\n\n## Subheading\n\nParagraph.\n";
    let (md, json) = write_document(&dir, input, &clean_document(input));

    stylemark(&dir)
        .args(["lint", "--check", md.to_str().unwrap(), "--tree", json.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_lint_check_mode_violations() {
    let dir = TempDir::new().unwrap();
    let input = "# Heading\n\n### Subheading\n";
    let (md, json) = write_document(&dir, input, &skipped_level_document(input));

    stylemark(&dir)
        .args(["lint", "--check", md.to_str().unwrap(), "--tree", json.to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 1 issue(s)"));
}

#[test]
fn test_lint_stdin() {
    let dir = TempDir::new().unwrap();
    let input = "# Heading\n\n### Subheading\n";
    let (_, json) = write_document(&dir, input, &skipped_level_document(input));

    stylemark(&dir)
        .args(["lint", "--tree", json.to_str().unwrap()])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("<stdin>:3:1"));
}

#[test]
fn test_lint_json_output() {
    let dir = TempDir::new().unwrap();
    let input = "# Heading\n\n### Subheading";
    let (md, json) = write_document(&dir, input, &skipped_level_document(input));

    let output = stylemark(&dir)
        .args([
            "lint",
            "--format",
            "json",
            md.to_str().unwrap(),
            "--tree",
            json.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let reports: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let reports = reports.as_array().unwrap();
    assert_eq!(reports.len(), 2);

    assert_eq!(reports[0]["ruleIdentifier"], "final-newline");
    assert!(reports[0].get("startLine").is_none());

    assert_eq!(reports[1]["ruleIdentifier"], "heading-increment");
    assert_eq!(reports[1]["severity"], "warning");
    assert_eq!(reports[1]["startLine"], 3);
    assert_eq!(reports[1]["startColumn"], 1);
    assert_eq!(reports[1]["endLine"], 3);
    assert_eq!(reports[1]["endColumn"], 15);
}

#[test]
fn test_lint_discovers_config() {
    let dir = TempDir::new().unwrap();
    let input = "# Heading\n\n### Subheading";
    let (md, json) = write_document(&dir, input, &skipped_level_document(input));
    fs::write(
        dir.path().join(".stylemark.toml"),
        "[rules]\nheading-increment = false\nfinal-newline = false\n",
    )
    .unwrap();

    stylemark(&dir)
        .args(["lint", "--check", md.to_str().unwrap(), "--tree", json.to_str().unwrap()])
        .assert()
        .success();
}

#[test]
fn test_lint_explicit_config_with_invalid_option() {
    let dir = TempDir::new().unwrap();
    let input = "# Heading\n\n## Subheading\n\nParagraph.\n";
    let (md, json) = write_document(&dir, input, &clean_document(input));
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[rules]\nrule-style = \"+++\"\n").unwrap();

    stylemark(&dir)
        .args([
            "lint",
            "--check",
            "--config",
            config.to_str().unwrap(),
            md.to_str().unwrap(),
            "--tree",
            json.to_str().unwrap(),
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[rule-style]: invalid configuration for `rule-style`"));
}

#[test]
fn test_lint_invalid_tree() {
    let dir = TempDir::new().unwrap();
    let md = dir.path().join("doc.md");
    let json = dir.path().join("doc.json");
    fs::write(&md, "# Heading\n").unwrap();
    fs::write(&json, "{\"children\": []}").unwrap();

    stylemark(&dir)
        .args(["lint", md.to_str().unwrap(), "--tree", json.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid tree"));
}
