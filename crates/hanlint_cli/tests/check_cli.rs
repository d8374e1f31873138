//! End-to-end tests for the hanlint binary.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn hanlint_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("hanlint").expect("binary should build");
    cmd.current_dir(dir);
    cmd
}

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn clean_file_exits_zero() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "clean.md", "这是一行规范的中文。\n");

    hanlint_cmd(dir.path())
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("found 0 issues"));
}

#[test]
fn error_issues_exit_one() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "bad.md", "他说\"你好\"\n");

    hanlint_cmd(dir.path())
        .arg(&file)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("straight-quotes"));
}

#[test]
fn warnings_alone_exit_zero() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "warn.md", "12345\n");

    hanlint_cmd(dir.path())
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("unformatted-large-number"))
        .stdout(predicate::str::contains("12,345"));
}

#[test]
fn warn_only_suppresses_failure_exit() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "bad.md", "他说\"你好\"\n");

    hanlint_cmd(dir.path())
        .arg("--warn-only")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("straight-quotes"));
}

#[test]
fn missing_file_is_fatal_before_checking() {
    let dir = TempDir::new().unwrap();
    let good = write_fixture(&dir, "good.md", "他说\"你好\"\n");

    hanlint_cmd(dir.path())
        .arg(&good)
        .arg(dir.path().join("nope.md"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("File not found"))
        // The engine never ran, so no report was printed.
        .stdout(predicate::str::contains("straight-quotes").not());
}

#[test]
fn fenced_code_is_not_checked() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "code.md", "```\n他说\"你好\"\n```\n");

    hanlint_cmd(dir.path())
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("found 0 issues"));
}

#[test]
fn tables_skipped_by_default_but_checkable() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "table.md", "| 中文abc |\n");

    hanlint_cmd(dir.path()).arg(&file).assert().success();

    hanlint_cmd(dir.path())
        .arg("--check-tables")
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing-space-cn-en"));
}

#[test]
fn json_format_emits_issue_array() {
    let dir = TempDir::new().unwrap();
    let file = write_fixture(&dir, "bad.md", "使用Rust编写\n");

    let assert = hanlint_cmd(dir.path())
        .arg("--format")
        .arg("json")
        .arg(&file)
        .assert()
        .failure();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON output");
    let issues = parsed[0]["issues"].as_array().expect("issues array");
    assert!(!issues.is_empty());
    assert_eq!(issues[0]["rule"], "missing-space-cn-en");
}

#[test]
fn config_file_can_disable_a_rule() {
    let dir = TempDir::new().unwrap();
    write_fixture(
        &dir,
        ".hanlint.json",
        r#"{ "rules": { "straight-quotes": false } }"#,
    );
    let file = write_fixture(&dir, "bad.md", "他说\"你好\"\n");

    hanlint_cmd(dir.path())
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("found 0 issues"));
}

#[test]
fn explicit_config_path_is_used() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir, "custom.json", r#"{ "skip_tables": false }"#);
    let file = write_fixture(&dir, "table.md", "| 中文abc |\n");

    hanlint_cmd(dir.path())
        .arg("--config")
        .arg(&config)
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing-space-cn-en"));
}

#[test]
fn invalid_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir, "broken.json", "{ not json");
    let file = write_fixture(&dir, "a.md", "正文\n");

    hanlint_cmd(dir.path())
        .arg("--config")
        .arg(&config)
        .arg(&file)
        .assert()
        .failure();
}
