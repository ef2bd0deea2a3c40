//! End-to-end tests for the logsweep binary.
#![allow(clippy::unwrap_used)]

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_dry_run_is_default_and_nondestructive() -> Result<()> {
    let temp = TempDir::new()?;
    let file = temp.path().join("main.dart");
    let source = "void main() {\n  print('debug');\n  runApp();\n}\n";
    fs::write(&file, source)?;

    let mut cmd = Command::cargo_bin("logsweep")?;
    cmd.arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY-RUN]"))
        .stdout(predicate::str::contains("Line 2: print('debug');"))
        .stdout(predicate::str::contains(
            "Found 1 log statement(s) that would be removed.",
        ));

    assert_eq!(fs::read_to_string(&file)?, source);
    Ok(())
}

#[test]
fn test_apply_removes_statements() -> Result<()> {
    let temp = TempDir::new()?;
    let file = temp.path().join("main.dart");
    fs::write(&file, "print('a');\nint x = 5;\nlog('b');\n")?;

    let mut cmd = Command::cargo_bin("logsweep")?;
    cmd.arg(temp.path())
        .arg("--apply")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2 log statement(s)."));

    assert_eq!(fs::read_to_string(&file)?, "int x = 5;\n");
    Ok(())
}

#[test]
fn test_nothing_found() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("main.dart"), "int x = 5;\n")?;

    let mut cmd = Command::cargo_bin("logsweep")?;
    cmd.arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No log statements found to remove.",
        ));
    Ok(())
}

#[test]
fn test_missing_target_fails() -> Result<()> {
    let mut cmd = Command::cargo_bin("logsweep")?;
    cmd.arg("no/such/path")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
    Ok(())
}

#[test]
fn test_multi_line_statement_removed_as_one() -> Result<()> {
    let temp = TempDir::new()?;
    let file = temp.path().join("main.dart");
    fs::write(&file, "log(\n  'wrapped event',\n);\nint x = 5;\n")?;

    let mut cmd = Command::cargo_bin("logsweep")?;
    cmd.arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Found 1 log statement(s) that would be removed.",
        ))
        .stdout(predicate::str::contains("Line 1: log("));
    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let temp = TempDir::new()?;
    let file = temp.path().join("main.dart");
    fs::write(&file, "  print('x');\n")?;

    let mut cmd = Command::cargo_bin("logsweep")?;
    let output = cmd.arg(file.as_os_str()).arg("--json").output()?;
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed[0]["statements"], 1);
    assert_eq!(parsed[0]["findings"][0]["line"], 1);
    assert_eq!(parsed[0]["findings"][0]["text"], "print('x');");
    Ok(())
}

#[test]
fn test_json_mode_surfaces_skip_on_stderr() -> Result<()> {
    let temp = TempDir::new()?;
    let bad = temp.path().join("bad.dart");
    // Invalid UTF-8 makes the read fail deterministically.
    fs::write(&bad, b"print('x');\n\xff")?;

    let mut cmd = Command::cargo_bin("logsweep")?;
    let output = cmd.arg(bad.as_os_str()).arg("--json").arg("--apply").output()?;
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Skip:"));
    // stdout stays machine-readable.
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed, serde_json::json!([]));
    assert_eq!(fs::read(&bad)?, b"print('x');\n\xff");
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_json_apply_write_failure_surfaces_error() -> Result<()> {
    use std::os::unix::fs::{MetadataExt, PermissionsExt};

    let temp = TempDir::new()?;
    let file = temp.path().join("locked.dart");
    fs::write(&file, "print('x');\n")?;
    if fs::metadata(&file)?.uid() == 0 {
        // Permission bits do not bind root.
        return Ok(());
    }
    fs::set_permissions(&file, fs::Permissions::from_mode(0o444))?;

    let mut cmd = Command::cargo_bin("logsweep")?;
    let output = cmd.arg(file.as_os_str()).arg("--json").arg("--apply").output()?;
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed, serde_json::json!([]));
    assert_eq!(fs::read_to_string(&file)?, "print('x');\n");
    Ok(())
}

#[test]
fn test_quiet_hides_findings() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("main.dart"), "print('x');\n")?;

    let mut cmd = Command::cargo_bin("logsweep")?;
    cmd.arg(temp.path())
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Line 1:").not())
        .stdout(predicate::str::contains("Found 1 log statement(s)"));
    Ok(())
}

#[test]
fn test_extension_filter_flag() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("a.dart"), "print('a');\n")?;
    fs::write(temp.path().join("b.js"), "print('b');\n")?;

    let mut cmd = Command::cargo_bin("logsweep")?;
    cmd.arg(temp.path())
        .arg("--ext")
        .arg("js")
        .assert()
        .success()
        .stdout(predicate::str::contains("b.js"))
        .stdout(predicate::str::contains("a.dart").not());
    Ok(())
}

#[test]
fn test_keyword_flag_replaces_builtins() -> Result<()> {
    let temp = TempDir::new()?;
    let file = temp.path().join("main.dart");
    fs::write(&file, "debugPrint('x');\nprint('kept');\n")?;

    let mut cmd = Command::cargo_bin("logsweep")?;
    cmd.arg(file.as_os_str())
        .arg("--apply")
        .arg("--keyword")
        .arg("debugPrint")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 log statement(s)."));

    assert_eq!(fs::read_to_string(&file)?, "print('kept');\n");
    Ok(())
}

#[test]
fn test_config_file_discovered_from_target() -> Result<()> {
    let temp = TempDir::new()?;
    fs::write(
        temp.path().join(".logsweep.toml"),
        "[logsweep]\nextensions = [\"txt\"]\n",
    )?;
    fs::write(temp.path().join("notes.txt"), "log('x');\n")?;
    fs::write(temp.path().join("main.dart"), "log('y');\n")?;

    let mut cmd = Command::cargo_bin("logsweep")?;
    cmd.arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("notes.txt"))
        .stdout(predicate::str::contains("main.dart").not());
    Ok(())
}

#[test]
fn test_help_mentions_config() -> Result<()> {
    let mut cmd = Command::cargo_bin("logsweep")?;
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(".logsweep.toml"));
    Ok(())
}
