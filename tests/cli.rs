use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn setup_test_directory() -> tempfile::TempDir {
    let dir = tempdir().unwrap();

    fs::write(dir.path().join("report.txt"), "current").unwrap();
    fs::write(dir.path().join("report_old.txt"), "old").unwrap();
    fs::write(dir.path().join("summary.csv"), "a,b").unwrap();

    dir
}

// root 运行时会逐项确认，多余的 y 对普通用户无影响
const YES_TO_ALL: &str = "y\ny\ny\ny\n";

#[test]
fn test_no_arguments_prints_help() {
    let mut cmd = Command::cargo_bin("find-delete").unwrap();
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--directory"))
        .stdout(predicate::str::contains("--file"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("find-delete").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--exact"));
}

#[test]
fn test_parse_error_exits_with_two() {
    let mut cmd = Command::cargo_bin("find-delete").unwrap();
    cmd.arg("--no-such-flag").assert().code(2);

    let mut cmd = Command::cargo_bin("find-delete").unwrap();
    cmd.arg("--directory").assert().code(2);
}

#[test]
fn test_missing_pattern_is_invalid_request() {
    let dir = setup_test_directory();

    let mut cmd = Command::cargo_bin("find-delete").unwrap();
    cmd.arg("-d")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("无效请求"));
}

#[test]
fn test_missing_directory_is_invalid_request() {
    let dir = setup_test_directory();

    let mut cmd = Command::cargo_bin("find-delete").unwrap();
    cmd.arg("report")
        .arg(dir.path().join("missing"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("无效请求"));
}

#[test]
fn test_invalid_request_leaves_no_log_files() {
    let dir = setup_test_directory();
    let work = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("find-delete").unwrap();
    cmd.current_dir(work.path())
        .arg("--log")
        .arg("-d")
        .arg(dir.path())
        .assert()
        .code(1);

    let mut cmd = Command::cargo_bin("find-delete").unwrap();
    cmd.current_dir(work.path())
        .arg("--log")
        .arg("report")
        .arg(dir.path().join("missing"))
        .assert()
        .code(1);

    assert_eq!(fs::read_dir(work.path()).unwrap().count(), 0);
}

#[test]
fn test_positional_form_deletes_after_yes() {
    let dir = setup_test_directory();

    let mut cmd = Command::cargo_bin("find-delete").unwrap();
    cmd.arg("report")
        .arg(dir.path())
        .write_stdin(YES_TO_ALL)
        .assert()
        .success()
        .stdout(predicate::str::contains("report.txt"))
        .stdout(predicate::str::contains("report_old.txt"))
        .stdout(predicate::str::contains("成功: 2"));

    assert!(!dir.path().join("report.txt").exists());
    assert!(!dir.path().join("report_old.txt").exists());
    assert!(dir.path().join("summary.csv").exists());
}

#[test]
fn test_flag_form_exact_match() {
    let dir = setup_test_directory();

    let mut cmd = Command::cargo_bin("find-delete").unwrap();
    cmd.args(["--file", "report.txt", "--exact", "--directory"])
        .arg(dir.path())
        .write_stdin(YES_TO_ALL)
        .assert()
        .success()
        .stdout(predicate::str::contains("成功: 1"));

    assert!(!dir.path().join("report.txt").exists());
    assert!(dir.path().join("report_old.txt").exists());
}

#[test]
fn test_answer_no_keeps_files() {
    let dir = setup_test_directory();

    let mut cmd = Command::cargo_bin("find-delete").unwrap();
    cmd.arg("report")
        .arg(dir.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("用户已取消删除"));

    assert!(dir.path().join("report.txt").exists());
    assert!(dir.path().join("report_old.txt").exists());
}

#[test]
fn test_invalid_answer_keeps_files() {
    let dir = setup_test_directory();

    let mut cmd = Command::cargo_bin("find-delete").unwrap();
    cmd.arg("report")
        .arg(dir.path())
        .write_stdin("maybe\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("输入无效"))
        .stdout(predicate::str::contains("用户已取消删除").not());

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 3);
}

#[test]
fn test_no_matches() {
    let dir = setup_test_directory();

    let mut cmd = Command::cargo_bin("find-delete").unwrap();
    cmd.arg("nothing")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("没有找到"))
        .stdout(predicate::str::contains("(y/n)").not());
}

#[test]
fn test_strip_punct() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("my_song-(live).mp3"), "").unwrap();

    let mut cmd = Command::cargo_bin("strip-punct").unwrap();
    cmd.arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed:"));

    assert!(dir.path().join("my song  live.mp3").exists());
}

#[test]
fn test_strip_punct_rejects_file_argument() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a_b.txt");
    fs::write(&file, "").unwrap();

    let mut cmd = Command::cargo_bin("strip-punct").unwrap();
    cmd.arg(&file).assert().code(1);
    assert!(file.exists());
}

#[test]
fn test_swap_versions() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("flutter")).unwrap();
    fs::create_dir(dir.path().join("flutter-29")).unwrap();
    fs::write(dir.path().join("flutter-29/VERSION"), "29").unwrap();

    let mut cmd = Command::cargo_bin("swap-versions").unwrap();
    cmd.arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("29"));

    assert_eq!(fs::read_to_string(dir.path().join("flutter/VERSION")).unwrap(), "29");
    assert!(dir.path().join("flutter-27").is_dir());
}

#[test]
fn test_swap_versions_missing_folders() {
    let dir = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("swap-versions").unwrap();
    cmd.arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("交换失败"));
}
