//! Integration tests for modelzip-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::io::Read;
use std::path::Path;
use tempfile::TempDir;

fn modelzip_cmd() -> Command {
    cargo_bin_cmd!("modelzip")
}

fn write_model(root: &Path, rel_dir: &str, body: &str) {
    let dir = root.join(rel_dir);
    fs::create_dir_all(&dir).expect("failed to create model dir");
    fs::write(dir.join("model.xml"), body).expect("failed to write model");
}

/// Temp dir with a `models/` tree holding A, B and C/D.
fn models_workspace() -> TempDir {
    let temp = TempDir::new().expect("failed to create temp dir");
    let root = temp.path().join("models");
    write_model(&root, "A", "<a/>");
    write_model(&root, "B", "<b/>");
    write_model(&root, "C/D", "<d/>");
    temp
}

fn archive_names(path: &Path) -> Vec<String> {
    let file = fs::File::open(path).expect("failed to open archive");
    let archive = zip::ZipArchive::new(file).expect("failed to read archive");
    let mut names: Vec<String> = archive.file_names().map(String::from).collect();
    names.sort();
    names
}

#[test]
fn test_version_flag() {
    modelzip_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("modelzip"));
}

#[test]
fn test_help_flag() {
    modelzip_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line utility"));
}

#[test]
fn test_bundle_help() {
    modelzip_cmd()
        .arg("bundle")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("model.xml"));
}

#[test]
fn test_bundle_writes_archive_and_manifest() {
    let temp = models_workspace();

    modelzip_cmd()
        .current_dir(temp.path())
        .arg("bundle")
        .arg("models")
        .assert()
        .success()
        .stdout("A\nB\nD\n")
        .stderr(predicate::str::contains("Archive created: models.zip"));

    let manifest = fs::read_to_string(temp.path().join("models.txt")).unwrap();
    assert_eq!(manifest, "A\nB\nD\n");

    assert_eq!(
        archive_names(&temp.path().join("models.zip")),
        vec!["A/model.xml", "B/model.xml", "D/model.xml"]
    );

    let file = fs::File::open(temp.path().join("models.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut content = String::new();
    archive
        .by_name("D/model.xml")
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert_eq!(content, "<d/>");
}

#[test]
fn test_bundle_custom_output_paths() {
    let temp = models_workspace();
    let out = temp.path().join("out");
    fs::create_dir(&out).unwrap();

    modelzip_cmd()
        .arg("bundle")
        .arg(temp.path().join("models"))
        .arg("--archive")
        .arg(out.join("bundle.zip"))
        .arg("--manifest")
        .arg(out.join("names.txt"))
        .arg("--compression-level")
        .arg("0")
        .assert()
        .success();

    assert!(out.join("bundle.zip").is_file());
    assert_eq!(
        fs::read_to_string(out.join("names.txt")).unwrap(),
        "A\nB\nD\n"
    );
}

#[test]
fn test_bundle_empty_tree() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("models/empty")).unwrap();

    modelzip_cmd()
        .current_dir(temp.path())
        .arg("bundle")
        .arg("models")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("models.txt")).unwrap(),
        ""
    );
    assert!(archive_names(&temp.path().join("models.zip")).is_empty());
}

#[test]
fn test_bundle_collision_is_reported() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("models");
    write_model(&root, "x/M", "first");
    write_model(&root, "y/M", "second");

    modelzip_cmd()
        .current_dir(temp.path())
        .arg("bundle")
        .arg("models")
        .assert()
        .success()
        .stdout("M\nM\n")
        .stderr(predicate::str::contains("Warnings:"));

    assert_eq!(
        fs::read_to_string(temp.path().join("models.txt")).unwrap(),
        "M\nM\n"
    );
    assert_eq!(
        archive_names(&temp.path().join("models.zip")),
        vec!["M/model.xml"]
    );
}

#[test]
fn test_bundle_quiet_prints_nothing() {
    let temp = models_workspace();

    modelzip_cmd()
        .current_dir(temp.path())
        .arg("--quiet")
        .arg("bundle")
        .arg("models")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("models.zip").is_file());
}

#[cfg(unix)]
#[test]
fn test_bundle_manifest_failure_names_manifest() {
    let temp = models_workspace();
    fs::create_dir(temp.path().join("names.txt")).unwrap();

    modelzip_cmd()
        .current_dir(temp.path())
        .arg("bundle")
        .arg("models")
        .arg("--manifest")
        .arg("names.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("'names.txt'"))
        .stderr(predicate::str::contains("models.zip").not());

    assert!(temp.path().join("models.zip").is_file());
}

#[test]
fn test_bundle_json_output() {
    let temp = models_workspace();

    let output = modelzip_cmd()
        .current_dir(temp.path())
        .arg("--json")
        .arg("bundle")
        .arg("models")
        .output()
        .expect("failed to run modelzip");

    assert!(output.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON");
    assert_eq!(json["operation"], "bundle");
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["models_found"], 3);
    assert_eq!(json["data"]["models_archived"], 3);
    assert_eq!(json["data"]["models"][2], "D");
}

#[test]
fn test_bundle_without_root_is_usage_error() {
    let temp = TempDir::new().unwrap();

    modelzip_cmd()
        .current_dir(temp.path())
        .arg("bundle")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("ROOT"));

    assert!(!temp.path().join("models.zip").exists());
    assert!(!temp.path().join("models.txt").exists());
}

#[test]
fn test_bundle_extra_argument_is_usage_error() {
    let temp = models_workspace();

    modelzip_cmd()
        .current_dir(temp.path())
        .arg("bundle")
        .arg("models")
        .arg("extra")
        .assert()
        .failure()
        .code(2);

    assert!(!temp.path().join("models.zip").exists());
}

#[test]
fn test_bundle_missing_root() {
    let temp = TempDir::new().unwrap();

    modelzip_cmd()
        .current_dir(temp.path())
        .arg("bundle")
        .arg("does-not-exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_bundle_rejects_compression_level() {
    let temp = models_workspace();

    modelzip_cmd()
        .current_dir(temp.path())
        .arg("bundle")
        .arg("models")
        .arg("--compression-level")
        .arg("12")
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_list_bundled_archive() {
    let temp = models_workspace();

    modelzip_cmd()
        .current_dir(temp.path())
        .arg("--quiet")
        .arg("bundle")
        .arg("models")
        .assert()
        .success();

    modelzip_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("A"))
        .stdout(predicate::str::contains("D"));
}

#[test]
fn test_list_json_output() {
    let temp = models_workspace();

    modelzip_cmd()
        .current_dir(temp.path())
        .arg("--quiet")
        .arg("bundle")
        .arg("models")
        .assert()
        .success();

    let output = modelzip_cmd()
        .current_dir(temp.path())
        .arg("--json")
        .arg("list")
        .arg("models.zip")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["operation"], "list");
    assert_eq!(json["data"]["total_models"], 3);
}

#[test]
fn test_list_missing_archive() {
    let temp = TempDir::new().unwrap();

    modelzip_cmd()
        .current_dir(temp.path())
        .arg("list")
        .arg("nope.zip")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_locate_folder_model() {
    let temp = models_workspace();

    modelzip_cmd()
        .arg("locate")
        .arg("B")
        .arg("--models")
        .arg(temp.path().join("models"))
        .assert()
        .success()
        .stdout(predicate::str::contains("model.xml"));
}

#[test]
fn test_locate_print_writes_content() {
    let temp = models_workspace();

    modelzip_cmd()
        .arg("locate")
        .arg("A")
        .arg("--models")
        .arg(temp.path().join("models"))
        .arg("--print")
        .assert()
        .success()
        .stdout("<a/>");
}

#[test]
fn test_locate_inside_archive() {
    let temp = models_workspace();

    modelzip_cmd()
        .current_dir(temp.path())
        .arg("--quiet")
        .arg("bundle")
        .arg("models")
        .assert()
        .success();

    let lookup = temp.path().join("lookup");
    fs::create_dir(&lookup).unwrap();
    fs::copy(temp.path().join("models.zip"), lookup.join("models.zip")).unwrap();

    modelzip_cmd()
        .arg("locate")
        .arg("D")
        .arg("--models")
        .arg(&lookup)
        .assert()
        .success()
        .stdout(predicate::str::contains("models.zip!D/model.xml"));
}

#[test]
fn test_locate_unknown_model() {
    let temp = models_workspace();

    modelzip_cmd()
        .arg("locate")
        .arg("Nope")
        .arg("--models")
        .arg(temp.path().join("models"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Model 'Nope' not found"));
}

#[test]
fn test_locate_rejects_parent_traversal() {
    let temp = models_workspace();
    write_model(temp.path(), "secret", "<s/>");

    modelzip_cmd()
        .arg("locate")
        .arg("../secret")
        .arg("--models")
        .arg(temp.path().join("models"))
        .arg("--print")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Model '../secret' not found"));
}

#[test]
fn test_completion_bash() {
    modelzip_cmd()
        .arg("completion")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("modelzip"));
}
