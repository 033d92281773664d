mod common;

use common::{init_store, prd, sandbox};
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn table_path(root: &str) -> PathBuf {
    PathBuf::from(root).join("PRD").join("production_data.csv")
}

fn add(sb: &tempfile::TempDir, root: &str, code: &str, extra: &[&str]) {
    let mut args = vec![
        "--root",
        root,
        "add",
        "--code",
        code,
        "--description",
        "Flange cover",
        "--date",
        "2025-06-02",
    ];
    args.extend_from_slice(extra);
    prd(sb.path()).args(&args).assert().success();
}

#[test]
fn test_init_creates_table_directory() {
    let sb = sandbox();
    let root = init_store(&sb);

    assert!(PathBuf::from(&root).join("PRD").is_dir());
    // test mode never writes the config file
    assert!(!sb.path().join(".prdlog").join("prdlog.conf").exists());
}

#[test]
fn test_add_creates_table_with_header_and_clock_duration() {
    let sb = sandbox();
    let root = init_store(&sb);

    prd(sb.path())
        .args([
            "--root",
            &root,
            "add",
            "--code",
            "ab-12",
            "--description",
            "Flange cover",
            "--minutes",
            "120",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved in: /PRD/production_data.csv"));

    let content = fs::read_to_string(table_path(&root)).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "timestamp;operator;date;material-code;description;cycle-number;machine;\
         program-number;machine-folder;phase;time-in-phase-minutes"
    );
    let row = lines.next().unwrap();
    assert!(row.contains(";AB-12;Flange cover;1;"));
    assert!(row.ends_with(";Phase 1;2:00:00"));
    assert!(lines.next().is_none());
}

#[test]
fn test_second_add_appends_and_leaves_backup() {
    let sb = sandbox();
    let root = init_store(&sb);

    add(&sb, &root, "A1", &["--minutes", "30"]);
    add(&sb, &root, "A2", &["--hours", "1", "--mins", "15"]);

    let content = fs::read_to_string(table_path(&root)).unwrap();
    assert_eq!(content.lines().count(), 3);
    assert!(content.contains(";A2;Flange cover;2;"));
    assert!(content.contains("1:15:00"));

    let backups: Vec<_> = fs::read_dir(PathBuf::from(&root).join("PRD"))
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().to_string())
        .filter(|n| n.starts_with("production_data.csv.bak_"))
        .collect();
    assert_eq!(backups.len(), 1);
}

#[test]
fn test_next_id_follows_the_table() {
    let sb = sandbox();
    let root = init_store(&sb);

    prd(sb.path())
        .args(["--root", &root, "next-id"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1\n"));

    add(&sb, &root, "A1", &["--minutes", "10"]);

    prd(sb.path())
        .args(["--root", &root, "next-id"])
        .assert()
        .success()
        .stdout(predicate::str::diff("2\n"));
}

#[test]
fn test_next_id_with_unreachable_store_is_one() {
    let sb = sandbox();
    let missing = sb.path().join("nowhere").to_string_lossy().to_string();

    prd(sb.path())
        .args(["--root", &missing, "next-id"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1\n"));
}

#[test]
fn test_list_shows_records_and_total() {
    let sb = sandbox();
    let root = init_store(&sb);

    add(&sb, &root, "A1", &["--minutes", "30"]);
    add(&sb, &root, "B2", &["--minutes", "45"]);

    prd(sb.path())
        .args(["--root", &root, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A1"))
        .stdout(predicate::str::contains("B2"))
        .stdout(predicate::str::contains("Records: 2 | Total time: 01:15"));

    prd(sb.path())
        .args(["--root", &root, "list", "--code", "b2", "--table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B2"))
        .stdout(predicate::str::contains("A1").not())
        .stdout(predicate::str::contains("Records: 1 | Total time: 00:45"));
}

#[test]
fn test_list_on_missing_table_reports_no_data() {
    let sb = sandbox();
    let root = init_store(&sb);

    prd(sb.path())
        .args(["--root", &root, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No data"));
}

#[test]
fn test_export_csv_and_json() {
    let sb = sandbox();
    let root = init_store(&sb);
    add(&sb, &root, "A1", &["--minutes", "90"]);

    let csv_out = sb.path().join("out.csv");
    prd(sb.path())
        .args([
            "--root",
            &root,
            "export",
            "--format",
            "csv",
            "--file",
            csv_out.to_str().unwrap(),
            "--force",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("CSV export completed: 1 rows"));

    let csv_text = fs::read_to_string(&csv_out).unwrap();
    assert!(csv_text.starts_with("timestamp;operator;date;"));
    assert!(csv_text.contains("time-in-phase (hh:mm)"));
    assert!(csv_text.contains(";90;01:30"));

    let json_out = sb.path().join("out.json");
    prd(sb.path())
        .args([
            "--root",
            &root,
            "export",
            "--format",
            "json",
            "--file",
            json_out.to_str().unwrap(),
            "--force",
        ])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).unwrap()).unwrap();
    let first = &json.as_array().unwrap()[0];
    assert_eq!(first["material-code"], "A1");
    assert_eq!(first["time-in-phase-minutes"], 90);
    assert_eq!(first["time-in-phase (hh:mm)"], "01:30");
}

#[test]
fn test_export_requires_absolute_path() {
    let sb = sandbox();
    let root = init_store(&sb);
    add(&sb, &root, "A1", &["--minutes", "5"]);

    prd(sb.path())
        .args(["--root", &root, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be absolute"));
}

#[test]
fn test_check_reports_table_state() {
    let sb = sandbox();
    let root = init_store(&sb);

    prd(sb.path())
        .args(["--root", &root, "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(not found)"));

    add(&sb, &root, "A1", &["--minutes", "5"]);

    prd(sb.path())
        .args(["--root", &root, "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(found,"));
}

#[test]
fn test_add_without_required_fields_fails() {
    let sb = sandbox();
    let root = init_store(&sb);

    prd(sb.path())
        .args(["--root", &root, "add", "--minutes", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Missing required fields: material code, description",
        ));

    assert!(!table_path(&root).exists());
}

#[test]
fn test_add_with_unknown_operator_fails() {
    let sb = sandbox();
    let root = init_store(&sb);

    prd(sb.path())
        .args([
            "--root",
            &root,
            "add",
            "--operator",
            "NOBODY",
            "--code",
            "A1",
            "--description",
            "x",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value 'NOBODY' for operator"));
}

#[test]
fn test_minutes_conflicts_with_hours() {
    let sb = sandbox();
    let root = init_store(&sb);

    prd(sb.path())
        .args([
            "--root", &root, "add", "--code", "A1", "--description", "x", "--minutes", "5",
            "--hours", "1",
        ])
        .assert()
        .failure();
}
