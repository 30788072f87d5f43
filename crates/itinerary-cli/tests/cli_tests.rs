use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a database file
fn itin_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("itin").expect("Failed to find itin binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path)
        .env("TZ", "UTC");
    cmd
}

#[test]
fn test_cli_create_trip_success() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    itin_cmd(&db_path)
        .args(["trip", "create", "Lisbon", "--notes", "Pastéis de nata"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created trip with ID: 1"))
        .stdout(predicate::str::contains("# 1. Lisbon"))
        .stdout(predicate::str::contains("Pastéis de nata"));
}

#[test]
fn test_cli_list_empty_trips() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    itin_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No trips found."));
}

#[test]
fn test_cli_create_trip_blank_name_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    itin_cmd(&db_path)
        .args(["trip", "create", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not be empty"));
}

#[test]
fn test_cli_activity_conflict_warning() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    itin_cmd(&db_path)
        .args([
            "trip",
            "create",
            "Tokyo",
            "--start",
            "2024-01-05",
            "--end",
            "2024-01-15",
        ])
        .assert()
        .success();

    itin_cmd(&db_path)
        .args([
            "activity",
            "add",
            "1",
            "transportation",
            "NH 10",
            "--start",
            "2024-01-01T10:00:00Z",
            "--end",
            "2024-01-01T22:00:00Z",
            "--type",
            "plane",
            "--confirmation",
            "XYZ123",
            "--cost",
            "1234.50",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created transportation with ID: 1"))
        .stdout(predicate::str::contains("- Confirmation: XYZ123"))
        .stdout(predicate::str::contains("Warning: date conflicts"))
        .stdout(predicate::str::contains(
            "Trip starts on 2024-01-05, after its first activity begins on 2024-01-01.",
        ));

    itin_cmd(&db_path)
        .args(["trip", "conflicts", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: date conflicts"))
        .stdout(predicate::str::contains("- Trip starts on 2024-01-05"));

    itin_cmd(&db_path)
        .args(["trip", "conflicts", "1", "--start", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip dates cover all records."));
}

#[test]
fn test_cli_trip_show_lists_records_in_order() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    itin_cmd(&db_path)
        .args(["trip", "create", "Kyoto"])
        .assert()
        .success();
    itin_cmd(&db_path)
        .args([
            "activity",
            "add",
            "1",
            "activity",
            "Tea ceremony",
            "--start",
            "2024-03-27T10:00",
            "--end",
            "2024-03-27T11:30",
            "--start-tz",
            "Asia/Tokyo",
        ])
        .assert()
        .success();
    itin_cmd(&db_path)
        .args([
            "activity",
            "add",
            "1",
            "lodging",
            "Ryokan",
            "--start",
            "2024-03-26T15:00",
            "--end",
            "2024-03-28T10:00",
            "--start-tz",
            "Asia/Tokyo",
            "--city",
            "Kyoto",
        ])
        .assert()
        .success();

    let output = itin_cmd(&db_path)
        .args(["trip", "show", "1"])
        .output()
        .expect("Failed to run itin");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains("- Records: 2"));
    assert!(stdout.contains("- Start: 2024-03-27 10:00 JST"));
    assert!(stdout.contains("- Location: Kyoto"));
    let ryokan = stdout.find("Ryokan").unwrap();
    let tea = stdout.find("Tea ceremony").unwrap();
    assert!(ryokan < tea, "records should be ordered by start");
}

#[test]
fn test_cli_edit_and_delete_activity() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    itin_cmd(&db_path)
        .args(["trip", "create", "Rome"])
        .assert()
        .success();
    itin_cmd(&db_path)
        .args([
            "activity",
            "add",
            "1",
            "activity",
            "Colosseum",
            "--start",
            "2024-05-01T08:00:00Z",
            "--end",
            "2024-05-01T10:00:00Z",
        ])
        .assert()
        .success();

    itin_cmd(&db_path)
        .args([
            "activity",
            "edit",
            "activity",
            "1",
            "--cost",
            "35.50",
            "--payment",
            "paid",
            "--confirmation",
            "COL-9",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated activity with ID: 1"))
        .stdout(predicate::str::contains("- Cost: 35.50 (Paid in Full)"))
        .stdout(predicate::str::contains("- Reservation: COL-9"));

    itin_cmd(&db_path)
        .args(["activity", "delete", "activity", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted activity 'Colosseum' (ID: 1)"));

    itin_cmd(&db_path)
        .args(["activity", "show", "activity", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Activity with ID 1 not found"));
}

#[test]
fn test_cli_protected_trip_delete_requires_force() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    itin_cmd(&db_path)
        .args(["trip", "create", "Surprise"])
        .assert()
        .success();
    itin_cmd(&db_path)
        .args(["trip", "update", "1", "--protect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Protected: yes"));

    itin_cmd(&db_path)
        .args(["trip", "delete", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is protected"));

    itin_cmd(&db_path)
        .args(["trip", "delete", "1", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted trip 'Surprise' (ID: 1)"));
}

#[test]
fn test_cli_organizations_and_attachments() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    itin_cmd(&db_path)
        .args([
            "org",
            "create",
            "Alitalia",
            "--website",
            "https://www.ita-airways.com",
            "--city",
            "Rome",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created organization with ID: 1"))
        .stdout(predicate::str::contains("- **Address**: Rome"));

    itin_cmd(&db_path)
        .args(["org", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Alitalia (ID: 1)"));

    itin_cmd(&db_path)
        .args(["trip", "create", "Sicily"])
        .assert()
        .success();
    itin_cmd(&db_path)
        .args([
            "activity",
            "add",
            "1",
            "transportation",
            "AZ 1773",
            "--start",
            "2024-06-01T07:00:00Z",
            "--end",
            "2024-06-01T08:10:00Z",
            "--org",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Organization ID: 1"));

    let ticket = temp_dir.path().join("ticket.pdf");
    std::fs::write(&ticket, b"%PDF ticket").unwrap();
    itin_cmd(&db_path)
        .args(["attachment", "add", "transportation", "1"])
        .arg(&ticket)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Attached ticket.pdf (application/pdf, 11 bytes) with ID: 1",
        ));

    let exported = temp_dir.path().join("copy.pdf");
    itin_cmd(&db_path)
        .args(["attachment", "export", "1"])
        .arg(&exported)
        .assert()
        .success();
    assert_eq!(std::fs::read(&exported).unwrap(), b"%PDF ticket");

    itin_cmd(&db_path)
        .args(["org", "delete", "1"])
        .assert()
        .success();
    itin_cmd(&db_path)
        .args(["activity", "show", "transportation", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Organization ID").not())
        .stdout(predicate::str::contains("ticket.pdf"));
}
