use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn library(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("library").unwrap();
    cmd.env("LIBRARY_CATALOG_DATA_DIR", data_dir)
        .env_remove("LIBRARY_CATALOG_DB");
    cmd
}

fn seed(data_dir: &Path) {
    library(data_dir)
        .args(["book", "add", "Dune", "Frank Herbert", "PS3558.E63", "--copies", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added book: Dune by Frank Herbert [PS3558.E63]"));
    library(data_dir)
        .args(["borrower", "add", "Ada", "Lovelace", "ada@example.com", "555-0100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added borrower: Ada Lovelace <ada@example.com>"));
}

#[test]
fn test_loan_lifecycle_across_invocations() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    seed(dir);

    library(dir)
        .args(["loan", "checkout", "PS3558.E63", "1", "ada@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked out copy #1"));

    library(dir)
        .args(["loan", "status", "PS3558.E63", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"PS3558.E63\", 1, \"Dune\", \"Frank Herbert\", \"ada@example.com\"",
        ))
        .stdout(predicate::str::contains("false"));

    library(dir)
        .args(["loan", "renew", "PS3558.E63", "1"])
        .assert()
        .success();

    library(dir)
        .args(["loan", "renew", "PS3558.E63", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already been renewed"));

    library(dir)
        .args(["borrower", "show", "ada@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* \"PS3558.E63\", 1, \"Dune\""));

    library(dir)
        .args(["loan", "return", "PS3558.E63", "1"])
        .assert()
        .success();

    library(dir)
        .args(["loan", "status", "PS3558.E63", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"PS3558.E63\", 1, \"Dune\", \"Frank Herbert\", Available",
        ));

    library(dir)
        .args(["audit", "--limit", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PS3558.E63 #1"));
}

#[test]
fn test_refused_checkout_fails() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    seed(dir);

    library(dir)
        .args(["loan", "checkout", "PS3558.E63", "3", "ada@example.com"])
        .assert()
        .failure();
    library(dir)
        .args(["loan", "checkout", "PS3558.E63", "1", "nobody@example.com"])
        .assert()
        .failure();
    library(dir)
        .args(["book", "add", "Dune", "Someone Else", "PS3558.E63"])
        .assert()
        .failure();
}

#[test]
fn test_export_books_matches_report() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    seed(dir);
    let output = dir.join("books.csv");

    library(dir)
        .arg("export")
        .arg("books")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "\"Dune\",\"Frank Herbert\",\"PS3558.E63\",2\n"
    );
}

#[test]
fn test_import_borrowers_csv() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let input = dir.join("borrowers.csv");
    fs::write(
        &input,
        "\"Ada\",\"Lovelace\",\"ada@example.com\",\"555-0100\"\n\
         \"Alan\",\"Turing\",\"alan@example.com\",\"555-0101\"\n",
    )
    .unwrap();

    library(dir)
        .arg("import")
        .arg("borrowers")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 borrowers"));

    library(dir)
        .args(["borrower", "list", "--csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"alan@example.com\""));
}

#[test]
fn test_db_flag_selects_catalog_file() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    let db = dir.join("other.json");

    library(dir)
        .arg("--db")
        .arg(&db)
        .args(["book", "add", "Dune", "Frank Herbert", "PS3558.E63"])
        .assert()
        .success();

    assert!(db.exists());
    assert!(!dir.join("data").join("catalog.json").exists());
}

#[test]
fn test_corrupt_catalog_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    fs::create_dir_all(dir.join("data")).unwrap();
    fs::write(dir.join("data").join("catalog.json"), "not json").unwrap();

    library(dir)
        .args(["book", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("catalog.json"));
}

#[test]
fn test_config_rejects_unusable_settings() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    library(dir)
        .args(["config", "--date-format", "%Q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
    library(dir)
        .args(["config", "--loan-days", "4294967295"])
        .assert()
        .failure();
    assert!(!dir.join("config.json").exists());

    seed(dir);
    library(dir)
        .args(["loan", "checkout", "PS3558.E63", "1", "ada@example.com"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Due: "));
}

#[test]
fn test_book_add_rejects_huge_copy_count() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();

    library(dir)
        .args(["book", "add", "Dune", "Frank Herbert", "PS3558.E63", "--copies", "4000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}
