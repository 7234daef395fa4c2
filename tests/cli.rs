//! End-to-end CLI tests
//!
//! Drives the finsmart binary against temporary ledger files.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn finsmart() -> Command {
    Command::cargo_bin("finsmart").unwrap()
}

fn ledger_path(dir: &TempDir) -> PathBuf {
    dir.path().join("ledger.csv")
}

fn add_expense(ledger: &PathBuf, date: &str, amount: &str, category: &str) {
    finsmart()
        .args([
            "expense",
            "add",
            "--file",
            ledger.to_str().unwrap(),
            "--date",
            date,
            "--amount",
            amount,
            "--category",
            category,
        ])
        .assert()
        .success();
}

#[test]
fn add_creates_ledger_and_list_shows_it() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_path(&dir);

    finsmart()
        .args([
            "expense",
            "add",
            "--file",
            ledger.to_str().unwrap(),
            "--date",
            "2026-08-08",
            "--amount",
            "250.50",
            "--category",
            "Groceries",
            "--description",
            "weekly shop",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded"));

    let contents = std::fs::read_to_string(&ledger).unwrap();
    assert!(contents.starts_with("date,amount,category,description\n"));
    assert!(contents.contains("2026-08-08,250.50,Groceries,weekly shop"));

    finsmart()
        .args(["expense", "list", "--file", ledger.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹250.50"))
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn add_rejects_unknown_category() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_path(&dir);

    finsmart()
        .args([
            "expense",
            "add",
            "--file",
            ledger.to_str().unwrap(),
            "--amount",
            "100",
            "--category",
            "Gadgets",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not registered"));

    // The ledger file must not have been created
    assert!(!ledger.exists());
}

#[test]
fn add_accepts_new_category_with_flag() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_path(&dir);

    finsmart()
        .args([
            "expense",
            "add",
            "--file",
            ledger.to_str().unwrap(),
            "--date",
            "2026-08-08",
            "--amount",
            "999",
            "--category",
            "Gadgets",
            "--new-category",
        ])
        .assert()
        .success();

    // The custom category survives the CSV round trip
    finsmart()
        .args([
            "expense",
            "add",
            "--file",
            ledger.to_str().unwrap(),
            "--date",
            "2026-08-09",
            "--amount",
            "100",
            "--category",
            "Gadgets",
        ])
        .assert()
        .success();
}

#[test]
fn add_rejects_negative_amount() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_path(&dir);

    finsmart()
        .args([
            "expense",
            "add",
            "--file",
            ledger.to_str().unwrap(),
            "--amount",
            "-5",
            "--category",
            "Groceries",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));
}

#[test]
fn list_rejects_missing_ledger() {
    finsmart()
        .args(["expense", "list", "--file", "/no/such/ledger.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn summary_by_category() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_path(&dir);

    add_expense(&ledger, "2026-08-01", "300", "Groceries");
    add_expense(&ledger, "2026-08-02", "100", "Health");
    add_expense(&ledger, "2026-08-03", "100", "Groceries");

    finsmart()
        .args([
            "expense",
            "summary",
            "--file",
            ledger.to_str().unwrap(),
            "--by",
            "category",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹400.00"))
        .stdout(predicate::str::contains("80.0%"));
}

#[test]
fn summary_by_month() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_path(&dir);

    add_expense(&ledger, "2026-07-15", "100", "Groceries");
    add_expense(&ledger, "2026-08-01", "250", "Groceries");

    finsmart()
        .args([
            "expense",
            "summary",
            "--file",
            ledger.to_str().unwrap(),
            "--by",
            "month",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2026-07"))
        .stdout(predicate::str::contains("2026-08"));
}

#[test]
fn budget_status_reports_severity() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_path(&dir);

    add_expense(&ledger, "2026-08-05", "1300", "Groceries");

    finsmart()
        .args([
            "budget",
            "status",
            "--file",
            ledger.to_str().unwrap(),
            "--set",
            "Groceries=1000",
            "--month",
            "2026-08",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Over budget by ₹300.00"))
        .stdout(predicate::str::contains("100.0%"));
}

#[test]
fn invest_lumpsum_reference_value() {
    finsmart()
        .args([
            "invest", "lumpsum", "--amount", "100000", "--rate", "12", "--years", "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹310,584.82"));
}

#[test]
fn invest_sip_with_inflation() {
    finsmart()
        .args([
            "invest",
            "sip",
            "--monthly",
            "1000",
            "--rate",
            "12",
            "--years",
            "10",
            "--inflation",
            "6",
            "--yearly",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹120,000.00"))
        .stdout(predicate::str::contains("Inflation-adjusted value"))
        .stdout(predicate::str::contains("Year"));
}

#[test]
fn plan_week_equal_split() {
    finsmart()
        .args(["plan", "week", "--amount", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday"))
        .stdout(predicate::str::contains("₹142.86"));
}

#[test]
fn plan_week_rejects_bad_split() {
    finsmart()
        .args([
            "plan",
            "week",
            "--amount",
            "1000",
            "--split",
            "20,20,20,10,10,10,5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("sum to 100"));
}

#[test]
fn export_round_trips_through_import() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_path(&dir);
    let exported = dir.path().join("exported.csv");

    add_expense(&ledger, "2026-08-01", "120.50", "Groceries");
    add_expense(&ledger, "2026-08-02", "75", "Health");

    finsmart()
        .args([
            "export",
            "--file",
            ledger.to_str().unwrap(),
            "--output",
            exported.to_str().unwrap(),
        ])
        .assert()
        .success();

    // The exported file is itself a valid ledger
    finsmart()
        .args(["expense", "list", "--file", exported.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹120.50"))
        .stdout(predicate::str::contains("₹75.00"));

    assert_eq!(
        std::fs::read_to_string(&ledger).unwrap(),
        std::fs::read_to_string(&exported).unwrap()
    );
}

#[test]
fn export_filtered_json() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_path(&dir);

    add_expense(&ledger, "2026-08-01", "120.50", "Groceries");
    add_expense(&ledger, "2026-08-02", "75", "Health");

    finsmart()
        .args([
            "export",
            "--file",
            ledger.to_str().unwrap(),
            "--format",
            "json",
            "--category",
            "Health",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category\": \"Health\""))
        .stdout(predicate::str::contains("Groceries").not());
}

#[test]
fn dashboard_shows_totals() {
    let dir = TempDir::new().unwrap();
    let ledger = ledger_path(&dir);

    add_expense(&ledger, "2026-08-01", "250", "Groceries");

    finsmart()
        .args(["dashboard", "--file", ledger.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total expenses: ₹250.00"))
        .stdout(predicate::str::contains("Recent Expenses"));
}
