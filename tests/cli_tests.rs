use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, is_match};
use tempfile::TempDir;

const BIN_NAME: &str = "pocketbook";

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("snapshot.json")
}

fn pocketbook(base: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("POCKETBOOK_DIR", base.path())
        .env_remove("POCKETBOOK_SNAPSHOT")
        .env_remove("RUST_LOG");
    cmd
}

fn with_fixture(base: &TempDir) -> Command {
    let mut cmd = pocketbook(base);
    cmd.arg("--snapshot").arg(fixture_path());
    cmd
}

#[test]
fn summary_shows_month_totals() {
    let base = TempDir::new().unwrap();
    with_fixture(&base)
        .args(["summary", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(contains("Dashboard - Jun 2024"))
        .stdout(contains("$678.99"))
        .stdout(contains("Shopping"));
}

#[test]
fn summary_for_empty_month() {
    let base = TempDir::new().unwrap();
    with_fixture(&base)
        .args(["summary", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(contains("No spending this month."))
        .stdout(contains("No budgets set for this month."));
}

#[test]
fn categories_breakdown_lists_food() {
    let base = TempDir::new().unwrap();
    with_fixture(&base)
        .args(["categories", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(contains("Food & Dining"))
        .stdout(contains("$178.00"));
}

#[test]
fn budget_overview_for_month() {
    let base = TempDir::new().unwrap();
    with_fixture(&base)
        .args(["budget", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(contains("Budget Overview - Jun 2024"))
        .stdout(contains("Bills & Utilities"));

    with_fixture(&base)
        .args(["budget", "--month", "2024-06", "--over"])
        .assert()
        .success()
        .stdout(contains("No budgets are over for Jun 2024."));
}

#[test]
fn trends_with_explicit_range() {
    let base = TempDir::new().unwrap();
    with_fixture(&base)
        .args(["trends", "--start", "2024-04-01", "--end", "2024-06-30"])
        .assert()
        .success()
        .stdout(contains("Spending Trends: Apr 2024 - Jun 2024"))
        .stdout(contains("$678.99"));
}

#[test]
fn expenses_filter_and_sort() {
    let base = TempDir::new().unwrap();
    with_fixture(&base)
        .args(["expenses", "--category", "1", "--sort", "amount", "--direction", "asc"])
        .assert()
        .success()
        .stdout(is_match("(?s)Coffee.*Lunch at restaurant.*Grocery shopping").unwrap())
        .stdout(contains("New shoes").not());
}

#[test]
fn expenses_search_without_matches() {
    let base = TempDir::new().unwrap();
    with_fixture(&base)
        .args(["expenses", "--search", "zzz"])
        .assert()
        .success()
        .stdout(contains("No expenses found."));
}

#[test]
fn export_to_stdout() {
    let base = TempDir::new().unwrap();
    with_fixture(&base)
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout(contains("Date,Description,Category,Amount\n"))
        .stdout(contains("2024-06-15,Lunch at restaurant,Food & Dining,45.50\n"));
}

#[test]
fn export_to_file() {
    let base = TempDir::new().unwrap();
    let out = base.path().join("june.csv");
    with_fixture(&base)
        .args(["export", "--month", "2024-06", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Exported 10 expense(s)"));

    let contents = fs::read_to_string(&out).unwrap();
    assert_eq!(contents.lines().count(), 11);
}

#[test]
fn config_set_then_show() {
    let base = TempDir::new().unwrap();
    pocketbook(&base)
        .args(["config", "set", "currency_symbol", "€"])
        .assert()
        .success();

    pocketbook(&base)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("currency_symbol: €"));

    with_fixture(&base)
        .args(["summary", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(contains("€678.99"));
}

#[test]
fn config_rejects_unknown_key() {
    let base = TempDir::new().unwrap();
    pocketbook(&base)
        .args(["config", "set", "colour", "red"])
        .assert()
        .failure()
        .stderr(contains("Unknown setting"));
}

#[test]
fn missing_snapshot_fails() {
    let base = TempDir::new().unwrap();
    pocketbook(&base)
        .args(["summary", "--month", "2024-06"])
        .assert()
        .failure()
        .stderr(contains("snapshot.json"));
}

#[test]
fn invalid_month_fails() {
    let base = TempDir::new().unwrap();
    with_fixture(&base)
        .args(["budget", "--month", "June"])
        .assert()
        .failure()
        .stderr(contains("YYYY-MM"));
}
