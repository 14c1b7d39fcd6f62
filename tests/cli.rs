//! End-to-end tests for the `tally` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tally(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLYDESK_DATA_DIR", dir.path());
    cmd
}

#[test]
fn test_greet() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["greet", "Ada"])
        .assert()
        .success()
        .stdout("Hello, Ada!\n");

    tally(&dir)
        .arg("greet")
        .assert()
        .success()
        .stdout("Hello, World!\n");
}

#[test]
fn test_calc() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["calc", "5×3="])
        .assert()
        .success()
        .stdout("15\n");
}

#[test]
fn test_calc_division_by_zero() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["calc", "10/0="])
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::contains("Cannot divide by zero!"));
}

#[test]
fn test_calc_unknown_key_fails() {
    let dir = TempDir::new().unwrap();

    tally(&dir).args(["calc", "1+x"]).assert().failure();
}

#[test]
fn test_income_and_summary() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["income", "add", "1500", "Salary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded income"));

    tally(&dir)
        .args(["expense", "add", "25.50", "Groceries", "--category", "food"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded expense"));

    tally(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("£1500.00"))
        .stdout(predicate::str::contains("£1474.50"))
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn test_invalid_amount_fails() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["income", "add", "abc", "Salary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn test_todo_lifecycle() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["todo", "add", "Buy", "bread"])
        .assert()
        .success()
        .stdout("Added 1: Buy bread\n");

    tally(&dir)
        .args(["todo", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1: Buy bread"));

    tally(&dir)
        .args(["todo", "complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Buy bread (Completed:"));

    tally(&dir)
        .args(["todo", "complete", "1"])
        .assert()
        .failure();

    tally(&dir)
        .args(["todo", "clear-completed"])
        .assert()
        .success()
        .stdout("Cleared 1 completed task(s)\n");
}

#[test]
fn test_export_csv_header() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["income", "add", "100", "Gift"])
        .assert()
        .success();

    tally(&dir)
        .args(["export", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ID,Date,Kind,Description,Category,Amount\n",
        ))
        .stdout(predicate::str::contains("Gift"));
}

#[test]
fn test_chart_empty_ledger() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["chart", "--period", "month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income vs Expenses"))
        .stdout(predicate::str::contains("No data available"));
}

#[test]
fn test_chart_rejects_unknown_period() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["chart", "--period", "fortnight"])
        .assert()
        .failure();
}

#[test]
fn test_chart_offset_past_date_range_fails() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["income", "add", "10", "Gift"])
        .assert()
        .success();

    tally(&dir)
        .args(["chart", "--period", "day", "--offset", "4000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Offset 4000000000"));
}

#[test]
fn test_amount_over_cap_fails() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .args(["income", "add", "50000000000000000", "Windfall"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_sample_then_chart() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sample data generated:"));

    tally(&dir)
        .args(["chart", "--period", "month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:"));
}

#[test]
fn test_config_shows_paths() {
    let dir = TempDir::new().unwrap();

    tally(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:      £"));
}
