//! End-to-end tests of the cashflow binary
//!
//! Each test runs against its own temp data directory via the
//! CASHFLOW_DATA_DIR override, so tests never touch a real ledger and can
//! run in parallel.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A cashflow command pointed at an isolated data directory
fn cashflow(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cashflow").unwrap();
    cmd.env("CASHFLOW_DATA_DIR", dir.path());
    cmd
}

#[test]
fn add_then_list_shows_entry() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["add", "Salary", "2500", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry added!"));

    cashflow(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("+₹2,500.00"));
}

#[test]
fn list_empty_ledger_prints_empty_message() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn newest_entry_lists_first() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["add", "Salary", "50000", "--date", "2024-01-01"])
        .assert()
        .success();
    cashflow(&dir)
        .args(["add", "Rent", "15000", "--kind", "expense", "--date", "2024-01-02"])
        .assert()
        .success();

    let output = cashflow(&dir).args(["list"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let rent = stdout.find("Rent").expect("Rent should be listed");
    let salary = stdout.find("Salary").expect("Salary should be listed");
    assert!(rent < salary, "newest entry should come first:\n{}", stdout);
}

#[test]
fn summary_reports_totals() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["add", "Salary", "50000", "--date", "2024-01-01"])
        .assert()
        .success();
    cashflow(&dir)
        .args(["add", "Rent", "15000", "--kind", "expense", "--date", "2024-01-02"])
        .assert()
        .success();

    cashflow(&dir)
        .args(["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:   ₹50,000.00"))
        .stdout(predicate::str::contains("Expense:  ₹15,000.00"))
        .stdout(predicate::str::contains("Balance:  ₹35,000.00"));
}

#[test]
fn summary_on_empty_ledger_is_all_zeros() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Income:   ₹0.00"))
        .stdout(predicate::str::contains("Balance:  ₹0.00"));
}

#[test]
fn filter_narrows_the_list() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["add", "Salary", "2500", "--date", "2024-01-01"])
        .assert()
        .success();
    cashflow(&dir)
        .args(["add", "Chai", "40", "--kind", "expense", "--date", "2024-01-02"])
        .assert()
        .success();

    cashflow(&dir)
        .args(["list", "--filter", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Chai"))
        .stdout(predicate::str::contains("Salary").not());

    cashflow(&dir)
        .args(["list", "--filter", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("No income entries found.").not());
}

#[test]
fn filtered_list_with_no_matches_prints_empty_message() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["add", "Salary", "2500", "--date", "2024-01-01"])
        .assert()
        .success();

    cashflow(&dir)
        .args(["list", "--filter", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expense entries found."));
}

#[test]
fn entries_persist_across_invocations() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["add", "Groceries", "450.50", "--kind", "expense", "--date", "2024-01-15"])
        .assert()
        .success();

    // A fresh process reads the same store
    cashflow(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("-₹450.50"));
}

#[test]
fn edit_changes_only_given_fields() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["add", "Rent", "15000", "--kind", "expense", "--date", "2024-01-02"])
        .assert()
        .success();

    let id = first_id(&dir);

    cashflow(&dir)
        .args(["edit", &id, "--amount", "16000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry updated!"));

    cashflow(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("-₹16,000.00"));
}

#[test]
fn edit_unknown_id_fails() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["edit", "no-such-id", "--amount", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found"));
}

#[test]
fn delete_removes_the_entry() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["add", "Chai", "40", "--kind", "expense", "--date", "2024-01-02"])
        .assert()
        .success();

    let id = first_id(&dir);

    cashflow(&dir)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry deleted"));

    cashflow(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));

    // Deleting again reports not found
    cashflow(&dir)
        .args(["delete", &id])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Entry not found"));
}

#[test]
fn add_rejects_empty_description() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["add", "   ", "40", "--date", "2024-01-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a description"));

    cashflow(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn add_rejects_bad_amounts() {
    let dir = TempDir::new().unwrap();

    for bad in ["0", "-5", "lots", "10.5₹", "99999999999999999.99"] {
        cashflow(&dir)
            .args(["add", "Chai", bad, "--date", "2024-01-02"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Enter a valid amount"));
    }
}

#[test]
fn add_rejects_bad_date() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["add", "Chai", "40", "--date", "someday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please select a date"));
}

#[test]
fn corrupt_store_starts_empty_instead_of_crashing() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("cashflow_v2.json"), "{{{ not json").unwrap();

    cashflow(&dir)
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found."));
}

#[test]
fn config_prints_paths() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data directory"))
        .stdout(predicate::str::contains("Currency symbol"));
}

#[test]
fn no_subcommand_prints_hint() {
    let dir = TempDir::new().unwrap();

    cashflow(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("cashflow tui"));
}

/// Read the id of the first (newest) listed entry
fn first_id(dir: &TempDir) -> String {
    let output = cashflow(dir).args(["list"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    // Skip the table header and separator; the first column is the id
    stdout
        .lines()
        .skip(2)
        .find_map(|line| {
            let id = line.split_whitespace().next()?;
            (!id.is_empty() && !id.starts_with('|')).then(|| id.to_string())
        })
        .expect("expected at least one entry row")
}
