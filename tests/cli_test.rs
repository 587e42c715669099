use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;

fn write_debts(path: &Path, rows: &[(&str, &str)]) {
    let mut wtr = csv::Writer::from_path(path).unwrap();
    wtr.write_record(["id", "balance"]).unwrap();
    for (id, balance) in rows {
        wtr.write_record([*id, *balance]).unwrap();
    }
    wtr.flush().unwrap();
}

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("settler"));
    cmd.arg("tests/fixtures/debts.csv").args(["--amount", "120"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "debt_id,balance_before,amount_applied,balance_after",
        ))
        // First debt fully settled
        .stdout(predicate::str::contains("1,100,100,0"))
        // Second debt gets the remaining 20
        .stdout(predicate::str::contains("2,50,20,30"))
        .stderr(predicate::str::contains("applied 120 of 120, leftover 0"));

    Ok(())
}

#[test]
fn test_cli_priority_clears_credits_first() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("debts.csv");
    write_debts(&input, &[("1", "-50"), ("2", "100")]);

    let mut cmd = Command::new(cargo_bin!("settler"));
    cmd.arg(&input).args(["--amount", "30", "--priority"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,-50,-50,0"))
        .stdout(predicate::str::contains("2,100,80,20"));
}

#[test]
fn test_cli_manual_override() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("debts.csv");
    write_debts(&input, &[("1", "200")]);

    let mut cmd = Command::new(cargo_bin!("settler"));
    cmd.arg(&input)
        .args(["--amount", "50", "--priority", "--set-amount", "1=30"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1,200,30,170"))
        .stderr(predicate::str::contains("leftover 20"));
}

#[test]
fn test_cli_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("debts.csv");
    write_debts(&input, &[("1", "100")]);

    let mut cmd = Command::new(cargo_bin!("settler"));
    cmd.arg(&input).args(["--amount", "40", "--json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"lines\""))
        .stdout(predicate::str::contains("\"leftover\""));
}

#[test]
fn test_cli_warns_on_overpayment() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("debts.csv");
    write_debts(&input, &[("1", "100")]);

    let mut cmd = Command::new(cargo_bin!("settler"));
    cmd.arg(&input).args(["--amount", "500"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("exceeds net outstanding"));
}

#[test]
fn test_cli_rejects_non_positive_amount() {
    let mut cmd = Command::new(cargo_bin!("settler"));
    cmd.arg("tests/fixtures/debts.csv").args(["--amount", "0"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("must be positive"));
}

#[test]
fn test_cli_rejects_zero_balance_debt() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("debts.csv");
    write_debts(&input, &[("1", "100"), ("2", "0")]);

    let mut cmd = Command::new(cargo_bin!("settler"));
    cmd.arg(&input).args(["--amount", "50"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("zero balance"));
}

#[test]
fn test_cli_override_requires_priority_mode() {
    let mut cmd = Command::new(cargo_bin!("settler"));
    cmd.arg("tests/fixtures/debts.csv")
        .args(["--amount", "50", "--set-amount", "1=10"]);

    cmd.assert().failure();
}
