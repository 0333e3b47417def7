//! End-to-end tests for the samity binary
//!
//! Each test runs against its own data directory via SAMITY_DATA_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn samity(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("samity").unwrap();
    cmd.env("SAMITY_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn test_init_creates_config() {
    let dir = TempDir::new().unwrap();

    samity(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("members.json").exists());
}

#[test]
fn test_member_add_and_list() {
    let dir = TempDir::new().unwrap();

    samity(&dir)
        .args(["member", "add", "Rahima Begum", "01712345678"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added member: Rahima Begum"));

    samity(&dir)
        .args(["member", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rahima Begum"))
        .stdout(predicate::str::contains("01712345678"));
}

#[test]
fn test_deposit_and_dashboard() {
    let dir = TempDir::new().unwrap();

    samity(&dir)
        .args(["member", "add", "Rahima Begum", "01712345678"])
        .assert()
        .success();

    samity(&dir)
        .args(["txn", "deposit", "Rahima Begum", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total savings: ₹1,000"));

    samity(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Organization balance:  ₹1,000"))
        .stdout(predicate::str::contains("Active members:        1"));
}

#[test]
fn test_loan_lifecycle_and_over_repayment() {
    let dir = TempDir::new().unwrap();

    samity(&dir)
        .args(["member", "add", "Karim Mia", "01898765432"])
        .assert()
        .success();

    samity(&dir)
        .args(["txn", "loan", "Karim Mia", "5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Outstanding principal: ₹5,000"));

    samity(&dir)
        .args(["txn", "repay", "Karim Mia", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Outstanding principal: ₹3,000"));

    // Over-repayment is rejected with no state change
    samity(&dir)
        .args(["txn", "repay", "Karim Mia", "4000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds outstanding principal"));

    samity(&dir)
        .args(["member", "show", "Karim Mia"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Outstanding:    ₹3,000"))
        .stdout(predicate::str::contains("Interest due:   ₹150"));
}

#[test]
fn test_collect_records_bulk_deposits() {
    let dir = TempDir::new().unwrap();

    for (name, phone) in [
        ("Rahima Begum", "01712345678"),
        ("Karim Mia", "01898765432"),
        ("Fatema Khatun", "01911223344"),
    ] {
        samity(&dir)
            .args(["member", "add", name, phone])
            .assert()
            .success();
    }

    samity(&dir)
        .args(["collect", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded 3 deposit(s) of ₹100 each."));

    samity(&dir)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Savings Entry"));
}

#[test]
fn test_unknown_member_rejected() {
    let dir = TempDir::new().unwrap();

    samity(&dir)
        .args(["txn", "deposit", "Nobody", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Member not found"));
}

#[test]
fn test_settings_and_reset() {
    let dir = TempDir::new().unwrap();

    samity(&dir)
        .args(["settings", "set", "--interest-rate", "7.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Interest rate:          7.5%"));

    samity(&dir)
        .args(["member", "add", "Rahima Begum", "01712345678"])
        .assert()
        .success();

    // Reset refuses without --force
    samity(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Re-run with --force"));

    samity(&dir)
        .args(["member", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rahima Begum"));

    samity(&dir)
        .args(["reset", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared"));

    samity(&dir)
        .args(["member", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No members found."));

    // Defaults restored
    samity(&dir)
        .args(["settings", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Interest rate:          5%"))
        .stdout(predicate::str::contains("Monthly savings amount: ₹100"));
}

#[test]
fn test_verify_reports_consistency() {
    let dir = TempDir::new().unwrap();

    samity(&dir)
        .args(["member", "add", "Rahima Begum", "01712345678"])
        .assert()
        .success();

    samity(&dir)
        .args(["txn", "deposit", "Rahima Begum", "500"])
        .assert()
        .success();

    samity(&dir)
        .arg("verify")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "All member balances agree with the transaction log.",
        ));
}
