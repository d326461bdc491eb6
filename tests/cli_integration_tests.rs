//! End-to-end CLI tests against the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn ampdesk() -> Command {
    Command::cargo_bin("ampdesk").expect("binary builds")
}

#[test]
fn bare_invocation_prints_usage_hints() {
    ampdesk()
        .assert()
        .success()
        .stdout(predicate::str::contains("ampdesk statuses"));
}

#[test]
fn statuses_renders_every_status() {
    ampdesk()
        .arg("statuses")
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked In"))
        .stdout(predicate::str::contains("FINALIZED"))
        .stdout(predicate::str::contains("Actions: none (terminal)"));
}

#[test]
fn statuses_json_is_machine_readable() {
    let output = ampdesk().args(["statuses", "--json"]).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON");
    assert_eq!(parsed.as_array().map(|rows| rows.len()), Some(5));
}

#[test]
fn check_accepts_the_finalize_step() {
    ampdesk()
        .args(["check", "--from", "VERIFIED", "--to", "FINALIZED"])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid intake transition"));
}

#[test]
fn check_rejects_reopening_a_finalized_intake() {
    ampdesk()
        .args(["check", "--from", "FINALIZED", "--to", "CHECKED_IN"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid intake transition"));
}

#[test]
fn check_reports_unknown_statuses() {
    ampdesk()
        .args(["check", "--from", "REOPENED", "--to", "VERIFIED"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown intake status: REOPENED"));
}

#[test]
fn actions_lists_nothing_for_terminal_statuses() {
    ampdesk()
        .args(["actions", "--status", "FINALIZED"])
        .assert()
        .success()
        .stdout(predicate::str::contains("terminal"));
}

#[test]
fn actions_prints_the_refusal_copy_without_failing() {
    // Refusals are UI copy, not command failures.
    ampdesk()
        .args(["actions", "--status", "INSPECTING", "--action", "finalize"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Cannot finalize intake with status: Inspecting",
        ));
}

#[test]
fn workorders_lists_the_ten_statuses() {
    ampdesk()
        .arg("workorders")
        .assert()
        .success()
        .stdout(predicate::str::contains("WaitingParts"))
        .stdout(predicate::str::contains("enforcement: off"));
}

#[test]
fn workorder_check_is_permissive_by_default() {
    ampdesk()
        .args(["workorders", "--from", "Draft", "--to", "Completed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("enforcement is off"));
}

#[test]
fn simulate_walks_the_whole_lifecycle() {
    ampdesk()
        .arg("simulate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Refused locally"))
        .stdout(predicate::str::contains("finalized with"));
}
