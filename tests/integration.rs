// Integration tests for the girlmath CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the girlmath binary.
fn girlmath() -> Command {
    Command::cargo_bin("girlmath").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    girlmath()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("girlmath"));
}

#[test]
fn cli_help_flag() {
    girlmath()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("purchase justification"));
}

#[test]
fn score_requires_price_or_input() {
    girlmath()
        .arg("score")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn score_rejects_out_of_range_budget_percent() {
    girlmath()
        .args(["score", "--price", "50", "--budget-percent", "40"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in 5..=25"));
}

#[test]
fn approved_purchase_exits_zero() {
    girlmath()
        .args([
            "score",
            "--price",
            "20",
            "--category",
            "clothes",
            "--uses",
            "40",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("APPROVED"))
        .stdout(predicate::str::contains("71/100"));
}

#[test]
fn questionable_purchase_exits_one() {
    // price 20 with only 2 uses: 12 + 15 + 12 + 0 = 39, no bonus
    girlmath()
        .args([
            "score",
            "--price",
            "20",
            "--category",
            "other",
            "--uses",
            "2",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("QUESTIONABLE"));
}

#[test]
fn denied_purchase_exits_two() {
    girlmath()
        .args(["score", "--price", "600", "--category", "jewellery"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("DENIED"));
}

#[test]
fn score_json_emits_machine_readable_report() {
    girlmath()
        .args([
            "score",
            "--price",
            "20",
            "--category",
            "clothes",
            "--uses",
            "40",
            "--format",
            "json",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"score\": 71"))
        .stdout(predicate::str::contains("\"verdict\": \"approved\""));
}

#[test]
fn score_md_renders_report_sections() {
    girlmath()
        .args([
            "score",
            "--price",
            "20",
            "--category",
            "clothes",
            "--uses",
            "40",
            "--format",
            "md",
        ])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("# Girl Math Verdict"))
        .stdout(predicate::str::contains("## Score Breakdown"));
}

#[test]
fn tables_lists_rule_data() {
    girlmath()
        .arg("tables")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("uses cap: 120"))
        .stdout(predicate::str::contains("skincare"));
}

#[test]
fn whatif_prints_scenarios() {
    girlmath()
        .args(["whatif", "--price", "100", "--category", "clothes"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("scenarios:"))
        .stdout(predicate::str::contains("on sale from $150"));
}
