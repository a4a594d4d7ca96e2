use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn girlmath() -> Command {
    Command::cargo_bin("girlmath").expect("binary should compile")
}

#[test]
fn config_override_changes_the_verdict() {
    let repo = TempDir::new().expect("temp dir should be created");

    // Without a config this purchase is questionable (39/100). A bonus for
    // the `other` category promotes it one tier.
    girlmath()
        .current_dir(repo.path())
        .env("HOME", repo.path())
        .args(["score", "--price", "20", "--uses", "2"])
        .assert()
        .code(1);

    fs::write(
        repo.path().join("girlmath.toml"),
        r#"
[categories.bonuses]
other = 15
"#,
    )
    .expect("config should write");

    girlmath()
        .current_dir(repo.path())
        .env("HOME", repo.path())
        .args(["score", "--price", "20", "--uses", "2"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("JUSTIFIED"));
}

#[test]
fn local_overrides_win_over_the_repo_config() {
    let repo = TempDir::new().expect("temp dir should be created");
    fs::write(
        repo.path().join("girlmath.toml"),
        r#"
[scoring]
uses_cap = 120
"#,
    )
    .expect("repo config should write");
    fs::create_dir_all(repo.path().join(".girlmath")).expect("local dir should create");
    fs::write(
        repo.path().join(".girlmath/local.toml"),
        r#"
[scoring]
uses_cap = 60
"#,
    )
    .expect("local config should write");

    girlmath()
        .current_dir(repo.path())
        .env("HOME", repo.path())
        .arg("tables")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("uses cap: 60"));
}

#[test]
fn invalid_config_exits_with_runtime_failure() {
    let repo = TempDir::new().expect("temp dir should be created");
    fs::write(
        repo.path().join("girlmath.toml"),
        r#"
[categories.bonuses]
spaceship = 10
"#,
    )
    .expect("config should write");

    girlmath()
        .current_dir(repo.path())
        .env("HOME", repo.path())
        .args(["score", "--price", "20"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn score_reads_a_purchase_file() {
    let repo = TempDir::new().expect("temp dir should be created");
    let input_path = repo.path().join("purchase.json");
    fs::write(
        &input_path,
        r#"{"price": 20.0, "category": "clothes", "uses": 40}"#,
    )
    .expect("input file should write");

    girlmath()
        .current_dir(repo.path())
        .args(["score", "--input", "purchase.json"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("APPROVED"))
        .stdout(predicate::str::contains("71/100"));
}

#[test]
fn flags_override_the_purchase_file() {
    let repo = TempDir::new().expect("temp dir should be created");
    let input_path = repo.path().join("purchase.json");
    fs::write(
        &input_path,
        r#"{"price": 20.0, "category": "clothes", "uses": 40}"#,
    )
    .expect("input file should write");

    // overriding the price to something expensive demotes the verdict
    girlmath()
        .current_dir(repo.path())
        .args(["score", "--input", "purchase.json", "--price", "600"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("QUESTIONABLE"));
}

#[test]
fn missing_purchase_file_is_a_runtime_failure() {
    let repo = TempDir::new().expect("temp dir should be created");

    girlmath()
        .current_dir(repo.path())
        .args(["score", "--input", "nope.json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("input file not found"));
}

#[test]
fn whatif_json_is_parseable() {
    let repo = TempDir::new().expect("temp dir should be created");

    let output = girlmath()
        .current_dir(repo.path())
        .args([
            "whatif",
            "--price",
            "100",
            "--category",
            "clothes",
            "--format",
            "json",
        ])
        .assert()
        .code(0)
        .get_output()
        .stdout
        .clone();

    let scenarios: serde_json::Value =
        serde_json::from_slice(&output).expect("whatif output should be valid json");
    let scenarios = scenarios.as_array().expect("output should be an array");
    assert!(!scenarios.is_empty() && scenarios.len() <= 3);
    assert!(scenarios[0]["description"]
        .as_str()
        .expect("description should be a string")
        .contains("use it"));
}

#[test]
fn score_what_if_appends_scenarios() {
    girlmath()
        .args([
            "score",
            "--price",
            "100",
            "--category",
            "skincare",
            "--what-if",
        ])
        .assert()
        .stdout(predicate::str::contains("what if:"));
}
