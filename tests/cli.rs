#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

const SITES: &str = r#"{
  "Templo Central": {
    "men_home": ["h1", "h2", "h3", "h4", "h5"],
    "women_home": ["m1", "m2"],
    "men_visiting": ["v1"],
    "women_visiting": ["w1"]
  }
}"#;

#[test]
fn days_lists_communion() {
    Command::cargo_bin("escala-cli")
        .unwrap()
        .args(["days", "--month", "março", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15/03 | Santa Ceia do Senhor"));
}

#[test]
fn generate_writes_sheet() {
    let dir = tempdir().unwrap();
    let sites = dir.path().join("sites.json");
    let out = dir.path().join("escala.csv");
    fs::write(&sites, SITES).unwrap();

    Command::cargo_bin("escala-cli")
        .unwrap()
        .arg("--sites")
        .arg(&sites)
        .args(["generate", "--site", "Templo Central", "--month", "3", "--year", "2025", "--seed", "7"])
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("ESCALA DE OBREIROS - MARÇO/2025"));

    let sheet = fs::read_to_string(&out).unwrap();
    assert!(sheet.contains("Logo não informada"));
    assert!(sheet.contains("Santa Ceia do Senhor,15/03"));
}

#[test]
fn generate_with_gaps_exits_with_warning_code() {
    let dir = tempdir().unwrap();
    let sites = dir.path().join("sites.json");
    fs::write(&sites, r#"{"Pequena": {"men_home": ["h1", "h2"], "women_home": ["m1"]}}"#).unwrap();

    Command::cargo_bin("escala-cli")
        .unwrap()
        .arg("--sites")
        .arg(&sites)
        .args(["generate", "--site", "Pequena", "--month", "3", "--year", "2025", "--seed", "1"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("N/D"));
}

#[test]
fn unknown_site_fails() {
    let dir = tempdir().unwrap();
    let sites = dir.path().join("sites.json");
    fs::write(&sites, SITES).unwrap();

    Command::cargo_bin("escala-cli")
        .unwrap()
        .arg("--sites")
        .arg(&sites)
        .args(["generate", "--site", "Outra", "--month", "3", "--year", "2025"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown site"));
}

#[test]
fn import_roster_then_list_sites() {
    let dir = tempdir().unwrap();
    let sites = dir.path().join("sites.json");
    let csv = dir.path().join("roster.csv");
    fs::write(&csv, "name,group\nh1,men_home\nm1,women_home\n").unwrap();

    Command::cargo_bin("escala-cli")
        .unwrap()
        .arg("--sites")
        .arg(&sites)
        .args(["import-roster", "--site", "Nova"])
        .arg("--csv")
        .arg(&csv)
        .assert()
        .success();

    Command::cargo_bin("escala-cli")
        .unwrap()
        .arg("--sites")
        .arg(&sites)
        .arg("sites")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nova | 2 obreiros"));
}
