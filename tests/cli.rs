//! End-to-end CLI behavior through the built binary.
//!
//! Builds that would actually invoke Nuitka are not exercised here; these
//! tests cover the paths that must terminate before any compiler subprocess.

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::cargo_bin("nuitka-bundle").expect("binary builds")
}

#[test]
fn missing_default_entry_point_exits_with_code_1() {
    let dir = tempfile::tempdir().unwrap();

    bin()
        .current_dir(dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("main file 'main.py' not found"));
}

#[test]
fn missing_explicit_entry_point_exits_with_code_1() {
    let dir = tempfile::tempdir().unwrap();

    bin()
        .current_dir(dir.path())
        .args(["--main", "app.py"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("app.py"));
}

#[test]
fn missing_entry_point_wins_over_clean() {
    // Validation runs before the clean step, so the stale dist/ survives
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("dist")).unwrap();

    bin()
        .current_dir(dir.path())
        .arg("--clean")
        .assert()
        .failure()
        .code(1);

    assert!(dir.path().join("dist").exists());
}

#[test]
fn help_lists_the_flag_surface() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--main"))
        .stdout(predicate::str::contains("--icon"))
        .stdout(predicate::str::contains("--console"))
        .stdout(predicate::str::contains("--onefile"))
        .stdout(predicate::str::contains("--clean"))
        .stdout(predicate::str::contains("--framework"));
}

#[test]
fn framework_values_outside_the_closed_set_are_rejected() {
    let dir = tempfile::tempdir().unwrap();

    bin()
        .current_dir(dir.path())
        .args(["--framework", "gtk"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
