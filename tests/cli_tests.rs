//! CLI surface integration tests

mod common;

use predicates::prelude::*;

#[test]
fn test_help_lists_commands() {
    let workspace = common::TestWorkspace::new();

    common::baler_cmd(&workspace)
        .args(["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_generate_help_shows_examples() {
    let workspace = common::TestWorkspace::new();

    common::baler_cmd(&workspace)
        .args(["generate", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("EXAMPLES"))
        .stdout(predicate::str::contains("--name"));
}

#[test]
fn test_no_subcommand_fails() {
    let workspace = common::TestWorkspace::new();

    common::baler_cmd(&workspace).assert().failure();
}

#[test]
fn test_version_command() {
    let workspace = common::TestWorkspace::new();

    common::baler_cmd(&workspace)
        .args(["version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("baler"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_version_flag() {
    let workspace = common::TestWorkspace::new();

    common::baler_cmd(&workspace)
        .args(["--version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("baler"));
}

#[test]
fn test_completions_bash() {
    let workspace = common::TestWorkspace::new();

    common::baler_cmd(&workspace)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("baler"));
}

#[test]
fn test_completions_unknown_shell() {
    let workspace = common::TestWorkspace::new();

    common::baler_cmd(&workspace)
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_error_output_format() {
    let workspace = common::TestWorkspace::new();

    common::baler_cmd(&workspace)
        .args(["generate"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}
