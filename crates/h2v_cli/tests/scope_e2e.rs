//! End-to-end tests for the `scope` command.

use assert_cmd::Command;
use predicates::prelude::*;

fn how2validate() -> Command {
    Command::new(env!("CARGO_BIN_EXE_how2validate"))
}

#[test]
fn scope_lists_known_services() {
    how2validate()
        .arg("scope")
        .assert()
        .success()
        .stdout(predicate::str::contains("npm_access_token"))
        .stdout(predicate::str::contains("github_personal_access_token"))
        .stdout(predicate::str::contains("openai_api_key"))
        .stdout(predicate::str::contains("anthropic_api_key"));
}

#[test]
fn scope_prints_table_headers() {
    how2validate()
        .arg("scope")
        .assert()
        .success()
        .stdout(predicate::str::contains("Provider"))
        .stdout(predicate::str::contains("Service"));
}

#[test]
fn scope_alias_works() {
    how2validate()
        .arg("s")
        .assert()
        .success()
        .stdout(predicate::str::contains("npm_access_token"));
}
