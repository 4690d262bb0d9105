//! End-to-end tests for the `rosterguard` binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

/// Command running inside a fresh directory with no config file and no RUST_LOG.
fn rosterguard() -> (assert_cmd::Command, TempDir) {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let mut cmd: assert_cmd::Command = cargo_bin_cmd!("rosterguard");
    cmd.current_dir(tmp.path()).env_remove("RUST_LOG");
    (cmd, tmp)
}

#[test]
fn check_admin_prints_to_stdout() {
    let (mut cmd, _guard) = rosterguard();
    cmd.args(["check", "Mohamed", "create", "user"])
        .assert()
        .success()
        .stdout("You can create a new user\n")
        .stderr("");
}

#[test]
fn check_refusal_goes_to_stderr() {
    let (mut cmd, _guard) = rosterguard();
    cmd.args(["check", "Ali", "create", "user"])
        .assert()
        .success()
        .stdout("")
        .stderr("you are not allowed to do that\n");
}

#[test]
fn check_unknown_user_is_silent() {
    let (mut cmd, _guard) = rosterguard();
    cmd.args(["check", "Unknown", "delete", "post"])
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn check_rejects_unknown_action() {
    let (mut cmd, _guard) = rosterguard();
    cmd.args(["check", "Ali", "archive", "post"])
        .assert()
        .failure()
        .stderr(contains("unknown action"));
}

#[test]
fn roster_lists_names_and_roles() {
    let (mut cmd, _guard) = rosterguard();
    cmd.arg("roster")
        .assert()
        .success()
        .stdout("Mohamed\tAdmin\nAli\tUser\nKhaled\tAdmin\nNour\tUser\nSaleh\tUser\nHassen\tUser\n");
}

#[test]
fn roster_reads_config_override() {
    let (mut cmd, guard) = rosterguard();
    let path = guard.path().join("team.toml");
    std::fs::write(&path, "[roster]\ndisplay_names = [\"Rami Admin\", \"Yara\"]\n").unwrap();
    cmd.args(["roster", "-c", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("Rami\tAdmin\nYara\tUser\n");
}

#[test]
fn profile_prints_json() {
    let (mut cmd, _guard) = rosterguard();
    cmd.args(["profile", "--name", "John", "--age", "20", "--phone", "1234567890", "--single", "true"])
        .assert()
        .success()
        .stdout("{\"name\":\"John\",\"age\":20,\"phoneNumber\":\"1234567890\",\"isSingle\":true}\n");
}

#[test]
fn invalid_profile_fails() {
    let (mut cmd, _guard) = rosterguard();
    cmd.args(["profile", "--name", "J", "--age", "20", "--phone", "1"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains("Invalid profile").and(contains("at least 2 characters")));
}

#[test]
fn dedupe_treats_floats_as_numbers() {
    let (mut cmd, _guard) = rosterguard();
    cmd.args(["dedupe", "5", "2", "3.5", "5", "2.0", "Hello"])
        .assert()
        .success()
        .stdout("5\n2\n3.5\n");
}

#[test]
fn init_overwrites_malformed_config() {
    let (mut cmd, guard) = rosterguard();
    let path = guard.path().join("bad.toml");
    std::fs::write(&path, "[roster\n").unwrap();
    cmd.args(["init", "-c", path.to_str().unwrap()]).assert().success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("[roster]"), "config not rewritten: {written}");
    assert!(written.contains("Mohamed Admin"));
}

#[test]
fn malformed_config_fails_other_commands() {
    let (mut cmd, guard) = rosterguard();
    let path = guard.path().join("bad.toml");
    std::fs::write(&path, "[roster\n").unwrap();
    cmd.args(["roster", "-c", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Failed to parse config file"));
}

#[test]
fn verbose_flag_beats_rust_log() {
    let (mut cmd, _guard) = rosterguard();
    cmd.env("RUST_LOG", "error")
        .args(["-v", "check", "Mohamed", "create", "user"])
        .assert()
        .success()
        .stdout("You can create a new user\n")
        .stderr(contains("DEBUG"));
}

#[test]
fn rust_log_beats_config_level() {
    let (mut cmd, guard) = rosterguard();
    let path = guard.path().join("quiet.toml");
    std::fs::write(&path, "[logging]\nlevel = \"error\"\n").unwrap();
    cmd.env("RUST_LOG", "debug")
        .args(["check", "Nour", "update", "user", "-c", path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(contains("check user=Nour"));
}

#[test]
fn missing_config_fallback_is_logged() {
    let (mut cmd, _guard) = rosterguard();
    cmd.args(["-vv", "roster", "-c", "absent.toml"])
        .assert()
        .success()
        .stdout(contains("Mohamed\tAdmin"))
        .stderr(contains("Config file absent.toml not found, using defaults"));
}
