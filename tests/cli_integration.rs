//! Integration tests for the hoard CLI.
//!
//! These exercise the binary end-to-end using `assert_cmd`.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use predicates::prelude::*;

/// Helper: a hoard command with no ambient key or log settings.
fn hoard_cmd(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("hoard").expect("binary should exist");
    cmd.current_dir(dir.path())
        .env_remove("HOARD_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    let tmp = TempDir::new().unwrap();
    hoard_cmd(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lock JSON payloads"))
        .stdout(predicate::str::contains("lock"))
        .stdout(predicate::str::contains("unlock"))
        .stdout(predicate::str::contains("check"));
}

#[test]
fn lock_then_unlock_with_key_file() {
    let tmp = TempDir::new().unwrap();
    tmp.child("hoard.key").write_binary(&[0x42u8; 32]).unwrap();
    tmp.child("data.json")
        .write_str(r#"{"dragon":"smaug","gold":100}"#)
        .unwrap();

    hoard_cmd(&tmp)
        .args(["--key-file", "hoard.key", "lock", "data.json", "--out", "chest"])
        .assert()
        .success()
        .stderr(predicate::str::contains("chest.hoard"));

    tmp.child("chest.hoard").assert(predicate::path::exists());

    hoard_cmd(&tmp)
        .args(["--key-file", "hoard.key", "unlock", "chest.hoard", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"dragon":"smaug","gold":100}"#));
}

#[test]
fn unlock_with_env_key() {
    let tmp = TempDir::new().unwrap();
    let key = BASE64.encode([0x17u8; 32]);
    tmp.child("list.json").write_str("[1,2,3]").unwrap();

    hoard_cmd(&tmp)
        .env("HOARD_KEY", &key)
        .args(["lock", "list.json", "-o", "list"])
        .assert()
        .success();

    hoard_cmd(&tmp)
        .env("HOARD_KEY", &key)
        .args(["unlock", "list.hoard", "--compact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1,2,3]"));
}

#[test]
fn unlock_with_wrong_key_fails() {
    let tmp = TempDir::new().unwrap();
    tmp.child("a.key").write_binary(&[0x01u8; 32]).unwrap();
    tmp.child("b.key").write_binary(&[0x02u8; 32]).unwrap();
    tmp.child("data.json").write_str("{}").unwrap();

    hoard_cmd(&tmp)
        .args(["-k", "a.key", "lock", "data.json", "-o", "data"])
        .assert()
        .success();

    hoard_cmd(&tmp)
        .args(["-k", "b.key", "unlock", "data.hoard"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Authentication failed"));
}

#[test]
fn missing_key_is_an_error() {
    let tmp = TempDir::new().unwrap();
    tmp.child("data.json").write_str("{}").unwrap();

    hoard_cmd(&tmp)
        .args(["lock", "data.json", "-o", "data"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no key provided"));
}

#[test]
fn short_key_file_is_rejected() {
    let tmp = TempDir::new().unwrap();
    tmp.child("short.key").write_binary(&[0x01u8; 16]).unwrap();
    tmp.child("data.json").write_str("{}").unwrap();

    hoard_cmd(&tmp)
        .args(["-k", "short.key", "lock", "data.json", "-o", "data"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid key"));
}

#[test]
fn lock_refuses_non_json_input() {
    let tmp = TempDir::new().unwrap();
    tmp.child("hoard.key").write_binary(&[0x42u8; 32]).unwrap();
    tmp.child("notes.txt").write_str("{not json").unwrap();

    hoard_cmd(&tmp)
        .args(["-k", "hoard.key", "lock", "notes.txt", "-o", "notes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not contain valid JSON"));

    tmp.child("notes.hoard").assert(predicate::path::missing());
}

#[test]
fn config_file_supplies_key() {
    let tmp = TempDir::new().unwrap();
    tmp.child("cfg.key").write_binary(&[0x55u8; 40]).unwrap();
    tmp.child(".hoard.toml")
        .write_str("key_file = \"cfg.key\"\n")
        .unwrap();
    tmp.child("data.json").write_str("\"hello\"").unwrap();

    hoard_cmd(&tmp)
        .args(["lock", "data.json", "-o", "data"])
        .assert()
        .success();

    hoard_cmd(&tmp)
        .args(["unlock", "data.hoard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"hello\""));
}

#[test]
fn check_reports_json_validity() {
    let tmp = TempDir::new().unwrap();
    tmp.child("good.json").write_str("[1,2,3]").unwrap();
    tmp.child("bad.json").write_str("{not json").unwrap();

    hoard_cmd(&tmp).args(["check", "good.json"]).assert().success();
    hoard_cmd(&tmp)
        .args(["check", "bad.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}
