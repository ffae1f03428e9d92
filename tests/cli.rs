//! End-to-end tests for the cipherpad binary

use assert_cmd::Command;
use predicates::prelude::*;

const SALT: &str = "AAAAAAAAAAAAAAAAAAAAAA==";

fn cipherpad() -> Command {
    Command::cargo_bin("cipherpad").unwrap()
}

#[test]
fn gen_salt_prints_base64() {
    cipherpad()
        .args(["gen-salt", "--bytes", "16"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^[A-Za-z0-9+/]{22}==\n$").unwrap());
}

#[test]
fn encrypt_then_decrypt_round_trips() {
    let assert = cipherpad()
        .args([
            "encrypt",
            "hello world",
            "--salt",
            SALT,
            "--password",
            "correct horse",
        ])
        .assert()
        .success();
    let envelope = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    cipherpad()
        .args([
            "decrypt",
            envelope.trim(),
            "--salt",
            SALT,
            "--password",
            "correct horse",
        ])
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn password_can_come_from_environment() {
    let assert = cipherpad()
        .args(["encrypt", "hello world", "--salt", SALT])
        .env("CIPHERPAD_PASSWORD", "correct horse")
        .assert()
        .success();
    let envelope = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    cipherpad()
        .args(["decrypt", envelope.trim(), "--salt", SALT])
        .env("CIPHERPAD_PASSWORD", "correct horse")
        .assert()
        .success()
        .stdout("hello world\n");
}

#[test]
fn decrypt_with_wrong_password_fails() {
    let assert = cipherpad()
        .args([
            "encrypt",
            "hello world",
            "--salt",
            SALT,
            "--password",
            "correct horse",
        ])
        .assert()
        .success();
    let envelope = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    cipherpad()
        .args([
            "decrypt",
            envelope.trim(),
            "--salt",
            SALT,
            "--password",
            "battery staple",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Decryption failed"));
}

#[test]
fn malformed_salt_is_reported() {
    cipherpad()
        .args([
            "encrypt",
            "hello world",
            "--salt",
            "!!!not base64!!!",
            "--password",
            "correct horse",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid salt"));
}

#[test]
fn truncated_envelope_is_reported() {
    cipherpad()
        .args([
            "decrypt",
            "AAAA",
            "--salt",
            SALT,
            "--password",
            "correct horse",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid ciphertext"));
}
