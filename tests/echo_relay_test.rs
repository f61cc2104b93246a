// Integration tests for the echo-relay binary.
//
// The relay hands its middle argument(s) to /bin/echo unless FORKEXEC_ECHO says otherwise.

mod common;

use assert_cmd::Command;
use common::{dev_full, ignores_sigpipe, TestFixture, PRINT_SIGIGN};
use forkexec::config::ECHO_VAR;
use predicates::prelude::*;
use serial_test::serial;

fn echo_relay() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("echo-relay"));
    cmd.env_remove(ECHO_VAR);
    cmd
}

#[test]
#[serial]
fn test_odd_count_echoes_one() {
    echo_relay()
        .args(["a", "b", "c", "d", "e"])
        .assert()
        .success()
        .stdout("c\n");
}

#[test]
#[serial]
fn test_even_count_echoes_two() {
    echo_relay()
        .args(["a", "b", "c", "d"])
        .assert()
        .success()
        .stdout("b c\n");
}

#[test]
#[serial]
fn test_single_argument() {
    echo_relay().arg("solo").assert().success().stdout("solo\n");
}

#[test]
#[serial]
fn test_no_arguments() {
    echo_relay()
        .assert()
        .code(1)
        .stdout("ERROR: No arguments\n");
}

#[test]
#[serial]
fn test_relays_to_configured_echo() {
    let fixture = TestFixture::new();
    let echo = fixture.script("fake-echo", "printf '%s|%s\\n' \"$0\" \"$*\"");

    echo_relay()
        .env(ECHO_VAR, &echo)
        .args(["one", "two", "three"])
        .assert()
        .success()
        .stdout(predicates::str::ends_with("|two\n"));
}

#[test]
#[serial]
fn test_exec_failure() {
    let fixture = TestFixture::new();

    echo_relay()
        .env(ECHO_VAR, fixture.path("missing-echo"))
        .arg("x")
        .assert()
        .code(1)
        .stdout("ERROR: exec failed\n");
}

#[cfg(target_os = "linux")]
#[test]
#[serial]
fn test_echo_starts_with_default_sigpipe() {
    let fixture = TestFixture::new();
    let echo = fixture.script("fake-echo", PRINT_SIGIGN);

    let output = echo_relay()
        .env(ECHO_VAR, &echo)
        .arg("x")
        .output()
        .unwrap();

    assert!(output.status.success());
    let mask = String::from_utf8(output.stdout).unwrap();
    assert!(!ignores_sigpipe(&mask), "SigIgn mask {}", mask.trim());
}

#[test]
#[serial]
fn test_unwritable_stdout_keeps_exit_code() {
    use assert_cmd::assert::OutputAssertExt;

    std::process::Command::new(assert_cmd::cargo::cargo_bin!("echo-relay"))
        .env_remove(ECHO_VAR)
        .stdout(dev_full())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("panicked").not());
}
