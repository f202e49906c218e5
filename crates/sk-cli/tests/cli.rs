#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn skoolach() -> Command {
    let mut cmd = Command::cargo_bin("skoolach").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_modes() {
    skoolach()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--mode"))
        .stdout(predicate::str::contains("--seed"));
}

#[test]
fn unknown_mode_is_rejected() {
    skoolach()
        .args(["--mode", "holographic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("holographic"));
}

#[test]
fn look_then_quit() {
    skoolach()
        .write_stdin("look\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("S K O O L A C H"))
        .stdout(predicate::str::contains("The Crash Site"))
        .stdout(predicate::str::contains("Thanks for playing SKOOLACH!"));
}

#[test]
fn end_of_input_exits_cleanly() {
    skoolach()
        .write_stdin("take flashlight\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("LED flashlight"));
}

#[test]
fn status_line_tracks_progress() {
    skoolach()
        .args(["--seed", "1"])
        .write_stdin("go north\ngo north\ntake tokenizer\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Location: Memory Corridor"))
        .stdout(predicate::str::contains("Components: 1/9"));
}

#[test]
fn refusals_are_reported_and_play_continues() {
    skoolach()
        .write_stdin("go north\ngo west\ngo south\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You need the LED flashlight to go that way."))
        .stdout(predicate::str::contains("Location: The Crash Site"));
}

#[test]
fn blank_lines_print_nothing_extra() {
    let output = skoolach().write_stdin("\n\n   \n").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Try using simple"));
}
