//! Integration tests for the cs-cli commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cloudsect() -> Command {
    Command::cargo_bin("cloudsect").unwrap()
}

fn dir_arg(dir: &Path) -> &str {
    dir.to_str().unwrap()
}

/// A temp directory holding one freshly created save.
fn with_save(name: &str, sect: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    cloudsect()
        .args(["new", name, "--sect", sect, "-d", dir_arg(dir.path())])
        .assert()
        .success();
    dir
}

// ---------------------------------------------------------------------------
// new
// ---------------------------------------------------------------------------

#[test]
fn new_creates_a_save() {
    let dir = TempDir::new().unwrap();
    cloudsect()
        .args(["new", "Lin", "--sect", "azure", "-d", dir_arg(dir.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lin").and(predicate::str::contains("Azure Cloud")));

    let text = fs::read_to_string(dir.path().join("player_save.json")).unwrap();
    assert!(text.contains("\"name\": \"Lin\""));
    assert!(text.contains("\"level\": 1"));
}

#[test]
fn new_refuses_to_overwrite_without_force() {
    let dir = with_save("Lin", "mystic");
    cloudsect()
        .args(["new", "Mei", "-d", dir_arg(dir.path())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    cloudsect()
        .args(["new", "Mei", "--force", "-d", dir_arg(dir.path())])
        .assert()
        .success();
}

#[test]
fn new_rejects_unknown_sect() {
    let dir = TempDir::new().unwrap();
    cloudsect()
        .args(["new", "Lin", "--sect", "shadow", "-d", dir_arg(dir.path())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// saves / rename / delete
// ---------------------------------------------------------------------------

#[test]
fn saves_lists_valid_files_only() {
    let dir = with_save("Lin", "carefree");
    fs::write(dir.path().join("junk.json"), "{ not json").unwrap();

    cloudsect()
        .args(["saves", "-d", dir_arg(dir.path())])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("player_save.json")
                .and(predicate::str::contains("Lin"))
                .and(predicate::str::contains("junk").not())
                .and(predicate::str::contains("1 saves")),
        );
}

#[test]
fn saves_empty_dir() {
    let dir = TempDir::new().unwrap();
    cloudsect()
        .args(["saves", "-d", dir_arg(dir.path())])
        .assert()
        .success()
        .stdout(predicate::str::contains("No saves found"));
}

#[test]
fn rename_moves_the_save() {
    let dir = with_save("Lin", "mystic");
    cloudsect()
        .args(["rename", "player_save", "lin", "-d", dir_arg(dir.path())])
        .assert()
        .success();

    assert!(!dir.path().join("player_save.json").exists());
    assert!(dir.path().join("lin.json").exists());
}

#[test]
fn rename_refuses_existing_target() {
    let dir = with_save("Lin", "mystic");
    fs::copy(
        dir.path().join("player_save.json"),
        dir.path().join("other.json"),
    )
    .unwrap();

    cloudsect()
        .args(["rename", "player_save", "other", "-d", dir_arg(dir.path())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn delete_removes_the_save() {
    let dir = with_save("Lin", "mystic");
    cloudsect()
        .args(["delete", "player_save", "-d", dir_arg(dir.path())])
        .assert()
        .success();
    assert!(!dir.path().join("player_save.json").exists());

    cloudsect()
        .args(["delete", "player_save", "-d", dir_arg(dir.path())])
        .assert()
        .failure();
}

// ---------------------------------------------------------------------------
// progress
// ---------------------------------------------------------------------------

#[test]
fn progress_shows_the_player() {
    let dir = with_save("Lin", "purgatory");
    cloudsect()
        .args(["progress", "-d", dir_arg(dir.path())])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Lin")
                .and(predicate::str::contains("Level 1"))
                .and(predicate::str::contains("Achievements: 0/12")),
        );
}

#[test]
fn progress_as_json() {
    let dir = with_save("Lin", "purgatory");
    cloudsect()
        .args(["progress", "--json", "-d", dir_arg(dir.path())])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"sect_bonus\": 1.2")
                .and(predicate::str::contains("\"level\": 1")),
        );
}

#[test]
fn progress_without_save_fails() {
    let dir = TempDir::new().unwrap();
    cloudsect()
        .args(["progress", "-d", dir_arg(dir.path())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no usable save"));
}

// ---------------------------------------------------------------------------
// commands
// ---------------------------------------------------------------------------

#[test]
fn commands_filters_by_category() {
    cloudsect()
        .args(["commands", "--category", "basic"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("kubectl run")
                .and(predicate::str::contains("kubectl auth can-i").not()),
        );
}

#[test]
fn commands_rejects_bad_difficulty() {
    cloudsect()
        .args(["commands", "--difficulty", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("difficulty"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_reads_commands_from_stdin() {
    let dir = with_save("Lin", "mystic");
    cloudsect()
        .args(["play", "--seed", "1", "-d", dir_arg(dir.path())])
        .write_stdin("story\nchallenge\nhelp\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Techniques:")
                .and(predicate::str::contains("1. "))
                .and(predicate::str::contains("attack <n>")),
        );
}

#[test]
fn play_next_advances_and_saves() {
    let dir = with_save("Lin", "mystic");
    cloudsect()
        .args(["play", "-d", dir_arg(dir.path())])
        .write_stdin("next\nquit\n")
        .assert()
        .success();

    let text = fs::read_to_string(dir.path().join("player_save.json")).unwrap();
    assert!(text.contains("\"current_chapter\": \"chapter_1\""));
}

#[test]
fn play_reports_unknown_commands_and_continues() {
    let dir = with_save("Lin", "mystic");
    cloudsect()
        .args(["play", "-d", dir_arg(dir.path())])
        .write_stdin("dance\nprogress\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("unknown command").and(predicate::str::contains("Level 1")),
        );
}

#[test]
fn play_without_autosave_leaves_save_untouched() {
    let dir = with_save("Lin", "mystic");
    let before = fs::read_to_string(dir.path().join("player_save.json")).unwrap();
    cloudsect()
        .args(["play", "--no-autosave", "-d", dir_arg(dir.path())])
        .write_stdin("next\nquit\n")
        .assert()
        .success();

    let after = fs::read_to_string(dir.path().join("player_save.json")).unwrap();
    assert_eq!(before, after);
}
