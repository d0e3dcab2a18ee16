//! Integration tests for new, edit, show and delete commands

#![allow(deprecated)]

use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;

mod common;
use common::{init_journal, moodjour_cmd, new_entry};

fn stored_entries(root: &Path) -> Vec<Value> {
    let raw = fs::read_to_string(root.join(".moodjour/storage/journalEntries")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_new_entry_is_persisted() {
    let temp = init_journal();

    let id = new_entry(temp.path(), "First day", "Feliz", "<p>Hello journal</p>");

    let entries = stored_entries(temp.path());
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], id);
    assert_eq!(entries[0]["title"], "First day");
    assert_eq!(entries[0]["mood"], "Feliz");
    assert_eq!(entries[0]["content"], "<p>Hello journal</p>");
    assert!(entries[0]["date"].as_str().unwrap().ends_with('Z'));
    assert!(entries[0].get("updatedAt").is_none());
}

#[test]
fn test_new_entry_reads_content_from_stdin() {
    let temp = init_journal();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "Piped", "--mood", "relaxed"])
        .write_stdin("typed in the terminal")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Created entry "));

    let entries = stored_entries(temp.path());
    assert_eq!(entries[0]["content"], "typed in the terminal");
    assert_eq!(entries[0]["mood"], "Relaxado");
}

#[test]
fn test_new_entries_are_prepended() {
    let temp = init_journal();

    let first = new_entry(temp.path(), "One", "Feliz", "a");
    let second = new_entry(temp.path(), "Two", "Triste", "b");

    let ids: Vec<i64> = stored_entries(temp.path())
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![second, first]);
    assert!(second > first);
}

#[test]
fn test_new_entry_empty_title_fails_without_writing() {
    let temp = init_journal();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "", "--mood", "Feliz", "--content", "text"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Title must not be empty"));

    assert!(!temp.path().join(".moodjour/storage/journalEntries").exists());
}

#[test]
fn test_new_entry_unknown_mood_fails() {
    let temp = init_journal();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["new", "--title", "T", "--mood", "Grumpy", "--content", "text"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Valid moods"));
}

#[test]
fn test_new_entry_sanitizes_markup() {
    let temp = init_journal();

    new_entry(
        temp.path(),
        "Risky",
        "Feliz",
        "<p onclick=\"steal()\">Safe</p><script>steal()</script>",
    );

    let entries = stored_entries(temp.path());
    assert_eq!(entries[0]["content"], "<p>Safe</p>");
}

#[test]
fn test_edit_updates_fields_and_sets_updated_at() {
    let temp = init_journal();
    let id = new_entry(temp.path(), "Draft", "Feliz", "first version");
    let before = stored_entries(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["edit", &id.to_string(), "--mood", "Cansado"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Updated entry {}", id)));

    let after = stored_entries(temp.path());
    assert_eq!(after[0]["id"], before[0]["id"]);
    assert_eq!(after[0]["date"], before[0]["date"]);
    assert_eq!(after[0]["title"], "Draft");
    assert_eq!(after[0]["content"], "first version");
    assert_eq!(after[0]["mood"], "Cansado");
    assert!(after[0]["updatedAt"].is_string());
}

#[test]
fn test_edit_missing_entry_is_not_found() {
    let temp = init_journal();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["edit", "999", "--title", "x"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no longer exists"));
}

#[test]
fn test_show_entry() {
    let temp = init_journal();
    let id = new_entry(temp.path(), "Shown", "Inspirado", "<p>Big <em>idea</em></p>");

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["show", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shown"))
        .stdout(predicate::str::contains("Inspirado"))
        .stdout(predicate::str::contains("Big idea"))
        .stdout(predicate::str::contains("<em>").not());
}

#[test]
fn test_plain_text_with_angle_brackets_is_kept() {
    let temp = init_journal();
    let id = new_entry(temp.path(), "Math", "Relaxado", "if x < y then y > x");

    assert_eq!(stored_entries(temp.path())[0]["content"], "if x < y then y > x");
    moodjour_cmd()
        .current_dir(temp.path())
        .args(["show", &id.to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("if x < y then y > x"));
}

#[test]
fn test_delete_with_yes() {
    let temp = init_journal();
    let id = new_entry(temp.path(), "Gone", "Triste", "bye");

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["delete", &id.to_string(), "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted entry {}", id)));

    assert!(stored_entries(temp.path()).is_empty());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["show", &id.to_string()])
        .assert()
        .code(3);
}

#[test]
fn test_delete_asks_for_confirmation() {
    let temp = init_journal();
    let id = new_entry(temp.path(), "Maybe", "Ansioso", "unsure");

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["delete", &id.to_string()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Delete entry \"Maybe\"?"))
        .stdout(predicate::str::contains("Cancelled"));
    assert_eq!(stored_entries(temp.path()).len(), 1);

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["delete", &id.to_string()])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry"));
    assert!(stored_entries(temp.path()).is_empty());
}

#[test]
fn test_delete_unknown_id_is_not_an_error() {
    let temp = init_journal();

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["delete", "12345", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry with id 12345"));
}

#[test]
fn test_malformed_storage_reads_as_empty() {
    let temp = init_journal();
    fs::write(
        temp.path().join(".moodjour/storage/journalEntries"),
        "this is not json",
    )
    .unwrap();

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}
