#![allow(dead_code, deprecated)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

pub fn moodjour_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodjour").unwrap();
    cmd.env_remove("MOODJOUR_ROOT");
    cmd.env_remove("MOODJOUR_LOG");
    cmd
}

/// Initialize a journal in a fresh temp directory
pub fn init_journal() -> TempDir {
    let temp = TempDir::new().unwrap();
    moodjour_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

/// Create an entry and return its id
pub fn new_entry(root: &Path, title: &str, mood: &str, content: &str) -> i64 {
    let output = moodjour_cmd()
        .current_dir(root)
        .args(["new", "--title", title, "--mood", mood, "--content", content])
        .output()
        .unwrap();
    assert!(output.status.success(), "new failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    stdout
        .trim()
        .strip_prefix("Created entry ")
        .unwrap()
        .parse()
        .unwrap()
}
