//! Listing specs
//!
//! Verify `ls` and `op` against definitions already in the cache.

use crate::prelude::*;

#[test]
fn ls_without_session_lists_cache() {
    let ws = Workspace::empty();
    ws.definition("git", GIT_YAML);
    ws.definition("tar", "name: tar\n");
    ws.cb().args(&["ls"]).passes().stdout_eq(
        "Available commands (definitions found):\n  git\n  tar\n",
    );
}

#[test]
fn ls_with_empty_cache() {
    let ws = Workspace::empty();
    ws.cb().args(&["ls"]).passes().stdout_eq(
        "Available commands (definitions found):\n  (none found in local cache)\n",
    );
}

#[test]
fn ls_json_lists_cache() {
    let ws = Workspace::empty();
    ws.definition("git", GIT_YAML);
    let run = ws.cb().args(&["ls", "-o", "json"]).passes();
    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(value["definitions"], serde_json::json!(["git"]));
}

#[test]
fn ls_at_root_shows_all_sections() {
    let ws = Workspace::empty();
    ws.definition("git", GIT_YAML);
    ws.cb().args(&["git"]).passes();
    ws.cb()
        .args(&["ls"])
        .passes()
        .stdout_has("Arguments:")
        .stdout_has("pathspec")
        .stdout_has("(Optional)")
        .stdout_has("Subcommands:")
        .stdout_has("commit")
        .stdout_has("Manage remotes")
        .stdout_has("Options:")
        .stdout_has("--version");
}

#[test]
fn ls_follows_session_path() {
    let ws = Workspace::empty();
    ws.definition("git", GIT_YAML);
    ws.cb().args(&["git", "remote"]).passes();
    ws.cb()
        .args(&["ls"])
        .passes()
        .stdout_has("Add a remote")
        .stdout_lacks("Record changes");
}

#[test]
fn ls_drops_trailing_flag() {
    let ws = Workspace::empty();
    ws.definition("git", GIT_YAML);
    ws.cb().args(&["git", "commit", "--message"]).passes();
    ws.cb()
        .args(&["ls"])
        .passes()
        .stdout_has("--amend")
        .stdout_lacks("Manage remotes");
}

#[test]
fn ls_unknown_subcommand_falls_back_to_root_with_hint() {
    let ws = Workspace::empty();
    ws.definition("git", GIT_YAML);
    ws.cb().args(&["git", "comit"]).passes();
    ws.cb()
        .args(&["ls"])
        .passes()
        .stderr_has("showing 'git'")
        .stderr_has("commit")
        .stdout_has("Subcommands:");
}

#[test]
fn ls_at_leaf_without_children() {
    let ws = Workspace::empty();
    ws.definition("git", GIT_YAML);
    ws.cb().args(&["git", "remote", "add"]).passes();
    ws.cb()
        .args(&["ls"])
        .passes()
        .stdout_eq("No further options or subcommands available.\n");
}

#[test]
fn ls_json_reports_context() {
    let ws = Workspace::empty();
    ws.definition("git", GIT_YAML);
    ws.cb().args(&["git", "commit"]).passes();
    let run = ws.cb().args(&["-o", "json", "ls"]).passes();
    let value: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(value["command"], "git commit");
    assert_eq!(value["context"], serde_json::json!(["commit"]));
}

#[test]
fn op_lists_options_at_context() {
    let ws = Workspace::empty();
    ws.definition("git", GIT_YAML);
    ws.cb().args(&["git", "commit"]).passes();
    ws.cb()
        .args(&["op"])
        .passes()
        .stdout_has("--amend")
        .stdout_has("Rewrite the last commit")
        .stdout_lacks("Options:");
}

#[test]
fn op_without_session() {
    let ws = Workspace::empty();
    ws.cb().args(&["op"]).passes().stdout_eq("No command context.\n");
}

#[test]
fn op_at_node_without_flags() {
    let ws = Workspace::empty();
    ws.definition("git", GIT_YAML);
    ws.cb().args(&["git", "remote"]).passes();
    ws.cb()
        .args(&["op"])
        .passes()
        .stdout_eq("No options available.\n");
}
