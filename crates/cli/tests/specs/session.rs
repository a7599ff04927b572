//! Session editing specs
//!
//! Verify that tokens accumulate across invocations and are handed off by exec.

use crate::prelude::*;

#[test]
fn no_args_on_fresh_state_prints_empty() {
    let ws = Workspace::empty();
    ws.cb().passes().stdout_eq("(empty)\n");
}

#[test]
fn tokens_accumulate_across_runs() {
    let ws = Workspace::empty();
    ws.cb().args(&["add", "git"]).passes().stdout_eq("git\n");
    ws.cb().args(&["commit"]).passes().stdout_eq("git commit\n");
    ws.cb().passes().stdout_eq("git commit\n");
}

#[test]
fn state_file_holds_command_parts() {
    let ws = Workspace::empty();
    ws.cb().args(&["docker", "run"]).passes();
    let state: serde_json::Value = serde_json::from_str(&ws.read("state.json")).unwrap();
    assert_eq!(state["command_parts"], serde_json::json!(["docker", "run"]));
}

#[test]
fn hyphen_tokens_are_implicit_adds() {
    let ws = Workspace::empty();
    ws.cb().args(&["git", "commit"]).passes();
    ws.cb()
        .args(&["-m", "fix"])
        .passes()
        .stdout_eq("git commit -m fix\n");
    ws.cb()
        .args(&["add", "--amend"])
        .passes()
        .stdout_eq("git commit -m fix --amend\n");
}

#[test]
fn output_and_help_flags_are_appended() {
    let ws = Workspace::empty();
    ws.cb().args(&["gcc", "-o", "main"]).passes().stdout_eq("gcc -o main\n");
    ws.cb()
        .args(&["add", "-o", "out.txt"])
        .passes()
        .stdout_eq("gcc -o main -o out.txt\n");
    ws.cb()
        .args(&["cd", "-h"])
        .passes()
        .stdout_eq("gcc -o main -o out.txt -h\n");
}

#[test]
fn back_and_alias_pop_tokens() {
    let ws = Workspace::empty();
    ws.cb().args(&["git", "remote", "add"]).passes();
    ws.cb().args(&["back"]).passes().stdout_eq("git remote\n");
    ws.cb().args(&[".."]).passes().stdout_eq("git\n");
    ws.cb().args(&["back"]).passes().stdout_eq("(empty)\n");
    ws.cb().args(&["back"]).passes().stdout_eq("(empty)\n");
}

#[test]
fn cd_alias_appends() {
    let ws = Workspace::empty();
    ws.cb().args(&["cd", "kubectl", "get"]).passes().stdout_eq("kubectl get\n");
}

#[test]
fn add_without_tokens_prints_usage() {
    let ws = Workspace::empty();
    ws.cb()
        .args(&["add"])
        .passes()
        .stdout_eq("Usage: cb add <subcommand> [args...]\n");
}

#[test]
fn clear_resets_session() {
    let ws = Workspace::empty();
    ws.cb().args(&["git", "status"]).passes();
    ws.cb().args(&["clear"]).passes().stdout_eq("(empty)\n");
    ws.cb().passes().stdout_eq("(empty)\n");
}

#[test]
fn exec_prints_command_and_resets() {
    let ws = Workspace::empty();
    ws.cb().args(&["git", "log", "--oneline"]).passes();
    ws.cb()
        .args(&["exec"])
        .passes()
        .stdout_eq("git log --oneline\n");
    ws.cb().passes().stdout_eq("(empty)\n");
}

#[test]
fn exec_on_empty_session_prints_nothing() {
    let ws = Workspace::empty();
    ws.cb().args(&["exec"]).passes().stdout_eq("");
}

#[test]
fn corrupt_state_starts_fresh() {
    let ws = Workspace::empty();
    ws.file("state.json", "{not json");
    ws.cb().passes().stdout_eq("(empty)\n");
    assert!(ws.path().join("state.bak").exists());
}
