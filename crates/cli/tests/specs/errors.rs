//! Error handling specs

use crate::prelude::*;

#[test]
fn malformed_config_fails() {
    let ws = Workspace::empty();
    ws.file("config.toml", "[registry]\nenabled = \"sometimes\"\n");
    ws.cb()
        .fails()
        .stderr_has("Error: invalid config")
        .stderr_has("config.toml");
}

#[test]
fn unknown_config_key_fails() {
    let ws = Workspace::empty();
    ws.file("config.toml", "[registry]\nmirror = \"x\"\n");
    ws.cb().fails().stderr_has("invalid config");
}

#[test]
fn valid_config_is_accepted() {
    let ws = Workspace::empty();
    ws.file(
        "config.toml",
        "[registry]\nurl = \"http://127.0.0.1:9\"\ntimeout_secs = 1\nenabled = false\n",
    );
    ws.cb().passes().stdout_eq("(empty)\n");
}

#[test]
fn bad_output_format_fails() {
    let ws = Workspace::empty();
    ws.cb().args(&["ls", "-o", "yaml"]).fails();
}
