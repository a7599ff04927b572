//! Resolution specs
//!
//! Verify that a missing definition is generated from a tool's `--help`
//! output and cached for later runs.

use crate::prelude::*;

const MYTOOL: &str = r#"
if [ "$1" = "build" ]; then
cat <<'HELP'
Usage: mytool build [options]

Options:
  --release    Build with optimizations
HELP
exit 0
fi
cat <<'HELP'
Usage: mytool [command]

Commands:
  build    Compile the project
  clean    Remove build artifacts

Options:
  -v, --verbose    Verbose output
HELP
"#;

#[test]
fn ls_scrapes_unknown_tool() {
    let ws = Workspace::empty();
    ws.tool("mytool", MYTOOL);
    ws.cb().args(&["mytool"]).passes();
    ws.cb()
        .args(&["ls"])
        .passes()
        .stderr_has("Definition for 'mytool' not found locally. Searching registry...")
        .stderr_has("Definition not found in registry. Attempting to scrape '--help'...")
        .stderr_has("Generated definition from help output.")
        .stdout_has("build")
        .stdout_has("Remove build artifacts")
        .stdout_has("--verbose");

    let cached = ws.read("definitions/mytool.yaml");
    assert!(cached.contains("Auto-generated from --help"), "{cached}");
}

#[test]
fn scraped_definition_is_reused() {
    let ws = Workspace::empty();
    ws.tool("mytool", MYTOOL);
    ws.cb().args(&["mytool"]).passes();
    ws.cb().args(&["ls"]).passes();

    let run = ws.cb().args(&["ls"]).passes();
    assert_eq!(run.stderr(), "");
}

#[test]
fn scrape_reads_subcommand_flags() {
    let ws = Workspace::empty();
    ws.tool("mytool", MYTOOL);
    ws.cb().args(&["mytool", "build"]).passes();
    ws.cb()
        .args(&["op"])
        .passes()
        .stdout_has("--release")
        .stdout_lacks("--verbose");
}

#[test]
fn unknown_tool_reports_missing_definition() {
    let ws = Workspace::empty();
    ws.cb().args(&["cb-spec-no-such-tool"]).passes();
    ws.cb()
        .args(&["ls"])
        .passes()
        .stdout_eq("No definition found for 'cb-spec-no-such-tool'.\n");
    assert!(!ws
        .definitions_dir()
        .join("cb-spec-no-such-tool.yaml")
        .exists());
}

#[test]
fn tool_given_as_path_is_scraped_and_cached() {
    let ws = Workspace::empty();
    ws.tool("mytool", MYTOOL);
    let tool = ws.tool_path("mytool");
    let tool = tool.to_str().unwrap();

    ws.cb().args(&[tool]).passes();
    ws.cb()
        .args(&["ls"])
        .passes()
        .stderr_has("Generated definition from help output.")
        .stdout_has("Compile the project");

    let again = ws.cb().args(&["ls"]).passes();
    assert_eq!(again.stderr(), "");

    ws.cb().args(&["clear"]).passes();
    ws.cb()
        .args(&["ls"])
        .passes()
        .stdout_has(&format!("  {tool}\n"));
}
