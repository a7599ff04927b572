//! Test helpers for behavioral specifications.
//!
//! Every [`Workspace`] owns an isolated state root, runs with the registry
//! disabled and colors off, and can put fake tools on `PATH`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Returns a Command configured to run the cb binary
pub fn cb_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_cb"))
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: vec![
                ("CB_REGISTRY_DISABLED".into(), "1".into()),
                ("NO_COLOR".into(), "1".into()),
            ],
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> Command {
        let mut cmd = cb_cmd();
        cmd.args(&self.args);

        // Keep the developer's settings out of the run.
        for var in ["CB_REGISTRY_URL", "CB_REGISTRY_TIMEOUT_MS", "CB_LOG", "COLOR"] {
            cmd.env_remove(var);
        }

        for (key, value) in self.envs {
            cmd.env(key, value);
        }

        cmd
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.command().output().expect("command should run");
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    /// **Prefer this for format specs** - catches format regressions.
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    /// Assert stderr equals expected exactly (with diff on failure).
    pub fn stderr_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stderr(), expected);
        self
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout should not contain '{}'\nstdout: {}",
            unexpected,
            stdout
        );
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }
}

/// Isolated state root plus a directory of fake tools.
pub struct Workspace {
    root: tempfile::TempDir,
    bin: tempfile::TempDir,
}

impl Workspace {
    pub fn empty() -> Self {
        Self {
            root: tempfile::tempdir().unwrap(),
            bin: tempfile::tempdir().unwrap(),
        }
    }

    /// The state root (`CB_CONFIG_DIR`).
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    pub fn definitions_dir(&self) -> PathBuf {
        self.path().join("definitions")
    }

    /// Write a file under the state root (parents created automatically)
    pub fn file(&self, path: impl AsRef<Path>, content: &str) {
        let full_path = self.path().join(path.as_ref());
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full_path, content).unwrap();
    }

    /// Seed the definition cache with a YAML document.
    pub fn definition(&self, name: &str, yaml: &str) {
        self.file(format!("definitions/{name}.yaml"), yaml);
    }

    /// Install an executable shell script on the fake-tool `PATH`.
    pub fn tool(&self, name: &str, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.bin.path().join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{script}")).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
    }

    /// Absolute path of a tool installed with [`Workspace::tool`].
    pub fn tool_path(&self, name: &str) -> PathBuf {
        self.bin.path().join(name)
    }

    pub fn read(&self, path: impl AsRef<Path>) -> String {
        std::fs::read_to_string(self.path().join(path)).unwrap()
    }

    /// Run cb against this workspace
    pub fn cb(&self) -> CliBuilder {
        let system_path = std::env::var("PATH").unwrap_or_default();
        let path = format!("{}:{system_path}", self.bin.path().display());
        CliBuilder::new()
            .env("CB_CONFIG_DIR", self.path())
            .env("PATH", path)
    }
}

/// A small definition used by listing specs.
pub const GIT_YAML: &str = r#"name: git
description: Distributed version control
flags:
  - name: --version
    description: Print the version
args:
  - name: pathspec
    description: Files to operate on
subcommands:
  - name: commit
    description: Record changes
    flags:
      - name: --amend
        description: Rewrite the last commit
      - name: --message
        description: Commit message
  - name: remote
    description: Manage remotes
    subcommands:
      - name: add
        description: Add a remote
"#;
