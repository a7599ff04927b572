// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cb - build shell commands one token at a time

mod color;
mod commands;
mod config;
mod env;
mod listing;
mod logging;
mod output;

use std::ffi::OsString;

use anyhow::{Context as _, Result};
use clap::{CommandFactory, Parser, Subcommand};
use cb_storage::{DefinitionStore, Layout, SessionStore};

use commands::{edit, exec, ls, op, show, Context};
use config::Config;
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "cb",
    version,
    about = "Command builder - assemble a shell command one token at a time",
    disable_help_subcommand = true
)]
struct Cli {
    /// Output format for listings
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show what can follow the current command
    Ls,
    /// Show options available at the current command
    Op,
    /// Append tokens to the current command
    #[command(visible_alias = "cd")]
    Add {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Remove the last token
    #[command(visible_alias = "..")]
    Back,
    /// Start over with an empty command
    Clear,
    /// Print the finished command and reset
    Exec,
}

fn main() {
    if let Err(e) = run() {
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(1);
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {0}")]` with `#[from]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn cli_command() -> clap::Command {
    Cli::command()
}

/// Rewrite argv so everything meant for the command under construction
/// reaches `add` unparsed.
///
/// `add`/`cd` get a `--` so their tokens (`-o`, `-h`, ...) are never read as
/// cb's own options. Any other first token that is not a cb verb or flag
/// becomes `add -- <tokens..>`, so `cb git commit` and `cb -m` append.
fn normalize_args(mut args: Vec<OsString>) -> Vec<OsString> {
    let Some(pos) = first_token(&args) else {
        return args;
    };
    let token = args[pos].to_string_lossy().into_owned();
    match verb_name(&token) {
        Some(verb) if verb == "add" => args.insert(pos + 1, OsString::from("--")),
        Some(_) => {}
        None if is_cli_flag(&token) => {}
        None => {
            args.insert(pos, OsString::from("--"));
            args.insert(pos, OsString::from("add"));
        }
    }
    args
}

/// Index of the first argument after any leading `-o/--output` options.
fn first_token(args: &[OsString]) -> Option<usize> {
    let mut pos = 1;
    loop {
        let arg = args.get(pos)?.to_str().unwrap_or_default();
        match arg {
            "-o" | "--output" => pos += 2,
            _ if arg.starts_with("--output=") || (arg.starts_with("-o") && arg.len() > 2) => {
                pos += 1
            }
            _ => return Some(pos),
        }
    }
}

/// Canonical name of the subcommand `token` names, aliases included.
fn verb_name(token: &str) -> Option<String> {
    cli_command()
        .get_subcommands()
        .find(|sub| sub.get_name() == token || sub.get_all_aliases().any(|alias| alias == token))
        .map(|sub| sub.get_name().to_string())
}

fn is_cli_flag(arg: &str) -> bool {
    matches!(arg, "-h" | "--help" | "-V" | "--version")
}

fn run() -> Result<()> {
    let cli = Cli::parse_from(normalize_args(std::env::args_os().collect()));

    let layout = Layout::resolve()?;
    let _log_guard = match logging::setup_logging(&layout.log_path()) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: file logging disabled: {e}");
            None
        }
    };

    let config = Config::load(&layout.config_path())?;
    let store = DefinitionStore::open(layout.definitions_dir())
        .context("failed to initialize definition cache")?;
    let sessions = SessionStore::new(layout.state_path());
    let mut session = sessions.load().context("failed to load session")?;

    let ctx = Context {
        store,
        sessions,
        registry: config.registry_settings(),
        format: cli.output,
    };
    tracing::debug!(root = %layout.root().display(), parts = session.command_parts.len(), "cb started");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        None => show::handle(&session, &mut out)?,
        Some(Commands::Ls) => ls::handle(&ctx, &session, &mut out)?,
        Some(Commands::Op) => op::handle(&ctx, &session, &mut out)?,
        Some(Commands::Add { tokens }) => edit::add(&ctx.sessions, &mut session, tokens, &mut out)?,
        Some(Commands::Back) => edit::back(&ctx.sessions, &mut session, &mut out)?,
        Some(Commands::Clear) => edit::clear(&ctx.sessions, &mut session, &mut out)?,
        Some(Commands::Exec) => exec::handle(&ctx.sessions, &session, &mut out)?,
    }

    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
