// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CLI surface and logging setup.
//!
//! `-h` is taken by the window height (matching the flag set users of this
//! kind of tool expect), so the auto short help flag is disabled and help is
//! reachable via `--help`.
//!
//! Logging: stdout *is* the rendering channel, so tracing output goes to a
//! file, and only when `--log-file` is given. `RUST_LOG` filters as usual.

use clap::{ArgAction, Parser};
use miette::IntoDiagnostic;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Run a child process in a PTY confined to a rectangular window of the host
/// terminal.
#[derive(Debug, Parser)]
#[command(name = "winmux", version, disable_help_flag = true)]
pub struct CliArg {
    /// 1-based host column of the window's left edge. Negative counts from
    /// the right edge (-1 is the last column).
    #[arg(short = 'x', allow_hyphen_values = true)]
    pub x: Option<i32>,

    /// 1-based host row of the window's top edge. Negative counts from the
    /// bottom edge.
    #[arg(short = 'y', allow_hyphen_values = true)]
    pub y: Option<i32>,

    /// Window width in cells. Zero or negative means "host width minus this
    /// amount".
    #[arg(short = 'w', allow_hyphen_values = true)]
    pub width: Option<i32>,

    /// Window height in cells. Zero or negative means "host height minus
    /// this amount".
    #[arg(short = 'h', allow_hyphen_values = true)]
    pub height: Option<i32>,

    /// Child command to run inside the window.
    #[arg(short = 'c', long = "command", default_value = "/bin/sh")]
    pub command: String,

    /// Write tracing output to this file (filtered by RUST_LOG).
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Print help.
    #[arg(long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,
}

/// Install the tracing subscriber when a log file was requested. The
/// returned guard must stay alive for the duration of the process or tail
/// log lines are lost.
///
/// # Errors
///
/// Returns an error when the log file cannot be created.
pub fn init_tracing(log_file: Option<&Path>) -> miette::Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        return Ok(None);
    };
    let file = std::fs::File::create(path).into_diagnostic()?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}
