// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Binary entry point: parse the CLI, resolve the window geometry against
//! the live host terminal size, and run the multiplexer.

use clap::Parser;
use miette::IntoDiagnostic;
use winmux::config::{CliArg, init_tracing};
use winmux::{WindowMux, resolve_geometry};

#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli_arg = CliArg::parse();
    let _log_guard = init_tracing(cli_arg.log_file.as_deref())?;
    tracing::debug!(?cli_arg, "starting winmux");

    let (host_cols, host_rows) = crossterm::terminal::size().into_diagnostic()?;
    let rect = resolve_geometry(
        cli_arg.x,
        cli_arg.y,
        cli_arg.width,
        cli_arg.height,
        host_rows,
        host_cols,
    )
    .into_diagnostic()?;

    let mux = WindowMux::new(rect, host_rows, host_cols, &cli_arg.command)?;
    mux.run().await
}
