// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Main orchestrator: wires the host terminal, the PTY session, and the
//! virtual screen together and runs the event loop.
//!
//! # Event loop
//!
//! One `tokio::select!` is the only suspension point, multiplexing host
//! stdin against PTY output (the async rendition of a `select(2)` over two
//! descriptors). The select is `biased`: within one wake, pending user input
//! is forwarded to the child *before* child output is processed, and every
//! byte of a received chunk runs through the parser to completion before the
//! next wake. There is no internal queue; the parser state inside
//! [`WindowScreen`] is the only progress carrier across iterations.
//!
//! # Lifecycle
//!
//! 1. Enable raw mode on the host terminal.
//! 2. Spawn the child on a PTY sized to the window.
//! 3. Install the host viewport (DECLRMM + DECSLRM + DECSTBM) and paint the
//!    empty window.
//! 4. Loop until the child exits or the PTY reaches EOF.
//! 5. Always clean up: release margins, restore raw mode, kill the child.

use crate::pty::{PtyOutputEvent, PtySession};
use crate::screen::WindowScreen;
use crate::viewport::WindowRect;
use miette::IntoDiagnostic;
use portable_pty::PtySize;
use std::io::Write;
use tokio::io::AsyncReadExt;

/// Size of the host stdin read buffer.
const INPUT_BUFFER_SIZE: usize = 1024;

/// The windowed multiplexer for one child process.
#[derive(Debug)]
pub struct WindowMux {
    screen: WindowScreen,
    session: PtySession,
    host_rows: u16,
    host_cols: u16,
}

impl WindowMux {
    /// Spawn the child and assemble the multiplexer. The PTY is sized to the
    /// window, so the child lays text out for exactly the cells it owns.
    ///
    /// # Errors
    ///
    /// Returns an error when the PTY cannot be allocated or the child cannot
    /// be spawned.
    pub fn new(
        rect: WindowRect,
        host_rows: u16,
        host_cols: u16,
        command: &str,
    ) -> miette::Result<Self> {
        let pty_size = PtySize {
            rows: rect.row_count,
            cols: rect.col_count,
            pixel_width: 0,
            pixel_height: 0,
        };
        let session = PtySession::spawn(command, pty_size)?;
        tracing::debug!(?rect, command, "spawned windowed child");

        Ok(Self {
            screen: WindowScreen::new(rect),
            session,
            host_rows,
            host_cols,
        })
    }

    /// Run the multiplexer to completion: raw mode on, viewport installed,
    /// event loop, cleanup. Cleanup runs on the error paths too.
    ///
    /// # Errors
    ///
    /// Returns an error when terminal setup fails or writing to host stdout
    /// fails mid-session.
    pub async fn run(mut self) -> miette::Result<()> {
        crossterm::terminal::enable_raw_mode().into_diagnostic()?;
        tracing::debug!("raw mode started");

        self.screen.install_viewport();
        let install_result = self.flush_host_output();

        let loop_result = match install_result {
            Ok(()) => self.run_event_loop().await,
            Err(e) => Err(e),
        };
        tracing::debug!(?loop_result, "event loop exited");

        // Always cleanup regardless of error.
        self.cleanup_terminal();
        loop_result
    }

    /// The single-suspension-point loop. Stdin before PTY output, chunks
    /// processed to completion.
    async fn run_event_loop(&mut self) -> miette::Result<()> {
        let mut stdin = tokio::io::stdin();
        let mut input_buffer = [0u8; INPUT_BUFFER_SIZE];
        let mut stdin_open = true;

        loop {
            tokio::select! {
                biased;

                read = stdin.read(&mut input_buffer), if stdin_open => {
                    match read {
                        Ok(0) | Err(_) => {
                            // Host stdin is gone; the session lives on until
                            // the child exits.
                            tracing::debug!("host stdin closed");
                            stdin_open = false;
                        }
                        Ok(n) => {
                            self.session.send_input(input_buffer[..n].to_vec());
                        }
                    }
                }

                maybe_event = self.session.output_rx.recv() => {
                    match maybe_event {
                        Some(PtyOutputEvent::Output(data)) => {
                            self.screen.apply_ansi_bytes(&data);
                            self.flush_host_output()?;
                        }
                        Some(PtyOutputEvent::Exit) | None => {
                            tracing::debug!("PTY closed, leaving event loop");
                            break;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Write everything the painter accumulated to host stdout. A failure
    /// here is unrecoverable (the window image can no longer be trusted) and
    /// propagates out of the loop.
    fn flush_host_output(&mut self) -> miette::Result<()> {
        let bytes = self.screen.take_host_bytes();
        if bytes.is_empty() {
            return Ok(());
        }
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&bytes).into_diagnostic()?;
        stdout.flush().into_diagnostic()?;
        Ok(())
    }

    /// Release the margin installation, restore the host terminal, and kill
    /// the child. Called on every exit path.
    fn cleanup_terminal(&mut self) {
        self.screen.restore_viewport(self.host_rows, self.host_cols);
        if let Err(e) = self.flush_host_output() {
            tracing::warn!("failed to flush shutdown sequences: {e:?}");
        }

        if let Err(e) = crossterm::terminal::disable_raw_mode() {
            tracing::warn!("failed to disable raw mode: {e:?}");
        }

        self.session.shutdown();
        tracing::debug!("cleanup completed");
    }
}
