// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Bidirectional PTY session for the windowed child process.
//!
//! # Task separation
//!
//! - **Reader task** (`spawn_blocking`): owns a cloned reader of the PTY
//!   master, loops on blocking reads, ships chunks to the event loop over an
//!   async channel.
//! - **Input handler task** (`spawn_blocking`): owns the master itself plus
//!   its writer, drains a sync channel of input events. A single owner for
//!   the master avoids any synchronization around the write side.
//! - **Wait task** (`spawn_blocking`): blocks on child exit and reports it as
//!   an event.
//!
//! The channels are treated as dumb pipes: the child decides terminal modes
//! and interprets its own environment; this layer only transports bytes.
//! Unbounded channels keep the plumbing simple; PTY output is consumed at
//! interactive cadence and processed chunk by chunk, so there is no queue to
//! speak of in practice.

use portable_pty::{ChildKiller, CommandBuilder, PtySize, native_pty_system};
use std::io::{Read, Write};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::time::Duration;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// Buffer size for reading from the PTY master.
pub const READ_BUFFER_SIZE: usize = 4096;

/// Input events consumed by the input handler task.
#[derive(Debug)]
pub enum PtyInputEvent {
    /// Write raw bytes (user keystrokes) to the child.
    Write(Vec<u8>),
    /// Stop the input handler task.
    Close,
}

/// Output events produced by the reader and wait tasks.
#[derive(Debug)]
pub enum PtyOutputEvent {
    /// A chunk of child output, at most [`READ_BUFFER_SIZE`] bytes.
    Output(Vec<u8>),
    /// The child exited (or the PTY hit EOF).
    Exit,
}

/// A spawned child on a PTY, reachable over channels.
pub struct PtySession {
    pub input_tx: Sender<PtyInputEvent>,
    pub output_rx: UnboundedReceiver<PtyOutputEvent>,
    child_killer: Box<dyn ChildKiller + Send + Sync>,
}

impl std::fmt::Debug for PtySession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PtySession")
            .field("child_killer", &"<ChildKiller>")
            .finish_non_exhaustive()
    }
}

impl PtySession {
    /// Allocate a PTY of `size`, spawn `command` on its slave side, and start
    /// the reader / input / wait tasks.
    ///
    /// # Errors
    ///
    /// Returns an error when the PTY cannot be opened or the command cannot
    /// be spawned.
    pub fn spawn(command: &str, size: PtySize) -> miette::Result<Self> {
        let pty_system = native_pty_system();
        let pair = pty_system
            .openpty(size)
            .map_err(|e| miette::miette!("Failed to open PTY: {e}"))?;

        let mut cmd = CommandBuilder::new(command);
        if let Ok(cwd) = std::env::current_dir() {
            cmd.cwd(cwd);
        }
        let mut child = pair
            .slave
            .spawn_command(cmd)
            .map_err(|e| miette::miette!("Failed to spawn '{command}' in PTY: {e}"))?;
        let child_killer = child.clone_killer();

        // The slave fd is the child's now.
        drop(pair.slave);

        let (output_tx, output_rx) = unbounded_channel::<PtyOutputEvent>();
        let (input_tx, input_rx) = std::sync::mpsc::channel::<PtyInputEvent>();

        let reader = pair
            .master
            .try_clone_reader()
            .map_err(|e| miette::miette!("Failed to clone PTY reader: {e}"))?;
        spawn_reader_task(reader, output_tx.clone());
        spawn_input_handler_task(pair.master, input_rx)?;

        // Wait for child exit on a blocking task and surface it as an event.
        let exit_tx = output_tx;
        tokio::task::spawn_blocking(move || {
            let status = child.wait();
            tracing::debug!(?status, "child process exited");
            let _unused = exit_tx.send(PtyOutputEvent::Exit);
        });

        Ok(Self {
            input_tx,
            output_rx,
            child_killer,
        })
    }

    /// Forward user input bytes to the child.
    pub fn send_input(&self, bytes: Vec<u8>) {
        let _unused = self.input_tx.send(PtyInputEvent::Write(bytes));
    }

    /// Kill the child and stop the input handler.
    pub fn shutdown(&mut self) {
        match self.child_killer.kill() {
            Ok(()) => tracing::debug!("killed child process"),
            Err(e) => tracing::warn!("failed to kill child process: {e:?}"),
        }
        let _unused = self.input_tx.send(PtyInputEvent::Close);
    }
}

/// Reader task: blocking reads from the PTY master, chunks shipped to the
/// event loop. EOF or a read error ends the task (the wait task reports the
/// exit).
fn spawn_reader_task(
    mut reader: Box<dyn Read + Send>,
    output_tx: UnboundedSender<PtyOutputEvent>,
) {
    tokio::task::spawn_blocking(move || {
        let mut read_buffer = [0u8; READ_BUFFER_SIZE];
        loop {
            match reader.read(&mut read_buffer) {
                Ok(0) | Err(_) => break,
                Ok(n) => {
                    if output_tx
                        .send(PtyOutputEvent::Output(read_buffer[..n].to_vec()))
                        .is_err()
                    {
                        break;
                    }
                }
            }
        }
        tracing::debug!("PTY reader task finished");
    });
}

/// Input handler task: the single owner of the PTY master and its writer.
fn spawn_input_handler_task(
    master: Box<dyn portable_pty::MasterPty + Send>,
    input_rx: Receiver<PtyInputEvent>,
) -> miette::Result<()> {
    let mut writer = master
        .take_writer()
        .map_err(|e| miette::miette!("Failed to take PTY writer: {e}"))?;

    tokio::task::spawn_blocking(move || {
        // Keep the master alive for the lifetime of the session.
        let _master = master;
        loop {
            match input_rx.recv_timeout(Duration::from_millis(100)) {
                Ok(PtyInputEvent::Write(bytes)) => {
                    if writer.write_all(&bytes).is_err() || writer.flush().is_err() {
                        tracing::warn!("PTY write failed, stopping input handler");
                        break;
                    }
                }
                Ok(PtyInputEvent::Close) | Err(RecvTimeoutError::Disconnected) => break,
                Err(RecvTimeoutError::Timeout) => {}
            }
        }
        tracing::debug!("PTY input handler task finished");
    });

    Ok(())
}
