// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # winmux
//!
//! A windowed terminal multiplexer: run a child process on a PTY while
//! confining its output to a rectangular sub-region of the host terminal.
//! The rest of the host screen is left untouched.
//!
//! ```text
//! ╭───────────────── host terminal ─────────────────╮
//! │ $ previous shell output …                       │
//! │        ╭────────── window (x,y,W,H) ─────────╮  │
//! │        │ $ vim notes.txt                     │  │
//! │        │ ~                                   │  │
//! │        │ ~                                   │  │
//! │        ╰─────────────────────────────────────╯  │
//! │ $ …                                             │
//! ╰─────────────────────────────────────────────────╯
//! ```
//!
//! # Pipeline
//!
//! ```text
//! child bytes ──▶ vte parser ──▶ Perform impl + operation shims
//!                                        │
//!                                        ▼
//!                         WindowScreen (cursor, scroll region,
//!                         deferred wrap, SGR accumulator)
//!                                        │
//!                       ╭────────────────┴───────────────╮
//!                       ▼                                ▼
//!               WindowGrid (H×W cells,          HostPainter (translated
//!               row-rotation scrolling)         moves + minimal SGR runs)
//!                                                        │
//!                                                        ▼
//!                                                  host stdout
//! ```
//!
//! The child writes ANSI as if it owned a W×H terminal (its PTY says so);
//! the parser interprets that stream against the virtual grid and re-emits
//! it with every cursor position translated into the window's spot on the
//! host. Sequences the core does not model are forwarded; the handful of
//! private modes with host-global effect (alternate screen, mouse
//! reporting, bracketed paste) are suppressed.
//!
//! # Module map
//!
//! | Module | Role |
//! |---|---|
//! | [`term_units`] | 0-based vs 1-based coordinate newtypes |
//! | [`grid`] | Cell model + rotation-based framebuffer |
//! | [`screen`] | Screen state machine + host painter |
//! | [`vt_100_ansi_parser`] | `vte::Perform` impl, shims, protocols |
//! | [`viewport`] | Window placement and geometry resolution |
//! | [`pty`] | PTY session (spawn, reader/input tasks) |
//! | [`mux`] | Event loop orchestrator |
//! | [`config`] | CLI and logging setup |

// Attach.
pub mod config;
pub mod grid;
pub mod mux;
pub mod pty;
pub mod screen;
pub mod term_units;
pub mod viewport;
pub mod vt_100_ansi_parser;

// Re-export.
pub use grid::{AnsiColor, AttrFlags, Cell, CellAttr, WindowGrid};
pub use mux::WindowMux;
pub use screen::WindowScreen;
pub use term_units::{ColIndex, CursorPos, RowIndex, TermCol, TermRow, col, cursor_pos,
                     row};
pub use viewport::{GeometryError, WindowRect, resolve_geometry};
