// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI/VT sequence parsing for the window's PTY output stream.
//!
//! The `vte` crate provides the tokenizer (the same table-driven state
//! machine family used across the Rust terminal ecosystem); this module
//! provides the [`vte::Perform`] implementation that turns dispatches into
//! [`WindowScreen`] updates and host emission.
//!
//! ```text
//! ╭─────────────────╮    ╭───────────────╮    ╭─────────────────╮
//! │ Child Process   │───▶│ PTY Master    │───▶│ VTE Parser      │
//! │ (vim, bash...)  │    │ (byte stream) │    │ (state machine) │
//! ╰─────────────────╯    ╰───────────────╯    ╰────────┬────────╯
//!                                                      │ dispatches
//!                                             ╔════════▼════════╗
//!                                             ║ Perform impl    ║
//!                                             ║ + operations/   ║
//!                                             ╚════════╦════════╝
//!                                                      │
//!                                  ╭───────────────────▼──╮   translated
//!                                  │ WindowScreen + grid  │──────────────▶ host
//!                                  │ + HostPainter        │   ANSI bytes
//!                                  ╰──────────────────────╯
//! ```
//!
//! # Layering
//!
//! - [`ansi_parser_public_api`]: the byte-facing entry point
//!   ([`WindowScreen::apply_ansi_bytes`]) and the performer adapter.
//! - [`perform`]: the routing table (one match arm per dispatch).
//! - [`operations`]: thin shims, parameter extraction only.
//! - [`protocols`]: constants, typed sequence builders, param helpers.
//! - `screen::impl_*_ops`: the business logic, unit-tested where it lives.
//!
//! Sequences the window does not model are *forwarded*, not dropped: the
//! suppression list in [`operations::mode_ops`] is the only place where child
//! output is deliberately discarded, because those modes (alternate screen,
//! mouse reporting, bracketed paste) would have host-global effect.
//!
//! [`WindowScreen`]: crate::screen::WindowScreen
//! [`WindowScreen::apply_ansi_bytes`]: crate::screen::WindowScreen::apply_ansi_bytes

// Attach.
pub mod ansi_parser_public_api;
pub mod operations;
pub mod perform;
pub mod protocols;

// Re-export.
pub use ansi_parser_public_api::AnsiToWindowPerformer;

// VT100 conformance test modules.
#[cfg(test)]
mod vt_100_ansi_conformance_tests;
