// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Thin shims between the parser dispatch and the screen implementation.
//!
//! ```text
//! Child Process (vim, bash, ...)
//!         ↓
//!     PTY Master (byte stream)
//!         ↓
//!     VTE Parser (state machine, persists across reads)
//!         ↓
//!     Perform trait impl → routes to one module below
//!         ↓
//!     WindowScreen impl_*_ops (business logic)
//!         ↓
//!     WindowGrid mutation + HostPainter emission
//! ```
//!
//! Each function here does exactly two things: extract parameters in
//! VT100-compliant form, and call the corresponding `WindowScreen` method.
//! No business logic lives at this layer, and it intentionally has no unit
//! tests of its own: the implementation layer has unit tests, and the
//! [conformance tests](super::vt_100_ansi_conformance_tests) exercise the
//! whole pipeline through the public byte API.

// Attach.
pub mod char_ops;
pub mod control_ops;
pub mod cursor_ops;
pub mod erase_ops;
pub mod forward_ops;
pub mod line_ops;
pub mod margin_ops;
pub mod mode_ops;
pub mod sgr_ops;
