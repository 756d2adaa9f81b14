// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End-to-end VT100 conformance tests.
//!
//! Everything here drives the public byte API
//! ([`apply_ansi_bytes`](crate::screen::WindowScreen::apply_ansi_bytes)) with
//! streams assembled from the typed sequence builders, then asserts on grid
//! content, cursor state, and the bytes emitted toward the host. This is the
//! layer that exercises the parser shims (which have no unit tests of their
//! own) together with the screen implementation.

mod test_cursor_and_margin_ops;
mod test_erase_ops;
mod test_invariants;
mod test_sgr_ops;
