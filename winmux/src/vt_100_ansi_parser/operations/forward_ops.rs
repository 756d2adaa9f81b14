// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Pass-through of sequences the window does not model.
//!
//! The design prefers forwarding over failure: unknown CSI finals,
//! intermediate-carrying sequences, unrecognized ESC finals, and OSC strings
//! are rebuilt from their parsed pieces and re-emitted, so host-specific
//! escapes (titles, hyperlinks, cursor styling) keep working without the
//! core modeling them.

use super::super::ansi_parser_public_api::AnsiToWindowPerformer;

/// CSI with an unknown final or with intermediates: re-emit toward the host.
pub fn forward_csi(
    performer: &mut AnsiToWindowPerformer<'_>,
    params: &vte::Params,
    intermediates: &[u8],
    final_char: char,
) {
    tracing::trace!(%final_char, "forwarding unhandled CSI sequence");
    performer
        .screen
        .painter
        .forward_csi(false, params, intermediates, final_char);
}

/// ESC with an unrecognized final: re-emit `ESC` + intermediates + final.
pub fn forward_esc(
    performer: &mut AnsiToWindowPerformer<'_>,
    intermediates: &[u8],
    byte: u8,
) {
    performer.screen.painter.forward_esc(intermediates, byte);
}

/// OSC: re-emit with the original terminator kind.
pub fn forward_osc(
    performer: &mut AnsiToWindowPerformer<'_>,
    params: &[&[u8]],
    bell_terminated: bool,
) {
    performer.screen.painter.forward_osc(params, bell_terminated);
}
