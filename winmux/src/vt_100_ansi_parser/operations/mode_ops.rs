// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! DEC private mode partitioning (`CSI ? … final`).
//!
//! The window never *interprets* private modes. It splits them into two
//! buckets:
//!
//! - **Suppressed**: alternate-screen, mouse-reporting, and bracketed-paste
//!   toggles. Forwarding any of these would hand the child control over
//!   host-global state and shatter the windowing illusion (a mouse report,
//!   for instance, would carry host-absolute coordinates the child cannot
//!   interpret). They are dropped silently.
//! - **Forwarded**: everything else is assumed cosmetic (cursor visibility,
//!   cursor blink, ...) and re-emitted to the host.
//!
//! Any future mode with host-global effect belongs in the suppression list.

use super::super::ansi_parser_public_api::AnsiToWindowPerformer;
use super::super::protocols::params_ext::ParamsExt;
use vte::Params;

/// Private modes that must never reach the host: alternate screen buffer
/// variants, mouse tracking protocols, focus reporting, and bracketed paste.
pub const SUPPRESSED_PRIVATE_MODES: &[u16] = &[
    47, 1047, 1048, 1049, // alternate screen (+ cursor save variants)
    1000, 1001, 1002, 1003, // mouse tracking protocols
    1004, // focus in/out reporting
    1005, 1006, 1015, 1016, // mouse coordinate encodings
    2004, // bracketed paste
];

/// `CSI ? … h/l` (and any other private-marked final): suppress or forward.
pub fn handle_private_mode(
    performer: &mut AnsiToWindowPerformer<'_>,
    params: &Params,
    intermediates: &[u8],
    final_char: char,
) {
    let mode = params.extract_nth_raw(0).unwrap_or(0);
    if SUPPRESSED_PRIVATE_MODES.contains(&mode) {
        tracing::trace!(mode, %final_char, "suppressed private mode sequence");
        return;
    }
    performer
        .screen
        .painter
        .forward_csi(true, params, intermediates, final_char);
}
