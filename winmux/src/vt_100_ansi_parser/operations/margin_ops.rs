// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scroll region shim (DECSTBM).
//!
//! Parameters stay raw through this layer: `Some(0)` and `None` both resolve
//! to a window edge, but only the implementation knows which edge, so no
//! defaulting happens here.

use super::super::ansi_parser_public_api::AnsiToWindowPerformer;
use super::super::protocols::params_ext::ParamsExt;
use vte::Params;

/// DECSTBM - set the top/bottom scroll margins.
pub fn set_scroll_margins(performer: &mut AnsiToWindowPerformer<'_>, params: &Params) {
    let raw_top = params.extract_nth_raw(0);
    let raw_bottom = params.extract_nth_raw(1);
    performer.screen.set_scroll_margins(raw_top, raw_bottom);
}
