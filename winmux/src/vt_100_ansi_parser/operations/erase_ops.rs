// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Display and line erasure shims (ED / EL).
//!
//! The mode parameter is taken raw: missing means 0 ("to end"), and zero is a
//! real mode; the count-style "0 means 1" rule does not apply here.

use super::super::ansi_parser_public_api::AnsiToWindowPerformer;
use super::super::protocols::params_ext::ParamsExt;
use vte::Params;

/// ED - erase in display.
pub fn erase_display(performer: &mut AnsiToWindowPerformer<'_>, params: &Params) {
    let mode = params.extract_nth_raw(0).unwrap_or(0);
    performer.screen.erase_display(mode);
}

/// EL - erase in line.
pub fn erase_line(performer: &mut AnsiToWindowPerformer<'_>, params: &Params) {
    let mode = params.extract_nth_raw(0).unwrap_or(0);
    performer.screen.erase_line(mode);
}
