// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor movement and save/restore shims.
//!
//! Count parameters follow the VT100 convention: missing and zero both mean
//! 1 (`ESC[A`, `ESC[0A`, and `ESC[1A` are the same movement). CUP/CHA
//! parameters are 1-based and converted to 0-based here; clamping happens in
//! the implementation layer.

use super::super::ansi_parser_public_api::AnsiToWindowPerformer;
use super::super::protocols::params_ext::ParamsExt;
use crate::term_units::{col, row};
use vte::Params;

/// CUU - cursor up `n`, clamped at the scroll region top.
pub fn cursor_up(performer: &mut AnsiToWindowPerformer<'_>, params: &Params) {
    let n = params.extract_nth_non_zero(0);
    performer.screen.cursor_up(n);
}

/// CUD - cursor down `n`, clamped at the scroll region bottom.
pub fn cursor_down(performer: &mut AnsiToWindowPerformer<'_>, params: &Params) {
    let n = params.extract_nth_non_zero(0);
    performer.screen.cursor_down(n);
}

/// CUF - cursor right `n`, clamped at the last column.
pub fn cursor_forward(performer: &mut AnsiToWindowPerformer<'_>, params: &Params) {
    let n = params.extract_nth_non_zero(0);
    performer.screen.cursor_forward(n);
}

/// CUB - cursor left `n`, clamped at column 0.
pub fn cursor_backward(performer: &mut AnsiToWindowPerformer<'_>, params: &Params) {
    let n = params.extract_nth_non_zero(0);
    performer.screen.cursor_backward(n);
}

/// CUP / HVP - absolute position from 1-based `row ; col` parameters.
pub fn cursor_position(performer: &mut AnsiToWindowPerformer<'_>, params: &Params) {
    let row_1based = params.extract_nth_non_zero(0);
    let col_1based = params.extract_nth_non_zero(1);
    performer
        .screen
        .cursor_to_position(row(row_1based - 1), col(col_1based - 1));
}

/// CHA - absolute column from a 1-based parameter.
pub fn cursor_column(performer: &mut AnsiToWindowPerformer<'_>, params: &Params) {
    let col_1based = params.extract_nth_non_zero(0);
    performer.screen.cursor_to_column(col(col_1based - 1));
}

/// SCP / DECSC - save the cursor.
pub fn save_cursor(performer: &mut AnsiToWindowPerformer<'_>) {
    performer.screen.save_cursor_position();
}

/// RCP / DECRC - restore the cursor, clamped into the scroll region.
pub fn restore_cursor(performer: &mut AnsiToWindowPerformer<'_>) {
    performer.screen.restore_cursor_position();
}
