// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Line insertion and deletion shims (IL / DL).

use super::super::ansi_parser_public_api::AnsiToWindowPerformer;
use super::super::protocols::params_ext::ParamsExt;
use vte::Params;

/// IL - insert `n` blank lines at the cursor row.
pub fn insert_lines(performer: &mut AnsiToWindowPerformer<'_>, params: &Params) {
    let n = params.extract_nth_non_zero(0);
    performer.screen.insert_lines_at_cursor(n);
}

/// DL - delete `n` lines at the cursor row.
pub fn delete_lines(performer: &mut AnsiToWindowPerformer<'_>, params: &Params) {
    let n = params.extract_nth_non_zero(0);
    performer.screen.delete_lines_at_cursor(n);
}
