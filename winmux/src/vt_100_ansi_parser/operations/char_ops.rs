// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Printable characters and character editing (ICH / DCH / ECH).

use super::super::ansi_parser_public_api::AnsiToWindowPerformer;
use super::super::protocols::params_ext::ParamsExt;
use vte::Params;

/// Printable character: write at the cursor with the current attribute.
/// See [`WindowScreen::print_char`] for the deferred-wrap behavior.
///
/// [`WindowScreen::print_char`]: crate::screen::WindowScreen::print_char
pub fn print_char(performer: &mut AnsiToWindowPerformer<'_>, ch: char) {
    performer.screen.print_char(ch);
}

/// ICH - insert `n` blank characters at the cursor; the tail shifts right.
pub fn insert_chars(performer: &mut AnsiToWindowPerformer<'_>, params: &Params) {
    let n = params.extract_nth_non_zero(0);
    performer.screen.insert_chars_at_cursor(n);
}

/// DCH - delete `n` characters at the cursor; the tail shifts left.
pub fn delete_chars(performer: &mut AnsiToWindowPerformer<'_>, params: &Params) {
    let n = params.extract_nth_non_zero(0);
    performer.screen.delete_chars_at_cursor(n);
}

/// ECH - blank `n` characters at the cursor without shifting.
pub fn erase_chars(performer: &mut AnsiToWindowPerformer<'_>, params: &Params) {
    let n = params.extract_nth_non_zero(0);
    performer.screen.erase_chars_at_cursor(n);
}
