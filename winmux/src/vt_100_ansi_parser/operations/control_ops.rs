// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! C0 control characters dispatched via `execute()`.

use super::super::ansi_parser_public_api::AnsiToWindowPerformer;

/// LF (0x0A) - line feed, scrolling at the region bottom.
pub fn line_feed(performer: &mut AnsiToWindowPerformer<'_>) {
    performer.screen.line_feed();
}

/// CR (0x0D) - return to column 0.
pub fn carriage_return(performer: &mut AnsiToWindowPerformer<'_>) {
    performer.screen.carriage_return();
}

/// BS (0x08) - destructive backspace.
pub fn backspace(performer: &mut AnsiToWindowPerformer<'_>) {
    performer.screen.backspace();
}

/// NAK (0x15, Ctrl-U) - erase from the start of the line through the cursor.
pub fn erase_to_line_start(performer: &mut AnsiToWindowPerformer<'_>) {
    performer.screen.erase_to_line_start();
}
