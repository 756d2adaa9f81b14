// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! C0 control characters: LF, CR, BS, and NAK (Ctrl-U kill-to-line-start).
//! Everything else in the C0 range is ignored: the window has no
//! tab stops, and bells/shifts are not part of the image.

use super::WindowScreen;
use crate::term_units::{col, cursor_pos};

impl WindowScreen {
    /// LF: move down one line (scrolling at the region bottom), keep the
    /// column.
    pub fn line_feed(&mut self) {
        self.index_down();
        self.wrap_pending = false;
        self.painter.move_to(self.cursor);
    }

    /// CR: return to column 0.
    pub fn carriage_return(&mut self) {
        self.cursor.col = col(0);
        self.wrap_pending = false;
        self.painter.move_to(self.cursor);
    }

    /// BS: destructive backspace. Steps left one cell (if not already at the
    /// left edge) and rubs the cell out with the current attribute.
    pub fn backspace(&mut self) {
        if self.cursor.col > col(0) {
            self.cursor.col = col(self.cursor.col.as_u16() - 1);
            self.wrap_pending = false;
            self.painter.move_to(self.cursor);
            self.painter.emit_attr(&self.current_attr);
            self.painter.emit_char(' ');
            self.grid
                .set(self.cursor.row, self.cursor.col, ' ', self.current_attr);
            self.painter.move_to(self.cursor);
        }
    }

    /// NAK (Ctrl-U): erase from the start of the line through the cursor,
    /// then return to column 0. The host is painted with spaces in the
    /// current attribute (so an active background color fills the span).
    pub fn erase_to_line_start(&mut self) {
        let end_col = self.cursor.col;
        for c in 0..=end_col.as_u16() {
            self.grid.reset(self.cursor.row, col(c));
        }
        self.painter.move_to(cursor_pos(self.cursor.row, col(0)));
        self.painter.emit_attr(&self.current_attr);
        for _ in 0..=end_col.as_u16() {
            self.painter.emit_char(' ');
        }
        self.cursor.col = col(0);
        self.painter.move_to(self.cursor);
        self.wrap_pending = false;
    }
}
