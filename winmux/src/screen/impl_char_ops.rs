// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Printable writes and character insertion/deletion/erasure (ICH/DCH/ECH).
//!
//! # Deferred wrap
//!
//! Writing into the last column does not move the cursor off it; it arms
//! `wrap_pending` instead. The *next* printable write first advances to a new
//! line (scrolling if needed). Without this, `"…X\r\n"` at the right edge
//! would double-advance the cursor. While the last column is being written,
//! host auto-wrap (DECAWM) is toggled off so the host cursor does not wrap
//! out of the window on its own.

use super::WindowScreen;
use crate::term_units::{col, row};
use crate::vt_100_ansi_parser::protocols::csi_codes::{CsiSequence, DECAWM_AUTO_WRAP};

impl WindowScreen {
    /// Write one printable character at the cursor and advance it, honoring
    /// the deferred-wrap rule.
    pub fn print_char(&mut self, ch: char) {
        if self.wrap_pending {
            if self.cursor.row < self.scroll_bottom {
                self.cursor.row = row(self.cursor.row.as_u16() + 1);
            } else {
                self.scroll_region_up(self.scroll_top, self.scroll_bottom, 1);
            }
            self.cursor.col = col(0);
            self.wrap_pending = false;
        }

        self.painter.move_to(self.cursor);

        let at_last_col = self.cursor.col == self.grid.max_col();
        if at_last_col {
            self.painter
                .emit(CsiSequence::DisablePrivateMode(DECAWM_AUTO_WRAP));
        }

        self.painter.emit_attr(&self.current_attr);
        self.painter.emit_char(ch);
        self.grid
            .set(self.cursor.row, self.cursor.col, ch, self.current_attr);

        if at_last_col {
            self.painter
                .emit(CsiSequence::EnablePrivateMode(DECAWM_AUTO_WRAP));
            self.wrap_pending = true;
        } else {
            self.cursor.col = col(self.cursor.col.as_u16() + 1);
        }
    }

    /// ICH: open `n` blank cells at the cursor, pushing the tail right (cells
    /// shifted past the window edge are lost). `n` clamps to the remaining
    /// width. Repaints the row from the cursor.
    pub fn insert_chars_at_cursor(&mut self, arg_n: u16) {
        let n = self.clamp_to_row_remainder(arg_n);
        self.grid.shift_row_right(self.cursor.row, self.cursor.col, n);
        self.painter.draw_line(
            &self.grid,
            self.cursor.row,
            self.cursor.col,
            self.grid.max_col(),
            self.cursor,
        );
    }

    /// DCH: close `n` cells at the cursor, pulling the tail left and blanking
    /// the vacated right edge. `n` clamps to the remaining width.
    pub fn delete_chars_at_cursor(&mut self, arg_n: u16) {
        let n = self.clamp_to_row_remainder(arg_n);
        self.grid.shift_row_left(self.cursor.row, self.cursor.col, n);
        self.painter.draw_line(
            &self.grid,
            self.cursor.row,
            self.cursor.col,
            self.grid.max_col(),
            self.cursor,
        );
    }

    /// ECH: blank `n` cells at the cursor without shifting anything. `n`
    /// clamps to the remaining width. Repaints only the blanked span.
    pub fn erase_chars_at_cursor(&mut self, arg_n: u16) {
        let n = self.clamp_to_row_remainder(arg_n);
        if n == 0 {
            return;
        }
        for c in 0..n {
            self.grid
                .reset(self.cursor.row, col(self.cursor.col.as_u16() + c));
        }
        self.painter.draw_line(
            &self.grid,
            self.cursor.row,
            self.cursor.col,
            col(self.cursor.col.as_u16() + n - 1),
            self.cursor,
        );
    }

    /// Clamp a count to the cells between the cursor and the right edge,
    /// inclusive.
    fn clamp_to_row_remainder(&self, n: u16) -> u16 {
        n.min(self.grid.col_count() - self.cursor.col.as_u16())
    }
}
