// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Display and line erasure (ED / EL).
//!
//! Both leave the cursor (and a pending wrap) where they were. ED repaints
//! the affected rows from the grid; EL paints spaces in the *current*
//! attribute directly, so an active background color fills the cleared span
//! without a grid round-trip.

use super::WindowScreen;
use crate::term_units::{col, cursor_pos, row};

/// ED/EL mode: from the cursor to the end of the range.
pub const ERASE_MODE_TO_END: u16 = 0;
/// ED/EL mode: from the start of the range through the cursor.
pub const ERASE_MODE_TO_START: u16 = 1;
/// ED/EL mode: the whole range.
pub const ERASE_MODE_ALL: u16 = 2;
/// ED only: same as [`ERASE_MODE_ALL`] here (no scrollback to clear).
pub const ERASE_MODE_ALL_WITH_SCROLLBACK: u16 = 3;

impl WindowScreen {
    /// ED: erase part or all of the display. Modes 2 and 3 also reset the
    /// current attribute to default. Cursor unchanged.
    pub fn erase_display(&mut self, mode: u16) {
        let max_col = self.grid.max_col();
        match mode {
            ERASE_MODE_ALL | ERASE_MODE_ALL_WITH_SCROLLBACK => {
                for r in 0..self.grid.row_count() {
                    self.grid.reset_row(row(r));
                    self.painter
                        .draw_line(&self.grid, row(r), col(0), max_col, self.cursor);
                }
                self.current_attr.reset();
            }
            ERASE_MODE_TO_END => {
                for c in self.cursor.col.as_u16()..self.grid.col_count() {
                    self.grid.reset(self.cursor.row, col(c));
                }
                self.painter.draw_line(
                    &self.grid,
                    self.cursor.row,
                    self.cursor.col,
                    max_col,
                    self.cursor,
                );
                for r in self.cursor.row.as_u16() + 1..self.grid.row_count() {
                    self.grid.reset_row(row(r));
                    self.painter
                        .draw_line(&self.grid, row(r), col(0), max_col, self.cursor);
                }
            }
            ERASE_MODE_TO_START => {
                for r in 0..self.cursor.row.as_u16() {
                    self.grid.reset_row(row(r));
                    self.painter
                        .draw_line(&self.grid, row(r), col(0), max_col, self.cursor);
                }
                for c in 0..=self.cursor.col.as_u16() {
                    self.grid.reset(self.cursor.row, col(c));
                }
                self.painter.draw_line(
                    &self.grid,
                    self.cursor.row,
                    col(0),
                    self.cursor.col,
                    self.cursor,
                );
            }
            _ => {}
        }
        self.painter.move_to(self.cursor);
    }

    /// EL: erase part or all of the current row. Cursor unchanged.
    pub fn erase_line(&mut self, mode: u16) {
        let (from, to) = match mode {
            ERASE_MODE_TO_END => (self.cursor.col.as_u16(), self.grid.max_col().as_u16()),
            ERASE_MODE_TO_START => (0, self.cursor.col.as_u16()),
            ERASE_MODE_ALL => (0, self.grid.max_col().as_u16()),
            _ => return,
        };

        for c in from..=to {
            self.grid.reset(self.cursor.row, col(c));
        }
        self.painter.move_to(cursor_pos(self.cursor.row, col(from)));
        self.painter.emit_attr(&self.current_attr);
        for _ in from..=to {
            self.painter.emit_char(' ');
        }
        self.painter.move_to(self.cursor);
    }
}
