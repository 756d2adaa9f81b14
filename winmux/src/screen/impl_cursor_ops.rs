// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor movement (CUU/CUD/CUF/CUB/CUP/CHA) and save/restore (DECSC/DECRC,
//! SCP/RCP).
//!
//! Relative vertical movement clamps to the scroll region; absolute
//! positioning (CUP) clamps to the full grid. Every motion here clears
//! `wrap_pending`: a deferred wrap only survives until something else moves
//! the cursor.

use super::WindowScreen;
use crate::term_units::{ColIndex, RowIndex, col, row};

impl WindowScreen {
    /// CUU: up `n`, stopping at `scroll_top`.
    pub fn cursor_up(&mut self, n: u16) {
        let target = self.cursor.row.as_u16().saturating_sub(n);
        self.cursor.row = row(target.max(self.scroll_top.as_u16()));
        self.finish_cursor_motion();
    }

    /// CUD: down `n`, stopping at `scroll_bottom`.
    pub fn cursor_down(&mut self, n: u16) {
        let target = self.cursor.row.as_u16().saturating_add(n);
        self.cursor.row = row(target.min(self.scroll_bottom.as_u16()));
        self.finish_cursor_motion();
    }

    /// CUF: right `n`, stopping at the last column.
    pub fn cursor_forward(&mut self, n: u16) {
        let target = self.cursor.col.as_u16().saturating_add(n);
        self.cursor.col = col(target.min(self.grid.max_col().as_u16()));
        self.finish_cursor_motion();
    }

    /// CUB: left `n`, stopping at column 0.
    pub fn cursor_backward(&mut self, n: u16) {
        self.cursor.col = col(self.cursor.col.as_u16().saturating_sub(n));
        self.finish_cursor_motion();
    }

    /// CUP/HVP: absolute position, clamped to the grid.
    pub fn cursor_to_position(&mut self, arg_row: RowIndex, arg_col: ColIndex) {
        self.cursor.row = arg_row.min(self.grid.max_row());
        self.cursor.col = arg_col.min(self.grid.max_col());
        self.finish_cursor_motion();
    }

    /// CHA: absolute column on the current row, clamped.
    pub fn cursor_to_column(&mut self, arg_col: ColIndex) {
        self.cursor.col = arg_col.min(self.grid.max_col());
        self.finish_cursor_motion();
    }

    /// DECSC / SCP: remember the cursor. No host emission.
    pub fn save_cursor_position(&mut self) { self.saved_cursor = self.cursor; }

    /// DECRC / RCP: restore the remembered cursor, clamping its row into the
    /// scroll region. The scroll region itself is never touched here.
    pub fn restore_cursor_position(&mut self) {
        self.cursor = self.saved_cursor;
        self.cursor.row = self
            .cursor
            .row
            .max(self.scroll_top)
            .min(self.scroll_bottom);
        self.finish_cursor_motion();
    }

    fn finish_cursor_motion(&mut self) {
        self.wrap_pending = false;
        self.painter.move_to(self.cursor);
    }
}
