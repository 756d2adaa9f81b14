// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scrolling: region rotation plus the shared vertical-index movements that
//! LF, IND (ESC D), and RI (ESC M) are built from.
//!
//! A scroll never copies surviving rows; the grid rotates its row-offset
//! table and the painter repaints the affected region from the grid (the host
//! has no scrollback to lean on inside the window, so the region repaint is
//! the scroll as far as the host is concerned).

use super::WindowScreen;
use crate::term_units::{RowIndex, col, row};

impl WindowScreen {
    /// Rotate `[top, bot]` up by `n` and repaint the region.
    pub fn scroll_region_up(&mut self, top: RowIndex, bot: RowIndex, n: u16) {
        self.grid.rotate_up(top, bot, n);
        self.redraw_region(top, bot);
    }

    /// Rotate `[top, bot]` down by `n` and repaint the region.
    pub fn scroll_region_down(&mut self, top: RowIndex, bot: RowIndex, n: u16) {
        self.grid.rotate_down(top, bot, n);
        self.redraw_region(top, bot);
    }

    /// Move down one line, scrolling the region up when the cursor sits on
    /// (or below) `scroll_bottom`. Shared by LF and IND.
    pub fn index_down(&mut self) {
        if self.cursor.row < self.scroll_bottom {
            self.cursor.row = row(self.cursor.row.as_u16() + 1);
        } else {
            self.scroll_region_up(self.scroll_top, self.scroll_bottom, 1);
        }
    }

    /// Move up one line, scrolling the region down when the cursor sits on
    /// (or above) `scroll_top`. Shared by RI.
    pub fn reverse_index_up(&mut self) {
        if self.cursor.row > self.scroll_top {
            self.cursor.row = row(self.cursor.row.as_u16() - 1);
        } else {
            self.scroll_region_down(self.scroll_top, self.scroll_bottom, 1);
        }
    }

    /// IND (ESC D): index down and re-park the host cursor.
    pub fn esc_index_down(&mut self) {
        self.index_down();
        self.painter.move_to(self.cursor);
    }

    /// RI (ESC M): reverse index and re-park the host cursor.
    pub fn esc_reverse_index_up(&mut self) {
        self.reverse_index_up();
        self.painter.move_to(self.cursor);
    }

    fn redraw_region(&mut self, top: RowIndex, bot: RowIndex) {
        for r in top.as_u16()..=bot.as_u16() {
            self.painter.draw_line(
                &self.grid,
                row(r),
                col(0),
                self.grid.max_col(),
                self.cursor,
            );
        }
    }
}
