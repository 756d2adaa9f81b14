// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Line insertion and deletion (IL / DL).
//!
//! Both are scroll operations restricted to the sub-region between the cursor
//! row and `scroll_bottom`: IL rotates it down so blank lines open at the
//! cursor, DL rotates it up so the lines below close the gap. Outside the
//! scroll region they are no-ops.

use super::WindowScreen;

impl WindowScreen {
    /// IL: insert `n` blank lines at the cursor row.
    pub fn insert_lines_at_cursor(&mut self, n: u16) {
        if self.cursor_inside_scroll_region() {
            self.scroll_region_down(self.cursor.row, self.scroll_bottom, n);
        }
    }

    /// DL: delete `n` lines at the cursor row.
    pub fn delete_lines_at_cursor(&mut self, n: u16) {
        if self.cursor_inside_scroll_region() {
            self.scroll_region_up(self.cursor.row, self.scroll_bottom, n);
        }
    }

    fn cursor_inside_scroll_region(&self) -> bool {
        self.cursor.row >= self.scroll_top && self.cursor.row <= self.scroll_bottom
    }
}
