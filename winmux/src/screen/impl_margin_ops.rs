// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Scroll region installation (DECSTBM).

use super::WindowScreen;
use crate::term_units::{col, cursor_pos, row};

impl WindowScreen {
    /// DECSTBM: set the scroll region from raw 1-based parameters.
    ///
    /// A missing or zero top means row 1; a missing or zero bottom means the
    /// last row. The top is clamped into the grid, then `top ≤ bottom < H` is
    /// validated; on violation the request is ignored wholesale. On success
    /// the cursor homes to the region's top-left.
    pub fn set_scroll_margins(&mut self, raw_top: Option<u16>, raw_bottom: Option<u16>) {
        let max_row = self.grid.max_row().as_u16();
        let top = raw_top
            .filter(|value| *value > 0)
            .map_or(0, |value| value - 1)
            .min(max_row);
        let bottom = raw_bottom
            .filter(|value| *value > 0)
            .map_or(max_row, |value| value - 1);

        if top > bottom || bottom > max_row {
            return;
        }

        self.scroll_top = row(top);
        self.scroll_bottom = row(bottom);
        self.cursor = cursor_pos(self.scroll_top, col(0));
        self.wrap_pending = false;
        self.painter.move_to(self.cursor);
    }
}
