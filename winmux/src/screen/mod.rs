// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The virtual screen state machine.
//!
//! [`WindowScreen`] owns everything the child believes about its terminal:
//! the cell grid, the cursor, the scroll region, the saved cursor, the
//! deferred-wrap flag, and the accumulated SGR state. The `impl_*_ops`
//! modules carry the control-function business logic, one file per operation
//! family, mirroring the thin shims in
//! [`operations`](crate::vt_100_ansi_parser::operations):
//!
//! ```text
//! vt_100_ansi_parser/operations/     screen/
//! ├── char_ops.rs         →         ├── impl_char_ops.rs
//! ├── control_ops.rs      →         ├── impl_control_ops.rs
//! ├── cursor_ops.rs       →         ├── impl_cursor_ops.rs
//! ├── erase_ops.rs        →         ├── impl_erase_ops.rs
//! ├── line_ops.rs         →         ├── impl_line_ops.rs
//! ├── margin_ops.rs       →         ├── impl_margin_ops.rs
//! ├── sgr_ops.rs          →         ├── impl_sgr_ops.rs
//! └── (scrolling shared)  →         └── impl_scroll_ops.rs
//! ```
//!
//! # Invariants
//!
//! Every operation leaves the state satisfying:
//!
//! 1. `0 ≤ cursor.row < H`, `0 ≤ cursor.col < W`
//! 2. `0 ≤ scroll_top ≤ scroll_bottom < H`
//! 3. `wrap_pending ⇒ cursor.col = W − 1`
//!
//! All clamping happens here (never in the parser shims), so out-of-range
//! indices are impossible by construction.

use crate::grid::{CellAttr, WindowGrid};
use crate::term_units::{CursorPos, RowIndex, TermCol, TermRow, col, cursor_pos, row};
use crate::viewport::WindowRect;
use crate::vt_100_ansi_parser::protocols::csi_codes::{CsiSequence,
                                                      DECLRMM_LEFT_RIGHT_MARGIN_MODE};
use host_painter::HostPainter;

// Attach.
pub mod host_painter;
pub mod impl_char_ops;
pub mod impl_control_ops;
pub mod impl_cursor_ops;
pub mod impl_erase_ops;
pub mod impl_line_ops;
pub mod impl_margin_ops;
pub mod impl_scroll_ops;
pub mod impl_sgr_ops;


/// Virtual screen for one window: grid, cursor, scroll region, SGR
/// accumulator, and the host painter that renders state changes.
pub struct WindowScreen {
    pub grid: WindowGrid,
    pub cursor: CursorPos,
    pub saved_cursor: CursorPos,
    pub scroll_top: RowIndex,
    pub scroll_bottom: RowIndex,
    pub wrap_pending: bool,
    pub current_attr: CellAttr,
    pub painter: HostPainter,
    /// Tokenizer state, persisted so sequences split across reads parse the
    /// same as contiguous ones.
    pub(crate) parser: vte::Parser,
}

impl std::fmt::Debug for WindowScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WindowScreen")
            .field("cursor", &self.cursor)
            .field("saved_cursor", &self.saved_cursor)
            .field("scroll_top", &self.scroll_top)
            .field("scroll_bottom", &self.scroll_bottom)
            .field("wrap_pending", &self.wrap_pending)
            .field("current_attr", &self.current_attr)
            .field("parser", &"<Parser>")
            .finish_non_exhaustive()
    }
}

impl WindowScreen {
    /// Create a blank screen for a window placed at `rect`. The scroll region
    /// starts out covering the full window.
    #[must_use]
    pub fn new(rect: WindowRect) -> Self {
        let grid = WindowGrid::new(rect.row_count, rect.col_count);
        let scroll_bottom = grid.max_row();
        Self {
            grid,
            cursor: cursor_pos(row(0), col(0)),
            saved_cursor: cursor_pos(row(0), col(0)),
            scroll_top: row(0),
            scroll_bottom,
            wrap_pending: false,
            current_attr: CellAttr::default(),
            painter: HostPainter::new(rect),
            parser: vte::Parser::new(),
        }
    }

    /// Drain the bytes destined for the host terminal.
    pub fn take_host_bytes(&mut self) -> Vec<u8> { self.painter.take_bytes() }

    /// Startup emission: install the host viewport (DECLRMM + left/right +
    /// top/bottom margins), paint every (blank) row, and park the cursor at
    /// the window's top-left cell.
    pub fn install_viewport(&mut self) {
        let rect = self.painter.rect();
        self.painter
            .emit(CsiSequence::EnablePrivateMode(DECLRMM_LEFT_RIGHT_MARGIN_MODE));
        self.painter.emit(CsiSequence::SetLeftRightMargins {
            left: rect.left_host_col(),
            right: rect.right_host_col(),
        });
        self.painter.emit(CsiSequence::SetScrollingMargins {
            top: rect.top_host_row(),
            bottom: rect.bottom_host_row(),
        });
        for r in 0..rect.row_count {
            self.painter.draw_line(
                &self.grid,
                row(r),
                col(0),
                self.grid.max_col(),
                self.cursor,
            );
        }
        self.painter.move_to(self.cursor);
    }

    /// Shutdown emission: release the margin installation so the host gets
    /// its full screen back.
    pub fn restore_viewport(&mut self, host_rows: u16, host_cols: u16) {
        self.painter
            .emit(CsiSequence::DisablePrivateMode(DECLRMM_LEFT_RIGHT_MARGIN_MODE));
        self.painter.emit(CsiSequence::SetScrollingMargins {
            top: TermRow::new(1),
            bottom: TermRow::new(host_rows),
        });
        self.painter.emit(CsiSequence::SetLeftRightMargins {
            left: TermCol::new(1),
            right: TermCol::new(host_cols),
        });
    }
}
