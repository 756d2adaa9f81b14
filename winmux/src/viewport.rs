// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Window placement on the host terminal.
//!
//! [`WindowRect`] is the immutable placement computed once at startup: a
//! 0-based origin on the host plus the window size in cells. It owns the
//! virtual→host coordinate translation (`host = origin + virtual`, emitted
//! 1-based).
//!
//! [`resolve_geometry`] turns the CLI values into a validated rect:
//!
//! - `x`/`y` are 1-based host positions; a negative value counts from the
//!   right/bottom edge (`-1` is the last column/row).
//! - `w`/`h` are sizes in cells; zero or negative means "host dimension minus
//!   that amount" (`0` is the full dimension).
//! - Defaults: `x = y = 9`, `w = host_cols − 16`, `h = host_rows − 16`.

use crate::term_units::{ColIndex, RowIndex, TermCol, TermRow};
use thiserror::Error;

/// Default 1-based position when `-x`/`-y` are not given.
pub const DEFAULT_POSITION: i32 = 9;

/// Margin subtracted from the host dimension when `-w`/`-h` are not given.
pub const DEFAULT_SIZE_MARGIN: i32 = 16;

/// Window geometry that cannot be realized on the current host terminal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error(
        "invalid position or size: window x={x} y={y} w={w} h={h} does not fit \
         host terminal of {host_cols}x{host_rows} cells"
    )]
    DoesNotFitHost {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        host_rows: u16,
        host_cols: u16,
    },
}

/// Placement of the window on the host terminal. Immutable after init.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowRect {
    /// 0-based host row of the window's top-left cell.
    pub origin_row: RowIndex,
    /// 0-based host column of the window's top-left cell.
    pub origin_col: ColIndex,
    /// Window height in cells (`H`).
    pub row_count: u16,
    /// Window width in cells (`W`).
    pub col_count: u16,
}

impl WindowRect {
    /// Translate a virtual row to the 1-based host row.
    #[must_use]
    pub const fn to_host_row(&self, r: RowIndex) -> TermRow {
        TermRow::new(self.origin_row.as_u16() + r.as_u16() + 1)
    }

    /// Translate a virtual column to the 1-based host column.
    #[must_use]
    pub const fn to_host_col(&self, c: ColIndex) -> TermCol {
        TermCol::new(self.origin_col.as_u16() + c.as_u16() + 1)
    }

    /// 1-based host row of the window's top edge.
    #[must_use]
    pub const fn top_host_row(&self) -> TermRow { TermRow::new(self.origin_row.as_u16() + 1) }

    /// 1-based host row of the window's bottom edge.
    #[must_use]
    pub const fn bottom_host_row(&self) -> TermRow {
        TermRow::new(self.origin_row.as_u16() + self.row_count)
    }

    /// 1-based host column of the window's left edge.
    #[must_use]
    pub const fn left_host_col(&self) -> TermCol { TermCol::new(self.origin_col.as_u16() + 1) }

    /// 1-based host column of the window's right edge.
    #[must_use]
    pub const fn right_host_col(&self) -> TermCol {
        TermCol::new(self.origin_col.as_u16() + self.col_count)
    }
}

/// Resolve CLI position/size values against the host terminal size.
///
/// # Errors
///
/// Returns [`GeometryError::DoesNotFitHost`] when the resolved window does not
/// lie fully inside the host terminal.
pub fn resolve_geometry(
    arg_x: Option<i32>,
    arg_y: Option<i32>,
    arg_w: Option<i32>,
    arg_h: Option<i32>,
    host_rows: u16,
    host_cols: u16,
) -> Result<WindowRect, GeometryError> {
    let mut x = arg_x.unwrap_or(DEFAULT_POSITION);
    let mut y = arg_y.unwrap_or(DEFAULT_POSITION);
    let mut w = arg_w.unwrap_or(i32::from(host_cols) - DEFAULT_SIZE_MARGIN);
    let mut h = arg_h.unwrap_or(i32::from(host_rows) - DEFAULT_SIZE_MARGIN);

    if x < 0 {
        x += i32::from(host_cols) + 1;
    }
    if y < 0 {
        y += i32::from(host_rows) + 1;
    }
    if w <= 0 {
        w += i32::from(host_cols);
    }
    if h <= 0 {
        h += i32::from(host_rows);
    }

    let fits = x >= 1
        && y >= 1
        && w >= 1
        && h >= 1
        && x + w - 1 <= i32::from(host_cols)
        && y + h - 1 <= i32::from(host_rows);
    if !fits {
        return Err(GeometryError::DoesNotFitHost {
            x,
            y,
            w,
            h,
            host_rows,
            host_cols,
        });
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(WindowRect {
        origin_row: RowIndex(y as u16 - 1),
        origin_col: ColIndex(x as u16 - 1),
        row_count: h as u16,
        col_count: w as u16,
    })
}
