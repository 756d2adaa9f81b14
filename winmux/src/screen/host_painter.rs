// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Host-side emission: virtual coordinates in, translated ANSI bytes out.
//!
//! Every byte that reaches the host terminal funnels through this type. It
//! owns the window placement ([`WindowRect`]) and an in-memory byte sink; the
//! event loop drains the sink to stdout after each processed chunk, so the
//! screen state machine never touches an fd directly and stays deterministic
//! under test.
//!
//! # Attribute-change minimization
//!
//! [`draw_line`] tracks the last emitted [`CellAttr`] and only re-emits SGR
//! state when the *whole* attribute differs from the previous cell. Each
//! re-emission is `CSI 0 m` followed by the minimal rebuild (one code per
//! flag, then fg, then bg). The reset is not optional: a cell whose flag set
//! is a strict subset of the previous cell's would otherwise need a "clear
//! one flag" code that its own attribute does not describe.
//!
//! [`draw_line`]: HostPainter::draw_line

use crate::grid::{AnsiColor, AttrFlags, CellAttr, WindowGrid};
use crate::term_units::{ColIndex, CursorPos, RowIndex, cursor_pos};
use crate::viewport::WindowRect;
use crate::vt_100_ansi_parser::protocols::csi_codes::{CSI_PARAM_SEPARATOR,
                                                      CSI_PRIVATE_MODE_PREFIX,
                                                      CSI_START, CsiSequence};
use crate::vt_100_ansi_parser::protocols::esc_codes::ESC;
use crate::vt_100_ansi_parser::protocols::sgr_codes::SgrCode;
use std::fmt::Display;

/// OSC terminator when the child used BEL.
const OSC_TERMINATOR_BEL: &[u8] = b"\x07";
/// OSC terminator when the child used ST (`ESC \`).
const OSC_TERMINATOR_ST: &[u8] = b"\x1b\\";

/// Translates virtual positions to host positions and accumulates the bytes
/// destined for the host terminal.
#[derive(Debug)]
pub struct HostPainter {
    rect: WindowRect,
    out: Vec<u8>,
}

impl HostPainter {
    #[must_use]
    pub const fn new(rect: WindowRect) -> Self {
        Self {
            rect,
            out: Vec::new(),
        }
    }

    #[must_use]
    pub const fn rect(&self) -> WindowRect { self.rect }

    /// Drain everything emitted since the last call.
    pub fn take_bytes(&mut self) -> Vec<u8> { std::mem::take(&mut self.out) }

    /// Append a serialized sequence (or any displayable fragment).
    pub fn emit(&mut self, seq: impl Display) {
        use std::fmt::Write as _;
        let mut scratch = String::new();
        // Writing to a String cannot fail.
        let _unused = write!(scratch, "{seq}");
        self.out.extend_from_slice(scratch.as_bytes());
    }

    /// Append one character, UTF-8 encoded.
    pub fn emit_char(&mut self, ch: char) {
        let mut utf8 = [0u8; 4];
        self.out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
    }

    /// Append raw bytes unchanged.
    pub fn emit_bytes(&mut self, bytes: &[u8]) { self.out.extend_from_slice(bytes); }

    /// Move the host cursor to the translated position of a virtual cell.
    pub fn move_to(&mut self, pos: CursorPos) {
        self.emit(CsiSequence::CursorPosition {
            row: self.rect.to_host_row(pos.row),
            col: self.rect.to_host_col(pos.col),
        });
    }

    /// Emit `CSI 0 m` plus the minimal reconstruction of `attr`: one code per
    /// set flag, then foreground, then background.
    pub fn emit_attr(&mut self, attr: &CellAttr) {
        self.emit(SgrCode::Reset);
        if attr.flags.contains(AttrFlags::BOLD) {
            self.emit(SgrCode::Bold);
        }
        if attr.flags.contains(AttrFlags::FAINT) {
            self.emit(SgrCode::Faint);
        }
        if attr.flags.contains(AttrFlags::ITALIC) {
            self.emit(SgrCode::Italic);
        }
        if attr.flags.contains(AttrFlags::UNDERLINE) {
            self.emit(SgrCode::Underline);
        }
        if attr.flags.contains(AttrFlags::BLINK) {
            self.emit(SgrCode::Blink);
        }
        if attr.flags.contains(AttrFlags::REVERSE) {
            self.emit(SgrCode::Reverse);
        }
        if attr.flags.contains(AttrFlags::CONCEAL) {
            self.emit(SgrCode::Conceal);
        }
        if attr.flags.contains(AttrFlags::STRIKE) {
            self.emit(SgrCode::Strike);
        }
        match attr.fg {
            AnsiColor::Default => {}
            AnsiColor::Index(n) if n < 8 => self.emit(SgrCode::ForegroundBasic(n)),
            AnsiColor::Index(n) if n < 16 => self.emit(SgrCode::ForegroundBright(n)),
            AnsiColor::Index(n) => self.emit(SgrCode::ForegroundAnsi256(n)),
        }
        match attr.bg {
            AnsiColor::Default => {}
            AnsiColor::Index(n) if n < 8 => self.emit(SgrCode::BackgroundBasic(n)),
            AnsiColor::Index(n) if n < 16 => self.emit(SgrCode::BackgroundBright(n)),
            AnsiColor::Index(n) => self.emit(SgrCode::BackgroundAnsi256(n)),
        }
    }

    /// Repaint cells `[c0, c1]` of virtual row `arg_row` from the grid, then
    /// reset SGR state and park the host cursor back at `cursor`.
    pub fn draw_line(
        &mut self,
        grid: &WindowGrid,
        arg_row: RowIndex,
        c0: ColIndex,
        c1: ColIndex,
        cursor: CursorPos,
    ) {
        let c1 = c1.min(grid.max_col());
        if c0 > c1 {
            return;
        }

        self.move_to(cursor_pos(arg_row, c0));
        let mut last_attr: Option<CellAttr> = None;
        for c in c0.as_u16()..=c1.as_u16() {
            let cell = grid.cell_at(arg_row, ColIndex(c));
            if last_attr != Some(cell.attr) {
                self.emit_attr(&cell.attr);
                last_attr = Some(cell.attr);
            }
            self.emit_char(cell.ch);
        }
        self.emit(SgrCode::Reset);
        self.move_to(cursor);
    }

    /// Re-emit a CSI sequence the state machine did not interpret, rebuilt
    /// from the parsed pieces: `ESC [ ?  p1 ; p2 …  intermediates  final`.
    /// Colon-grouped sub-parameters are re-joined with `:`.
    pub fn forward_csi(
        &mut self,
        private: bool,
        params: &vte::Params,
        intermediates: &[u8],
        final_char: char,
    ) {
        self.emit_bytes(CSI_START.as_bytes());
        if private {
            self.emit_char(CSI_PRIVATE_MODE_PREFIX);
        }
        let mut first_position = true;
        for position in params.iter() {
            if !first_position {
                self.emit_char(CSI_PARAM_SEPARATOR);
            }
            first_position = false;
            let mut first_sub = true;
            for sub in position {
                if !first_sub {
                    self.emit_char(':');
                }
                first_sub = false;
                self.emit(sub);
            }
        }
        self.emit_bytes(intermediates);
        self.emit_char(final_char);
    }

    /// Re-emit an ESC sequence the state machine did not interpret.
    pub fn forward_esc(&mut self, intermediates: &[u8], byte: u8) {
        self.out.push(ESC);
        self.emit_bytes(intermediates);
        self.out.push(byte);
    }

    /// Re-emit an OSC sequence so host-level escapes (titles, hyperlinks)
    /// keep working. The original terminator kind is preserved.
    pub fn forward_osc(&mut self, params: &[&[u8]], bell_terminated: bool) {
        self.emit_bytes(b"\x1b]");
        let mut first = true;
        for param in params {
            if !first {
                self.emit_char(CSI_PARAM_SEPARATOR);
            }
            first = false;
            self.emit_bytes(param);
        }
        self.emit_bytes(if bell_terminated {
            OSC_TERMINATOR_BEL
        } else {
            OSC_TERMINATOR_ST
        });
    }
}
