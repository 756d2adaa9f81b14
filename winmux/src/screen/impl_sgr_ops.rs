// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The SGR interpreter: folds a CSI `m` parameter list into `current_attr`.
//!
//! Parameters are consumed left to right. Extended colors are accepted in
//! both encodings the parser surfaces: the semicolon form (`38;5;k`, three
//! positions, the `5;k` tail is consumed by lookahead) and the colon
//! sub-parameter form (`38:5:k`, one position carrying the whole group).
//! A `38`/`48` whose tail is not the 256-palette selector is ignored and
//! consumes nothing, so the remaining parameters keep their individual
//! meanings.

use super::WindowScreen;
use crate::grid::{AnsiColor, AttrFlags};
use crate::vt_100_ansi_parser::protocols::sgr_codes;

/// Which side of the cell a color parameter targets.
enum ColorTarget {
    Foreground,
    Background,
}

impl WindowScreen {
    /// Apply an SGR parameter list to `current_attr`. Each entry in
    /// `positions` is one semicolon-delimited position with its colon
    /// sub-parameters (a bare parameter is a one-element slice).
    pub fn apply_sgr(&mut self, positions: &[&[u16]]) {
        let mut i = 0;
        while i < positions.len() {
            let position = positions[i];
            let param = position.first().copied().unwrap_or(0);
            match param {
                sgr_codes::SGR_RESET => self.current_attr.reset(),
                sgr_codes::SGR_BOLD => self.current_attr.flags.insert(AttrFlags::BOLD),
                sgr_codes::SGR_FAINT => self.current_attr.flags.insert(AttrFlags::FAINT),
                sgr_codes::SGR_ITALIC => {
                    self.current_attr.flags.insert(AttrFlags::ITALIC);
                }
                sgr_codes::SGR_UNDERLINE => {
                    self.current_attr.flags.insert(AttrFlags::UNDERLINE);
                }
                sgr_codes::SGR_BLINK => self.current_attr.flags.insert(AttrFlags::BLINK),
                sgr_codes::SGR_REVERSE => {
                    self.current_attr.flags.insert(AttrFlags::REVERSE);
                }
                sgr_codes::SGR_CONCEAL => {
                    self.current_attr.flags.insert(AttrFlags::CONCEAL);
                }
                sgr_codes::SGR_STRIKE => {
                    self.current_attr.flags.insert(AttrFlags::STRIKE);
                }
                sgr_codes::SGR_RESET_BOLD_FAINT => {
                    self.current_attr.flags.remove(AttrFlags::BOLD);
                    self.current_attr.flags.remove(AttrFlags::FAINT);
                }
                sgr_codes::SGR_RESET_ITALIC => {
                    self.current_attr.flags.remove(AttrFlags::ITALIC);
                }
                sgr_codes::SGR_RESET_UNDERLINE => {
                    self.current_attr.flags.remove(AttrFlags::UNDERLINE);
                }
                sgr_codes::SGR_RESET_BLINK => {
                    self.current_attr.flags.remove(AttrFlags::BLINK);
                }
                sgr_codes::SGR_RESET_REVERSE => {
                    self.current_attr.flags.remove(AttrFlags::REVERSE);
                }
                sgr_codes::SGR_RESET_CONCEAL => {
                    self.current_attr.flags.remove(AttrFlags::CONCEAL);
                }
                sgr_codes::SGR_RESET_STRIKE => {
                    self.current_attr.flags.remove(AttrFlags::STRIKE);
                }
                sgr_codes::SGR_FG_BASIC_FIRST..=sgr_codes::SGR_FG_BASIC_LAST => {
                    #[allow(clippy::cast_possible_truncation)]
                    let index = (param - sgr_codes::SGR_FG_BASIC_FIRST) as u8;
                    self.current_attr.fg = AnsiColor::Index(index);
                }
                sgr_codes::SGR_FG_DEFAULT => self.current_attr.fg = AnsiColor::Default,
                sgr_codes::SGR_BG_BASIC_FIRST..=sgr_codes::SGR_BG_BASIC_LAST => {
                    #[allow(clippy::cast_possible_truncation)]
                    let index = (param - sgr_codes::SGR_BG_BASIC_FIRST) as u8;
                    self.current_attr.bg = AnsiColor::Index(index);
                }
                sgr_codes::SGR_BG_DEFAULT => self.current_attr.bg = AnsiColor::Default,
                sgr_codes::SGR_FG_BRIGHT_FIRST..=sgr_codes::SGR_FG_BRIGHT_LAST => {
                    #[allow(clippy::cast_possible_truncation)]
                    let index = (param - sgr_codes::SGR_FG_BRIGHT_FIRST + 8) as u8;
                    self.current_attr.fg = AnsiColor::Index(index);
                }
                sgr_codes::SGR_BG_BRIGHT_FIRST..=sgr_codes::SGR_BG_BRIGHT_LAST => {
                    #[allow(clippy::cast_possible_truncation)]
                    let index = (param - sgr_codes::SGR_BG_BRIGHT_FIRST + 8) as u8;
                    self.current_attr.bg = AnsiColor::Index(index);
                }
                sgr_codes::SGR_FG_EXTENDED => {
                    i += self.apply_extended_color(
                        ColorTarget::Foreground,
                        position,
                        &positions[i..],
                    );
                }
                sgr_codes::SGR_BG_EXTENDED => {
                    i += self.apply_extended_color(
                        ColorTarget::Background,
                        position,
                        &positions[i..],
                    );
                }
                _ => {
                    // Unknown SGR parameter: ignored.
                }
            }
            i += 1;
        }
    }

    /// Handle SGR 38/48. Returns how many *extra* positions were consumed
    /// (zero for the colon form and for unsupported tails).
    fn apply_extended_color(
        &mut self,
        target: ColorTarget,
        position: &[u16],
        rest: &[&[u16]],
    ) -> usize {
        // Colon form: the whole group sits in one position, e.g. [38, 5, k].
        if position.len() >= 3 {
            if position[1] == sgr_codes::SGR_EXTENDED_MODE_256 {
                self.set_indexed_color(target, position[2]);
            }
            return 0;
        }

        // Semicolon form: lookahead over the next two positions, e.g.
        // [38] [5] [k]. Anything else leaves the tail untouched so the
        // parameters after an unsupported 38/48 keep their own meanings.
        if rest.len() >= 3
            && rest[1].first() == Some(&sgr_codes::SGR_EXTENDED_MODE_256)
            && let Some(&index) = rest[2].first()
        {
            self.set_indexed_color(target, index);
            return 2;
        }
        0
    }

    /// Store a 256-palette index. Values beyond the palette are ignored so a
    /// cell attribute can never hold an out-of-range color.
    fn set_indexed_color(&mut self, target: ColorTarget, raw_index: u16) {
        let Ok(index) = u8::try_from(raw_index) else {
            return;
        };
        match target {
            ColorTarget::Foreground => self.current_attr.fg = AnsiColor::Index(index),
            ColorTarget::Background => self.current_attr.bg = AnsiColor::Index(index),
        }
    }
}
