// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR parameter numbers and the [`SgrCode`] builder.
//!
//! [`SgrCode`] is the emission side: the renderer rebuilds a cell attribute as
//! `Reset` followed by one code per flag, then foreground, then background.
//! The parameter constants are the interpretation side, consumed by the SGR
//! interpreter when a CSI `m` arrives from the child.

use std::fmt::{Display, Formatter, Result};

// SGR parameters interpreted by `apply_sgr`.
pub const SGR_RESET: u16 = 0;
pub const SGR_BOLD: u16 = 1;
pub const SGR_FAINT: u16 = 2;
pub const SGR_ITALIC: u16 = 3;
pub const SGR_UNDERLINE: u16 = 4;
pub const SGR_BLINK: u16 = 5;
pub const SGR_REVERSE: u16 = 7;
pub const SGR_CONCEAL: u16 = 8;
pub const SGR_STRIKE: u16 = 9;
pub const SGR_RESET_BOLD_FAINT: u16 = 22;
pub const SGR_RESET_ITALIC: u16 = 23;
pub const SGR_RESET_UNDERLINE: u16 = 24;
pub const SGR_RESET_BLINK: u16 = 25;
pub const SGR_RESET_REVERSE: u16 = 27;
pub const SGR_RESET_CONCEAL: u16 = 28;
pub const SGR_RESET_STRIKE: u16 = 29;
pub const SGR_FG_BASIC_FIRST: u16 = 30;
pub const SGR_FG_BASIC_LAST: u16 = 37;
pub const SGR_FG_EXTENDED: u16 = 38;
pub const SGR_FG_DEFAULT: u16 = 39;
pub const SGR_BG_BASIC_FIRST: u16 = 40;
pub const SGR_BG_BASIC_LAST: u16 = 47;
pub const SGR_BG_EXTENDED: u16 = 48;
pub const SGR_BG_DEFAULT: u16 = 49;
pub const SGR_FG_BRIGHT_FIRST: u16 = 90;
pub const SGR_FG_BRIGHT_LAST: u16 = 97;
pub const SGR_BG_BRIGHT_FIRST: u16 = 100;
pub const SGR_BG_BRIGHT_LAST: u16 = 107;

/// Sub-mode selector inside SGR 38/48: `5` introduces a 256-palette index.
pub const SGR_EXTENDED_MODE_256: u16 = 5;

/// Builder for individual SGR codes. Serializes via [`Display`].
///
/// Color variants carry the palette index (0–255); the variant picks the
/// emission form (`30+n` / `90+n−8` / `38;5;n` and the background mirrors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SgrCode {
    Reset,
    Bold,
    Faint,
    Italic,
    Underline,
    Blink,
    Reverse,
    Conceal,
    Strike,
    /// Foreground from the basic range 0–7, emitted as `30+n`.
    ForegroundBasic(u8),
    /// Foreground from the bright range 8–15, emitted as `90+(n−8)`.
    ForegroundBright(u8),
    /// Foreground from the 256-color palette, emitted as `38;5;n`.
    ForegroundAnsi256(u8),
    ForegroundDefault,
    /// Background from the basic range 0–7, emitted as `40+n`.
    BackgroundBasic(u8),
    /// Background from the bright range 8–15, emitted as `100+(n−8)`.
    BackgroundBright(u8),
    /// Background from the 256-color palette, emitted as `48;5;n`.
    BackgroundAnsi256(u8),
    BackgroundDefault,
}

impl Display for SgrCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            SgrCode::Reset => write!(f, "\x1b[{SGR_RESET}m"),
            SgrCode::Bold => write!(f, "\x1b[{SGR_BOLD}m"),
            SgrCode::Faint => write!(f, "\x1b[{SGR_FAINT}m"),
            SgrCode::Italic => write!(f, "\x1b[{SGR_ITALIC}m"),
            SgrCode::Underline => write!(f, "\x1b[{SGR_UNDERLINE}m"),
            SgrCode::Blink => write!(f, "\x1b[{SGR_BLINK}m"),
            SgrCode::Reverse => write!(f, "\x1b[{SGR_REVERSE}m"),
            SgrCode::Conceal => write!(f, "\x1b[{SGR_CONCEAL}m"),
            SgrCode::Strike => write!(f, "\x1b[{SGR_STRIKE}m"),
            SgrCode::ForegroundBasic(n) => {
                write!(f, "\x1b[{}m", SGR_FG_BASIC_FIRST + u16::from(*n))
            }
            SgrCode::ForegroundBright(n) => {
                write!(f, "\x1b[{}m", SGR_FG_BRIGHT_FIRST + u16::from(*n) - 8)
            }
            SgrCode::ForegroundAnsi256(n) => {
                write!(f, "\x1b[{SGR_FG_EXTENDED};{SGR_EXTENDED_MODE_256};{n}m")
            }
            SgrCode::ForegroundDefault => write!(f, "\x1b[{SGR_FG_DEFAULT}m"),
            SgrCode::BackgroundBasic(n) => {
                write!(f, "\x1b[{}m", SGR_BG_BASIC_FIRST + u16::from(*n))
            }
            SgrCode::BackgroundBright(n) => {
                write!(f, "\x1b[{}m", SGR_BG_BRIGHT_FIRST + u16::from(*n) - 8)
            }
            SgrCode::BackgroundAnsi256(n) => {
                write!(f, "\x1b[{SGR_BG_EXTENDED};{SGR_EXTENDED_MODE_256};{n}m")
            }
            SgrCode::BackgroundDefault => write!(f, "\x1b[{SGR_BG_DEFAULT}m"),
        }
    }
}
