// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! C0 control bytes and ESC sequence finals, plus a small builder for the
//! simple (non-CSI) escape sequences used in tests and pass-through.

use std::fmt::{Display, Formatter, Result};

/// The escape byte itself.
pub const ESC: u8 = 0x1B;

// C0 control characters handled by the screen state machine.
pub const BACKSPACE: u8 = 0x08;
pub const LINE_FEED: u8 = 0x0A;
pub const CARRIAGE_RETURN: u8 = 0x0D;
/// NAK (Ctrl-U): erase from start of line through the cursor.
pub const NAK_ERASE_LINE_START: u8 = 0x15;

// ESC finals handled by the screen state machine. Everything else is
// forwarded to the host verbatim.
pub const DECSC_SAVE_CURSOR: u8 = b'7';
pub const DECRC_RESTORE_CURSOR: u8 = b'8';
pub const IND_INDEX_DOWN: u8 = b'D';
pub const RI_REVERSE_INDEX_UP: u8 = b'M';

/// ST (`ESC \`). The parser reports it as a plain ESC final *after* already
/// terminating the OSC/DCS string it closed, so it must not be re-emitted.
pub const ST_STRING_TERMINATOR: u8 = b'\\';

/// Builder for simple ESC sequences (`ESC` + one final byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscSequence {
    /// DECSC - ESC 7
    SaveCursor,
    /// DECRC - ESC 8
    RestoreCursor,
    /// IND - ESC D
    Index,
    /// RI - ESC M
    ReverseIndex,
}

impl Display for EscSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let final_byte = match self {
            EscSequence::SaveCursor => DECSC_SAVE_CURSOR,
            EscSequence::RestoreCursor => DECRC_RESTORE_CURSOR,
            EscSequence::Index => IND_INDEX_DOWN,
            EscSequence::ReverseIndex => RI_REVERSE_INDEX_UP,
        };
        write!(f, "\x1b{}", final_byte as char)
    }
}
