// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! CSI final bytes, DEC private mode numbers, and the [`CsiSequence`] builder.
//!
//! The builder serves two masters:
//! - the renderer, which emits host-absolute cursor moves, auto-wrap toggles,
//!   and the viewport margin installation, and
//! - the conformance tests, which assemble child-output byte streams from
//!   typed values instead of hand-rolled escape strings.

use crate::term_units::{TermCol, TermRow};
use std::fmt::{Display, Formatter, Result};

/// `ESC [` - the Control Sequence Introducer.
pub const CSI_START: &str = "\x1b[";
pub const CSI_PARAM_SEPARATOR: char = ';';
pub const CSI_PRIVATE_MODE_PREFIX: char = '?';

// CSI finals dispatched by the screen state machine.
pub const CUU_CURSOR_UP: char = 'A';
pub const CUD_CURSOR_DOWN: char = 'B';
pub const CUF_CURSOR_FORWARD: char = 'C';
pub const CUB_CURSOR_BACKWARD: char = 'D';
pub const CUP_CURSOR_POSITION: char = 'H';
pub const HVP_CURSOR_POSITION: char = 'f';
pub const CHA_CURSOR_COLUMN: char = 'G';
pub const ED_ERASE_DISPLAY: char = 'J';
pub const EL_ERASE_LINE: char = 'K';
pub const IL_INSERT_LINE: char = 'L';
pub const DL_DELETE_LINE: char = 'M';
pub const ICH_INSERT_CHAR: char = '@';
pub const DCH_DELETE_CHAR: char = 'P';
pub const ECH_ERASE_CHAR: char = 'X';
pub const DECSTBM_SET_MARGINS: char = 'r';
pub const SCP_SAVE_CURSOR: char = 's';
pub const RCP_RESTORE_CURSOR: char = 'u';
pub const SGR_SET_GRAPHICS: char = 'm';
pub const SM_SET_MODE: char = 'h';
pub const RM_RESET_MODE: char = 'l';

/// DECSLRM shares the `s` final with SCP; it only means "set left/right
/// margins" on the *host* side where DECLRMM has been enabled first.
pub const DECSLRM_SET_LR_MARGINS: char = 's';

// DEC private mode numbers this crate emits toward the host.
pub const DECAWM_AUTO_WRAP: u16 = 7;
pub const DECLRMM_LEFT_RIGHT_MARGIN_MODE: u16 = 69;

/// Builder for CSI sequences. Serializes into ANSI escape codes via
/// [`Display`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CsiSequence {
    /// Cursor Up (CUU) - ESC [ n A
    CursorUp(u16),
    /// Cursor Down (CUD) - ESC [ n B
    CursorDown(u16),
    /// Cursor Forward (CUF) - ESC [ n C
    CursorForward(u16),
    /// Cursor Backward (CUB) - ESC [ n D
    CursorBackward(u16),
    /// Cursor Position (CUP) - ESC [ row ; col H
    CursorPosition { row: TermRow, col: TermCol },
    /// Cursor Horizontal Absolute (CHA) - ESC [ n G
    CursorColumn(u16),
    /// Erase Display (ED) - ESC [ n J
    EraseDisplay(u16),
    /// Erase Line (EL) - ESC [ n K
    EraseLine(u16),
    /// Insert Line (IL) - ESC [ n L
    InsertLine(u16),
    /// Delete Line (DL) - ESC [ n M
    DeleteLine(u16),
    /// Insert Character (ICH) - ESC [ n @
    InsertChar(u16),
    /// Delete Character (DCH) - ESC [ n P
    DeleteChar(u16),
    /// Erase Character (ECH) - ESC [ n X
    EraseChar(u16),
    /// Save Cursor (SCP) - ESC [ s
    SaveCursor,
    /// Restore Cursor (RCP) - ESC [ u
    RestoreCursor,
    /// Set Top and Bottom Margins (DECSTBM) - ESC [ top ; bottom r
    SetScrollingMargins { top: TermRow, bottom: TermRow },
    /// Set Left and Right Margins (DECSLRM) - ESC [ left ; right s
    SetLeftRightMargins { left: TermCol, right: TermCol },
    /// Enable a DEC private mode - ESC [ ? n h
    EnablePrivateMode(u16),
    /// Disable a DEC private mode - ESC [ ? n l
    DisablePrivateMode(u16),
}

impl Display for CsiSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(CSI_START)?;
        match self {
            CsiSequence::CursorUp(n) => write!(f, "{n}{CUU_CURSOR_UP}"),
            CsiSequence::CursorDown(n) => write!(f, "{n}{CUD_CURSOR_DOWN}"),
            CsiSequence::CursorForward(n) => write!(f, "{n}{CUF_CURSOR_FORWARD}"),
            CsiSequence::CursorBackward(n) => write!(f, "{n}{CUB_CURSOR_BACKWARD}"),
            CsiSequence::CursorPosition { row, col } => {
                write!(f, "{row}{CSI_PARAM_SEPARATOR}{col}{CUP_CURSOR_POSITION}")
            }
            CsiSequence::CursorColumn(n) => write!(f, "{n}{CHA_CURSOR_COLUMN}"),
            CsiSequence::EraseDisplay(n) => write!(f, "{n}{ED_ERASE_DISPLAY}"),
            CsiSequence::EraseLine(n) => write!(f, "{n}{EL_ERASE_LINE}"),
            CsiSequence::InsertLine(n) => write!(f, "{n}{IL_INSERT_LINE}"),
            CsiSequence::DeleteLine(n) => write!(f, "{n}{DL_DELETE_LINE}"),
            CsiSequence::InsertChar(n) => write!(f, "{n}{ICH_INSERT_CHAR}"),
            CsiSequence::DeleteChar(n) => write!(f, "{n}{DCH_DELETE_CHAR}"),
            CsiSequence::EraseChar(n) => write!(f, "{n}{ECH_ERASE_CHAR}"),
            CsiSequence::SaveCursor => write!(f, "{SCP_SAVE_CURSOR}"),
            CsiSequence::RestoreCursor => write!(f, "{RCP_RESTORE_CURSOR}"),
            CsiSequence::SetScrollingMargins { top, bottom } => {
                write!(f, "{top}{CSI_PARAM_SEPARATOR}{bottom}{DECSTBM_SET_MARGINS}")
            }
            CsiSequence::SetLeftRightMargins { left, right } => {
                write!(f, "{left}{CSI_PARAM_SEPARATOR}{right}{DECSLRM_SET_LR_MARGINS}")
            }
            CsiSequence::EnablePrivateMode(mode) => {
                write!(f, "{CSI_PRIVATE_MODE_PREFIX}{mode}{SM_SET_MODE}")
            }
            CsiSequence::DisablePrivateMode(mode) => {
                write!(f, "{CSI_PRIVATE_MODE_PREFIX}{mode}{RM_RESET_MODE}")
            }
        }
    }
}
