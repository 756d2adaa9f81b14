// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor movement, save/restore, and DECSTBM through the byte pipeline.

use crate::screen::test_fixtures_screen::{drain_host_bytes, test_screen,
                                          test_screen_with_origin};
use crate::term_units::{TermCol, TermRow, col, cursor_pos, row};
use crate::vt_100_ansi_parser::protocols::csi_codes::CsiSequence;
use crate::vt_100_ansi_parser::protocols::esc_codes::EscSequence;
use pretty_assertions::assert_eq;

fn cup(arg_row: u16, arg_col: u16) -> CsiSequence {
    CsiSequence::CursorPosition {
        row: TermRow::new(arg_row),
        col: TermCol::new(arg_col),
    }
}

#[test]
fn test_cup_moves_and_clamps() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes(cup(3, 4).to_string());
    assert_eq!(screen.cursor, cursor_pos(row(2), col(3)));

    screen.apply_ansi_bytes(cup(99, 99).to_string());
    assert_eq!(screen.cursor, cursor_pos(row(3), col(9)));
}

#[test]
fn test_cup_last_write_wins() {
    let mut direct = test_screen(4, 10);
    direct.apply_ansi_bytes(cup(2, 5).to_string());

    let mut via_detour = test_screen(4, 10);
    via_detour.apply_ansi_bytes(format!("{}{}", cup(4, 9), cup(2, 5)));

    assert_eq!(direct.cursor, via_detour.cursor);
    assert_eq!(direct.wrap_pending, via_detour.wrap_pending);
}

#[test]
fn test_hvp_is_an_alias_for_cup() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("\x1b[2;3f");
    assert_eq!(screen.cursor, cursor_pos(row(1), col(2)));
}

#[test]
fn test_relative_moves_with_counts() {
    let mut screen = test_screen(10, 20);
    screen.apply_ansi_bytes(cup(5, 5).to_string());

    screen.apply_ansi_bytes(CsiSequence::CursorUp(2).to_string());
    assert_eq!(screen.cursor, cursor_pos(row(2), col(4)));

    screen.apply_ansi_bytes(CsiSequence::CursorDown(3).to_string());
    assert_eq!(screen.cursor, cursor_pos(row(5), col(4)));

    screen.apply_ansi_bytes(CsiSequence::CursorForward(10).to_string());
    assert_eq!(screen.cursor, cursor_pos(row(5), col(14)));

    screen.apply_ansi_bytes(CsiSequence::CursorBackward(14).to_string());
    assert_eq!(screen.cursor, cursor_pos(row(5), col(0)));
}

#[test]
fn test_zero_and_missing_counts_move_one() {
    let mut screen = test_screen(10, 20);
    screen.apply_ansi_bytes(cup(5, 5).to_string());
    screen.apply_ansi_bytes("\x1b[A");
    assert_eq!(screen.cursor.row, row(3));
    screen.apply_ansi_bytes("\x1b[0A");
    assert_eq!(screen.cursor.row, row(2));
}

#[test]
fn test_vertical_moves_respect_scroll_region() {
    let mut screen = test_screen(10, 20);
    screen.apply_ansi_bytes(
        CsiSequence::SetScrollingMargins {
            top: TermRow::new(3),
            bottom: TermRow::new(7),
        }
        .to_string(),
    );
    // DECSTBM homed the cursor to the region top.
    assert_eq!(screen.cursor, cursor_pos(row(2), col(0)));

    screen.apply_ansi_bytes(CsiSequence::CursorUp(9).to_string());
    assert_eq!(screen.cursor.row, row(2));

    screen.apply_ansi_bytes(CsiSequence::CursorDown(9).to_string());
    assert_eq!(screen.cursor.row, row(6));
}

#[test]
fn test_decstbm_sets_region_and_homes_cursor() {
    let mut screen = test_screen(10, 20);
    screen.apply_ansi_bytes("\x1b[2;8r");

    assert_eq!(screen.scroll_top, row(1));
    assert_eq!(screen.scroll_bottom, row(7));
    assert_eq!(screen.cursor, cursor_pos(row(1), col(0)));
}

#[test]
fn test_decstbm_out_of_range_is_ignored() {
    let mut screen = test_screen(10, 20);
    screen.apply_ansi_bytes("\x1b[2;8r");
    screen.apply_ansi_bytes("\x1b[8;2r");
    screen.apply_ansi_bytes("\x1b[2;99r");

    assert_eq!(screen.scroll_top, row(1));
    assert_eq!(screen.scroll_bottom, row(7));
}

#[test]
fn test_decstbm_reset_with_no_params() {
    let mut screen = test_screen(10, 20);
    screen.apply_ansi_bytes("\x1b[2;8r");
    screen.apply_ansi_bytes("\x1b[r");

    assert_eq!(screen.scroll_top, row(0));
    assert_eq!(screen.scroll_bottom, row(9));
}

#[test]
fn test_csi_save_restore_round_trip() {
    let mut screen = test_screen(10, 20);
    screen.apply_ansi_bytes(format!("{}{}", cup(4, 7), CsiSequence::SaveCursor));
    screen.apply_ansi_bytes(cup(1, 1).to_string());
    screen.apply_ansi_bytes(CsiSequence::RestoreCursor.to_string());
    assert_eq!(screen.cursor, cursor_pos(row(3), col(6)));
}

#[test]
fn test_esc_save_restore_round_trip() {
    let mut screen = test_screen(10, 20);
    screen.apply_ansi_bytes(format!("{}{}", cup(4, 7), EscSequence::SaveCursor));
    screen.apply_ansi_bytes(cup(1, 1).to_string());
    screen.apply_ansi_bytes(EscSequence::RestoreCursor.to_string());
    assert_eq!(screen.cursor, cursor_pos(row(3), col(6)));
}

#[test]
fn test_restore_clamps_into_shrunk_region() {
    let mut screen = test_screen(10, 20);
    screen.apply_ansi_bytes(format!("{}{}", cup(9, 4), CsiSequence::SaveCursor));
    screen.apply_ansi_bytes("\x1b[2;5r");
    screen.apply_ansi_bytes(CsiSequence::RestoreCursor.to_string());

    // The cursor clamps to the region bottom; the region is untouched.
    assert_eq!(screen.cursor, cursor_pos(row(4), col(3)));
    assert_eq!(screen.scroll_top, row(1));
    assert_eq!(screen.scroll_bottom, row(4));
}

#[test]
fn test_index_and_reverse_index() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("x");
    screen.apply_ansi_bytes(EscSequence::Index.to_string());
    assert_eq!(screen.cursor.row, row(1));

    screen.apply_ansi_bytes(EscSequence::ReverseIndex.to_string());
    assert_eq!(screen.cursor.row, row(0));

    // RI at the region top scrolls down: the 'x' row moves off the top row.
    screen.apply_ansi_bytes(EscSequence::ReverseIndex.to_string());
    assert_eq!(screen.grid.cell_at(row(1), col(0)).ch, 'x');
}

#[test]
fn test_cursor_moves_emit_translated_host_positions() {
    let mut screen = test_screen_with_origin(4, 10, 8, 10);
    let _unused = drain_host_bytes(&mut screen);

    screen.apply_ansi_bytes(cup(1, 1).to_string());
    let bytes = drain_host_bytes(&mut screen);

    // Virtual (0,0) lands on host (9,11).
    assert_eq!(bytes, "\x1b[9;11H");
}
