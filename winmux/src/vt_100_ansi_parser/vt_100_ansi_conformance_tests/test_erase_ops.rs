// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ED / EL and IL / DL through the byte pipeline.

use crate::screen::test_fixtures_screen::{assert_line_content, row_text, test_screen};
use crate::term_units::{col, cursor_pos, row};
use crate::vt_100_ansi_parser::protocols::csi_codes::CsiSequence;
use pretty_assertions::assert_eq;

#[test]
fn test_clear_screen_then_write() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("junk junk junk\r\nmore junk");

    screen.apply_ansi_bytes("\x1b[2J\x1b[3;4Hhi");

    for r in 0..4 {
        match r {
            2 => assert_eq!(row_text(&screen, 2), "   hi     "),
            _ => assert_eq!(row_text(&screen, r), " ".repeat(10)),
        }
    }
    assert_eq!(screen.cursor, cursor_pos(row(2), col(5)));
}

#[test]
fn test_erase_display_to_end_from_cursor() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("AAAAAAAAAA\r\nBBBBBBBBBB\r\nCCCCCCCCCC");

    screen.apply_ansi_bytes("\x1b[2;5H\x1b[0J");

    assert_line_content(&screen, 0, "AAAAAAAAAA");
    assert_line_content(&screen, 1, "BBBB");
    assert_eq!(row_text(&screen, 2), " ".repeat(10));
}

#[test]
fn test_erase_display_to_start_through_cursor() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("AAAAAAAAAA\r\nBBBBBBBBBB\r\nCCCCCCCCCC");

    screen.apply_ansi_bytes("\x1b[2;5H\x1b[1J");

    assert_eq!(row_text(&screen, 0), " ".repeat(10));
    assert_eq!(row_text(&screen, 1), "     BBBBB");
    assert_line_content(&screen, 2, "CCCCCCCCCC");
}

#[test]
fn test_erase_display_resets_current_attr_for_full_clear() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("\x1b[1;31mred");
    screen.apply_ansi_bytes("\x1b[2J");

    assert_eq!(screen.current_attr, crate::grid::CellAttr::default());

    // Partial clears keep the accumulated attribute.
    screen.apply_ansi_bytes("\x1b[31mx\x1b[0J");
    assert_eq!(screen.current_attr.fg, crate::grid::AnsiColor::Index(1));
}

#[test]
fn test_erase_line_variants() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("0123456789");

    screen.apply_ansi_bytes(format!(
        "{}{}",
        CsiSequence::CursorColumn(5),
        CsiSequence::EraseLine(0)
    ));
    assert_line_content(&screen, 0, "0123");

    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("0123456789");
    screen.apply_ansi_bytes(format!(
        "{}{}",
        CsiSequence::CursorColumn(5),
        CsiSequence::EraseLine(1)
    ));
    assert_eq!(row_text(&screen, 0), "     56789");

    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("0123456789");
    screen.apply_ansi_bytes(CsiSequence::EraseLine(2).to_string());
    assert_eq!(row_text(&screen, 0), " ".repeat(10));
}

#[test]
fn test_erase_line_leaves_cursor_alone() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("0123456789");
    let before = screen.cursor;

    screen.apply_ansi_bytes(CsiSequence::EraseLine(2).to_string());
    assert_eq!(screen.cursor, before);
}

#[test]
fn test_insert_and_delete_lines_via_csi() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("one\r\ntwo\r\nthree\r\nfour");

    screen.apply_ansi_bytes("\x1b[2;1H");
    screen.apply_ansi_bytes(CsiSequence::InsertLine(1).to_string());

    assert_line_content(&screen, 0, "one");
    assert_line_content(&screen, 1, "");
    assert_line_content(&screen, 2, "two");
    assert_line_content(&screen, 3, "three");

    screen.apply_ansi_bytes(CsiSequence::DeleteLine(1).to_string());
    assert_line_content(&screen, 1, "two");
    assert_line_content(&screen, 2, "three");
    assert_line_content(&screen, 3, "");
}
