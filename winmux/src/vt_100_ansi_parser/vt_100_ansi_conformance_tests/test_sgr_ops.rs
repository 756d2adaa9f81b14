// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR accumulation and its interaction with cell writes, through the byte
//! pipeline.

use crate::grid::{AnsiColor, AttrFlags, CellAttr};
use crate::screen::test_fixtures_screen::{drain_host_bytes, test_screen};
use crate::term_units::{col, cursor_pos, row};
use pretty_assertions::assert_eq;

#[test]
fn test_colored_write_then_reset() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("\x1b[31mA\x1b[0mB");

    let cell_a = screen.grid.cell_at(row(0), col(0));
    assert_eq!(cell_a.ch, 'A');
    assert_eq!(cell_a.attr.fg, AnsiColor::Index(1));
    assert_eq!(cell_a.attr.bg, AnsiColor::Default);
    assert!(cell_a.attr.flags.is_empty());

    let cell_b = screen.grid.cell_at(row(0), col(1));
    assert_eq!(cell_b.ch, 'B');
    assert_eq!(cell_b.attr, CellAttr::default());

    assert_eq!(screen.cursor, cursor_pos(row(0), col(2)));
}

#[test]
fn test_empty_sgr_is_reset() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("\x1b[1;44m");
    screen.apply_ansi_bytes("\x1b[m");
    assert_eq!(screen.current_attr, CellAttr::default());
}

#[test]
fn test_attributes_accumulate_across_sequences() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("\x1b[1m\x1b[4m\x1b[32m\x1b[45m");

    assert!(screen.current_attr.flags.contains(AttrFlags::BOLD));
    assert!(screen.current_attr.flags.contains(AttrFlags::UNDERLINE));
    assert_eq!(screen.current_attr.fg, AnsiColor::Index(2));
    assert_eq!(screen.current_attr.bg, AnsiColor::Index(5));
}

#[test]
fn test_extended_color_forms() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("\x1b[38;5;196m");
    assert_eq!(screen.current_attr.fg, AnsiColor::Index(196));

    screen.apply_ansi_bytes("\x1b[48:5:236m");
    assert_eq!(screen.current_attr.bg, AnsiColor::Index(236));
}

#[test]
fn test_bright_color_range() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("\x1b[95m\x1b[102m");
    assert_eq!(screen.current_attr.fg, AnsiColor::Index(13));
    assert_eq!(screen.current_attr.bg, AnsiColor::Index(10));
}

#[test]
fn test_styled_cell_echo_rebuilds_attr_on_host() {
    let mut screen = test_screen(4, 10);
    screen.apply_ansi_bytes("\x1b[1;31m");
    let _unused = drain_host_bytes(&mut screen);

    screen.apply_ansi_bytes("A");
    let bytes = drain_host_bytes(&mut screen);

    // Reset, then bold, then red, then the character.
    assert!(bytes.contains("\x1b[0m\x1b[1m\x1b[31mA"));
}

#[test]
fn test_sgr_alone_emits_nothing_to_host() {
    // Attribute changes are deferred until something is painted.
    let mut screen = test_screen(4, 10);
    let _unused = drain_host_bytes(&mut screen);

    screen.apply_ansi_bytes("\x1b[1;31m");
    assert_eq!(drain_host_bytes(&mut screen), "");
}
