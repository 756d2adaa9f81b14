// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Property tests over arbitrary byte streams and geometries.
//!
//! These pin the state-machine invariants that every concrete test assumes:
//! cursor and scroll region always in bounds, the deferred-wrap flag only
//! ever set at the last column, rotation round trips, SGR reset totality,
//! and chunk-boundary independence of the parser.

use crate::grid::{CellAttr, WindowGrid};
use crate::screen::WindowScreen;
use crate::screen::test_fixtures_screen::{row_text, test_screen};
use crate::term_units::{col, row};
use proptest::prelude::{any, prop_assert, prop_assert_eq, proptest};

const TEST_ROWS: u16 = 4;
const TEST_COLS: u16 = 10;

fn assert_state_invariants(screen: &WindowScreen) {
    assert!(screen.cursor.row.as_u16() < TEST_ROWS, "cursor row in bounds");
    assert!(screen.cursor.col.as_u16() < TEST_COLS, "cursor col in bounds");
    assert!(
        screen.scroll_top <= screen.scroll_bottom,
        "scroll region ordered"
    );
    assert!(
        screen.scroll_bottom.as_u16() < TEST_ROWS,
        "scroll region in bounds"
    );
    if screen.wrap_pending {
        assert_eq!(
            screen.cursor.col.as_u16(),
            TEST_COLS - 1,
            "wrap_pending implies last column"
        );
    }
}

fn full_state(screen: &WindowScreen) -> (Vec<String>, u16, u16, u16, u16, bool) {
    let rows = (0..TEST_ROWS).map(|r| row_text(screen, r)).collect();
    (
        rows,
        screen.cursor.row.as_u16(),
        screen.cursor.col.as_u16(),
        screen.scroll_top.as_u16(),
        screen.scroll_bottom.as_u16(),
        screen.wrap_pending,
    )
}

proptest! {
    /// P1: invariants hold after any prefix of any child output.
    #[test]
    fn prop_invariants_hold_for_arbitrary_streams(
        bytes in proptest::collection::vec(any::<u8>(), 0..512)
    ) {
        let mut screen = test_screen(TEST_ROWS, TEST_COLS);
        screen.apply_ansi_bytes(&bytes);
        assert_state_invariants(&screen);
    }

    /// Parser state is the only carrier across reads: splitting a stream at
    /// any point yields the same final state and the same host bytes.
    #[test]
    fn prop_chunk_split_is_transparent(
        bytes in proptest::collection::vec(any::<u8>(), 0..256),
        split_at in any::<usize>(),
    ) {
        let split_at = if bytes.is_empty() { 0 } else { split_at % bytes.len() };

        let mut whole = test_screen(TEST_ROWS, TEST_COLS);
        whole.apply_ansi_bytes(&bytes);
        let whole_host = whole.take_host_bytes();

        let mut split = test_screen(TEST_ROWS, TEST_COLS);
        split.apply_ansi_bytes(&bytes[..split_at]);
        let mut split_host = split.take_host_bytes();
        split.apply_ansi_bytes(&bytes[split_at..]);
        split_host.extend(split.take_host_bytes());

        prop_assert_eq!(full_state(&whole), full_state(&split));
        prop_assert_eq!(whole_host, split_host);
    }

    /// P5: a short printable stream lands verbatim in row 0 with the current
    /// attribute, cursor after it (or wrap-pending at the last column).
    #[test]
    fn prop_printable_stream_fills_row_zero(
        text in proptest::collection::vec(0x20u8..0x7F, 0..=TEST_COLS as usize)
    ) {
        let k = text.len();
        let mut screen = test_screen(TEST_ROWS, TEST_COLS);
        screen.apply_ansi_bytes(&text);

        for (c, byte) in text.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let cell = screen.grid.cell_at(row(0), col(c as u16));
            prop_assert_eq!(cell.ch, *byte as char);
            prop_assert_eq!(cell.attr, CellAttr::default());
        }
        prop_assert_eq!(screen.cursor.row.as_u16(), 0);
        if k < TEST_COLS as usize {
            prop_assert_eq!(usize::from(screen.cursor.col.as_u16()), k);
            prop_assert!(!screen.wrap_pending);
        } else {
            prop_assert_eq!(screen.cursor.col.as_u16(), TEST_COLS - 1);
            prop_assert!(screen.wrap_pending);
        }
    }

    /// P3: SGR 0 is total - whatever came before, it restores the default.
    #[test]
    fn prop_sgr_reset_restores_default(
        params in proptest::collection::vec(0u16..=110, 0..8)
    ) {
        let mut screen = test_screen(TEST_ROWS, TEST_COLS);
        let joined = params
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(";");
        screen.apply_ansi_bytes(format!("\x1b[{joined}m\x1b[0m"));
        prop_assert_eq!(screen.current_attr, CellAttr::default());
    }

    /// P4: absolute positioning is last-write-wins.
    #[test]
    fn prop_cursor_position_last_write_wins(
        first in (1u16..=TEST_ROWS, 1u16..=TEST_COLS),
        second in (1u16..=TEST_ROWS, 1u16..=TEST_COLS),
    ) {
        let mut direct = test_screen(TEST_ROWS, TEST_COLS);
        direct.apply_ansi_bytes(format!("\x1b[{};{}H", second.0, second.1));

        let mut detoured = test_screen(TEST_ROWS, TEST_COLS);
        detoured.apply_ansi_bytes(format!(
            "\x1b[{};{}H\x1b[{};{}H",
            first.0, first.1, second.0, second.1
        ));

        prop_assert_eq!(direct.cursor, detoured.cursor);
        prop_assert_eq!(direct.wrap_pending, detoured.wrap_pending);
    }

    /// P6: DECSTBM with valid 1-based bounds installs them 0-based and homes
    /// the cursor; anything else is ignored.
    #[test]
    fn prop_decstbm_valid_or_ignored(
        top in 0u16..=TEST_ROWS,
        bottom in 0u16..=6,
    ) {
        let mut screen = test_screen(TEST_ROWS, TEST_COLS);
        screen.apply_ansi_bytes("\x1b[2;1H");
        let cursor_before = screen.cursor;
        screen.apply_ansi_bytes(format!("\x1b[{top};{bottom}r"));

        // Zero means "window edge" on each side.
        let effective_top = top.max(1);
        let effective_bottom = if bottom == 0 { TEST_ROWS } else { bottom };

        if effective_top <= effective_bottom && effective_bottom <= TEST_ROWS {
            prop_assert_eq!(screen.scroll_top.as_u16(), effective_top - 1);
            prop_assert_eq!(screen.scroll_bottom.as_u16(), effective_bottom - 1);
            prop_assert_eq!(screen.cursor.row.as_u16(), effective_top - 1);
            prop_assert_eq!(screen.cursor.col.as_u16(), 0);
        } else {
            prop_assert_eq!(screen.scroll_top.as_u16(), 0);
            prop_assert_eq!(screen.scroll_bottom.as_u16(), TEST_ROWS - 1);
            prop_assert_eq!(screen.cursor, cursor_before);
        }
    }

    /// P2: rotate_down undoes rotate_up except for the n rows that were
    /// cleared off the top of the range; rows outside the range never move.
    #[test]
    fn prop_rotation_round_trip(
        top in 0u16..6,
        span in 1u16..=6,
        n in 1u16..=6,
    ) {
        let rows = 6u16;
        let bot = (top + span - 1).min(rows - 1);

        let mut grid = WindowGrid::new(rows, 8);
        for r in 0..rows {
            for c in 0..8u16 {
                #[allow(clippy::cast_possible_truncation)]
                let ch = (b'a' + (r as u8 * 8 + c as u8) % 26) as char;
                grid.set(row(r), col(c), ch, CellAttr::default());
            }
        }
        let original = grid.clone();

        grid.rotate_up(row(top), row(bot), n);
        grid.rotate_down(row(top), row(bot), n);

        let n_clamped = n.min(bot - top + 1);
        for r in 0..rows {
            for c in 0..8u16 {
                let cell = grid.cell_at(row(r), col(c));
                if r >= top && r < top + n_clamped {
                    prop_assert_eq!(cell.ch, ' ');
                } else {
                    prop_assert_eq!(cell.ch, original.cell_at(row(r), col(c)).ch);
                }
            }
        }
    }
}
