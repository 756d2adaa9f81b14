// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! [`vte::Perform`] implementation: the routing table from parsed dispatches
//! to the operation shims.
//!
//! # Dispatch routing
//!
//! | Sequence type | Pattern | Dispatch method | Handling |
//! |---|---|---|---|
//! | Printable | regular chars | [`print()`] | write to grid + host |
//! | Control | C0 bytes | [`execute()`] | LF/CR/BS/NAK, rest ignored |
//! | CSI | `ESC [ … final` | [`csi_dispatch()`] | interpret or forward |
//! | ESC | `ESC final` | [`esc_dispatch()`] | `7 8 D M`, rest forwarded |
//! | OSC | `ESC ] … ST` | [`osc_dispatch()`] | forwarded reconstructed |
//! | DCS | `ESC P … ST` | [`hook()`]/[`put()`]/[`unhook()`] | ignored |
//!
//! CSI routing order matters: a leading `?` (vte collects private markers
//! into the intermediates buffer) takes the private-mode path; any *other*
//! intermediate byte means the sequence is not interpreted and goes out
//! verbatim; only a bare final is matched against the dispatch table, and an
//! unknown bare final is forwarded too.
//!
//! [`print()`]: AnsiToWindowPerformer::print
//! [`execute()`]: AnsiToWindowPerformer::execute
//! [`csi_dispatch()`]: AnsiToWindowPerformer::csi_dispatch
//! [`esc_dispatch()`]: AnsiToWindowPerformer::esc_dispatch
//! [`osc_dispatch()`]: AnsiToWindowPerformer::osc_dispatch
//! [`hook()`]: AnsiToWindowPerformer::hook
//! [`put()`]: AnsiToWindowPerformer::put
//! [`unhook()`]: AnsiToWindowPerformer::unhook

use super::ansi_parser_public_api::AnsiToWindowPerformer;
use super::operations::{char_ops, control_ops, cursor_ops, erase_ops, forward_ops,
                        line_ops, margin_ops, mode_ops, sgr_ops};
use super::protocols::{csi_codes, esc_codes};
use vte::{Params, Perform};

impl Perform for AnsiToWindowPerformer<'_> {
    fn print(&mut self, ch: char) { char_ops::print_char(self, ch); }

    fn execute(&mut self, byte: u8) {
        match byte {
            esc_codes::LINE_FEED => control_ops::line_feed(self),
            esc_codes::CARRIAGE_RETURN => control_ops::carriage_return(self),
            esc_codes::BACKSPACE => control_ops::backspace(self),
            esc_codes::NAK_ERASE_LINE_START => control_ops::erase_to_line_start(self),
            _ => {
                // Other C0 bytes (TAB, BEL, SO/SI, ...) have no effect on the
                // window image.
            }
        }
    }

    fn csi_dispatch(
        &mut self,
        params: &Params,
        intermediates: &[u8],
        _ignore: bool,
        dispatch_char: char,
    ) {
        // Private-parameter sequences are partitioned (suppress/forward),
        // never interpreted.
        if intermediates.first() == Some(&(csi_codes::CSI_PRIVATE_MODE_PREFIX as u8)) {
            mode_ops::handle_private_mode(
                self,
                params,
                &intermediates[1..],
                dispatch_char,
            );
            return;
        }

        // An intermediate byte means a function this core does not model;
        // re-emit it untouched.
        if !intermediates.is_empty() {
            forward_ops::forward_csi(self, params, intermediates, dispatch_char);
            return;
        }

        match dispatch_char {
            csi_codes::CUU_CURSOR_UP => cursor_ops::cursor_up(self, params),
            csi_codes::CUD_CURSOR_DOWN => cursor_ops::cursor_down(self, params),
            csi_codes::CUF_CURSOR_FORWARD => cursor_ops::cursor_forward(self, params),
            csi_codes::CUB_CURSOR_BACKWARD => cursor_ops::cursor_backward(self, params),
            csi_codes::CUP_CURSOR_POSITION | csi_codes::HVP_CURSOR_POSITION => {
                cursor_ops::cursor_position(self, params);
            }
            csi_codes::CHA_CURSOR_COLUMN => cursor_ops::cursor_column(self, params),
            csi_codes::ED_ERASE_DISPLAY => erase_ops::erase_display(self, params),
            csi_codes::EL_ERASE_LINE => erase_ops::erase_line(self, params),
            csi_codes::IL_INSERT_LINE => line_ops::insert_lines(self, params),
            csi_codes::DL_DELETE_LINE => line_ops::delete_lines(self, params),
            csi_codes::ICH_INSERT_CHAR => char_ops::insert_chars(self, params),
            csi_codes::DCH_DELETE_CHAR => char_ops::delete_chars(self, params),
            csi_codes::ECH_ERASE_CHAR => char_ops::erase_chars(self, params),
            csi_codes::DECSTBM_SET_MARGINS => {
                margin_ops::set_scroll_margins(self, params);
            }
            csi_codes::SCP_SAVE_CURSOR => cursor_ops::save_cursor(self),
            csi_codes::RCP_RESTORE_CURSOR => cursor_ops::restore_cursor(self),
            csi_codes::SGR_SET_GRAPHICS => {
                sgr_ops::select_graphic_rendition(self, params);
            }
            _ => forward_ops::forward_csi(self, params, intermediates, dispatch_char),
        }
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], _ignore: bool, byte: u8) {
        if intermediates.is_empty() {
            match byte {
                esc_codes::DECSC_SAVE_CURSOR => {
                    cursor_ops::save_cursor(self);
                    return;
                }
                esc_codes::DECRC_RESTORE_CURSOR => {
                    cursor_ops::restore_cursor(self);
                    return;
                }
                esc_codes::IND_INDEX_DOWN => {
                    self.screen.esc_index_down();
                    return;
                }
                esc_codes::RI_REVERSE_INDEX_UP => {
                    self.screen.esc_reverse_index_up();
                    return;
                }
                esc_codes::ST_STRING_TERMINATOR => {
                    // Already appended by the OSC forwarding path.
                    return;
                }
                _ => {}
            }
        }
        forward_ops::forward_esc(self, intermediates, byte);
    }

    fn osc_dispatch(&mut self, params: &[&[u8]], bell_terminated: bool) {
        forward_ops::forward_osc(self, params, bell_terminated);
    }

    fn hook(&mut self, _params: &Params, _intermediates: &[u8], _ignore: bool, _c: char) {
        // DCS (sixel, ReGIS, ...) is not part of the window model.
    }

    fn put(&mut self, _byte: u8) {
        // DCS payload - ignored.
    }

    fn unhook(&mut self) {
        // DCS end - ignored.
    }
}
