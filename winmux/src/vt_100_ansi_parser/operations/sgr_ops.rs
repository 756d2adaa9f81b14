// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR shim (CSI `m`).
//!
//! The whole parameter list is handed over at once because extended colors
//! (`38;5;k`) consume positions by lookahead; per-parameter dispatch cannot
//! express that.

use super::super::ansi_parser_public_api::AnsiToWindowPerformer;
use vte::Params;

/// SGR - fold the parameter list into the current attribute.
pub fn select_graphic_rendition(
    performer: &mut AnsiToWindowPerformer<'_>,
    params: &Params,
) {
    let positions: Vec<&[u16]> = params.iter().collect();
    performer.screen.apply_sgr(&positions);
}
