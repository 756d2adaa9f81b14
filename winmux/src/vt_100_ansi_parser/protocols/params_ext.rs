// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! VT100-compliant parameter extraction for [`vte::Params`].
//!
//! An extension trait is used because the orphan rule prevents inherent impls
//! on a foreign type. Two access patterns cover every dispatch in this crate:
//!
//! | Method | Missing param | Zero param | Out of bounds |
//! |---|---|---|---|
//! | [`extract_nth_non_zero`] | 1 | 1 | 1 |
//! | [`extract_nth_raw`] | `Some(0)` ✎ | `Some(0)` ✎ | `None` |
//!
//! ✎ `vte` normalizes a missing parameter to `0`, so `ESC[A` and `ESC[0A` are
//! indistinguishable, which is exactly the VT100 "missing or zero means
//! default" rule for count parameters.
//!
//! Use [`extract_nth_non_zero`] for counts and distances (CUU, CUD, ICH, …)
//! and [`extract_nth_raw`] where zero and absent carry meaning of their own
//! (ED/EL modes, DECSTBM bounds, private mode numbers).
//!
//! [`extract_nth_non_zero`]: ParamsExt::extract_nth_non_zero
//! [`extract_nth_raw`]: ParamsExt::extract_nth_raw

/// VT100 parameter access on [`vte::Params`].
pub trait ParamsExt {
    /// Primary value at position `n`, with missing/zero defaulting to 1.
    fn extract_nth_non_zero(&self, arg_nth_pos: usize) -> u16;

    /// Primary value at position `n` without any default transformation;
    /// `None` when the position does not exist.
    fn extract_nth_raw(&self, arg_nth_pos: usize) -> Option<u16>;
}

impl ParamsExt for vte::Params {
    fn extract_nth_non_zero(&self, arg_nth_pos: usize) -> u16 {
        self.extract_nth_raw(arg_nth_pos)
            .map_or(1, |value| value.max(1))
    }

    fn extract_nth_raw(&self, arg_nth_pos: usize) -> Option<u16> {
        self.iter()
            .nth(arg_nth_pos)
            .and_then(<[u16]>::first)
            .copied()
    }
}
