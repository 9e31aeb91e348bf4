//! The P and Q permutations, each `rounds` iterations of the four
//! [round transformations](super::round).

use super::round::{add_round_constant, mix_bytes, shift_bytes, sub_bytes, Variant};

/// Apply `rounds` iterations of AddRoundConstant, SubBytes, ShiftBytes, and
/// MixBytes (in that order) to `state`, using the round-constant and
/// shift-vector tables for `variant`.
///
/// The short/long choice inside each transformation is derived from
/// `state.len()` (8 or 16), not passed separately, so it can never disagree
/// with the state actually being permuted.
pub(crate) fn permute(state: &mut [u64], rounds: usize, variant: Variant) {
    for round in 0..rounds {
        add_round_constant(state, round as u8, variant);
        sub_bytes(state);
        shift_bytes(state, variant);
        mix_bytes(state);
    }
}
