//! The four per-round transformations applied by Grøstl's
//! [permutations](super::permutation::permute).
//!
//! The state is `columns` (8 or 16) packed 64-bit words. Row 0 of a column
//! lives in the most significant byte of its word and row 7 in the least
//! significant byte, which is exactly the byte order `u64::to_be_bytes`
//! produces — every transform below leans on that instead of manually
//! shifting bytes in and out.

use {
    super::sbox::{mul2, mul3, mul4, mul5, mul7, S_BOX},
    docext::docext,
};

/// Which of the two fixed permutations a round belongs to.
///
/// The reference this was distilled from instead passes a single character
/// (`'P'`/`'Q'`, lowercased for the short variant) through the round
/// functions. An explicit enum can't drift out of sync with the state shape
/// the way a character flag can, so this crate uses one instead; the
/// short/long choice is derived separately, from the state's column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Variant {
    P,
    Q,
}

/// Extract byte at row `i` (0 = most significant) of a packed state column.
pub(crate) fn row(col: u64, i: usize) -> u8 {
    col.to_be_bytes()[i]
}

/// AddRoundConstant XORs a round- and column-dependent byte into the state.
///
/// The P-variant XORs the byte into row 0 only. The Q-variant XORs the byte
/// into row 7 and flips every other row byte by XORing it with the all-ones
/// mask, which is what makes P and Q behave differently enough to be used
/// together safely in the [compression function](super::compress::compress).
pub(crate) fn add_round_constant(state: &mut [u64], round: u8, variant: Variant) {
    for (i, col) in state.iter_mut().enumerate() {
        let byte = (((i as u8) << 4) ^ round) as u64;
        match variant {
            Variant::P => *col ^= byte << 56,
            Variant::Q => *col ^= !0u64 ^ byte,
        }
    }
}

/// SubBytes replaces every state byte with its image under the
/// [S-box](S_BOX), independently per byte.
pub(crate) fn sub_bytes(state: &mut [u64]) {
    for col in state.iter_mut() {
        let mut bytes = col.to_be_bytes();
        for b in bytes.iter_mut() {
            *b = S_BOX[*b as usize];
        }
        *col = u64::from_be_bytes(bytes);
    }
}

/// The four shift vectors from the Grøstl specification, selected by variant
/// and by whether the state has 16 columns (the long variant) or 8 (short).
fn shift_vector(variant: Variant, long: bool) -> [usize; 8] {
    match (variant, long) {
        (Variant::P, false) => [0, 1, 2, 3, 4, 5, 6, 7],
        (Variant::P, true) => [0, 1, 2, 3, 4, 5, 6, 11],
        (Variant::Q, false) => [1, 3, 5, 7, 0, 2, 4, 6],
        (Variant::Q, true) => [1, 3, 5, 11, 0, 2, 4, 6],
    }
}

/// ShiftBytes rotates row `j` left by `sigma[j]` column positions, modulo
/// the column count. Output column `i`, row `j` is read from input column
/// `(i + sigma[j]) mod columns`.
pub(crate) fn shift_bytes(state: &mut [u64], variant: Variant) {
    let columns = state.len();
    let sigma = shift_vector(variant, columns == 16);

    // `state` can't be shifted in place column-by-column since every output
    // column reads from several different input columns; snapshot it first.
    let mut input = [0u64; 16];
    input[..columns].copy_from_slice(state);

    for i in 0..columns {
        let mut bytes = [0u8; 8];
        for (j, b) in bytes.iter_mut().enumerate() {
            let src = (i + sigma[j]) % columns;
            *b = row(input[src], j);
        }
        state[i] = u64::from_be_bytes(bytes);
    }
}

/// MixBytes multiplies each column, viewed as a vector of 8 bytes over
/// $GF(2^8)$, by the fixed circulant matrix with first row `(02, 02, 03, 04,
/// 05, 03, 05, 07)`.
#[docext]
pub(crate) fn mix_bytes(state: &mut [u64]) {
    for col in state.iter_mut() {
        let r = col.to_be_bytes();
        let mut new = [0u8; 8];
        for (j, b) in new.iter_mut().enumerate() {
            *b = mul2(r[j])
                ^ mul2(r[(j + 1) % 8])
                ^ mul3(r[(j + 2) % 8])
                ^ mul4(r[(j + 3) % 8])
                ^ mul5(r[(j + 4) % 8])
                ^ mul3(r[(j + 5) % 8])
                ^ mul5(r[(j + 6) % 8])
                ^ mul7(r[(j + 7) % 8]);
        }
        *col = u64::from_be_bytes(new);
    }
}
