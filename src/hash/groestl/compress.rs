//! The Grøstl compression function and final output transformation.
//!
//! Unlike the Davies-Meyer construction used by [SHA-1 and
//! SHA-2](crate::doc::groestl), Grøstl's compression function runs both
//! fixed permutations every block and combines them with the chaining value
//! by XOR, which is what gives it a wide pipe (the internal state is twice
//! the size of the final digest, even before truncation).

use {
    super::{permutation::permute, round::Variant},
    docext::docext,
};

/// Compute `f(h, m) = P(h ⊕ m) ⊕ Q(m) ⊕ h` and store the result back into
/// `chaining`.
///
/// `chaining` and `block` must have the same length (the column count, 8 or
/// 16). P and Q share no state and could be computed concurrently, but nothing
/// about the contract requires it, and this implementation simply computes
/// them one after the other.
pub(crate) fn compress(chaining: &mut [u64], block: &[u64], rounds: usize) {
    let columns = chaining.len();
    assert_eq!(
        block.len(),
        columns,
        "compress() called with a block that doesn't match the chaining width"
    );

    let mut a = [0u64; 16];
    for i in 0..columns {
        a[i] = chaining[i] ^ block[i];
    }
    permute(&mut a[..columns], rounds, Variant::P);

    let mut b = [0u64; 16];
    b[..columns].copy_from_slice(block);
    permute(&mut b[..columns], rounds, Variant::Q);

    for i in 0..columns {
        chaining[i] ^= a[i] ^ b[i];
    }
}

/// Apply the output transformation $\Omega(h) = P(h) \oplus h$ in place.
///
/// This is applied exactly once, after the last (padded) block has been
/// absorbed, before [truncation](super::digest).
#[docext]
pub(crate) fn output_transform(chaining: &mut [u64], rounds: usize) {
    let columns = chaining.len();
    let mut h = [0u64; 16];
    h[..columns].copy_from_slice(chaining);
    permute(&mut h[..columns], rounds, Variant::P);
    for i in 0..columns {
        chaining[i] ^= h[i];
    }
}
