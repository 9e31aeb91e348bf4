//! Grøstl treats hashing as encryption without a secret: its compression
//! function is built from two permutations, P and Q, each modeled directly
//! on an AES round (the same [confusion and diffusion](crate::doc::encryption)
//! properties apply, just without a key schedule to attack).
//!
//! # Wide pipe
//!
//! A Davies-Meyer construction (as used by SHA-1 and SHA-2) keeps a chaining
//! value the same width as the final digest. Grøstl instead keeps a chaining
//! value *twice* as wide as the longest digest it can produce, and only
//! narrows it down at the very end, in the output transformation. This
//! wide-pipe design rules out a class of generic attacks (such as
//! length-extension) that apply to narrow-pipe Merkle-Damgård
//! constructions, at the cost of a larger internal state.
//!
//! # Two permutations, not one
//!
//! P and Q share the same four round transformations (AddRoundConstant,
//! SubBytes, ShiftBytes, MixBytes) and the same S-box and MixBytes matrix as
//! AES, but use different round constants: P perturbs the top row of the
//! state, Q perturbs the bottom row and inverts everything else. Using two
//! permutations that disagree this much, rather than one permutation twice,
//! is what lets the compression function combine them by XOR without
//! collapsing into something invertible.
//!
//! # 10.3 padding
//!
//! Before the last block is compressed, the message is padded with a
//! single `1` bit, zero bits, and a 64-bit big-endian count of how many
//! blocks will have been compressed in total (itself included). Padding by
//! block count rather than bit length is one of the more surprising details
//! here if you're used to Merkle-Damgård hash functions, which pad with a
//! bit length instead.
