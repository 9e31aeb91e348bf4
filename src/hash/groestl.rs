//! [Grøstl](crate::doc::groestl), a wide-pipe AES-based hash function and
//! one of the five finalists of the NIST SHA-3 competition.
//!
//! This module only implements the permutation-and-compression core: feeding
//! it bytes and reading a digest back out. Turning that digest into hex, or
//! reading it from a file or a socket, is left to the caller.

pub(crate) mod compress;
pub(crate) mod digest;
pub(crate) mod error;
pub(crate) mod permutation;
pub(crate) mod round;
pub(crate) mod sbox;

pub use {
    digest::{sum_224, sum_256, sum_384, sum_512, Grostl, Grostl224, Grostl256, Grostl384, Grostl512},
    error::InvalidHashLength,
};
