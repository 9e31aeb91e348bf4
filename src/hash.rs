pub mod groestl;

pub use groestl::{sum_224, sum_256, sum_384, sum_512, Grostl, Grostl224, Grostl256, Grostl384, Grostl512, InvalidHashLength};

/// A cryptographic hash function.
pub trait Hash {
    type Output;

    fn hash(&self, input: &[u8]) -> Self::Output;
}
