#[cfg(test)]
mod test;

#[cfg(doc)]
pub mod doc;

mod hash;

pub use hash::{sum_224, sum_256, sum_384, sum_512, Grostl, Grostl224, Grostl256, Grostl384, Grostl512, Hash, InvalidHashLength};
