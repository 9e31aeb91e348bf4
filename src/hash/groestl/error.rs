use std::fmt;

/// The requested output length is not one Grøstl defines.
///
/// Grøstl only specifies four output lengths: 224, 256, 384, and 512 bits.
/// Any other value is rejected by [`Grostl::new`](super::Grostl::new) before
/// any state is allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidHashLength(pub(crate) u32);

impl fmt::Display for InvalidHashLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is not a valid Grøstl output length (expected 224, 256, 384, or 512)",
            self.0
        )
    }
}

impl std::error::Error for InvalidHashLength {}
