//! The streaming message schedule, 10.3 padding, and digest façade.

use {
    super::{
        compress::{compress, output_transform},
        error::InvalidHashLength,
    },
    crate::Hash,
};

/// Largest column count across both variants (the long variant uses 16).
const MAX_COLUMNS: usize = 16;

/// Largest block size in bytes across both variants (the long variant's 128
/// bytes).
const MAX_BLOCK_BYTES: usize = 128;

/// A resettable Grøstl digest of one of the four specified output lengths.
///
/// `Grostl` owns all of its state; it performs no I/O and is not shared
/// between threads. Bytes are fed incrementally via [`write`](Self::write),
/// and [`sum`](Self::sum) may be called at any point, including more than
/// once and interleaved with further `write` calls — it operates on an
/// internal snapshot and never mutates the receiver.
#[derive(Clone)]
pub struct Grostl {
    hashbitlen: u32,
    columns: usize,
    rounds: usize,
    block_size_bytes: usize,
    chaining: [u64; MAX_COLUMNS],
    buf: [u8; MAX_BLOCK_BYTES],
    nbuf: usize,
    blocks: u64,
}

impl std::fmt::Debug for Grostl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Grostl")
            .field("hashbitlen", &self.hashbitlen)
            .field("nbuf", &self.nbuf)
            .field("blocks", &self.blocks)
            .finish()
    }
}

impl Grostl {
    /// Construct a digest for one of Grøstl's four specified output
    /// lengths, in bits.
    ///
    /// The short variant (8 columns, 10 rounds) is used for `hashbitlen <=
    /// 256`; the long variant (16 columns, 14 rounds) otherwise.
    pub fn new(hashbitlen: u32) -> Result<Self, InvalidHashLength> {
        if !matches!(hashbitlen, 224 | 256 | 384 | 512) {
            return Err(InvalidHashLength(hashbitlen));
        }

        let (columns, rounds) = if hashbitlen <= 256 { (8, 10) } else { (16, 14) };
        let mut digest = Self {
            hashbitlen,
            columns,
            rounds,
            block_size_bytes: 8 * columns,
            chaining: [0; MAX_COLUMNS],
            buf: [0; MAX_BLOCK_BYTES],
            nbuf: 0,
            blocks: 0,
        };
        digest.chaining[columns - 1] = hashbitlen as u64;
        Ok(digest)
    }

    /// Reinitialize the digest as if freshly constructed, discarding any
    /// bytes written so far.
    pub fn reset(&mut self) {
        self.chaining = [0; MAX_COLUMNS];
        self.chaining[self.columns - 1] = self.hashbitlen as u64;
        self.nbuf = 0;
        self.blocks = 0;
    }

    /// The digest length in bytes (`hashbitlen / 8`).
    pub fn size(&self) -> usize {
        (self.hashbitlen / 8) as usize
    }

    /// The internal block size in bytes (64 for the short variant, 128 for
    /// the long variant).
    pub fn block_size(&self) -> usize {
        self.block_size_bytes
    }

    /// Absorb `data` into the digest, compressing full blocks as they
    /// accumulate and buffering the remainder.
    ///
    /// Returns the number of bytes consumed, which is always `data.len()`:
    /// there is no I/O here, so there is nothing that can cause a short
    /// write.
    pub fn write(&mut self, mut data: &[u8]) -> usize {
        let written = data.len();
        let block_size = self.block_size_bytes;

        if self.nbuf > 0 {
            let n = (block_size - self.nbuf).min(data.len());
            self.buf[self.nbuf..self.nbuf + n].copy_from_slice(&data[..n]);
            self.nbuf += n;
            data = &data[n..];

            if self.nbuf == block_size {
                self.absorb_block_from_buf();
                self.nbuf = 0;
            }
        }

        while data.len() >= block_size {
            let (block, rest) = data.split_at(block_size);
            self.absorb_block(block);
            data = rest;
        }

        if !data.is_empty() {
            self.buf[..data.len()].copy_from_slice(data);
            self.nbuf = data.len();
        }

        written
    }

    /// Finalize a snapshot of the digest and return the `size()`-byte
    /// output. Does not mutate `self`.
    pub fn sum(&self) -> Vec<u8> {
        let mut snapshot = self.clone();
        snapshot.pad();
        output_transform(&mut snapshot.chaining[..snapshot.columns], snapshot.rounds);

        // Serialize the *upper* half of the in-use columns, big-endian; the
        // digest is the trailing `size()` bytes of that. Computing it this
        // way (rather than hardcoding `columns * 4`) gives the right buffer
        // size for both the short and the long variant. See REDESIGN FLAGS.
        let half = snapshot.block_size_bytes / 2;
        let mut out = vec![0u8; half];
        for (i, word) in snapshot.chaining[snapshot.columns / 2..snapshot.columns]
            .iter()
            .enumerate()
        {
            out[i * 8..i * 8 + 8].copy_from_slice(&word.to_be_bytes());
        }

        let digest_len = snapshot.size();
        out.split_off(out.len() - digest_len)
    }

    /// Parse `block` (exactly `block_size_bytes` long) into `columns`
    /// big-endian 64-bit words and run the compression function.
    fn absorb_block(&mut self, block: &[u8]) {
        assert_eq!(
            block.len(),
            self.block_size_bytes,
            "transform called with a length that is not a multiple of the block size"
        );

        let mut words = [0u64; MAX_COLUMNS];
        for (w, chunk) in words[..self.columns].iter_mut().zip(block.chunks_exact(8)) {
            *w = u64::from_be_bytes(chunk.try_into().unwrap());
        }
        compress(&mut self.chaining[..self.columns], &words[..self.columns], self.rounds);
        self.blocks += 1;
    }

    /// Like [`absorb_block`](Self::absorb_block), but reads straight out of
    /// `self.buf` (a full block's worth was just buffered there).
    fn absorb_block_from_buf(&mut self) {
        let block_size = self.block_size_bytes;
        let block = self.buf;
        self.absorb_block(&block[..block_size]);
    }

    /// Apply 10.3 padding: a single `0x80` byte, zero bytes up to the last 8
    /// bytes of the final block, and the total block count (including any
    /// padding-only block) big-endian in those last 8 bytes.
    fn pad(&mut self) {
        let block_size = self.block_size_bytes;

        self.buf[self.nbuf] = 0x80;
        let mut nbuf = self.nbuf + 1;

        if block_size - nbuf < 8 {
            // Not enough room left for the length field: zero-fill and
            // flush this block, then start a fresh all-zero one.
            for b in &mut self.buf[nbuf..block_size] {
                *b = 0;
            }
            self.absorb_block_from_buf();
            self.buf = [0; MAX_BLOCK_BYTES];
            nbuf = 0;
        }

        assert!(
            nbuf <= block_size - 8,
            "10.3 padding left no room for the 8-byte length field"
        );

        for b in &mut self.buf[nbuf..block_size - 8] {
            *b = 0;
        }

        // The count includes the block we're about to absorb.
        let total_blocks = self.blocks + 1;
        self.buf[block_size - 8..block_size].copy_from_slice(&total_blocks.to_be_bytes());
        self.absorb_block_from_buf();
        self.nbuf = 0;
    }
}

macro_rules! grostl_variant {
    ($(#[$meta:meta])* $name:ident, $hashbitlen:expr, $output:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name(Grostl);

        impl Default for $name {
            fn default() -> Self {
                Self(Grostl::new($hashbitlen).expect(concat!(
                    stringify!($hashbitlen),
                    " is a valid Grøstl output length"
                )))
            }
        }

        impl $name {
            /// Reinitialize the digest, discarding any bytes written so far.
            pub fn reset(&mut self) {
                self.0.reset()
            }

            /// Absorb `data`, returning the number of bytes consumed (always
            /// `data.len()`).
            pub fn write(&mut self, data: &[u8]) -> usize {
                self.0.write(data)
            }

            /// Finalize a snapshot of the digest. Does not mutate `self`.
            pub fn sum(&self) -> [u8; $output] {
                self.0
                    .sum()
                    .try_into()
                    .expect(concat!(stringify!($name), "::sum always returns ", stringify!($output), " bytes"))
            }

            /// The digest length in bytes.
            pub fn size(&self) -> usize {
                self.0.size()
            }

            /// The internal block size in bytes.
            pub fn block_size(&self) -> usize {
                self.0.block_size()
            }
        }

        impl Hash for $name {
            type Output = [u8; $output];

            fn hash(&self, input: &[u8]) -> Self::Output {
                let mut digest = Self::default();
                digest.write(input);
                digest.sum()
            }
        }
    };
}

grostl_variant!(
    /// Grøstl-224, the short variant (8 columns, 10 rounds, 64-byte blocks)
    /// truncated to a 28-byte digest.
    Grostl224, 224, 28
);
grostl_variant!(
    /// Grøstl-256, the short variant (8 columns, 10 rounds, 64-byte blocks)
    /// truncated to a 32-byte digest.
    Grostl256, 256, 32
);
grostl_variant!(
    /// Grøstl-384, the long variant (16 columns, 14 rounds, 128-byte blocks)
    /// truncated to a 48-byte digest.
    Grostl384, 384, 48
);
grostl_variant!(
    /// Grøstl-512, the long variant (16 columns, 14 rounds, 128-byte blocks)
    /// truncated to a 64-byte digest.
    Grostl512, 512, 64
);

/// One-shot convenience equivalent to constructing a [`Grostl224`], writing
/// `data`, and summing it.
pub fn sum_224(data: &[u8]) -> [u8; 28] {
    Grostl224::default().hash(data)
}

/// One-shot convenience equivalent to constructing a [`Grostl256`], writing
/// `data`, and summing it.
pub fn sum_256(data: &[u8]) -> [u8; 32] {
    Grostl256::default().hash(data)
}

/// One-shot convenience equivalent to constructing a [`Grostl384`], writing
/// `data`, and summing it.
pub fn sum_384(data: &[u8]) -> [u8; 48] {
    Grostl384::default().hash(data)
}

/// One-shot convenience equivalent to constructing a [`Grostl512`], writing
/// `data`, and summing it.
pub fn sum_512(data: &[u8]) -> [u8; 64] {
    Grostl512::default().hash(data)
}
