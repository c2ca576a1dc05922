//! Fixed parametrizations of the sponge behind the RustCrypto [`digest`] traits.
//!
//! Fixed-output hashers implement [`digest::Digest`] through its blanket implementation,
//! extendable-output ones implement [`ExtendableOutput`] and hand out a [`SpongeReader`].
//!
//! ```
//! use digest::{Digest, ExtendableOutput, Update, XofReader};
//! use keccak_sponge::hash::hashers::{Sha3_256, Shake128};
//!
//! let digest = Sha3_256::digest(b"abc");
//! assert_eq!(digest[..4], [0x3a, 0x98, 0x5d, 0xa7]);
//!
//! let mut xof = Shake128::default();
//! Update::update(&mut xof, b"");
//! let mut reader = xof.finalize_xof();
//! let mut output = [0u8; 4];
//! reader.read(&mut output);
//! assert_eq!(output, [0x7f, 0x9c, 0x2b, 0xa4]);
//! ```
use digest::consts::{U28, U32, U48, U64};
use digest::{
    ExtendableOutput, FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset,
    Update, XofReader,
};

use super::KeccakSponge;
use crate::{Algorithm, Bits};

macro_rules! impl_fixed_hasher {
    ($(#[$meta:meta])* $name:ident, $algorithm:expr, $size:ty) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name(KeccakSponge);

        impl Default for $name {
            fn default() -> Self {
                Self($algorithm.sponge())
            }
        }

        impl HashMarker for $name {}

        impl OutputSizeUser for $name {
            type OutputSize = $size;
        }

        impl Update for $name {
            fn update(&mut self, data: &[u8]) {
                self.0.absorb_unchecked(Bits::from_bytes(data));
            }
        }

        impl FixedOutput for $name {
            fn finalize_into(mut self, out: &mut Output<Self>) {
                self.0.finalize_unchecked(Bits::empty(), $algorithm.suffix());
                self.0.squeeze_unchecked(out.as_mut_slice());
            }
        }

        impl Reset for $name {
            fn reset(&mut self) {
                self.0.reset();
            }
        }

        impl FixedOutputReset for $name {
            fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
                self.0.finalize_unchecked(Bits::empty(), $algorithm.suffix());
                self.0.squeeze_unchecked(out.as_mut_slice());
                self.0.reset();
            }
        }
    };
}

macro_rules! impl_xof_hasher {
    ($(#[$meta:meta])* $name:ident, $algorithm:expr) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name(KeccakSponge);

        impl Default for $name {
            fn default() -> Self {
                Self($algorithm.sponge())
            }
        }

        impl HashMarker for $name {}

        impl Update for $name {
            fn update(&mut self, data: &[u8]) {
                self.0.absorb_unchecked(Bits::from_bytes(data));
            }
        }

        impl ExtendableOutput for $name {
            type Reader = SpongeReader;

            fn finalize_xof(self) -> SpongeReader {
                let mut sponge = self.0;
                sponge.finalize_unchecked(Bits::empty(), $algorithm.suffix());
                SpongeReader(sponge)
            }
        }

        impl Reset for $name {
            fn reset(&mut self) {
                self.0.reset();
            }
        }
    };
}

impl_fixed_hasher!(
    /// SHA3-224.
    Sha3_224, Algorithm::Sha3_224, U28
);
impl_fixed_hasher!(
    /// SHA3-256.
    Sha3_256, Algorithm::Sha3_256, U32
);
impl_fixed_hasher!(
    /// SHA3-384.
    Sha3_384, Algorithm::Sha3_384, U48
);
impl_fixed_hasher!(
    /// SHA3-512.
    Sha3_512, Algorithm::Sha3_512, U64
);
impl_fixed_hasher!(
    /// Keccak-224, as submitted before standardization.
    Keccak224, Algorithm::Keccak224, U28
);
impl_fixed_hasher!(
    /// Keccak-256, as submitted before standardization.
    Keccak256, Algorithm::Keccak256, U32
);
impl_fixed_hasher!(
    /// Keccak-384, as submitted before standardization.
    Keccak384, Algorithm::Keccak384, U48
);
impl_fixed_hasher!(
    /// Keccak-512, as submitted before standardization.
    Keccak512, Algorithm::Keccak512, U64
);

impl_xof_hasher!(
    /// SHAKE128.
    Shake128, Algorithm::Shake128
);
impl_xof_hasher!(
    /// SHAKE256.
    Shake256, Algorithm::Shake256
);
impl_xof_hasher!(
    /// RawSHAKE128.
    RawShake128, Algorithm::RawShake128
);
impl_xof_hasher!(
    /// RawSHAKE256.
    RawShake256, Algorithm::RawShake256
);

/// Reads the output stream of a finalized sponge.
#[derive(Clone, Debug)]
pub struct SpongeReader(KeccakSponge);

impl XofReader for SpongeReader {
    fn read(&mut self, buffer: &mut [u8]) {
        self.0.squeeze_unchecked(buffer);
    }
}
