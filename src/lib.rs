//!
//! This crate implements the Keccak sponge construction underlying the SHA-3 family:
//! the fixed-length hashes SHA3-224/256/384/512, the pre-standardization Keccak,
//! and the extendable-output functions SHAKE and RawSHAKE.
//!
//! # Overview
//!
//! A [`Sponge`] is configured with a bitrate, a capacity (adding up to the 1600 bits of
//! Keccak-f\[1600\]) and an output length. It then
//!
//! - absorbs the message, in as many fragments as convenient, measured in bits ([`Bits`]);
//! - is finalized once, appending a [`DomainSuffix`] and pad10*1 padding;
//! - squeezes digests, blocks, or an arbitrarily long output stream.
//!
//! ```
//! use keccak_sponge::{Bits, DomainSuffix, KeccakSponge};
//!
//! // SHA3-256: bitrate 1088, capacity 512, 256 bits of output.
//! let mut sponge = KeccakSponge::initialize(1088, 512, 256).unwrap();
//! let digest = sponge.digest(Bits::empty(), DomainSuffix::Sha3).unwrap();
//! assert_eq!(digest[..4], [0xa7, 0xff, 0xc6, 0xf8]);
//! ```
//!
//! Messages need not be made of whole bytes: a [`Bits`] carries an explicit bit length,
//! and the trailing partial byte contributes its low-order bits.
//!
//! ```
//! use keccak_sponge::{Bits, DomainSuffix, KeccakSponge};
//!
//! // SHAKE128 with open-ended output.
//! let mut sponge = KeccakSponge::initialize(1344, 256, 0).unwrap();
//! sponge.absorb(Bits::new(&[0b10011], 5).unwrap()).unwrap();
//! sponge.finalize(Bits::empty(), DomainSuffix::Shake).unwrap();
//! let mut first = [0u8; 32];
//! let mut second = [0u8; 32];
//! sponge.squeeze(&mut first).unwrap();
//! sponge.squeeze(&mut second).unwrap();
//! ```
//!
//! # Batteries included
//!
//! - [`Algorithm`] names the standard parametrizations and hashes whole messages;
//! with the (default) feature `parallel`, [`Algorithm::hash_many`] hashes independent messages on rayon.
//! - [`hash::hashers`] exposes them through the RustCrypto [`digest`] traits.
//!
//! Every sponge is an independent value: there is no global state, and hashing
//! concurrently only requires one sponge per thread.

#[cfg(target_endian = "big")]
compile_error!(
    r#"
This crate doesn't support big-endian targets.
"#
);

/// Standard parametrizations.
mod algorithms;
/// Bit-length messages.
mod bits;
/// Built-in errors.
mod errors;
/// The permutation and the sponge construction.
pub mod hash;
/// Domain separation suffixes.
mod suffix;

pub use algorithms::Algorithm;
pub use bits::Bits;
pub use errors::{SpongeError, SpongeResult};
pub use hash::{KeccakF1600, KeccakSponge, Permutation, Sponge, SpongeConfig};
pub use suffix::DomainSuffix;
