//! This module defines the sponge construction that absorbs messages and squeezes digests.
//!
//! - [`Permutation`] is the fixed-width transformation the sponge is built on;
//! [`KeccakF1600`] is the only one shipped, and the one every standard variant uses.
//! - [`Sponge`] owns a permutation state, the bitrate/capacity split, and the bits
//! not yet absorbed. It runs the FIPS 202 sponge with pad10*1 padding and a domain suffix.
//! - [`hashers`] wraps fixed parametrizations into the [`digest`] traits.

/// RustCrypto-compatible hashers.
pub mod hashers;
/// The Keccak-f\[1600\] permutation.
pub mod keccak;
/// The sponge construction.
pub mod sponge;
#[cfg(test)]
mod tests;

pub use keccak::KeccakF1600;
pub use sponge::{KeccakSponge, Sponge, SpongeConfig};
use zeroize::Zeroize;

/// The state of a cryptographic sponge and the permutation applied to it.
///
/// For implementors:
///
/// - The state is [`Permutation::N`] bytes wide, exposed through [`AsRef`] and [`AsMut`].
/// Blocks are XORed into, and read from, the first bytes of that view.
/// - The [`std::default::Default`] implementation *MUST* initialize the state to zero.
pub trait Permutation: Zeroize + Default + Clone + AsRef<[u8]> + AsMut<[u8]> {
    /// The width of the state in bytes.
    const N: usize;

    /// The width of the state in bits.
    const WIDTH: usize = Self::N * 8;

    /// Permute the state.
    fn permute(&mut self);
}
