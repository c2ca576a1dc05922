use crate::errors::{SpongeError, SpongeResult};

/// A message fragment measured in bits.
///
/// Bits are numbered little-endian: bit `i` of the message is bit `i % 8`
/// of byte `i / 8`. When the length is not a multiple of 8, the trailing
/// partial byte contributes its `len % 8` low-order bits, and its remaining
/// high-order bits are ignored.
///
/// ```
/// use keccak_sponge::Bits;
///
/// // 8 whole bits followed by the 3 low bits of 0b101.
/// let bits = Bits::new(&[0xff, 0b101], 11).unwrap();
/// assert_eq!(bits.bit_len(), 11);
/// assert_eq!(bits, Bits::from_parts(&[0xff, 0b101], 1, 3).unwrap());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bits<'a> {
    bytes: &'a [u8],
    len: usize,
}

impl<'a> Bits<'a> {
    /// The empty message.
    pub const fn empty() -> Self {
        Self { bytes: &[], len: 0 }
    }

    /// All the bits of `bytes`.
    pub const fn from_bytes(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            len: bytes.len() * 8,
        }
    }

    /// The first `bit_len` bits of `bytes`.
    pub fn new(bytes: &'a [u8], bit_len: usize) -> SpongeResult<Self> {
        if bit_len.div_ceil(8) > bytes.len() {
            return Err(SpongeError::InvalidParameter(format!(
                "bit length {} exceeds the {} bytes supplied",
                bit_len,
                bytes.len()
            )));
        }
        Ok(Self {
            bytes: &bytes[..bit_len.div_ceil(8)],
            len: bit_len,
        })
    }

    /// `whole_bytes` full bytes followed by the `extra_bits` low-order bits
    /// of the next byte.
    pub fn from_parts(
        bytes: &'a [u8],
        whole_bytes: usize,
        extra_bits: usize,
    ) -> SpongeResult<Self> {
        if extra_bits > 7 {
            return Err(SpongeError::InvalidParameter(format!(
                "extra bit count {} is not in 0..=7",
                extra_bits
            )));
        }
        let bit_len = whole_bytes
            .checked_mul(8)
            .and_then(|bits| bits.checked_add(extra_bits))
            .ok_or_else(|| {
                SpongeError::InvalidParameter(format!(
                    "{} whole bytes overflow the bit length",
                    whole_bytes
                ))
            })?;
        Self::new(bytes, bit_len)
    }

    /// Number of bits in the message.
    pub const fn bit_len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The bytes covering the message, including a trailing partial byte.
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The fully-populated bytes.
    pub(crate) fn whole_bytes(&self) -> &'a [u8] {
        &self.bytes[..self.len / 8]
    }

    /// The trailing partial byte, masked down to its valid bits, and their count.
    pub(crate) fn partial_byte(&self) -> Option<(u8, usize)> {
        let extra = self.len % 8;
        (extra != 0).then(|| (self.bytes[self.len / 8] & ((1u8 << extra) - 1), extra))
    }
}

impl Default for Bits<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a> From<&'a [u8]> for Bits<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Bits<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Bits<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<'a> From<&'a str> for Bits<'a> {
    fn from(s: &'a str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}
