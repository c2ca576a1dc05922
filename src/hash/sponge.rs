use zeroize::{Zeroize, ZeroizeOnDrop};

use super::keccak::{KeccakF1600, LANES};
use super::Permutation;
use crate::bits::Bits;
use crate::errors::{SpongeError, SpongeResult};
use crate::suffix::DomainSuffix;

/// Bitrate, capacity and output length of a sponge, all in bits.
///
/// An output length of 0 selects extendable output: a digest is then one block,
/// and more can be squeezed at will.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpongeConfig {
    bitrate: usize,
    capacity: usize,
    output: usize,
}

impl SpongeConfig {
    /// Validate a configuration for [`KeccakF1600`].
    ///
    /// Bitrate and capacity must be positive multiples of 8 adding up to 1600.
    pub fn new(bitrate: usize, capacity: usize, output: usize) -> SpongeResult<Self> {
        Self::for_width(bitrate, capacity, output, KeccakF1600::WIDTH)
    }

    pub(crate) fn for_width(
        bitrate: usize,
        capacity: usize,
        output: usize,
        width: usize,
    ) -> SpongeResult<Self> {
        if bitrate == 0 || capacity == 0 {
            return Err(format!(
                "bitrate {} and capacity {} must be positive",
                bitrate, capacity
            )
            .into());
        }
        if bitrate % 8 != 0 || capacity % 8 != 0 {
            return Err(format!(
                "bitrate {} and capacity {} must be multiples of 8",
                bitrate, capacity
            )
            .into());
        }
        if bitrate + capacity != width {
            return Err(format!(
                "bitrate {} and capacity {} must add up to {}",
                bitrate, capacity, width
            )
            .into());
        }
        Ok(Self::new_unchecked(bitrate, capacity, output))
    }

    pub(crate) const fn new_unchecked(bitrate: usize, capacity: usize, output: usize) -> Self {
        Self {
            bitrate,
            capacity,
            output,
        }
    }

    pub const fn bitrate(&self) -> usize {
        self.bitrate
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Requested digest length in bits, 0 for extendable output.
    pub const fn output(&self) -> usize {
        self.output
    }

    pub const fn is_extendable(&self) -> bool {
        self.output == 0
    }

    /// Bytes absorbed or squeezed per permutation call.
    pub const fn rate_bytes(&self) -> usize {
        self.bitrate / 8
    }

    /// Bytes returned by a digest.
    pub const fn output_bytes(&self) -> usize {
        if self.output == 0 {
            self.rate_bytes()
        } else {
            self.output.div_ceil(8)
        }
    }

    /// Permutation calls needed to produce one digest.
    pub const fn blocks_per_digest(&self) -> usize {
        self.output_bytes().div_ceil(self.rate_bytes())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Absorbing,
    Squeezing,
    Disposed,
}

/// A cryptographic sponge over the permutation `P`.
///
/// The sponge absorbs messages of arbitrary bit length, is finalized exactly once
/// with a [`DomainSuffix`] and pad10*1 padding, and then squeezes output.
///
/// ```
/// use keccak_sponge::{DomainSuffix, KeccakSponge};
///
/// // SHA3-256
/// let mut sponge = KeccakSponge::initialize(1088, 512, 256).unwrap();
/// sponge.absorb(b"a").unwrap().absorb(b"bc").unwrap();
/// let digest = sponge.digest(b"", DomainSuffix::Sha3).unwrap();
/// assert_eq!(digest[..4], [0x3a, 0x98, 0x5d, 0xa7]);
/// ```
#[derive(Clone)]
pub struct Sponge<P: Permutation = KeccakF1600> {
    permutation: P,
    config: SpongeConfig,
    /// Pending bits, packed little-endian. Bits past `queue_bits` are always zero.
    queue: Vec<u8>,
    queue_bits: usize,
    /// Bytes of the current block already squeezed.
    squeeze_pos: usize,
    phase: Phase,
}

/// A sponge over Keccak-f\[1600\].
pub type KeccakSponge = Sponge<KeccakF1600>;

impl<P: Permutation> Sponge<P> {
    /// Create a zeroed sponge.
    pub fn new(config: SpongeConfig) -> SpongeResult<Self> {
        if config.bitrate() + config.capacity() != P::WIDTH {
            return Err(format!(
                "bitrate {} and capacity {} must add up to {}",
                config.bitrate(),
                config.capacity(),
                P::WIDTH
            )
            .into());
        }
        Ok(Self::new_unchecked(config))
    }

    /// Validate the parameters and create a zeroed sponge.
    pub fn initialize(bitrate: usize, capacity: usize, output: usize) -> SpongeResult<Self> {
        Self::new(SpongeConfig::for_width(bitrate, capacity, output, P::WIDTH)?)
    }

    pub(crate) fn new_unchecked(config: SpongeConfig) -> Self {
        log::debug!(
            "new sponge: bitrate {}, capacity {}, output {}",
            config.bitrate(),
            config.capacity(),
            config.output()
        );
        Self {
            permutation: P::default(),
            queue: vec![0u8; config.rate_bytes()],
            queue_bits: 0,
            squeeze_pos: 0,
            phase: Phase::Absorbing,
            config,
        }
    }

    pub fn config(&self) -> &SpongeConfig {
        &self.config
    }

    /// Whether the sponge has moved on to squeezing.
    pub fn is_finalized(&self) -> bool {
        self.phase == Phase::Squeezing
    }

    /// Number of message bits waiting for a full block.
    pub fn pending_bits(&self) -> usize {
        self.queue_bits
    }

    /// The state viewed as bytes, lanes serialized little-endian.
    pub fn state_bytes(&self) -> &[u8] {
        self.permutation.as_ref()
    }

    fn check_absorbing(&self) -> SpongeResult<()> {
        match self.phase {
            Phase::Absorbing => Ok(()),
            Phase::Squeezing => Err(SpongeError::AlreadyFinalized),
            Phase::Disposed => Err(SpongeError::NotInitialized),
        }
    }

    fn check_squeezing(&self) -> SpongeResult<()> {
        match self.phase {
            Phase::Squeezing => Ok(()),
            Phase::Absorbing => Err(SpongeError::NotFinalized),
            Phase::Disposed => Err(SpongeError::NotInitialized),
        }
    }

    /// Absorb more of the message.
    ///
    /// Messages are streamed: absorbing `"abc"` leaves the sponge exactly as
    /// absorbing `"a"` and then `"bc"`, also when fragments end mid-byte.
    pub fn absorb<'a>(&mut self, message: impl Into<Bits<'a>>) -> SpongeResult<&mut Self> {
        self.check_absorbing()?;
        Ok(self.absorb_unchecked(message.into()))
    }

    pub(crate) fn absorb_unchecked(&mut self, message: Bits<'_>) -> &mut Self {
        let rate = self.config.rate_bytes();
        let mut input = message.whole_bytes();

        if self.queue_bits % 8 == 0 {
            while !input.is_empty() {
                let pos = self.queue_bits / 8;
                if pos == 0 && input.len() >= rate {
                    // whole blocks skip the queue
                    let (block, rest) = input.split_at(rate);
                    xor_into(self.permutation.as_mut(), block);
                    self.permutation.permute();
                    input = rest;
                } else {
                    let chunk_len = usize::min(input.len(), rate - pos);
                    let (chunk, rest) = input.split_at(chunk_len);
                    self.queue[pos..pos + chunk_len].copy_from_slice(chunk);
                    self.queue_bits += chunk_len * 8;
                    self.absorb_if_full();
                    input = rest;
                }
            }
        } else {
            for &byte in input {
                self.push_bits(byte, 8);
            }
        }

        if let Some((byte, count)) = message.partial_byte() {
            self.push_bits(byte, count);
        }
        self
    }

    /// Queue the `count` low-order bits of `value`, with `count <= 8`.
    fn push_bits(&mut self, value: u8, count: usize) {
        let space = self.config.bitrate() - self.queue_bits;
        if count > space {
            self.place_bits(value, space);
            self.absorb_if_full();
            self.place_bits(value >> space, count - space);
        } else {
            self.place_bits(value, count);
            self.absorb_if_full();
        }
    }

    fn place_bits(&mut self, value: u8, count: usize) {
        debug_assert!(count <= 8 && self.queue_bits + count <= self.config.bitrate());
        let value = u16::from(value) & ((1u16 << count) - 1);
        let wide = value << (self.queue_bits % 8);
        let pos = self.queue_bits / 8;
        self.queue[pos] |= wide as u8;
        if wide > 0xff {
            self.queue[pos + 1] |= (wide >> 8) as u8;
        }
        self.queue_bits += count;
    }

    fn absorb_if_full(&mut self) {
        if self.queue_bits == self.config.bitrate() {
            self.absorb_queue();
        }
    }

    fn absorb_queue(&mut self) {
        log::trace!("absorbing {} queued bytes", self.queue.len());
        xor_into(self.permutation.as_mut(), &self.queue);
        self.permutation.permute();
        self.queue.as_mut_slice().zeroize();
        self.queue_bits = 0;
    }

    /// Absorb the last part of the message, the domain suffix and the padding,
    /// and move to squeezing.
    ///
    /// Padding is never empty: a tail ending on a block boundary gets a whole block of padding.
    pub fn finalize<'a>(
        &mut self,
        tail: impl Into<Bits<'a>>,
        suffix: DomainSuffix,
    ) -> SpongeResult<()> {
        self.check_absorbing()?;
        self.finalize_unchecked(tail.into(), suffix);
        Ok(())
    }

    pub(crate) fn finalize_unchecked(&mut self, tail: Bits<'_>, suffix: DomainSuffix) {
        self.absorb_unchecked(tail);

        let (bits, count) = suffix.packed();
        if count > 0 {
            self.push_bits(bits, count);
        }

        // pad10*1: the first 1, zeros already in the queue, and the last bit of the block.
        self.push_bits(1, 1);
        if let Some(last) = self.queue.last_mut() {
            *last |= 0x80;
        }
        self.absorb_queue();

        self.squeeze_pos = 0;
        self.phase = Phase::Squeezing;
        log::debug!("finalized sponge with suffix {}", suffix);
    }

    /// Finalize and return one digest of [`SpongeConfig::output_bytes`] bytes.
    ///
    /// Unused high-order bits of a trailing partial byte are zero.
    pub fn digest<'a>(
        &mut self,
        tail: impl Into<Bits<'a>>,
        suffix: DomainSuffix,
    ) -> SpongeResult<Vec<u8>> {
        self.finalize(tail, suffix)?;
        Ok(self.read_digest_unchecked())
    }

    /// Finalize and advance the state as [`Sponge::digest`] would, without producing output.
    pub fn digest_discard<'a>(
        &mut self,
        tail: impl Into<Bits<'a>>,
        suffix: DomainSuffix,
    ) -> SpongeResult<()> {
        self.finalize(tail, suffix)?;
        self.skip_digest_unchecked();
        Ok(())
    }

    /// Squeeze another digest.
    ///
    /// The rest of the current block is dropped, so each digest starts with a permutation.
    pub fn squeeze_digest(&mut self) -> SpongeResult<Vec<u8>> {
        self.check_squeezing()?;
        Ok(self.read_digest_unchecked())
    }

    /// Squeeze the next `ceil(bitrate / 8)` bytes of output.
    ///
    /// Right after finalizing this reads the state as is; later calls permute first.
    pub fn squeeze_block(&mut self) -> SpongeResult<Vec<u8>> {
        self.check_squeezing()?;
        let mut block = vec![0u8; self.config.rate_bytes()];
        self.squeeze_unchecked(&mut block);
        Ok(block)
    }

    /// Fill `output` with the next bytes of the output stream.
    ///
    /// Reads are streamed: squeezing `n` then `m` bytes equals squeezing `n + m` bytes.
    pub fn squeeze(&mut self, output: &mut [u8]) -> SpongeResult<()> {
        self.check_squeezing()?;
        self.squeeze_unchecked(output);
        Ok(())
    }

    pub(crate) fn squeeze_unchecked(&mut self, mut output: &mut [u8]) {
        let rate = self.config.rate_bytes();
        while !output.is_empty() {
            if self.squeeze_pos == rate {
                self.permutation.permute();
                self.squeeze_pos = 0;
            }
            let chunk_len = usize::min(output.len(), rate - self.squeeze_pos);
            let (chunk, rest) = core::mem::take(&mut output).split_at_mut(chunk_len);
            chunk.copy_from_slice(
                &self.permutation.as_ref()[self.squeeze_pos..self.squeeze_pos + chunk_len],
            );
            self.squeeze_pos += chunk_len;
            output = rest;
        }
    }

    /// Run the permutation `times` times without extracting anything.
    ///
    /// The next read starts with a permutation.
    pub fn simple_squeeze(&mut self, times: usize) -> SpongeResult<()> {
        self.check_squeezing()?;
        for _ in 0..times {
            self.permutation.permute();
            self.squeeze_pos = self.config.rate_bytes();
        }
        Ok(())
    }

    /// Advance the state as `times` calls to [`Sponge::squeeze_digest`] would,
    /// discarding the output.
    ///
    /// This is a throughput helper for benchmarking, with no cryptographic purpose.
    pub fn fast_squeeze(&mut self, times: usize) -> SpongeResult<()> {
        self.check_squeezing()?;
        for _ in 0..times {
            self.skip_digest_unchecked();
        }
        Ok(())
    }

    pub(crate) fn read_digest_unchecked(&mut self) -> Vec<u8> {
        self.align_to_block();
        let mut digest = vec![0u8; self.config.output_bytes()];
        self.squeeze_unchecked(&mut digest);
        self.squeeze_pos = self.config.rate_bytes();

        let extra = self.config.output() % 8;
        if extra != 0 {
            if let Some(last) = digest.last_mut() {
                *last &= (1u8 << extra) - 1;
            }
        }
        digest
    }

    fn skip_digest_unchecked(&mut self) {
        self.align_to_block();
        let rate = self.config.rate_bytes();
        for _ in 0..self.config.blocks_per_digest() {
            if self.squeeze_pos == rate {
                self.permutation.permute();
            }
            self.squeeze_pos = rate;
        }
    }

    /// Drop what is left of a partially read block.
    fn align_to_block(&mut self) {
        if self.squeeze_pos != 0 {
            self.squeeze_pos = self.config.rate_bytes();
        }
    }

    /// Go back to a freshly initialized sponge with the same configuration.
    pub fn reset(&mut self) {
        self.zeroize();
        self.queue = vec![0u8; self.config.rate_bytes()];
        self.phase = Phase::Absorbing;
    }

    /// Wipe the state and release the queue.
    ///
    /// Every later call, apart from [`Sponge::reset`], fails with [`SpongeError::NotInitialized`].
    pub fn dispose(&mut self) {
        if self.phase != Phase::Disposed {
            log::debug!("disposing sponge");
        }
        self.zeroize();
        self.queue = Vec::new();
        self.phase = Phase::Disposed;
    }
}

impl Sponge<KeccakF1600> {
    /// The 25 lanes of the state.
    pub fn state(&self) -> &[u64; LANES] {
        self.permutation.lanes()
    }

    /// Mutable access to the 25 lanes of the state.
    ///
    /// **HAZARD**: writes bypass the sponge bookkeeping. Meant for conformance testing and fuzzing.
    pub fn raw_state(&mut self) -> &mut [u64; LANES] {
        log::warn!("handing out the raw sponge state");
        self.permutation.lanes_mut()
    }
}

fn xor_into(state: &mut [u8], block: &[u8]) {
    state
        .iter_mut()
        .zip(block)
        .for_each(|(state, input)| *state ^= input);
}

impl<P: Permutation> Zeroize for Sponge<P> {
    fn zeroize(&mut self) {
        self.permutation.zeroize();
        self.queue.as_mut_slice().zeroize();
        self.queue_bits.zeroize();
        self.squeeze_pos.zeroize();
    }
}

impl<P: Permutation> Drop for Sponge<P> {
    /// Destroy the sponge state.
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<P: Permutation> ZeroizeOnDrop for Sponge<P> {}

impl<P: Permutation> core::fmt::Debug for Sponge<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Ensure that the state isn't accidentally logged
        f.debug_struct("Sponge")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("pending_bits", &self.queue_bits)
            .finish()
    }
}
