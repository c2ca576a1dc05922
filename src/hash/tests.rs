use rand::{rngs::StdRng, Rng, SeedableRng};

use super::keccak::{f1600, KeccakF1600, LANES};
use super::{KeccakSponge, Permutation, SpongeConfig};
use crate::{Bits, DomainSuffix, SpongeError};

/// Lane (0, 0) of Keccak-f[1600] applied to the zero state.
#[test]
fn test_f1600_zero_state() {
    let mut state = [0u64; LANES];
    f1600(&mut state);
    assert_eq!(state[0], 0xf1258f7940e1dde7);
    assert_eq!(state[1], 0x84d5ccf933c0478a);

    let mut reference = [0u64; LANES];
    keccak::f1600(&mut reference);
    assert_eq!(state, reference);
}

#[test]
fn test_f1600_matches_reference() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..64 {
        let mut state = [0u64; LANES];
        state.iter_mut().for_each(|lane| *lane = rng.gen());
        let mut reference = state;

        f1600(&mut state);
        keccak::f1600(&mut reference);
        assert_eq!(state, reference);
    }
}

#[test]
fn test_state_bytes_are_little_endian() {
    let mut lanes = [0u64; LANES];
    lanes[0] = 0x0807060504030201;
    lanes[24] = 0xff;
    let state = KeccakF1600::from_lanes(lanes);
    assert_eq!(state.as_ref().len(), KeccakF1600::N);
    assert_eq!(state.as_ref()[..8], [1, 2, 3, 4, 5, 6, 7, 8]);
    assert_eq!(state.as_ref()[192], 0xff);
}

#[test]
fn test_initialize_zeroes_everything() {
    for bitrate in (8..1600).step_by(8) {
        let mut sponge = KeccakSponge::initialize(bitrate, 1600 - bitrate, 0).unwrap();
        assert_eq!(sponge.raw_state(), &[0u64; LANES]);
        assert_eq!(sponge.pending_bits(), 0);
        assert!(!sponge.is_finalized());
    }
}

#[test]
fn test_invalid_parameters() {
    let invalid = [
        (1088, 511),
        (0, 1600),
        (1600, 0),
        (1084, 516),
        (1000, 512),
        (1600, 1600),
    ];
    for (bitrate, capacity) in invalid {
        assert!(matches!(
            KeccakSponge::initialize(bitrate, capacity, 256),
            Err(SpongeError::InvalidParameter(_))
        ));
        assert!(SpongeConfig::new(bitrate, capacity, 256).is_err());
    }
}

/// A full block is XORed into the state and permuted right away.
#[test]
fn test_full_block_is_absorbed() {
    let block = [0xa5u8; 136];
    let mut sponge = KeccakSponge::initialize(1088, 512, 256).unwrap();
    sponge.absorb(&block).unwrap();
    assert_eq!(sponge.pending_bits(), 0);

    let mut expected = [0u64; LANES];
    expected[..17]
        .iter_mut()
        .for_each(|lane| *lane = u64::from_le_bytes([0xa5; 8]));
    f1600(&mut expected);
    assert_eq!(sponge.state(), &expected);
}

#[test]
fn test_streaming_absorb_bytes() {
    let mut whole = KeccakSponge::initialize(1088, 512, 256).unwrap();
    whole.absorb(b"abc").unwrap();

    let mut split = KeccakSponge::initialize(1088, 512, 256).unwrap();
    split.absorb(b"a").unwrap().absorb(b"bc").unwrap();

    assert_eq!(whole.state(), split.state());
    assert_eq!(whole.pending_bits(), 24);
    assert_eq!(split.pending_bits(), 24);

    let message = [0x3cu8; 1000];
    let mut whole = KeccakSponge::initialize(576, 1024, 512).unwrap();
    whole.absorb(&message).unwrap();
    let mut split = KeccakSponge::initialize(576, 1024, 512).unwrap();
    for chunk in message.chunks(7) {
        split.absorb(chunk).unwrap();
    }
    assert_eq!(whole.state(), split.state());
    assert_eq!(whole.pending_bits(), split.pending_bits());
}

/// Extract `len` bits of `bytes` starting at bit `start`.
fn bit_slice(bytes: &[u8], start: usize, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len.div_ceil(8)];
    for i in 0..len {
        let bit = (bytes[(start + i) / 8] >> ((start + i) % 8)) & 1;
        out[i / 8] |= bit << (i % 8);
    }
    out
}

#[test]
fn test_streaming_absorb_bits() {
    let mut rng = StdRng::seed_from_u64(1600);
    let mut message = vec![0u8; 400];
    rng.fill(&mut message[..]);

    for _ in 0..32 {
        let total = rng.gen_range(0..message.len() * 8);
        let mut whole = KeccakSponge::initialize(1344, 256, 0).unwrap();
        whole.absorb(Bits::new(&message, total).unwrap()).unwrap();

        let mut split = KeccakSponge::initialize(1344, 256, 0).unwrap();
        let mut start = 0;
        while start < total {
            let len = rng.gen_range(1..=usize::min(total - start, 200));
            let fragment = bit_slice(&message, start, len);
            split.absorb(Bits::new(&fragment, len).unwrap()).unwrap();
            start += len;
        }

        assert_eq!(whole.state(), split.state());
        assert_eq!(whole.pending_bits(), total % 1344);
        assert_eq!(split.pending_bits(), total % 1344);
    }
}

#[test]
fn test_high_bits_of_partial_byte_are_ignored() {
    let mut clean = KeccakSponge::initialize(1088, 512, 256).unwrap();
    clean.absorb(Bits::new(&[0b101], 3).unwrap()).unwrap();
    let mut dirty = KeccakSponge::initialize(1088, 512, 256).unwrap();
    dirty.absorb(Bits::new(&[0b1111_1101], 3).unwrap()).unwrap();
    assert_eq!(
        clean.digest(b"", DomainSuffix::Sha3),
        dirty.digest(b"", DomainSuffix::Sha3)
    );
}

/// Padding is never empty, whatever is left in the queue.
#[test]
fn test_finalize_empties_queue() {
    for len in [0, 1, 134, 135, 136, 137, 272] {
        let message = vec![0x11u8; len];
        let mut sponge = KeccakSponge::initialize(1088, 512, 256).unwrap();
        sponge.finalize(&message, DomainSuffix::Sha3).unwrap();
        assert_eq!(sponge.pending_bits(), 0);
        assert!(sponge.is_finalized());
    }
    // the suffix alone fills the block up to its last bit
    let message = [0u8; 136];
    let mut sponge = KeccakSponge::initialize(1088, 512, 256).unwrap();
    sponge
        .finalize(Bits::new(&message, 1085).unwrap(), DomainSuffix::Sha3)
        .unwrap();
    assert_eq!(sponge.pending_bits(), 0);
}

#[test]
fn test_lifecycle_errors() {
    let mut sponge = KeccakSponge::initialize(1088, 512, 256).unwrap();
    assert_eq!(sponge.squeeze_block(), Err(SpongeError::NotFinalized));
    assert_eq!(sponge.simple_squeeze(1), Err(SpongeError::NotFinalized));
    assert_eq!(sponge.fast_squeeze(1), Err(SpongeError::NotFinalized));
    assert_eq!(sponge.squeeze_digest(), Err(SpongeError::NotFinalized));

    sponge.finalize(b"", DomainSuffix::Sha3).unwrap();
    assert_eq!(sponge.absorb(b"late").err(), Some(SpongeError::AlreadyFinalized));
    assert_eq!(
        sponge.finalize(b"", DomainSuffix::Sha3),
        Err(SpongeError::AlreadyFinalized)
    );
    assert_eq!(
        sponge.digest(b"", DomainSuffix::Sha3),
        Err(SpongeError::AlreadyFinalized)
    );
    assert!(sponge.squeeze_block().is_ok());
}

#[test]
fn test_dispose() {
    let mut sponge = KeccakSponge::initialize(1088, 512, 256).unwrap();
    sponge.absorb(b"secret").unwrap();
    sponge.dispose();
    sponge.dispose();

    assert_eq!(sponge.state(), &[0u64; LANES]);
    assert_eq!(sponge.pending_bits(), 0);
    assert_eq!(sponge.absorb(b"x").err(), Some(SpongeError::NotInitialized));
    assert_eq!(
        sponge.finalize(b"", DomainSuffix::Sha3),
        Err(SpongeError::NotInitialized)
    );
    assert_eq!(sponge.squeeze_block(), Err(SpongeError::NotInitialized));
    assert_eq!(sponge.simple_squeeze(1), Err(SpongeError::NotInitialized));

    sponge.reset();
    let mut fresh = KeccakSponge::initialize(1088, 512, 256).unwrap();
    assert_eq!(
        sponge.digest(b"abc", DomainSuffix::Sha3),
        fresh.digest(b"abc", DomainSuffix::Sha3)
    );
}

/// The first block is read straight from the state, later ones after a permutation.
#[test]
fn test_raw_state_feeds_squeeze() {
    let mut sponge = KeccakSponge::initialize(1088, 512, 0).unwrap();
    sponge.finalize(b"", DomainSuffix::Keccak).unwrap();

    let state = sponge.raw_state();
    state.iter_mut().for_each(|lane| *lane = 0);
    state[0] = 0x0807060504030201;

    let first = sponge.squeeze_block().unwrap();
    assert_eq!(first.len(), 136);
    assert_eq!(first[..8], [1, 2, 3, 4, 5, 6, 7, 8]);
    assert!(first[8..].iter().all(|&b| b == 0));

    let mut expected = [0u64; LANES];
    expected[0] = 0x0807060504030201;
    f1600(&mut expected);
    let second = sponge.squeeze_block().unwrap();
    assert_eq!(second[..8], expected[0].to_le_bytes());
}

#[test]
fn test_debug_hides_state() {
    let mut sponge = KeccakSponge::initialize(1088, 512, 256).unwrap();
    sponge.absorb(b"hunter2").unwrap();
    let debug = format!("{:?}", sponge);
    assert!(debug.contains("Absorbing"));
    assert!(!debug.contains("hunter2"));
    assert_eq!(format!("{:?}", KeccakF1600::default()), "KeccakF1600(..)");
}
