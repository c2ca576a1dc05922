//! The Keccak-f\[1600\] permutation.
//!
//! The state is a 5×5 grid of 64-bit lanes, lane `(x, y)` stored at index `x + 5 * y`.
//! Each of the 24 rounds applies θ, ρ, π, χ and ι in this order.
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::Permutation;

/// Number of rounds of Keccak-f\[1600\].
pub const ROUNDS: usize = 24;

/// Number of 64-bit lanes in the state.
pub const LANES: usize = 25;

/// Constants XORed into lane `(0, 0)` by ι, one per round.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000_0000_0000_0001,
    0x0000_0000_0000_8082,
    0x8000_0000_0000_808a,
    0x8000_0000_8000_8000,
    0x0000_0000_0000_808b,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8009,
    0x0000_0000_0000_008a,
    0x0000_0000_0000_0088,
    0x0000_0000_8000_8009,
    0x0000_0000_8000_000a,
    0x0000_0000_8000_808b,
    0x8000_0000_0000_008b,
    0x8000_0000_0000_8089,
    0x8000_0000_0000_8003,
    0x8000_0000_0000_8002,
    0x8000_0000_0000_0080,
    0x0000_0000_0000_800a,
    0x8000_0000_8000_000a,
    0x8000_0000_8000_8081,
    0x8000_0000_0000_8080,
    0x0000_0000_8000_0001,
    0x8000_0000_8000_8008,
];

/// Left rotation applied by ρ, indexed like the lanes.
#[rustfmt::skip]
pub const ROTATION_OFFSETS: [u32; LANES] = [
     0,  1, 62, 28, 27,
    36, 44,  6, 55, 20,
     3, 10, 43, 25, 39,
    41, 45, 15, 21,  8,
    18,  2, 61, 56, 14,
];

#[inline(always)]
const fn lane(x: usize, y: usize) -> usize {
    x + 5 * y
}

/// θ: XOR each lane with the parities of the columns at `x - 1` and `x + 1`,
/// the latter rotated by one.
#[inline(always)]
fn theta(a: &mut [u64; LANES]) {
    let mut parity = [0u64; 5];
    for (x, p) in parity.iter_mut().enumerate() {
        *p = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    }
    for x in 0..5 {
        let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            a[lane(x, y)] ^= d;
        }
    }
}

/// ρ and π fused: rotate lane `(x, y)` and move it to `(y, 2x + 3y)`.
#[inline(always)]
fn rho_pi(a: &mut [u64; LANES]) {
    let mut b = [0u64; LANES];
    for y in 0..5 {
        for x in 0..5 {
            b[lane(y, (2 * x + 3 * y) % 5)] =
                a[lane(x, y)].rotate_left(ROTATION_OFFSETS[lane(x, y)]);
        }
    }
    *a = b;
}

/// χ: the only non-linear step, row by row.
#[inline(always)]
fn chi(a: &mut [u64; LANES]) {
    for y in 0..5 {
        let mut row = [0u64; 5];
        row.copy_from_slice(&a[lane(0, y)..lane(0, y) + 5]);
        for x in 0..5 {
            a[lane(x, y)] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}

#[inline(always)]
fn iota(a: &mut [u64; LANES], round: usize) {
    a[0] ^= ROUND_CONSTANTS[round];
}

/// Apply the 24 rounds of Keccak-f\[1600\] in place.
pub fn f1600(a: &mut [u64; LANES]) {
    for round in 0..ROUNDS {
        theta(a);
        rho_pi(a);
        chi(a);
        iota(a, round);
    }
}

/// The 1600-bit Keccak state, as 25 lanes.
///
/// Bytes of the state are read and written little-endian, lane after lane,
/// which is what the sponge uses to map block bits onto lanes.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct KeccakF1600([u64; LANES]);

impl KeccakF1600 {
    pub const fn from_lanes(lanes: [u64; LANES]) -> Self {
        Self(lanes)
    }

    pub fn lanes(&self) -> &[u64; LANES] {
        &self.0
    }

    pub fn lanes_mut(&mut self) -> &mut [u64; LANES] {
        &mut self.0
    }
}

impl Permutation for KeccakF1600 {
    const N: usize = 200;

    fn permute(&mut self) {
        f1600(&mut self.0);
    }
}

impl AsRef<[u8]> for KeccakF1600 {
    fn as_ref(&self) -> &[u8] {
        bytemuck::cast_slice(&self.0[..])
    }
}

impl AsMut<[u8]> for KeccakF1600 {
    fn as_mut(&mut self) -> &mut [u8] {
        bytemuck::cast_slice_mut(&mut self.0[..])
    }
}

impl core::fmt::Debug for KeccakF1600 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        // Ensure that the state isn't accidentally logged
        write!(f, "KeccakF1600(..)")
    }
}
