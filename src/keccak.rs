//! The Keccak-f[1600] permutation (FIPS 202, Algorithm 7).
//!
//! The 1600-bit state is a 5x5 grid of 64-bit lanes; lane (x, y) lives at
//! word index `x + 5*y`, and byte `i` of the 200-byte linear form is byte
//! `i % 8` (little-endian) of lane `i / 8`.

/// Number of 64-bit lanes in the state.
pub const STATE_WORDS: usize = 25;
/// Size of the state in bytes.
pub const STATE_BYTES: usize = STATE_WORDS * 8;
/// Round count for Keccak-f[1600]: 12 + 2*l with l = 6.
pub const NUM_ROUNDS: usize = 24;

/// Constants XORed into lane (0, 0) by the iota step, one per round.
const ROUND_CONSTANTS: [u64; NUM_ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808A,
    0x8000000080008000,
    0x000000000000808B,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008A,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000A,
    0x000000008000808B,
    0x800000000000008B,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800A,
    0x800000008000000A,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Lane rotation amounts for the rho step, indexed as `[x][y]`, reduced
/// modulo the 64-bit lane width.
const ROTATION_OFFSETS: [[u32; 5]; 5] = [
    [0, 36, 3, 41, 18],
    [1, 44, 10, 45, 2],
    [62, 6, 43, 15, 61],
    [28, 55, 25, 21, 56],
    [27, 20, 39, 8, 14],
];

/// Theta: XOR each lane with the parities of the two neighboring columns.
fn theta(state: &[u64; STATE_WORDS]) -> [u64; STATE_WORDS] {
    let mut parity = [0u64; 5];
    for x in 0..5 {
        parity[x] =
            state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
    }

    let mut out = [0u64; STATE_WORDS];
    for x in 0..5 {
        let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            out[x + 5 * y] = state[x + 5 * y] ^ d;
        }
    }
    out
}

/// Rho: rotate each lane in place by its fixed offset.
fn rho(state: &[u64; STATE_WORDS]) -> [u64; STATE_WORDS] {
    let mut out = [0u64; STATE_WORDS];
    for x in 0..5 {
        for y in 0..5 {
            out[x + 5 * y] = state[x + 5 * y].rotate_left(ROTATION_OFFSETS[x][y]);
        }
    }
    out
}

/// Pi: rearrange lanes; A'[x][y] = A[(x + 3y) mod 5][x].
fn pi(state: &[u64; STATE_WORDS]) -> [u64; STATE_WORDS] {
    let mut out = [0u64; STATE_WORDS];
    for x in 0..5 {
        for y in 0..5 {
            out[x + 5 * y] = state[(x + 3 * y) % 5 + 5 * x];
        }
    }
    out
}

/// Chi: the nonlinear step. Reads the whole input row, so writes cannot
/// pollute the reads within a plane.
fn chi(state: &[u64; STATE_WORDS]) -> [u64; STATE_WORDS] {
    let mut out = [0u64; STATE_WORDS];
    for y in 0..5 {
        for x in 0..5 {
            out[x + 5 * y] = state[x + 5 * y]
                ^ (!state[(x + 1) % 5 + 5 * y] & state[(x + 2) % 5 + 5 * y]);
        }
    }
    out
}

/// Applies the full 24-round Keccak-f[1600] permutation in place.
pub fn f1600(state: &mut [u64; STATE_WORDS]) {
    for round in 0..NUM_ROUNDS {
        *state = chi(&pi(&rho(&theta(state))));
        state[0] ^= ROUND_CONSTANTS[round]; // iota
    }
}

/// Applies Keccak-f[1600] to the 200-byte linear form of the state.
pub fn f1600_bytes(state: &mut [u8; STATE_BYTES]) {
    let mut lanes = lanes_from_bytes(state);
    f1600(&mut lanes);
    bytes_from_lanes(&lanes, state);
}

/// Groups the linear byte form into little-endian 64-bit lanes.
pub(crate) fn lanes_from_bytes(bytes: &[u8; STATE_BYTES]) -> [u64; STATE_WORDS] {
    let mut lanes = [0u64; STATE_WORDS];
    for (i, lane) in lanes.iter_mut().enumerate() {
        let mut word = [0u8; 8];
        word.copy_from_slice(&bytes[8 * i..8 * i + 8]);
        *lane = u64::from_le_bytes(word);
    }
    lanes
}

/// Flattens the lanes back into the linear byte form.
pub(crate) fn bytes_from_lanes(lanes: &[u64; STATE_WORDS], bytes: &mut [u8; STATE_BYTES]) {
    for (i, lane) in lanes.iter().enumerate() {
        bytes[8 * i..8 * i + 8].copy_from_slice(&lane.to_le_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // First lanes of Keccak-f[1600] applied to the all-zero state, from
    // the published FIPS 202 intermediate values.
    #[test]
    fn permutes_zero_state_to_known_lanes() {
        let mut state = [0u64; STATE_WORDS];
        f1600(&mut state);
        assert_eq!(state[0], 0xF1258F7940E1DDE7);
        assert_eq!(state[1], 0x84D5CCF933C0478A);
    }

    #[test]
    fn byte_form_matches_lane_form() {
        let mut lanes = [0u64; STATE_WORDS];
        let mut bytes = [0u8; STATE_BYTES];
        f1600(&mut lanes);
        f1600_bytes(&mut bytes);
        assert_eq!(lanes_from_bytes(&bytes), lanes);
    }

    #[test]
    fn lane_conversion_round_trips() {
        let mut bytes = [0u8; STATE_BYTES];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        let lanes = lanes_from_bytes(&bytes);
        assert_eq!(lanes[0], 0x0706050403020100);
        let mut back = [0u8; STATE_BYTES];
        bytes_from_lanes(&lanes, &mut back);
        assert_eq!(back, bytes);
    }
}
