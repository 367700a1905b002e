//! The duplex sponge construction over Keccak-f[1600].

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::keccak::{self, STATE_BYTES};
use crate::pad;

/// A Keccak sponge: a 1600-bit zero-initialized state split into `r` rate
/// bits and `c = 1600 - r` capacity bits, absorbing and squeezing
/// `r / 8`-byte blocks between applications of the permutation.
///
/// A sponge is single-owner: two squeezes from the same instance are not
/// independent streams. Callers needing independent output construct
/// independent instances.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct KeccakSponge {
    state: [u8; STATE_BYTES],
    byte_rate: usize,
    suffix: u8,
}

impl KeccakSponge {
    /// Creates a zero-state sponge with the given capacity (in bits) and
    /// pad10*1 suffix byte.
    ///
    /// # Panics
    /// Panics if the capacity does not leave a positive rate that is a
    /// multiple of 8, or if the suffix byte is zero. Both are programmer
    /// errors: every deployed parameter set satisfies them.
    pub fn new(capacity_bits: usize, suffix: u8) -> Self {
        let rate_bits = STATE_BYTES * 8 - capacity_bits;
        assert!(
            rate_bits > 0 && rate_bits % 8 == 0,
            "capacity must leave a positive byte-aligned rate"
        );
        assert!(suffix != 0x00, "padding suffix must have a set bit");

        KeccakSponge {
            state: [0u8; STATE_BYTES],
            byte_rate: rate_bits / 8,
            suffix,
        }
    }

    /// The rate in bytes: how much each absorb consumes and each squeeze
    /// produces.
    pub fn byte_rate(&self) -> usize {
        self.byte_rate
    }

    /// XORs one rate-sized block into the front of the state, then
    /// permutes. `block` must not exceed the rate.
    pub fn absorb(&mut self, block: &[u8]) {
        debug_assert!(block.len() <= self.byte_rate);
        for (slot, byte) in self.state.iter_mut().zip(block) {
            *slot ^= byte;
        }
        keccak::f1600_bytes(&mut self.state);
    }

    /// Pads the message with pad10*1 and absorbs it block by block.
    pub fn absorb_all(&mut self, msg: &[u8]) {
        let padded = pad::apply(msg, self.byte_rate * 8, self.suffix);
        for block in padded.chunks(self.byte_rate) {
            self.absorb(block);
        }
    }

    /// Copies out the first `r / 8` state bytes, then permutes. Repeated
    /// calls extend the output stream.
    pub fn squeeze(&mut self) -> Vec<u8> {
        let out = self.state[..self.byte_rate].to_vec();
        keccak::f1600_bytes(&mut self.state);
        out
    }

    /// Duplex step: absorb a block (padding it unless it is already a
    /// nonempty multiple of the rate) and return the next rate-sized
    /// output; with no block, behaves as a squeeze.
    pub fn duplex_absorb(&mut self, block: Option<&[u8]>) -> Vec<u8> {
        match block {
            None => self.squeeze(),
            Some(bytes) => {
                if bytes.is_empty() || bytes.len() % self.byte_rate != 0 {
                    self.absorb_all(bytes);
                } else {
                    for chunk in bytes.chunks(self.byte_rate) {
                        self.absorb(chunk);
                    }
                }
                self.state[..self.byte_rate].to_vec()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squeeze_advances_the_stream() {
        let mut sponge = KeccakSponge::new(512, 0x1F);
        sponge.absorb_all(b"stream");
        let first = sponge.squeeze();
        let second = sponge.squeeze();
        assert_eq!(first.len(), 136);
        assert_ne!(first, second);
    }

    #[test]
    fn separate_instances_agree() {
        let mut a = KeccakSponge::new(512, 0x06);
        let mut b = KeccakSponge::new(512, 0x06);
        a.absorb_all(b"same input");
        b.absorb_all(b"same input");
        assert_eq!(a.squeeze(), b.squeeze());
    }

    #[test]
    fn duplex_without_block_squeezes() {
        let mut a = KeccakSponge::new(512, 0x1F);
        let mut b = a.clone();
        a.absorb_all(b"seed");
        b.absorb_all(b"seed");
        assert_eq!(a.duplex_absorb(None), b.squeeze());
    }

    #[test]
    fn duplex_pads_partial_blocks() {
        let mut a = KeccakSponge::new(512, 0x1F);
        let mut b = KeccakSponge::new(512, 0x1F);
        let out = a.duplex_absorb(Some(b"partial"));
        b.absorb_all(b"partial");
        assert_eq!(out.len(), 136);
        assert_eq!(out, b.state[..b.byte_rate]);
    }

    #[test]
    #[should_panic(expected = "padding suffix")]
    fn zero_suffix_is_rejected() {
        let _ = KeccakSponge::new(512, 0x00);
    }
}
