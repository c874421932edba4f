//! MSB-first bit accumulator for packing 11-bit word indices.

use bitvec::prelude::*;

/// An append-only big-endian bitstream.
///
/// Bytes and integers are appended most significant bit first, so the
/// stream reads left to right exactly as the concatenation
/// `entropy || checksum` is written down.
#[derive(Debug)]
pub(crate) struct BitStream {
    bits: BitVec<u8, Msb0>,
}

impl BitStream {
    /// Create an empty stream with room for `bits` bits.
    pub(crate) fn with_capacity(bits: usize) -> Self {
        BitStream {
            bits: BitVec::with_capacity(bits),
        }
    }

    /// Start a stream holding every bit of `bytes`.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        BitStream {
            bits: BitVec::from_slice(bytes),
        }
    }

    /// Append the leading `count` bits of `bytes`.
    pub(crate) fn push_prefix(&mut self, bytes: &[u8], count: usize) {
        self.bits.extend_from_bitslice(&bytes.view_bits::<Msb0>()[..count]);
    }

    /// Append the low `width` bits of `value`, most significant first.
    pub(crate) fn push_value(&mut self, value: u32, width: usize) {
        for shift in (0..width).rev() {
            self.bits.push((value >> shift) & 1 == 1);
        }
    }

    /// Number of bits held.
    pub(crate) fn len(&self) -> usize {
        self.bits.len()
    }

    /// Split the stream into consecutive `width`-bit unsigned integers.
    ///
    /// The length must be a multiple of `width`.
    pub(crate) fn groups(&self, width: usize) -> Vec<u32> {
        debug_assert_eq!(self.bits.len() % width, 0);
        self.bits
            .chunks(width)
            .map(|chunk| {
                chunk
                    .iter()
                    .by_vals()
                    .fold(0u32, |acc, bit| (acc << 1) | u32::from(bit))
            })
            .collect()
    }

    /// Pack the first `count` bits into bytes. `count` must be a multiple of 8.
    pub(crate) fn prefix_bytes(&self, count: usize) -> Vec<u8> {
        debug_assert_eq!(count % 8, 0);
        self.bits[..count]
            .chunks(8)
            .map(|byte| {
                byte.iter()
                    .by_vals()
                    .fold(0u8, |acc, bit| (acc << 1) | u8::from(bit))
            })
            .collect()
    }

    /// Whether the bits from `start` to the end equal the leading bits of `bytes`.
    pub(crate) fn suffix_matches(&self, start: usize, bytes: &[u8]) -> bool {
        let suffix = &self.bits[start..];
        let candidate = bytes.view_bits::<Msb0>();
        suffix.len() <= candidate.len() && *suffix == candidate[..suffix.len()]
    }
}
