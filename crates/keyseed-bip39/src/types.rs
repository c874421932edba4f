//! Mnemonic sizes: word counts and the entropy lengths they carry.
//!
//! Each word encodes 11 bits. A mnemonic of `n` words holds `n * 11`
//! bits, of which `n * 11 / 33` are checksum and the rest entropy.

use crate::Bip39Error;

/// Number of bits encoded by a single mnemonic word.
pub const BITS_PER_WORD: usize = 11;

/// Allowed mnemonic lengths in words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WordCount {
    Words12,
    Words15,
    Words18,
    Words21,
    Words24,
}

impl WordCount {
    /// Every allowed word count, shortest first.
    pub const ALL: [WordCount; 5] = [
        WordCount::Words12,
        WordCount::Words15,
        WordCount::Words18,
        WordCount::Words21,
        WordCount::Words24,
    ];

    /// Map a raw word count to its variant.
    ///
    /// # Arguments
    /// * `count` - Number of words in a mnemonic.
    ///
    /// # Returns
    /// The matching `WordCount`, or `InvalidWordCount`.
    pub fn from_count(count: usize) -> Result<Self, Bip39Error> {
        match count {
            12 => Ok(WordCount::Words12),
            15 => Ok(WordCount::Words15),
            18 => Ok(WordCount::Words18),
            21 => Ok(WordCount::Words21),
            24 => Ok(WordCount::Words24),
            other => Err(Bip39Error::InvalidWordCount(other)),
        }
    }

    /// Number of words.
    pub fn count(self) -> usize {
        match self {
            WordCount::Words12 => 12,
            WordCount::Words15 => 15,
            WordCount::Words18 => 18,
            WordCount::Words21 => 21,
            WordCount::Words24 => 24,
        }
    }

    /// Total bits encoded (entropy plus checksum).
    pub fn total_bits(self) -> usize {
        self.count() * BITS_PER_WORD
    }

    /// Number of trailing checksum bits.
    pub fn checksum_bits(self) -> usize {
        self.total_bits() / 33
    }

    /// The entropy size encoded by this many words.
    pub fn entropy_size(self) -> EntropySize {
        match self {
            WordCount::Words12 => EntropySize::Bits128,
            WordCount::Words15 => EntropySize::Bits160,
            WordCount::Words18 => EntropySize::Bits192,
            WordCount::Words21 => EntropySize::Bits224,
            WordCount::Words24 => EntropySize::Bits256,
        }
    }
}

/// Allowed entropy sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntropySize {
    Bits128,
    Bits160,
    Bits192,
    Bits224,
    Bits256,
}

impl EntropySize {
    /// Map a strength in bits to its variant.
    ///
    /// # Returns
    /// The matching `EntropySize`, or `InvalidStrength`.
    pub fn from_bits(bits: usize) -> Result<Self, Bip39Error> {
        match bits {
            128 => Ok(EntropySize::Bits128),
            160 => Ok(EntropySize::Bits160),
            192 => Ok(EntropySize::Bits192),
            224 => Ok(EntropySize::Bits224),
            256 => Ok(EntropySize::Bits256),
            other => Err(Bip39Error::InvalidStrength(other)),
        }
    }

    /// Map an entropy length in bytes to its variant.
    ///
    /// # Returns
    /// The matching `EntropySize`, or `InvalidEntropyLength`.
    pub fn from_byte_len(len: usize) -> Result<Self, Bip39Error> {
        if len % 4 != 0 {
            return Err(Bip39Error::InvalidEntropyLength(len));
        }
        Self::from_bits(len * 8).map_err(|_| Bip39Error::InvalidEntropyLength(len))
    }

    /// Entropy size in bits.
    pub fn bits(self) -> usize {
        match self {
            EntropySize::Bits128 => 128,
            EntropySize::Bits160 => 160,
            EntropySize::Bits192 => 192,
            EntropySize::Bits224 => 224,
            EntropySize::Bits256 => 256,
        }
    }

    /// Entropy size in bytes.
    pub fn bytes(self) -> usize {
        self.bits() / 8
    }

    /// Number of SHA-256 bits appended as checksum.
    pub fn checksum_bits(self) -> usize {
        self.bits() / 32
    }

    /// The mnemonic length produced from entropy of this size.
    pub fn word_count(self) -> WordCount {
        match self {
            EntropySize::Bits128 => WordCount::Words12,
            EntropySize::Bits160 => WordCount::Words15,
            EntropySize::Bits192 => WordCount::Words18,
            EntropySize::Bits224 => WordCount::Words21,
            EntropySize::Bits256 => WordCount::Words24,
        }
    }
}
