//! BIP-39 mnemonic generation, validation, and seed derivation.
//!
//! A mnemonic is the entropy followed by the leading `bits / 32` bits
//! of SHA-256(entropy), cut into 11-bit groups, each group naming one
//! word. The engine is stateless apart from its shared, read-only
//! wordlist, so one instance can serve many threads.

use std::sync::Arc;

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use keyseed_primitives::hash::{pbkdf2_sha512, sha256};

use crate::bits::BitStream;
use crate::cache::WordlistCache;
use crate::master_key;
use crate::types::{EntropySize, WordCount, BITS_PER_WORD};
use crate::wordlist::{normalize_string, Wordlist};
use crate::Bip39Error;

/// PBKDF2 iteration count for seed derivation.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Length of a derived seed in bytes.
pub const SEED_LEN: usize = 64;

/// Salt prefix; the (normalized) passphrase is appended to it.
const SALT_PREFIX: &str = "mnemonic";

/// Mnemonic encoder/decoder bound to one language's wordlist.
#[derive(Debug, Clone)]
pub struct MnemonicEngine {
    wordlist: Arc<Wordlist>,
}

impl MnemonicEngine {
    /// Create an engine over an already-loaded wordlist.
    pub fn new(wordlist: Arc<Wordlist>) -> Self {
        MnemonicEngine { wordlist }
    }

    /// Create an engine for `language`, loading its list through `cache`.
    pub fn for_language(cache: &mut WordlistCache, language: &str) -> Result<Self, Bip39Error> {
        Ok(Self::new(cache.load(language)?))
    }

    /// Create an engine over the built-in English wordlist.
    pub fn english() -> Result<Self, Bip39Error> {
        Ok(Self::new(Arc::new(Wordlist::english()?)))
    }

    /// The wordlist this engine encodes with.
    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// Language of the wordlist.
    pub fn language(&self) -> &str {
        self.wordlist.language()
    }

    /// Generate a fresh mnemonic from OS randomness.
    ///
    /// # Arguments
    /// * `strength_bits` - Entropy size: 128, 160, 192, 224 or 256.
    ///
    /// # Returns
    /// The mnemonic sentence, or `InvalidStrength`.
    pub fn generate(&self, strength_bits: usize) -> Result<String, Bip39Error> {
        let size = EntropySize::from_bits(strength_bits)?;
        Ok(self.generate_with_rng(size, &mut OsRng))
    }

    /// Generate a fresh mnemonic with the given number of words.
    pub fn generate_words(&self, count: WordCount) -> String {
        self.generate_with_rng(count.entropy_size(), &mut OsRng)
    }

    /// Generate a mnemonic drawing entropy from `rng`.
    pub fn generate_with_rng<R>(&self, size: EntropySize, rng: &mut R) -> String
    where
        R: RngCore + CryptoRng,
    {
        let mut entropy = Zeroizing::new(vec![0u8; size.bytes()]);
        rng.fill_bytes(entropy.as_mut_slice());
        let mnemonic = self.encode(&entropy, size);
        debug!(
            language = self.language(),
            words = size.word_count().count(),
            "generated mnemonic"
        );
        mnemonic
    }

    /// Encode entropy as a mnemonic sentence.
    ///
    /// # Arguments
    /// * `entropy` - 16, 20, 24, 28 or 32 bytes.
    ///
    /// # Returns
    /// The words joined by the language delimiter, or `InvalidEntropyLength`.
    pub fn to_mnemonic(&self, entropy: &[u8]) -> Result<String, Bip39Error> {
        let size = EntropySize::from_byte_len(entropy.len())?;
        Ok(self.encode(entropy, size))
    }

    fn encode(&self, entropy: &[u8], size: EntropySize) -> String {
        let checksum = sha256(entropy);
        let mut bits = BitStream::from_bytes(entropy);
        bits.push_prefix(&checksum, size.checksum_bits());

        let words = self.wordlist.words();
        bits.groups(BITS_PER_WORD)
            .into_iter()
            .map(|index| words[index as usize].as_str())
            .collect::<Vec<_>>()
            .join(self.wordlist.delimiter())
    }

    /// Decode a mnemonic back to its entropy, verifying the checksum.
    ///
    /// The input is NFKD-normalized and split on any whitespace, so both
    /// ASCII and ideographic spaces separate words.
    ///
    /// # Arguments
    /// * `mnemonic` - The mnemonic sentence.
    ///
    /// # Returns
    /// The entropy bytes, or `InvalidWordCount`, `UnknownWord` or
    /// `ChecksumMismatch`.
    pub fn to_entropy(&self, mnemonic: &str) -> Result<Vec<u8>, Bip39Error> {
        let normalized = Zeroizing::new(normalize_string(mnemonic));
        let words: Vec<&str> = normalized.split_whitespace().collect();
        let count = WordCount::from_count(words.len())?;

        let mut bits = BitStream::with_capacity(count.total_bits());
        for word in &words {
            let index = self.wordlist.index_of(word)?;
            bits.push_value(u32::from(index), BITS_PER_WORD);
        }

        let checksum_len = bits.len() / 33;
        let entropy_len = bits.len() - checksum_len;
        let entropy = bits.prefix_bytes(entropy_len);
        if !bits.suffix_matches(entropy_len, &sha256(&entropy)) {
            return Err(Bip39Error::ChecksumMismatch);
        }
        Ok(entropy)
    }

    /// Whether `mnemonic` is a fully valid mnemonic for this language.
    ///
    /// Word-count, unknown-word, and checksum failures all yield `false`.
    pub fn check(&self, mnemonic: &str) -> bool {
        self.to_entropy(mnemonic).is_ok()
    }

    /// Expand a single abbreviated word. See [`Wordlist::expand`].
    pub fn expand_word(&self, prefix: &str) -> String {
        self.wordlist.expand(prefix)
    }

    /// Expand every word of an abbreviated mnemonic.
    ///
    /// Words that cannot be expanded unambiguously are kept as typed;
    /// this never fails and does not validate.
    pub fn expand(&self, mnemonic: &str) -> String {
        mnemonic
            .split_whitespace()
            .map(|word| self.expand_word(word))
            .collect::<Vec<_>>()
            .join(self.wordlist.delimiter())
    }

    /// Derive the 64-byte seed from a mnemonic and passphrase.
    ///
    /// Both inputs are NFKD-normalized; the seed is
    /// PBKDF2-HMAC-SHA512(mnemonic, "mnemonic" + passphrase, 2048 rounds).
    /// The mnemonic is deliberately not validated.
    pub fn to_seed(mnemonic: &str, passphrase: &str) -> [u8; SEED_LEN] {
        let password = Zeroizing::new(normalize_string(mnemonic));
        let salt = Zeroizing::new(format!("{}{}", SALT_PREFIX, normalize_string(passphrase)));
        pbkdf2_sha512(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS)
    }

    /// Base58Check BIP-32 master private key for `seed`.
    /// See [`master_key::to_hd_master_key`].
    pub fn to_hd_master_key(seed: &[u8], testnet: bool) -> Result<String, Bip39Error> {
        master_key::to_hd_master_key(seed, testnet)
    }
}
