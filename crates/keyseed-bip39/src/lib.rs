/// keyseed - BIP-39 mnemonics.
///
/// Wordlist loading and language detection, mnemonic generation and
/// checksum validation, PBKDF2 seed derivation, and the legacy Base58
/// BIP-32 master key.

mod error;
pub use error::Bip39Error;

mod bits;
pub mod types;
pub mod wordlist;
pub mod cache;
pub mod mnemonic;
pub mod master_key;

pub use cache::{WordlistCache, WordlistConfig};
pub use master_key::to_hd_master_key;
pub use mnemonic::{MnemonicEngine, PBKDF2_ROUNDS, SEED_LEN};
pub use types::{EntropySize, WordCount};
pub use wordlist::{delimiter_for, normalize_string, Wordlist, BUILTIN_LANGUAGES, ENGLISH, JAPANESE};
