use std::path::PathBuf;

/// Error types for wordlist, mnemonic, and seed operations.
#[derive(Debug, thiserror::Error)]
pub enum Bip39Error {
    #[error("no wordlist available for language {language:?}")]
    WordlistNotFound { language: String },

    #[error("failed to read wordlist {}: {source}", path.display())]
    WordlistIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid wordlist for {language:?}: {reason}")]
    InvalidWordlist { language: String, reason: String },

    #[error("language unrecognized for {word:?}")]
    LanguageUnrecognized { word: String },

    #[error("language ambiguous between {}", candidates.join(", "))]
    LanguageAmbiguous { candidates: Vec<String> },

    #[error("word {0:?} is not in the wordlist")]
    UnknownWord(String),

    #[error("invalid entropy length: {0} bytes, expected 16, 20, 24, 28 or 32")]
    InvalidEntropyLength(usize),

    #[error("invalid number of words: {0}, expected 12, 15, 18, 21 or 24")]
    InvalidWordCount(usize),

    #[error("invalid strength: {0} bits, expected 128, 160, 192, 224 or 256")]
    InvalidStrength(usize),

    #[error("invalid mnemonic checksum")]
    ChecksumMismatch,

    #[error("invalid seed length: {0} bytes, expected 64")]
    InvalidSeedLength(usize),
}

impl Bip39Error {
    /// Whether the error stems from wordlist setup or language resolution.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Bip39Error::WordlistNotFound { .. }
                | Bip39Error::WordlistIo { .. }
                | Bip39Error::InvalidWordlist { .. }
                | Bip39Error::LanguageUnrecognized { .. }
                | Bip39Error::LanguageAmbiguous { .. }
        )
    }

    /// Whether the error is a failed word lookup.
    pub fn is_lookup(&self) -> bool {
        matches!(self, Bip39Error::UnknownWord(_))
    }
}
