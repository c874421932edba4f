use keyseed_primitives::PrimitivesError;

/// Error types for SLIP-32 extended-key serialization.
#[derive(Debug, thiserror::Error)]
pub enum Slip32Error {
    #[error("invalid extended key (wrong net version)")]
    InvalidNetVersion,

    #[error("bech32: {0}")]
    Bech32(#[from] PrimitivesError),

    #[error("invalid extended private key (wrong secret prefix: {0:#04x})")]
    InvalidPrivateKeyPrefix(u8),

    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("invalid chain code length: expected 32, got {0}")]
    InvalidChainCodeLength(usize),

    #[error("derivation path too deep: {0} levels, at most 255")]
    PathTooDeep(usize),

    #[error("invalid derivation path {path:?}: {reason}")]
    InvalidPath { path: String, reason: String },

    #[error("truncated extended key: {0}")]
    Truncated(#[source] PrimitivesError),
}
