/// Unified error type for all primitives operations.
///
/// Covers errors from the Base58 and Bech32 codecs and from binary reads.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid base58: {0}")]
    InvalidBase58(String),

    #[error("invalid bech32: {0}")]
    InvalidBech32(String),

    #[error("bech32 human-readable part mismatch: expected {expected}, got {got}")]
    HrpMismatch { expected: String, got: String },

    #[error("unexpected end of data: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },
}

impl From<bech32::Error> for PrimitivesError {
    fn from(e: bech32::Error) -> Self {
        PrimitivesError::InvalidBech32(e.to_string())
    }
}
