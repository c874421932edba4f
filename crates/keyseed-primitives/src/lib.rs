/// keyseed - Cryptographic primitives and encodings.
///
/// This crate provides the foundational building blocks shared by the
/// mnemonic and extended-key crates:
/// - Hash functions (SHA-256, SHA-256d, HMAC-SHA512)
/// - PBKDF2-HMAC-SHA512 key stretching
/// - Base58 and Base58Check encoding/decoding
/// - Bech32 encoding/decoding of arbitrary byte payloads
/// - Big-endian byte reader and writer for fixed binary layouts

pub mod hash;
pub mod base58;
pub mod bech32;
pub mod util;

mod error;
pub use error::PrimitivesError;
