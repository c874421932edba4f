/// keyseed - SLIP-32 extended keys.
///
/// Bech32 serialization of BIP-32 extended keys: depth, full derivation
/// path, chain code and key material under a configurable HRP pair.

mod error;
pub use error::Slip32Error;

pub mod path;
pub mod net_version;
pub mod key;
pub mod serializer;
pub mod deserializer;

pub use deserializer::deserialize_key;
pub use key::{validate_private_key, validate_public_key, ExtendedKey};
pub use net_version::KeyNetVersions;
pub use path::{Bip32KeyIndex, Bip32Path, HARDENED_OFFSET, MAX_DEPTH};
pub use serializer::{serialize, serialize_private_key, serialize_public_key};
