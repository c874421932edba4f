//! Bech32 encoding of extended keys.
//!
//! Payload: depth(1) || path indices (4 each, big-endian) || chain code(32)
//! || key, where the key is 0x00 || scalar(32) for private keys and the
//! compressed point(33) for public keys.

use tracing::debug;
use zeroize::Zeroize;

use keyseed_primitives::bech32;
use keyseed_primitives::util::ByteWriter;

use crate::key::{ExtendedKey, CHAIN_CODE_LEN, PUBLIC_KEY_LEN};
use crate::net_version::KeyNetVersions;
use crate::path::Bip32Path;
use crate::Slip32Error;

/// Byte prepended to a private scalar to pad it to 33 bytes.
pub const PRIVATE_KEY_PREFIX: u8 = 0x00;

/// Serialize a validated extended key with the HRP matching its kind.
pub fn serialize(key: &ExtendedKey, net: &KeyNetVersions) -> Result<String, Slip32Error> {
    let path = key.path();
    let mut writer =
        ByteWriter::with_capacity(1 + 4 * path.indices().len() + CHAIN_CODE_LEN + PUBLIC_KEY_LEN);
    writer.write_u8(path.depth());
    for index in path.indices() {
        writer.write_u32_be(index.raw());
    }
    writer.write_bytes(key.chain_code());
    if !key.is_public() {
        writer.write_u8(PRIVATE_KEY_PREFIX);
    }
    writer.write_bytes(key.key_bytes());

    let mut payload = writer.into_bytes();
    let encoded = bech32::encode(net.hrp(key.is_public()), &payload);
    payload.zeroize();
    let encoded = encoded?;

    debug!(depth = path.depth(), is_public = key.is_public(), "serialized extended key");
    Ok(encoded)
}

/// Serialize a 32-byte private key under the private HRP.
///
/// # Arguments
/// * `key` - The raw secp256k1 scalar.
/// * `path` - Derivation path; its length becomes the depth byte.
/// * `chain_code` - Exactly 32 bytes.
/// * `net` - HRP pair; the private one is used.
pub fn serialize_private_key(
    key: &[u8],
    path: &Bip32Path,
    chain_code: &[u8],
    net: &KeyNetVersions,
) -> Result<String, Slip32Error> {
    serialize(&ExtendedKey::private(key, path.clone(), chain_code)?, net)
}

/// Serialize a 33-byte compressed public key under the public HRP.
pub fn serialize_public_key(
    key: &[u8],
    path: &Bip32Path,
    chain_code: &[u8],
    net: &KeyNetVersions,
) -> Result<String, Slip32Error> {
    serialize(&ExtendedKey::public(key, path.clone(), chain_code)?, net)
}
