//! Bech32 decoding of extended keys.

use tracing::debug;
use zeroize::Zeroizing;

use keyseed_primitives::bech32;
use keyseed_primitives::util::ByteReader;

use crate::key::{ExtendedKey, CHAIN_CODE_LEN, PUBLIC_KEY_LEN};
use crate::net_version::KeyNetVersions;
use crate::path::{Bip32KeyIndex, Bip32Path};
use crate::serializer::PRIVATE_KEY_PREFIX;
use crate::Slip32Error;

/// Decode a SLIP-32 string into its key, path and chain code.
///
/// The HRP decides the key kind: private if it equals `net.private()`,
/// otherwise public if it equals `net.public()`.
///
/// # Returns
/// The validated key, or:
/// - `InvalidNetVersion` if neither HRP matches
/// - `Bech32` on a bad checksum, HRP or character set
/// - `Truncated` if the payload ends inside the depth byte or path
/// - `InvalidChainCodeLength` if fewer than 32 bytes follow the path
/// - `InvalidKeyLength` if the key is not 33 bytes
/// - `InvalidPrivateKeyPrefix` if a private key does not start with 0x00
/// - `InvalidKey` if the key is not a valid scalar or curve point
pub fn deserialize_key(encoded: &str, net: &KeyNetVersions) -> Result<ExtendedKey, Slip32Error> {
    let is_public = net.classify(encoded)?;
    let payload = Zeroizing::new(bech32::decode(net.hrp(is_public), encoded)?);

    let mut reader = ByteReader::new(&payload);
    let depth = reader.read_u8().map_err(Slip32Error::Truncated)?;
    let mut path = Bip32Path::master();
    for _ in 0..depth {
        let index = reader.read_array::<4>().map_err(Slip32Error::Truncated)?;
        path.push(Bip32KeyIndex::from_bytes(index))?;
    }

    if reader.remaining() < CHAIN_CODE_LEN {
        return Err(Slip32Error::InvalidChainCodeLength(reader.remaining()));
    }
    let chain_code = reader
        .read_array::<CHAIN_CODE_LEN>()
        .map_err(Slip32Error::Truncated)?;

    let key = reader.read_rest();
    if key.len() != PUBLIC_KEY_LEN {
        return Err(Slip32Error::InvalidKeyLength {
            expected: PUBLIC_KEY_LEN,
            got: key.len(),
        });
    }

    debug!(depth, is_public, "deserialized extended key");
    if is_public {
        ExtendedKey::public(key, path, &chain_code)
    } else {
        if key[0] != PRIVATE_KEY_PREFIX {
            return Err(Slip32Error::InvalidPrivateKeyPrefix(key[0]));
        }
        ExtendedKey::private(&key[1..], path, &chain_code)
    }
}
