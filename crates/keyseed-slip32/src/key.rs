//! The decoded contents of a SLIP-32 extended key.

use std::fmt;

use zeroize::Zeroize;

use crate::net_version::KeyNetVersions;
use crate::path::Bip32Path;
use crate::{deserializer, serializer, Slip32Error};

/// Length of a BIP-32 chain code.
pub const CHAIN_CODE_LEN: usize = 32;

/// Length of a raw secp256k1 private scalar.
pub const PRIVATE_KEY_LEN: usize = 32;

/// Length of a compressed secp256k1 public key.
pub const PUBLIC_KEY_LEN: usize = 33;

/// A validated extended key: key material, derivation path and chain code.
///
/// Private keys are held as the raw 32-byte scalar; public keys as the
/// 33-byte compressed point. Key bytes are wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct ExtendedKey {
    key_bytes: Vec<u8>,
    path: Bip32Path,
    chain_code: [u8; CHAIN_CODE_LEN],
    is_public: bool,
}

impl ExtendedKey {
    /// Wrap a private key after checking it is a valid secp256k1 scalar.
    pub fn private(key: &[u8], path: Bip32Path, chain_code: &[u8]) -> Result<Self, Slip32Error> {
        validate_private_key(key)?;
        Ok(ExtendedKey {
            key_bytes: key.to_vec(),
            path,
            chain_code: chain_code_array(chain_code)?,
            is_public: false,
        })
    }

    /// Wrap a compressed public key after checking it lies on the curve.
    pub fn public(key: &[u8], path: Bip32Path, chain_code: &[u8]) -> Result<Self, Slip32Error> {
        validate_public_key(key)?;
        Ok(ExtendedKey {
            key_bytes: key.to_vec(),
            path,
            chain_code: chain_code_array(chain_code)?,
            is_public: true,
        })
    }

    /// Raw private scalar (32 bytes) or compressed point (33 bytes).
    pub fn key_bytes(&self) -> &[u8] {
        &self.key_bytes
    }

    /// Derivation path from the master key.
    pub fn path(&self) -> &Bip32Path {
        &self.path
    }

    /// The 32-byte BIP-32 chain code.
    pub fn chain_code(&self) -> &[u8; CHAIN_CODE_LEN] {
        &self.chain_code
    }

    /// Whether this is a public (`xpub`) rather than private key.
    pub fn is_public(&self) -> bool {
        self.is_public
    }

    /// The compressed public key, derived from the scalar for private keys.
    pub fn public_key_bytes(&self) -> Result<Vec<u8>, Slip32Error> {
        if self.is_public {
            return Ok(self.key_bytes.clone());
        }
        let secret = secret_key(&self.key_bytes)?;
        Ok(secret.public_key().to_sec1_bytes().to_vec())
    }

    /// The same position in the tree with the private half stripped.
    pub fn to_public(&self) -> Result<Self, Slip32Error> {
        Ok(ExtendedKey {
            key_bytes: self.public_key_bytes()?,
            path: self.path.clone(),
            chain_code: self.chain_code,
            is_public: true,
        })
    }

    /// Encode as a SLIP-32 Bech32 string.
    pub fn to_slip32(&self, net: &KeyNetVersions) -> Result<String, Slip32Error> {
        serializer::serialize(self, net)
    }

    /// Decode a SLIP-32 Bech32 string.
    pub fn from_slip32(encoded: &str, net: &KeyNetVersions) -> Result<Self, Slip32Error> {
        deserializer::deserialize_key(encoded, net)
    }
}

impl fmt::Debug for ExtendedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("ExtendedKey");
        if self.is_public {
            s.field("key_bytes", &hex::encode(&self.key_bytes));
        } else {
            s.field("key_bytes", &"<redacted>");
        }
        s.field("path", &self.path.to_string())
            .field("chain_code", &hex::encode(self.chain_code))
            .field("is_public", &self.is_public)
            .finish()
    }
}

impl Drop for ExtendedKey {
    fn drop(&mut self) {
        self.key_bytes.zeroize();
        self.chain_code.zeroize();
    }
}

fn chain_code_array(chain_code: &[u8]) -> Result<[u8; CHAIN_CODE_LEN], Slip32Error> {
    chain_code
        .try_into()
        .map_err(|_| Slip32Error::InvalidChainCodeLength(chain_code.len()))
}

fn secret_key(bytes: &[u8]) -> Result<k256::SecretKey, Slip32Error> {
    if bytes.len() != PRIVATE_KEY_LEN {
        return Err(Slip32Error::InvalidKeyLength {
            expected: PRIVATE_KEY_LEN,
            got: bytes.len(),
        });
    }
    k256::SecretKey::from_bytes(bytes.into())
        .map_err(|_| Slip32Error::InvalidKey("scalar is zero or not below the curve order".into()))
}

/// Check that `bytes` is a 32-byte scalar in `[1, n)`.
pub fn validate_private_key(bytes: &[u8]) -> Result<(), Slip32Error> {
    secret_key(bytes).map(|_| ())
}

/// Check that `bytes` is a 33-byte compressed point on secp256k1.
pub fn validate_public_key(bytes: &[u8]) -> Result<(), Slip32Error> {
    if bytes.len() != PUBLIC_KEY_LEN {
        return Err(Slip32Error::InvalidKeyLength {
            expected: PUBLIC_KEY_LEN,
            got: bytes.len(),
        });
    }
    if bytes[0] != 0x02 && bytes[0] != 0x03 {
        return Err(Slip32Error::InvalidKey(format!(
            "compressed point prefix {:#04x}",
            bytes[0]
        )));
    }
    k256::PublicKey::from_sec1_bytes(bytes)
        .map(|_| ())
        .map_err(|_| Slip32Error::InvalidKey("point is not on the curve".into()))
}
