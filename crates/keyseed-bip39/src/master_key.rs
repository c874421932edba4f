//! Legacy Base58Check master private key from a BIP-39 seed.
//!
//! HMAC-SHA512("Bitcoin seed", seed) splits into the master key (left
//! half) and chain code (right half), which are packed into the 78-byte
//! BIP-32 extended-private-key layout and Base58Check-encoded.

use zeroize::Zeroize;

use keyseed_primitives::base58;
use keyseed_primitives::hash::sha512_hmac;
use keyseed_primitives::util::ByteWriter;

use crate::mnemonic::SEED_LEN;
use crate::Bip39Error;

/// Version bytes of a mainnet extended private key (`xprv`).
pub const MAINNET_PRIVATE_VERSION: [u8; 4] = [0x04, 0x88, 0xad, 0xe4];

/// Version bytes of a testnet extended private key (`tprv`).
pub const TESTNET_PRIVATE_VERSION: [u8; 4] = [0x04, 0x35, 0x83, 0x94];

/// Length of the serialized extended key before the checksum.
pub const EXTENDED_KEY_LEN: usize = 78;

const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// Serialize the BIP-32 master private key derived from `seed`.
///
/// Layout: version(4) || depth(1) = 0 || parent fingerprint(4) = 0 ||
/// child number(4) = 0 || chain code(32) || 0x00 || key(32), followed by
/// the 4-byte double-SHA-256 checksum, all in Base58.
///
/// # Arguments
/// * `seed` - The 64-byte BIP-39 seed.
/// * `testnet` - Use testnet version bytes (`tprv`) instead of mainnet (`xprv`).
///
/// # Returns
/// The Base58Check string, or `InvalidSeedLength` if `seed` is not 64 bytes.
pub fn to_hd_master_key(seed: &[u8], testnet: bool) -> Result<String, Bip39Error> {
    if seed.len() != SEED_LEN {
        return Err(Bip39Error::InvalidSeedLength(seed.len()));
    }

    let mut digest = sha512_hmac(MASTER_HMAC_KEY, seed);
    let (master_key, chain_code) = digest.split_at(32);

    let mut writer = ByteWriter::with_capacity(EXTENDED_KEY_LEN);
    writer.write_bytes(if testnet {
        &TESTNET_PRIVATE_VERSION
    } else {
        &MAINNET_PRIVATE_VERSION
    });
    writer.write_bytes(&[0u8; 9]);
    writer.write_bytes(chain_code);
    writer.write_u8(0x00);
    writer.write_bytes(master_key);

    let mut payload = writer.into_bytes();
    let encoded = base58::check_encode(&payload);
    payload.zeroize();
    digest.zeroize();
    Ok(encoded)
}
