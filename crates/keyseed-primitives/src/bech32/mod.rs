//! Bech32 encoding of arbitrary byte payloads.
//!
//! Unlike segwit addresses there is no witness version and no
//! 90-character cap: the whole payload is regrouped from 8-bit bytes
//! into 5-bit symbols and protected by the BIP-173 Bech32 (not Bech32m)
//! checksum. SLIP-32 extended keys are the main user.

use ::bech32::{FromBase32, ToBase32, Variant};

use crate::PrimitivesError;

/// Encode `data` under the human-readable part `hrp`.
///
/// # Arguments
/// * `hrp` - Human-readable prefix, e.g. `"xpub"`.
/// * `data` - Payload bytes.
///
/// # Returns
/// The lowercase Bech32 string, or an error if `hrp` is not a valid
/// Bech32 human-readable part.
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, PrimitivesError> {
    Ok(::bech32::encode(hrp, data.to_base32(), Variant::Bech32)?)
}

/// Decode a Bech32 string and return its payload bytes.
///
/// The string's human-readable part must equal `hrp` (compared
/// case-insensitively, as Bech32 strings are single-case).
///
/// # Arguments
/// * `hrp` - The expected human-readable part.
/// * `s` - The Bech32 string.
///
/// # Returns
/// The payload bytes, or an error for a bad checksum, a mismatched
/// prefix, a Bech32m checksum, or non-zero padding bits.
pub fn decode(hrp: &str, s: &str) -> Result<Vec<u8>, PrimitivesError> {
    let (decoded_hrp, data, variant) = ::bech32::decode(s)?;
    if !decoded_hrp.eq_ignore_ascii_case(hrp) {
        return Err(PrimitivesError::HrpMismatch {
            expected: hrp.to_string(),
            got: decoded_hrp,
        });
    }
    if variant != Variant::Bech32 {
        return Err(PrimitivesError::InvalidBech32(
            "bech32m checksum where bech32 was expected".to_string(),
        ));
    }
    Ok(Vec::<u8>::from_base32(&data)?)
}
