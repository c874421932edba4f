use serde::{Deserialize, Serialize};

use crate::Slip32Error;

/// Default human-readable part of a serialized public key.
pub const DEFAULT_PUBLIC_HRP: &str = "xpub";

/// Default human-readable part of a serialized private key.
pub const DEFAULT_PRIVATE_HRP: &str = "xprv";

/// The pair of Bech32 human-readable parts that mark a key as public or
/// private. Both should be distinct, lowercase and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyNetVersions {
    public: String,
    private: String,
}

impl KeyNetVersions {
    /// HRP pair from explicit public and private prefixes.
    pub fn new(public: impl Into<String>, private: impl Into<String>) -> Self {
        KeyNetVersions {
            public: public.into(),
            private: private.into(),
        }
    }

    /// HRP of serialized public keys.
    pub fn public(&self) -> &str {
        &self.public
    }

    /// HRP of serialized private keys.
    pub fn private(&self) -> &str {
        &self.private
    }

    /// The HRP for the given key kind.
    pub fn hrp(&self, is_public: bool) -> &str {
        if is_public {
            &self.public
        } else {
            &self.private
        }
    }

    /// Decide whether `encoded` carries the public or private HRP.
    ///
    /// The HRP is everything before the last `1`, compared
    /// case-insensitively. The private HRP is tried first.
    ///
    /// # Returns
    /// `true` for public, `false` for private, or `InvalidNetVersion`.
    pub fn classify(&self, encoded: &str) -> Result<bool, Slip32Error> {
        let hrp = match encoded.rfind('1') {
            Some(pos) => &encoded[..pos],
            None => return Err(Slip32Error::InvalidNetVersion),
        };
        if hrp.eq_ignore_ascii_case(&self.private) {
            Ok(false)
        } else if hrp.eq_ignore_ascii_case(&self.public) {
            Ok(true)
        } else {
            Err(Slip32Error::InvalidNetVersion)
        }
    }
}

impl Default for KeyNetVersions {
    fn default() -> Self {
        KeyNetVersions::new(DEFAULT_PUBLIC_HRP, DEFAULT_PRIVATE_HRP)
    }
}
