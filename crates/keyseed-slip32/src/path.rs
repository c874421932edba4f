//! BIP-32 child indices and derivation paths.
//!
//! Text form is `m/44'/0'/0'/0/1`: an optional leading `m`, then indices
//! separated by `/`, hardened ones marked with `'`, `h` or `p`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Slip32Error;

/// Flag bit set on hardened child indices.
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// Deepest path a single depth byte can describe.
pub const MAX_DEPTH: usize = 255;

/// Markers accepted after an index to denote hardened derivation.
const HARDENED_MARKERS: [char; 3] = ['\'', 'h', 'p'];

/// A BIP-32 child index, hardened when its top bit is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bip32KeyIndex(u32);

impl Bip32KeyIndex {
    /// Wrap a raw 32-bit index, hardened flag included.
    pub fn new(raw: u32) -> Self {
        Bip32KeyIndex(raw)
    }

    /// A non-hardened index. `index` must be below 2^31.
    pub fn normal(index: u32) -> Result<Self, Slip32Error> {
        if index >= HARDENED_OFFSET {
            return Err(Slip32Error::InvalidPath {
                path: index.to_string(),
                reason: "index out of range".to_string(),
            });
        }
        Ok(Bip32KeyIndex(index))
    }

    /// A hardened index. `index` must be below 2^31.
    pub fn hardened(index: u32) -> Result<Self, Slip32Error> {
        Ok(Bip32KeyIndex(Self::normal(index)?.0 | HARDENED_OFFSET))
    }

    /// The raw 32-bit value, hardened flag included.
    pub fn raw(self) -> u32 {
        self.0
    }

    /// The index with the hardened flag cleared.
    pub fn index(self) -> u32 {
        self.0 & !HARDENED_OFFSET
    }

    /// Whether the hardened flag is set.
    pub fn is_hardened(self) -> bool {
        self.0 & HARDENED_OFFSET != 0
    }

    /// Big-endian wire form.
    pub fn to_bytes(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }

    /// Parse from big-endian wire form.
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Bip32KeyIndex(u32::from_be_bytes(bytes))
    }
}

impl From<u32> for Bip32KeyIndex {
    fn from(raw: u32) -> Self {
        Bip32KeyIndex(raw)
    }
}

impl fmt::Display for Bip32KeyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_hardened() {
            write!(f, "{}'", self.index())
        } else {
            write!(f, "{}", self.index())
        }
    }
}

/// An ordered sequence of child indices from the master key, at most 255 deep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Bip32Path {
    elems: Vec<Bip32KeyIndex>,
}

impl Bip32Path {
    /// The empty path, i.e. the master key itself.
    pub fn master() -> Self {
        Bip32Path { elems: Vec::new() }
    }

    /// Build a path from indices.
    ///
    /// # Returns
    /// The path, or `PathTooDeep` if there are more than 255 indices.
    pub fn from_indices<I>(indices: I) -> Result<Self, Slip32Error>
    where
        I: IntoIterator<Item = Bip32KeyIndex>,
    {
        let elems: Vec<Bip32KeyIndex> = indices.into_iter().collect();
        if elems.len() > MAX_DEPTH {
            return Err(Slip32Error::PathTooDeep(elems.len()));
        }
        Ok(Bip32Path { elems })
    }

    /// Append a child index in place.
    pub fn push(&mut self, index: Bip32KeyIndex) -> Result<(), Slip32Error> {
        if self.elems.len() >= MAX_DEPTH {
            return Err(Slip32Error::PathTooDeep(self.elems.len() + 1));
        }
        self.elems.push(index);
        Ok(())
    }

    /// A new path one level below this one.
    pub fn child(&self, index: Bip32KeyIndex) -> Result<Self, Slip32Error> {
        let mut child = self.clone();
        child.push(index)?;
        Ok(child)
    }

    /// Number of indices; fits the SLIP-32 depth byte.
    pub fn depth(&self) -> u8 {
        // Bounded by MAX_DEPTH on every constructor.
        self.elems.len() as u8
    }

    /// Whether this is the master (empty) path.
    pub fn is_master(&self) -> bool {
        self.elems.is_empty()
    }

    /// The indices, root first.
    pub fn indices(&self) -> &[Bip32KeyIndex] {
        &self.elems
    }

    /// Parse the text form, e.g. `m/44'/0h/0p/1`.
    ///
    /// The leading `m` and a trailing `/` are optional. Each element is
    /// a decimal index below 2^31, optionally followed by `'`, `h` or `p`.
    ///
    /// # Returns
    /// The path, or `InvalidPath` / `PathTooDeep`.
    pub fn parse(text: &str) -> Result<Self, Slip32Error> {
        let invalid = |reason: String| Slip32Error::InvalidPath {
            path: text.to_string(),
            reason,
        };

        let trimmed = text.trim();
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
        let mut parts = trimmed.split('/').peekable();
        if parts.peek() == Some(&"m") {
            parts.next();
        }
        if trimmed.is_empty() {
            return Ok(Self::master());
        }

        let mut path = Self::master();
        for part in parts {
            let part = part.trim();
            let (digits, hardened) = match part.strip_suffix(HARDENED_MARKERS) {
                Some(digits) => (digits, true),
                None => (part, false),
            };
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid(format!("invalid element {:?}", part)));
            }
            let value: u32 = digits
                .parse()
                .map_err(|_| invalid(format!("index {:?} out of range", digits)))?;
            let index = if hardened {
                Bip32KeyIndex::hardened(value)
            } else {
                Bip32KeyIndex::normal(value)
            }
            .map_err(|_| invalid(format!("index {} out of range", value)))?;
            path.push(index)?;
        }
        Ok(path)
    }
}

impl fmt::Display for Bip32Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for elem in &self.elems {
            write!(f, "/{}", elem)?;
        }
        Ok(())
    }
}

impl FromStr for Bip32Path {
    type Err = Slip32Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Bip32Path::parse(s)
    }
}

impl Serialize for Bip32Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Bip32Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Bip32Path::parse(&s).map_err(serde::de::Error::custom)
    }
}
