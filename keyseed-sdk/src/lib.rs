#![deny(missing_docs)]

//! keyseed - Complete SDK.
//!
//! Re-exports the BIP-39 mnemonic engine, SLIP-32 extended-key codec and
//! shared primitives for convenient single-crate usage.

pub use keyseed_primitives as primitives;
pub use keyseed_bip39 as bip39;
pub use keyseed_slip32 as slip32;
