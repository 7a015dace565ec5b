//! # Scrip - Wallet Core Primitives
//!
//! Chain-agnostic building blocks for the Scrip wallet: hash functions,
//! Base58Check encoding, hierarchical derivation paths, and fixed-width
//! byte types with secret hygiene.
//!
//! Higher-level wallet semantics (mnemonics, key derivation, records) live
//! in the `scrip-wallet` crate; this crate stays free of any policy.

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![forbid(unsafe_code)]

pub mod encoding;
pub mod error;
pub mod hash;
pub mod hdpath;
pub mod types;

pub use error::{Error, Result};
pub use hdpath::{ChildIndex, DerivationPath};
pub use types::{Bytes, CompressedPubKey, Hash160, Secret64, SecretBytes};
