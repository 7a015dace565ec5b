//! # Scrip Wallet - Deterministic Identity Core
//!
//! Turns a 12-word recovery phrase, an optional passphrase, and an account
//! class into a reproducible cryptographic identity: private key (WIF),
//! compressed public key, and Base58Check P2PKH address. The same inputs
//! always produce the same identity, on any machine, in any session.
//!
//! # Example
//!
//! ```no_run
//! use scrip_wallet::{AccountClass, FactoryConfig, UnknownClass, WalletFactory};
//!
//! let factory = WalletFactory::new(FactoryConfig::default());
//! let mut rng = rand::rngs::OsRng;
//!
//! let record = factory.generate(&mut rng, None, AccountClass::Primary)?;
//! let restored = factory.restore(record.mnemonic(), None, None, &UnknownClass)?;
//! assert_eq!(record.address(), restored.address());
//! # Ok::<(), scrip_wallet::Error>(())
//! ```
//!
//! All operations are synchronous, CPU-bound, and free of shared mutable
//! state; the only external dependency is the caller-supplied randomness
//! source for generation. Session-level bookkeeping lives in the explicit
//! [`WalletSession`] context object, never in this crate's globals.

#![warn(missing_docs, rust_2018_idioms, clippy::all)]
#![forbid(unsafe_code)]

mod account;
mod address;
mod engine;
mod error;
mod extended_key;
mod factory;
pub mod format;
pub mod mnemonic;
mod network;
pub mod path;
mod private_key;
mod provider;
mod public_key;
mod record;
pub mod seed;
mod session;

pub use account::{AccountClass, ClassLookup, ParseAccountClassError, UnknownClass};
pub use address::Address;
pub use engine::{Identity, KeyDerivationEngine};
pub use error::{Error, Result};
pub use extended_key::ExtendedPrivateKey;
pub use factory::{FactoryConfig, PassphrasePolicy, WalletFactory};
pub use network::Network;
pub use private_key::PrivateKey;
pub use provider::{HdKeyProvider, Secp256k1Provider};
pub use public_key::PublicKey;
pub use record::{RecordExport, WalletRecord};
pub use session::{SessionState, WalletSession};

// Re-export rand_core from k256 for consistent RNG trait versions
pub use k256::elliptic_curve::rand_core;
