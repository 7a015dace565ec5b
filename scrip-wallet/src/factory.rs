//! Wallet factory: generate and restore orchestration.

use zeroize::Zeroizing;

use crate::account::{AccountClass, ClassLookup};
use crate::engine::KeyDerivationEngine;
use crate::error::{Error, Result};
use crate::format;
use crate::mnemonic;
use crate::network::Network;
use crate::path::select_path;
use crate::provider::{HdKeyProvider, Secp256k1Provider};
use crate::record::WalletRecord;
use crate::seed::{derive_seed, SeedOptions};

/// Strength requirements for creation-time passphrases.
///
/// Applied by [`WalletFactory::generate`] when a passphrase is supplied;
/// restore never applies a policy, since the phrase being restored was
/// stretched with whatever passphrase it was created under.
#[derive(Debug, Clone)]
pub struct PassphrasePolicy {
    /// Minimum passphrase length in characters.
    pub min_len: usize,
    /// Require at least one ASCII letter and one digit.
    pub require_letter_and_digit: bool,
}

impl Default for PassphrasePolicy {
    fn default() -> Self {
        Self {
            min_len: 8,
            require_letter_and_digit: true,
        }
    }
}

impl PassphrasePolicy {
    /// Check a passphrase against this policy.
    pub fn check(&self, passphrase: &str) -> Result<()> {
        if passphrase.chars().count() < self.min_len {
            return Err(Error::PassphrasePolicy(format!(
                "must be at least {} characters",
                self.min_len
            )));
        }
        if self.require_letter_and_digit {
            let has_letter = passphrase.chars().any(|c| c.is_ascii_alphabetic());
            let has_digit = passphrase.chars().any(|c| c.is_ascii_digit());
            if !has_letter || !has_digit {
                return Err(Error::PassphrasePolicy(
                    "must contain at least one letter and one digit".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// Configuration for a [`WalletFactory`].
#[derive(Debug, Clone, Default)]
pub struct FactoryConfig {
    /// Network fixing address and WIF version bytes.
    pub network: Network,
    /// Creation-time passphrase policy.
    pub policy: PassphrasePolicy,
    /// Seed-stretching options.
    pub seed: SeedOptions,
}

/// Orchestrates mnemonic, seed, path, and key derivation into records.
///
/// The factory is stateless: every call is a pure function of its inputs
/// and the (immutable) configuration, so factories can be shared freely
/// across threads.
#[derive(Debug)]
pub struct WalletFactory<P = Secp256k1Provider> {
    config: FactoryConfig,
    engine: KeyDerivationEngine<P>,
}

impl WalletFactory {
    /// Create a factory with the statically linked secp256k1 provider.
    #[must_use]
    pub fn new(config: FactoryConfig) -> Self {
        Self::with_provider(config, Secp256k1Provider)
    }
}

impl<P: HdKeyProvider> WalletFactory<P> {
    /// Create a factory over a specific key provider.
    pub fn with_provider(config: FactoryConfig, provider: P) -> Self {
        let engine = KeyDerivationEngine::new(provider, config.network);
        Self { config, engine }
    }

    /// The factory configuration.
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Create a fresh identity.
    ///
    /// Draws a new 12-word phrase from `rng`, stretches it with `passphrase`
    /// (checked against the strength policy when supplied), derives the
    /// identity on the class's path, and assembles a validated record.
    pub fn generate<R: crate::rand_core::RngCore + crate::rand_core::CryptoRng>(
        &self,
        rng: &mut R,
        passphrase: Option<&str>,
        class: AccountClass,
    ) -> Result<WalletRecord> {
        if let Some(p) = passphrase {
            self.config.policy.check(p)?;
        }

        let fresh = mnemonic::generate(rng)?;
        let phrase = Zeroizing::new(fresh.to_string());
        self.derive_record(&phrase, passphrase, class)
    }

    /// Rebuild the identity for an existing phrase.
    ///
    /// The phrase is normalized and fully validated; an omitted class is
    /// looked up through `directory`, falling back to
    /// [`AccountClass::Primary`] when unknown. No passphrase policy applies.
    ///
    /// Restoring without the passphrase that was used at creation time
    /// succeeds but derives a different identity: the address will not match
    /// the one originally produced.
    pub fn restore(
        &self,
        phrase: &str,
        passphrase: Option<&str>,
        class: Option<AccountClass>,
        directory: &dyn ClassLookup,
    ) -> Result<WalletRecord> {
        let normalized = Zeroizing::new(mnemonic::normalize(phrase));
        mnemonic::parse(&normalized)?;

        let class = class
            .or_else(|| directory.account_class(&normalized))
            .unwrap_or_default();

        self.derive_record(&normalized, passphrase, class)
    }

    /// Common tail of generate and restore: seed, path, identity, record.
    fn derive_record(
        &self,
        normalized_phrase: &str,
        passphrase: Option<&str>,
        class: AccountClass,
    ) -> Result<WalletRecord> {
        // Path selection keys on caller-supplied passphrase presence; the
        // configured default passphrase (if any) affects stretching only.
        let has_passphrase = matches!(passphrase, Some(p) if !p.is_empty());
        let path = select_path(class, has_passphrase);

        let seed = derive_seed(normalized_phrase, passphrase, &self.config.seed);
        let identity = self.engine.derive_identity(seed.as_bytes(), &path)?;

        let wif = identity.private_key.to_wif(self.config.network);
        let public_key_hex = identity.public_key.to_hex();
        let address = identity.address.to_string();

        if !format::wif_is_canonical(&wif, self.config.network) {
            return Err(Error::InvalidEncoding {
                field: "private_key",
            });
        }
        if !format::public_key_is_canonical(&public_key_hex) {
            return Err(Error::InvalidEncoding { field: "public_key" });
        }
        if !format::address_is_canonical(&address, self.config.network) {
            return Err(Error::InvalidEncoding { field: "address" });
        }

        Ok(WalletRecord::new(
            normalized_phrase.to_string(),
            wif,
            public_key_hex,
            address,
            class,
        ))
    }
}
