//! Identity derivation with round-trip verification.

use scrip::hdpath::DerivationPath;

use crate::address::Address;
use crate::error::{Error, Result};
use crate::network::Network;
use crate::private_key::PrivateKey;
use crate::provider::HdKeyProvider;
use crate::public_key::PublicKey;

/// A derived identity: private key, public key, and address.
#[derive(Debug)]
pub struct Identity {
    /// The child private key at the selected path.
    pub private_key: PrivateKey,
    /// The corresponding compressed public key.
    pub public_key: PublicKey,
    /// The P2PKH address.
    pub address: Address,
}

/// Derives identities from seeds through an [`HdKeyProvider`].
///
/// Every derivation is performed twice and the two addresses compared
/// byte-for-byte; a mismatch means the underlying provider is
/// non-deterministic or buggy and surfaces as the fatal
/// [`Error::DerivationMismatch`]. That error must never be caught and
/// ignored.
#[derive(Debug)]
pub struct KeyDerivationEngine<P> {
    provider: P,
    network: Network,
}

impl<P: HdKeyProvider> KeyDerivationEngine<P> {
    /// Create an engine over `provider` for `network`.
    pub const fn new(provider: P, network: Network) -> Self {
        Self { provider, network }
    }

    /// The network identities are encoded for.
    pub const fn network(&self) -> Network {
        self.network
    }

    /// Derive the identity for `seed` at `path`.
    pub fn derive_identity(&self, seed: &[u8], path: &DerivationPath) -> Result<Identity> {
        let private_key = self.provider.derive_at(seed, path)?;
        let public_key = private_key.public_key();
        let address = public_key.to_address(self.network);

        self.verify_round_trip(seed, path, &address)?;

        Ok(Identity {
            private_key,
            public_key,
            address,
        })
    }

    /// Re-derive from the same inputs and require a byte-identical address.
    fn verify_round_trip(&self, seed: &[u8], path: &DerivationPath, address: &Address) -> Result<()> {
        let check_key = self.provider.derive_at(seed, path)?;
        let check_address = check_key.public_key().to_address(self.network);

        if check_address.as_str() != address.as_str() {
            return Err(Error::DerivationMismatch {
                expected: address.to_string(),
                actual: check_address.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::Secp256k1Provider;
    use std::cell::Cell;

    fn test_path() -> DerivationPath {
        "m/44'/0'/0'/0/0".parse().unwrap()
    }

    #[test]
    fn test_derive_identity_is_deterministic() {
        let engine = KeyDerivationEngine::new(Secp256k1Provider, Network::Mainnet);
        let seed = [7u8; 64];

        let first = engine.derive_identity(&seed, &test_path()).unwrap();
        for _ in 0..5 {
            let again = engine.derive_identity(&seed, &test_path()).unwrap();
            assert_eq!(again.private_key.to_bytes(), first.private_key.to_bytes());
            assert_eq!(again.public_key, first.public_key);
            assert_eq!(again.address, first.address);
        }
    }

    #[test]
    fn test_identity_components_are_consistent() {
        let engine = KeyDerivationEngine::new(Secp256k1Provider, Network::Mainnet);
        let identity = engine.derive_identity(&[7u8; 64], &test_path()).unwrap();

        assert_eq!(identity.private_key.public_key(), identity.public_key);
        assert_eq!(
            identity.public_key.to_address(Network::Mainnet),
            identity.address
        );
    }

    /// Provider that returns a different key on every call.
    struct FlakyProvider {
        calls: Cell<u8>,
    }

    impl HdKeyProvider for FlakyProvider {
        fn derive_at(
            &self,
            _seed: &[u8],
            _path: &DerivationPath,
        ) -> scrip::Result<PrivateKey> {
            let n = self.calls.get() + 1;
            self.calls.set(n);
            PrivateKey::from_bytes(&[n; 32])
        }
    }

    #[test]
    fn test_non_deterministic_provider_is_rejected() {
        let engine = KeyDerivationEngine::new(
            FlakyProvider {
                calls: Cell::new(0),
            },
            Network::Mainnet,
        );
        let result = engine.derive_identity(&[7u8; 64], &test_path());
        assert!(matches!(result, Err(Error::DerivationMismatch { .. })));
    }

    /// Provider pinned to one key, ignoring its inputs.
    struct FixedProvider;

    impl HdKeyProvider for FixedProvider {
        fn derive_at(
            &self,
            _seed: &[u8],
            _path: &DerivationPath,
        ) -> scrip::Result<PrivateKey> {
            PrivateKey::from_bytes(&[9u8; 32])
        }
    }

    #[test]
    fn test_consistent_fake_provider_passes() {
        let engine = KeyDerivationEngine::new(FixedProvider, Network::Testnet);
        let identity = engine.derive_identity(&[7u8; 64], &test_path()).unwrap();
        assert_eq!(identity.address.network(), Network::Testnet);
    }
}
