//! The HD key provider seam.

use scrip::hdpath::DerivationPath;
use scrip::Result;

use crate::extended_key::ExtendedPrivateKey;
use crate::private_key::PrivateKey;

/// Derives the child private key for a seed and path.
///
/// The narrow seam between the derivation engine and the curve
/// implementation: production uses [`Secp256k1Provider`], tests substitute
/// fakes to exercise the engine's consistency checking.
pub trait HdKeyProvider {
    /// Derive the child private key for `seed` at `path`.
    fn derive_at(&self, seed: &[u8], path: &DerivationPath) -> Result<PrivateKey>;
}

/// The statically linked secp256k1 implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Provider;

impl HdKeyProvider for Secp256k1Provider {
    fn derive_at(&self, seed: &[u8], path: &DerivationPath) -> Result<PrivateKey> {
        let master = ExtendedPrivateKey::from_seed(seed)?;
        let child = master.derive(path)?;
        Ok(child.private_key().clone())
    }
}
