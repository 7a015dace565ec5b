//! secp256k1 public key in compressed form.

use k256::ecdsa::{SigningKey, VerifyingKey};

use scrip::hash::hash160;
use scrip::{CompressedPubKey, Error, Hash160, Result};

use crate::address::Address;
use crate::network::Network;

/// A secp256k1 public key, serialized in compressed SEC1 form: a one-byte
/// parity prefix (0x02 or 0x03) followed by the 32-byte X coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Create from a signing key.
    pub(crate) fn from_signing_key(key: &SigningKey) -> Self {
        Self {
            inner: *key.verifying_key(),
        }
    }

    /// Create from compressed SEC1 bytes (33 bytes).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 33 {
            return Err(Error::InvalidLength {
                expected: 33,
                actual: bytes.len(),
            });
        }
        let inner = VerifyingKey::from_sec1_bytes(bytes).map_err(|_| Error::InvalidPublicKey)?;
        Ok(Self { inner })
    }

    /// Serialize to compressed bytes.
    pub fn to_bytes(&self) -> CompressedPubKey {
        let point = self.inner.to_encoded_point(true);
        let mut result = [0u8; 33];
        result.copy_from_slice(point.as_bytes());
        CompressedPubKey::new(result)
    }

    /// Serialize to lowercase hex (66 characters).
    pub fn to_hex(&self) -> String {
        self.to_bytes().to_string()
    }

    /// hash160 of the compressed serialization, the payload of a P2PKH
    /// address.
    pub fn hash160(&self) -> Hash160 {
        Hash160::new(hash160(self.to_bytes().as_bytes()))
    }

    /// Derive the P2PKH address for `network`.
    pub fn to_address(&self, network: Network) -> Address {
        Address::from_public_key(self, network)
    }
}
