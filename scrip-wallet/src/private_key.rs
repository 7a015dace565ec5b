//! secp256k1 private key with WIF encoding.

use k256::ecdsa::SigningKey;
use zeroize::{Zeroize, Zeroizing};

use scrip::encoding::{base58check_decode, base58check_encode};
use scrip::{Error, Result};

use crate::network::Network;
use crate::public_key::PublicKey;

/// A secp256k1 private key.
///
/// Keys are always treated as compressed: WIF export appends the 0x01
/// compression flag and import requires it.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl Zeroize for PrivateKey {
    fn zeroize(&mut self) {
        // SigningKey offers no in-place clearing; swap in a throwaway key
        // and let the old one zeroize on drop.
        let zeroed = SigningKey::from_slice(&[1u8; 32]).unwrap_or_else(|_| unreachable!());
        let _ = core::mem::replace(&mut self.inner, zeroed);
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl PrivateKey {
    /// Create from a raw 32-byte secret.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 32 {
            return Err(Error::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let inner = SigningKey::from_slice(bytes).map_err(|_| Error::InvalidPrivateKey)?;
        Ok(Self { inner })
    }

    /// Serialize to the raw 32-byte secret.
    pub fn to_bytes(&self) -> [u8; 32] {
        self.inner.to_bytes().into()
    }

    /// Derive the corresponding public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_signing_key(&self.inner)
    }

    /// Export as WIF: Base58Check(class byte ‖ secret ‖ 0x01).
    pub fn to_wif(&self, network: Network) -> String {
        let mut payload = [0u8; 33];
        payload[..32].copy_from_slice(&self.to_bytes());
        payload[32] = 0x01;

        let wif = base58check_encode(&[network.wif_prefix()], &payload);
        payload.zeroize();
        wif
    }

    /// Import from WIF, returning the key and the network its class byte
    /// names. Uncompressed-form WIF is rejected.
    pub fn from_wif(wif: &str) -> Result<(Self, Network)> {
        let (version, payload) = base58check_decode(wif)?;
        let payload = Zeroizing::new(payload);

        let network = Network::from_wif_prefix(version).ok_or(Error::InvalidEncoding)?;

        if payload.len() != 33 {
            return Err(Error::InvalidLength {
                expected: 33,
                actual: payload.len(),
            });
        }
        if payload[32] != 0x01 {
            return Err(Error::InvalidEncoding);
        }

        let inner = SigningKey::from_slice(&payload[..32]).map_err(|_| Error::InvalidPrivateKey)?;
        Ok((Self { inner }, network))
    }
}

impl core::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wif_export_known_vector() {
        let bytes =
            hex_literal::hex!("0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d");
        let key = PrivateKey::from_bytes(&bytes).unwrap();
        assert_eq!(
            key.to_wif(Network::Mainnet),
            "KwdMAjGmerYanjeui5SHS7JkmpZvVipYvB2LJGU1ZxJwYvP98617"
        );
    }

    #[test]
    fn test_wif_roundtrip() {
        let bytes =
            hex_literal::hex!("e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35");
        let key = PrivateKey::from_bytes(&bytes).unwrap();
        let wif = key.to_wif(Network::Mainnet);
        let (recovered, network) = PrivateKey::from_wif(&wif).unwrap();
        assert_eq!(network, Network::Mainnet);
        assert_eq!(key.to_bytes(), recovered.to_bytes());
    }

    #[test]
    fn test_testnet_wif_prefix() {
        let bytes =
            hex_literal::hex!("0c28fca386c7a227600b2fe50b7cae11ec86d3bf1fbe471be89827e19d72aa1d");
        let key = PrivateKey::from_bytes(&bytes).unwrap();
        let wif = key.to_wif(Network::Testnet);
        assert!(wif.starts_with('c'));
        let (_, network) = PrivateKey::from_wif(&wif).unwrap();
        assert_eq!(network, Network::Testnet);
    }

    #[test]
    fn test_from_wif_rejects_uncompressed() {
        // Uncompressed-form WIF carries no 0x01 suffix
        let wif = "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ";
        assert!(PrivateKey::from_wif(wif).is_err());
    }

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        assert!(matches!(
            PrivateKey::from_bytes(&[0u8; 31]),
            Err(Error::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_from_bytes_rejects_zero_scalar() {
        assert!(PrivateKey::from_bytes(&[0u8; 32]).is_err());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let key = PrivateKey::from_bytes(&[7u8; 32]).unwrap();
        assert_eq!(format!("{:?}", key), "PrivateKey([REDACTED])");
    }
}
