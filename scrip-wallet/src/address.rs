//! P2PKH addresses.

use core::fmt;
use core::str::FromStr;

use scrip::encoding::{base58check_decode, base58check_encode};
use scrip::{Error, Hash160, Result};

use crate::network::Network;
use crate::public_key::PublicKey;

/// A pay-to-public-key-hash address: Base58Check of the network version
/// byte followed by the 20-byte public-key hash.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Address {
    encoded: String,
    hash: Hash160,
    network: Network,
}

impl Address {
    /// Build the address for a public key on `network`.
    pub fn from_public_key(public_key: &PublicKey, network: Network) -> Self {
        let hash = public_key.hash160();
        let encoded = base58check_encode(&[network.address_version()], hash.as_bytes());
        Self {
            encoded,
            hash,
            network,
        }
    }

    /// Parse and verify an encoded address: Base58Check checksum, known
    /// version byte, 20-byte payload.
    pub fn parse(s: &str) -> Result<Self> {
        let (version, payload) = base58check_decode(s)?;
        let network = Network::from_address_version(version).ok_or(Error::InvalidEncoding)?;

        if payload.len() != 20 {
            return Err(Error::InvalidLength {
                expected: 20,
                actual: payload.len(),
            });
        }

        let mut hash = [0u8; 20];
        hash.copy_from_slice(&payload);

        Ok(Self {
            encoded: s.to_string(),
            hash: Hash160::new(hash),
            network,
        })
    }

    /// The encoded address string.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    /// The public-key hash inside the address.
    pub fn hash160(&self) -> &Hash160 {
        &self.hash
    }

    /// The network this address encodes.
    pub const fn network(&self) -> Network {
        self.network
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.encoded)
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::private_key::PrivateKey;

    #[test]
    fn test_mainnet_addresses_start_with_1() {
        let key = PrivateKey::from_bytes(&[3u8; 32]).unwrap();
        let address = key.public_key().to_address(Network::Mainnet);
        assert!(address.as_str().starts_with('1'));
    }

    #[test]
    fn test_testnet_addresses_start_with_m_or_n() {
        let key = PrivateKey::from_bytes(&[3u8; 32]).unwrap();
        let address = key.public_key().to_address(Network::Testnet);
        let first = address.as_str().chars().next().unwrap();
        assert!(first == 'm' || first == 'n');
    }

    #[test]
    fn test_parse_roundtrip() {
        let key = PrivateKey::from_bytes(&[5u8; 32]).unwrap();
        let address = key.public_key().to_address(Network::Mainnet);
        let parsed: Address = address.as_str().parse().unwrap();
        assert_eq!(parsed, address);
        assert_eq!(parsed.network(), Network::Mainnet);
    }

    #[test]
    fn test_parse_known_address() {
        let parsed = Address::parse("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa").unwrap();
        assert_eq!(parsed.network(), Network::Mainnet);
        assert_eq!(
            parsed.hash160().to_string(),
            "62e907b15cbf27d5425399ebf6f0fb50ebb88f18"
        );
    }

    #[test]
    fn test_parse_rejects_corrupted_checksum() {
        assert!(Address::parse("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNb").is_err());
    }
}
