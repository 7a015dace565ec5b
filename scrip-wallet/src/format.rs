//! Canonical-format validation for derived identities.
//!
//! Structural checks only: decode, length, prefix, checksum. A record whose
//! components fail these checks is never handed to a caller; the factory
//! surfaces [`crate::Error::InvalidEncoding`] instead.

use scrip::encoding::base58check_decode;

use crate::network::Network;

/// Check that `wif` is canonical for `network`: Base58Check, the network's
/// class byte, a 33-byte payload ending in the 0x01 compression flag.
#[must_use]
pub fn wif_is_canonical(wif: &str, network: Network) -> bool {
    match base58check_decode(wif) {
        Ok((version, payload)) => {
            version == network.wif_prefix() && payload.len() == 33 && payload[32] == 0x01
        }
        Err(_) => false,
    }
}

/// Check that `hex` is a canonical compressed public key: 66 lowercase hex
/// characters with an 02/03 parity prefix.
#[must_use]
pub fn public_key_is_canonical(hex: &str) -> bool {
    hex.len() == 66
        && (hex.starts_with("02") || hex.starts_with("03"))
        && hex
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
}

/// Check that `address` is a canonical P2PKH address for `network`:
/// Base58Check, the network's version byte, a 20-byte hash payload.
#[must_use]
pub fn address_is_canonical(address: &str, network: Network) -> bool {
    match base58check_decode(address) {
        Ok((version, payload)) => version == network.address_version() && payload.len() == 20,
        Err(_) => false,
    }
}

/// Validate all three encodings of a derived identity.
#[must_use]
pub fn identity_is_canonical(wif: &str, public_key_hex: &str, address: &str, network: Network) -> bool {
    wif_is_canonical(wif, network)
        && public_key_is_canonical(public_key_hex)
        && address_is_canonical(address, network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::private_key::PrivateKey;

    fn sample() -> (String, String, String) {
        let key = PrivateKey::from_bytes(&[11u8; 32]).unwrap();
        let public_key = key.public_key();
        (
            key.to_wif(Network::Mainnet),
            public_key.to_hex(),
            public_key.to_address(Network::Mainnet).to_string(),
        )
    }

    #[test]
    fn test_derived_identity_is_canonical() {
        let (wif, pubkey, address) = sample();
        assert!(identity_is_canonical(&wif, &pubkey, &address, Network::Mainnet));
    }

    #[test]
    fn test_network_mismatch_fails() {
        let (wif, _, address) = sample();
        assert!(!wif_is_canonical(&wif, Network::Testnet));
        assert!(!address_is_canonical(&address, Network::Testnet));
    }

    #[test]
    fn test_wif_rejects_garbage() {
        assert!(!wif_is_canonical("", Network::Mainnet));
        assert!(!wif_is_canonical("not-base58-0OIl", Network::Mainnet));
        // Valid base58 but an uncompressed-form WIF (no 0x01 flag)
        assert!(!wif_is_canonical(
            "5HueCGU8rMjxEXxiPuD5BDku4MkFqeZyd4dZ1jvhTVqvbTLvyTJ",
            Network::Mainnet
        ));
    }

    #[test]
    fn test_public_key_structure() {
        let (_, pubkey, _) = sample();
        assert!(public_key_is_canonical(&pubkey));

        assert!(!public_key_is_canonical(&pubkey[..64]));
        assert!(!public_key_is_canonical(&pubkey.to_uppercase()));
        assert!(!public_key_is_canonical(&format!("04{}", &pubkey[2..])));
        assert!(!public_key_is_canonical(&format!("02{}zz", &pubkey[4..])));
    }

    #[test]
    fn test_address_rejects_corruption() {
        let (_, _, address) = sample();
        let mut corrupted = address.clone();
        let last = corrupted.pop().unwrap();
        corrupted.push(if last == '2' { '3' } else { '2' });
        assert!(!address_is_canonical(&corrupted, Network::Mainnet));
    }
}
