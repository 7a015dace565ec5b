//! Base58Check and hex encoding utilities.

use crate::error::{Error, Result};
use crate::hash::double_sha256;

/// Encode a version prefix plus payload as Base58Check.
pub fn base58check_encode(version: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(version.len() + payload.len() + 4);
    data.extend_from_slice(version);
    data.extend_from_slice(payload);

    let checksum = double_sha256(&data);
    data.extend_from_slice(&checksum[..4]);

    bs58::encode(data).into_string()
}

/// Decode a Base58Check string with a single-byte version prefix.
///
/// Returns the version byte and the payload with the checksum stripped.
pub fn base58check_decode(encoded: &str) -> Result<(u8, Vec<u8>)> {
    let data = bs58::decode(encoded)
        .into_vec()
        .map_err(|_| Error::InvalidEncoding)?;

    // 1 version byte + 4 checksum bytes is the minimum well-formed payload
    if data.len() < 5 {
        return Err(Error::InvalidLength {
            expected: 5,
            actual: data.len(),
        });
    }

    let (body, checksum) = data.split_at(data.len() - 4);
    let computed = double_sha256(body);
    if checksum != &computed[..4] {
        return Err(Error::InvalidChecksum);
    }

    Ok((body[0], body[1..].to_vec()))
}

/// Encode bytes as lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string, with or without a `0x` prefix.
pub fn from_hex(s: &str) -> Result<Vec<u8>> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    hex::decode(s).map_err(|_| Error::InvalidEncoding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn test_base58check_roundtrip() {
        let payload = hex!("62e907b15cbf27d5425399ebf6f0fb50ebb88f18");
        let encoded = base58check_encode(&[0x00], &payload);
        let (version, decoded) = base58check_decode(&encoded).unwrap();
        assert_eq!(version, 0x00);
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_base58check_known_address() {
        // hash160 of the genesis coinbase public key
        let payload = hex!("62e907b15cbf27d5425399ebf6f0fb50ebb88f18");
        let encoded = base58check_encode(&[0x00], &payload);
        assert_eq!(encoded, "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa");
    }

    #[test]
    fn test_base58check_rejects_bad_checksum() {
        let payload = hex!("62e907b15cbf27d5425399ebf6f0fb50ebb88f18");
        let mut encoded = base58check_encode(&[0x00], &payload);
        // Flip the final character to another Base58 digit
        let last = encoded.pop().unwrap();
        encoded.push(if last == '2' { '3' } else { '2' });
        assert!(matches!(
            base58check_decode(&encoded),
            Err(Error::InvalidChecksum) | Err(Error::InvalidEncoding)
        ));
    }

    #[test]
    fn test_base58check_rejects_non_base58() {
        assert!(matches!(
            base58check_decode("0OIl"),
            Err(Error::InvalidEncoding)
        ));
    }

    #[test]
    fn test_base58check_rejects_truncated() {
        assert!(base58check_decode("2g").is_err());
    }

    #[test]
    fn test_hex_roundtrip() {
        let bytes = hex!("deadbeef");
        assert_eq!(to_hex(&bytes), "deadbeef");
        assert_eq!(from_hex("deadbeef").unwrap(), bytes);
        assert_eq!(from_hex("0xdeadbeef").unwrap(), bytes);
    }

    #[test]
    fn test_from_hex_rejects_invalid() {
        assert!(from_hex("zz").is_err());
    }
}
