//! Fixed-width byte types used for key material and digests.

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// A fixed-width secret with automatic zeroization and constant-time equality.
///
/// `Debug` output is redacted so secrets never reach logs.
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretBytes<const N: usize>([u8; N]);

impl<const N: usize> SecretBytes<N> {
    /// Create from a byte array.
    #[inline]
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Get a reference to the inner bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for SecretBytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> core::fmt::Debug for SecretBytes<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "SecretBytes<{}>[REDACTED]", N)
    }
}

impl<const N: usize> ConstantTimeEq for SecretBytes<N> {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.0.ct_eq(&other.0)
    }
}

impl<const N: usize> PartialEq for SecretBytes<N> {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl<const N: usize> Eq for SecretBytes<N> {}

/// A 64-byte secret, the width of a stretched wallet seed.
pub type Secret64 = SecretBytes<64>;

/// A fixed-size public byte array with hex formatting.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bytes<const N: usize>(pub [u8; N]);

impl<const N: usize> Bytes<N> {
    /// Create from a byte array.
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Get a reference to the inner bytes.
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> AsRef<[u8]> for Bytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for Bytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> From<Bytes<N>> for [u8; N] {
    fn from(bytes: Bytes<N>) -> Self {
        bytes.0
    }
}

impl<const N: usize> core::ops::Deref for Bytes<N> {
    type Target = [u8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> core::fmt::Debug for Bytes<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl<const N: usize> core::fmt::Display for Bytes<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// A 33-byte compressed secp256k1 public key.
pub type CompressedPubKey = Bytes<33>;

/// A 20-byte public-key hash.
pub type Hash160 = Bytes<20>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_bytes_redacted_debug() {
        let secret = SecretBytes::new([7u8; 32]);
        assert_eq!(format!("{:?}", secret), "SecretBytes<32>[REDACTED]");
    }

    #[test]
    fn test_secret_bytes_equality() {
        let a = SecretBytes::new([1u8; 16]);
        let b = SecretBytes::new([1u8; 16]);
        let c = SecretBytes::new([2u8; 16]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_bytes_hex_display() {
        let bytes = Bytes::new([0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(bytes.to_string(), "deadbeef");
        assert_eq!(format!("{:?}", bytes), "deadbeef");
    }
}
