//! Error type for primitive operations.

use core::fmt;

/// Errors that can occur in encoding, path, and key-material primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A byte slice had the wrong length.
    InvalidLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes.
        actual: usize,
    },
    /// A Base58Check payload failed its checksum.
    InvalidChecksum,
    /// Input was not valid Base58 or hex.
    InvalidEncoding,
    /// A derivation path component could not be parsed or was out of range.
    InvalidDerivationPath,
    /// Bytes do not form a valid secp256k1 private key.
    InvalidPrivateKey,
    /// Bytes do not form a valid secp256k1 public key.
    InvalidPublicKey,
    /// Derivation would exceed the maximum tree depth of 255.
    MaxDepthExceeded,
    /// An underlying cryptographic operation failed.
    Crypto,
}

/// Result alias for primitive operations.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected} bytes, got {actual}")
            }
            Self::InvalidChecksum => write!(f, "checksum mismatch"),
            Self::InvalidEncoding => write!(f, "invalid encoding"),
            Self::InvalidDerivationPath => write!(f, "invalid derivation path"),
            Self::InvalidPrivateKey => write!(f, "invalid private key"),
            Self::InvalidPublicKey => write!(f, "invalid public key"),
            Self::MaxDepthExceeded => write!(f, "maximum derivation depth exceeded"),
            Self::Crypto => write!(f, "cryptographic operation failed"),
        }
    }
}

impl std::error::Error for Error {}
