//! Error types for wallet identity operations.

use std::fmt;

/// Errors that can occur while deriving or restoring a wallet identity.
///
/// Cryptographic faults ([`Error::DerivationMismatch`],
/// [`Error::InvalidEncoding`]) are fatal and always propagate; they signal an
/// implementation bug, never a bad user input. Mnemonic and passphrase
/// variants are recoverable by re-prompting the caller.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The randomness source was unavailable or returned degenerate output.
    Entropy(&'static str),
    /// Invalid mnemonic phrase (wordlist membership or checksum).
    Mnemonic(bip39::Error),
    /// A phrase did not have exactly 12 words.
    WordCount(usize),
    /// A creation-time passphrase did not meet the strength policy.
    PassphrasePolicy(String),
    /// Re-deriving the same seed and path produced a different address.
    DerivationMismatch {
        /// Address from the first derivation.
        expected: String,
        /// Address from the verification derivation.
        actual: String,
    },
    /// A derived key or address failed its canonical format check.
    InvalidEncoding {
        /// Which output failed: `"private_key"`, `"public_key"`, or `"address"`.
        field: &'static str,
    },
    /// A mnemonic prefix was too short for unambiguous expansion.
    PrefixTooShort {
        /// The offending prefix.
        prefix: String,
        /// Minimum required prefix length.
        min_len: usize,
    },
    /// A mnemonic prefix matched no wordlist entry.
    UnknownPrefix(String),
    /// A mnemonic prefix matched more than one wordlist entry.
    AmbiguousPrefix {
        /// The offending prefix.
        prefix: String,
        /// Number of words it matched.
        matches: usize,
    },
    /// A session operation was attempted from an incompatible state.
    State {
        /// The state the session was in.
        from: &'static str,
        /// The attempted operation.
        operation: &'static str,
    },
    /// A lower-level primitive failed.
    Core(scrip::Error),
}

/// Result alias for wallet identity operations.
pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entropy(reason) => write!(f, "entropy source failure: {reason}"),
            Self::Mnemonic(e) => write!(f, "mnemonic error: {e}"),
            Self::WordCount(n) => write!(f, "invalid word count {n}, expected 12"),
            Self::PassphrasePolicy(reason) => {
                write!(f, "passphrase rejected by policy: {reason}")
            }
            Self::DerivationMismatch { expected, actual } => write!(
                f,
                "derivation round-trip mismatch: {expected} != {actual} (non-deterministic key provider)"
            ),
            Self::InvalidEncoding { field } => {
                write!(f, "derived {field} failed canonical format check")
            }
            Self::PrefixTooShort { prefix, min_len } => {
                write!(f, "prefix \"{prefix}\" is too short (minimum {min_len} characters)")
            }
            Self::UnknownPrefix(prefix) => {
                write!(f, "prefix \"{prefix}\" does not match any wordlist entry")
            }
            Self::AmbiguousPrefix { prefix, matches } => {
                write!(f, "prefix \"{prefix}\" is ambiguous, matches {matches} words")
            }
            Self::State { from, operation } => {
                write!(f, "cannot {operation} from session state {from}")
            }
            Self::Core(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mnemonic(e) => Some(e),
            Self::Core(e) => Some(e),
            _ => None,
        }
    }
}

impl From<bip39::Error> for Error {
    fn from(err: bip39::Error) -> Self {
        Self::Mnemonic(err)
    }
}

impl From<scrip::Error> for Error {
    fn from(err: scrip::Error) -> Self {
        Self::Core(err)
    }
}
