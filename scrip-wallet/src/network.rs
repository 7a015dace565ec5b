//! Network configuration: version bytes for addresses and private keys.

use core::fmt;

/// Supported networks.
///
/// The network fixes the P2PKH address version byte and the WIF class byte;
/// it never influences which keys are derived, only how they are encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    /// Production network.
    #[default]
    Mainnet,
    /// Test network.
    Testnet,
}

impl Network {
    /// P2PKH address version byte.
    #[inline]
    #[must_use]
    pub const fn address_version(self) -> u8 {
        match self {
            Self::Mainnet => 0x00,
            Self::Testnet => 0x6f,
        }
    }

    /// WIF private-key class byte.
    #[inline]
    #[must_use]
    pub const fn wif_prefix(self) -> u8 {
        match self {
            Self::Mainnet => 0x80,
            Self::Testnet => 0xef,
        }
    }

    /// Resolve a network from a WIF class byte.
    #[must_use]
    pub const fn from_wif_prefix(byte: u8) -> Option<Self> {
        match byte {
            0x80 => Some(Self::Mainnet),
            0xef => Some(Self::Testnet),
            _ => None,
        }
    }

    /// Resolve a network from a P2PKH address version byte.
    #[must_use]
    pub const fn from_address_version(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Self::Mainnet),
            0x6f => Some(Self::Testnet),
            _ => None,
        }
    }

    /// Get the network name as a string.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
