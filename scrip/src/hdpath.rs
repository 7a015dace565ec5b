//! Hierarchical derivation paths.
//!
//! Structured representation of BIP-32 style paths like `m/44'/0'/1'/0/0`,
//! used as typed input to child-key derivation. Paths are built from
//! [`ChildIndex`] values rather than strings so distinct branches stay
//! distinct by construction.

use crate::error::{Error, Result};
use core::fmt;

/// A child index in a derivation path.
///
/// Hardened indices are stored without the offset and carry it in their
/// raw `u32` form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChildIndex {
    /// Normal (non-hardened) index: 0 to 2^31 - 1.
    Normal(u32),
    /// Hardened index: displayed as `n'`, stored as `n`.
    Hardened(u32),
}

impl ChildIndex {
    /// The offset for hardened indices (2^31).
    pub const HARDENED_OFFSET: u32 = 0x8000_0000;

    /// Create a normal (non-hardened) child index.
    pub const fn normal(index: u32) -> Result<Self> {
        if index >= Self::HARDENED_OFFSET {
            Err(Error::InvalidDerivationPath)
        } else {
            Ok(Self::Normal(index))
        }
    }

    /// Create a hardened child index.
    pub const fn hardened(index: u32) -> Result<Self> {
        if index >= Self::HARDENED_OFFSET {
            Err(Error::InvalidDerivationPath)
        } else {
            Ok(Self::Hardened(index))
        }
    }

    /// Check if this is a hardened index.
    pub const fn is_hardened(&self) -> bool {
        matches!(self, Self::Hardened(_))
    }

    /// Get the raw index value without the hardened flag.
    pub const fn index(&self) -> u32 {
        match self {
            Self::Normal(i) | Self::Hardened(i) => *i,
        }
    }

    /// Convert to the raw `u32` used in derivation, offset included for
    /// hardened indices.
    pub const fn to_u32(&self) -> u32 {
        match self {
            Self::Normal(i) => *i,
            Self::Hardened(i) => *i | Self::HARDENED_OFFSET,
        }
    }
}

impl From<u32> for ChildIndex {
    fn from(value: u32) -> Self {
        if value >= Self::HARDENED_OFFSET {
            Self::Hardened(value & !Self::HARDENED_OFFSET)
        } else {
            Self::Normal(value)
        }
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(i) => write!(f, "{}", i),
            Self::Hardened(i) => write!(f, "{}'", i),
        }
    }
}

impl core::str::FromStr for ChildIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(index_str) = s
            .strip_suffix('\'')
            .or_else(|| s.strip_suffix('h'))
            .or_else(|| s.strip_suffix('H'))
        {
            let index: u32 = index_str.parse().map_err(|_| Error::InvalidDerivationPath)?;
            Self::hardened(index)
        } else {
            let index: u32 = s.parse().map_err(|_| Error::InvalidDerivationPath)?;
            Self::normal(index)
        }
    }
}

/// A derivation path: a sequence of child indices below the master key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    indices: Vec<ChildIndex>,
}

impl DerivationPath {
    /// Create a derivation path from a sequence of child indices.
    pub fn new(indices: Vec<ChildIndex>) -> Self {
        Self { indices }
    }

    /// Parse a derivation path from a string.
    ///
    /// Accepts `m/44'/0'/0'/0/0`, `m/44h/0h/0h/0/0`, and the same forms
    /// without the leading `m/`.
    pub fn parse(path: &str) -> Result<Self> {
        let path = path.trim();

        if path.is_empty() || path == "m" || path == "M" {
            return Ok(Self::new(Vec::new()));
        }

        let path = path
            .strip_prefix("m/")
            .or_else(|| path.strip_prefix("M/"))
            .unwrap_or(path);

        let mut indices = Vec::new();
        for component in path.split('/') {
            if component.is_empty() {
                continue;
            }
            indices.push(component.parse()?);
        }

        Ok(Self { indices })
    }

    /// Get the child indices in this path.
    pub fn indices(&self) -> &[ChildIndex] {
        &self.indices
    }

    /// Get the number of levels in this path.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Append a child index to the path.
    pub fn child(&self, index: ChildIndex) -> Self {
        let mut indices = self.indices.clone();
        indices.push(index);
        Self { indices }
    }

    /// Append a normal child index.
    pub fn normal_child(&self, index: u32) -> Result<Self> {
        Ok(self.child(ChildIndex::normal(index)?))
    }

    /// Append a hardened child index.
    pub fn hardened_child(&self, index: u32) -> Result<Self> {
        Ok(self.child(ChildIndex::hardened(index)?))
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.indices {
            write!(f, "/{}", index)?;
        }
        Ok(())
    }
}

impl core::str::FromStr for DerivationPath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
