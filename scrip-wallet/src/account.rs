//! Account classes and the class-lookup collaborator.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// The class of a wallet account.
///
/// Each class owns a disjoint hardened branch of the derivation tree, so a
/// primary identity and a secondary identity derived from the same phrase
/// can never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountClass {
    /// Customer-facing account (the source system's "user" role).
    #[default]
    Primary,
    /// Merchant-facing account.
    Secondary,
}

impl AccountClass {
    /// Hardened account index for this class in the derivation tree.
    #[inline]
    #[must_use]
    pub const fn account_index(self) -> u32 {
        match self {
            Self::Primary => 0,
            Self::Secondary => 1,
        }
    }

    /// Get the class name as a string.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

impl fmt::Display for AccountClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Error returned when parsing an invalid account class string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseAccountClassError;

impl fmt::Display for ParseAccountClassError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid account class, expected: primary or secondary")
    }
}

impl std::error::Error for ParseAccountClassError {}

impl FromStr for AccountClass {
    type Err = ParseAccountClassError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "primary" | "user" => Ok(Self::Primary),
            "secondary" | "merchant" => Ok(Self::Secondary),
            _ => Err(ParseAccountClassError),
        }
    }
}

/// Collaborator that remembers which class a mnemonic was created with.
///
/// Consulted by restore when the caller omits the class; the answer comes
/// from whatever store the surrounding system keeps, never from this crate.
pub trait ClassLookup {
    /// Return the previously recorded class for `phrase`, if any.
    fn account_class(&self, phrase: &str) -> Option<AccountClass>;
}

/// A [`ClassLookup`] that knows nothing; restore falls back to
/// [`AccountClass::Primary`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnknownClass;

impl ClassLookup for UnknownClass {
    fn account_class(&self, _phrase: &str) -> Option<AccountClass> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_indices_disjoint() {
        assert_ne!(
            AccountClass::Primary.account_index(),
            AccountClass::Secondary.account_index()
        );
    }

    #[test]
    fn test_parse_accepts_source_role_names() {
        assert_eq!("primary".parse::<AccountClass>().unwrap(), AccountClass::Primary);
        assert_eq!("user".parse::<AccountClass>().unwrap(), AccountClass::Primary);
        assert_eq!("merchant".parse::<AccountClass>().unwrap(), AccountClass::Secondary);
        assert_eq!("SECONDARY".parse::<AccountClass>().unwrap(), AccountClass::Secondary);
        assert!("admin".parse::<AccountClass>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&AccountClass::Secondary).unwrap(),
            "\"secondary\""
        );
    }

    #[test]
    fn test_unknown_class_returns_none() {
        assert_eq!(UnknownClass.account_class("any phrase"), None);
    }
}
