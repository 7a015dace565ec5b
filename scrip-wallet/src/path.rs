//! Derivation-path selection.
//!
//! The pair (account class, passphrase presence) maps onto exactly four
//! fixed paths of the form `m/44'/0'/A'/P/0`: the class picks the hardened
//! account branch `A'`, passphrase presence picks the change branch `P`.
//! This table is the single source of truth for keyspace separation; no two
//! cells resolve to the same path.

use scrip::hdpath::{ChildIndex, DerivationPath};

use crate::account::AccountClass;

/// Purpose level of every wallet path.
pub const PURPOSE: u32 = 44;

/// Coin type level of every wallet path.
pub const COIN_TYPE: u32 = 0;

/// Select the derivation path for an account class and passphrase state.
///
/// Total over both inputs; the four resulting paths are pairwise distinct.
#[must_use]
pub fn select_path(class: AccountClass, has_passphrase: bool) -> DerivationPath {
    DerivationPath::new(vec![
        ChildIndex::Hardened(PURPOSE),
        ChildIndex::Hardened(COIN_TYPE),
        ChildIndex::Hardened(class.account_index()),
        ChildIndex::Normal(u32::from(has_passphrase)),
        ChildIndex::Normal(0),
    ])
}
