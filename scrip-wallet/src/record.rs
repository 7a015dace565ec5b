//! The wallet record handed to the persistence collaborator.

use chrono::{DateTime, Utc};
use serde::Serialize;
use zeroize::Zeroizing;

use crate::account::AccountClass;

/// A completed wallet identity.
///
/// Records are immutable: deriving with a different phrase, passphrase, or
/// class produces a new record rather than mutating an old one. The address
/// is a pure function of those inputs; only the timestamps vary between
/// derivations.
///
/// Secret fields (mnemonic, private key) are zeroized on drop and redacted
/// from `Debug` output.
pub struct WalletRecord {
    mnemonic: Zeroizing<String>,
    private_key: Zeroizing<String>,
    public_key: String,
    address: String,
    account_class: AccountClass,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl WalletRecord {
    pub(crate) fn new(
        mnemonic: String,
        private_key_wif: String,
        public_key_hex: String,
        address: String,
        account_class: AccountClass,
    ) -> Self {
        let now = Utc::now();
        Self {
            mnemonic: Zeroizing::new(mnemonic),
            private_key: Zeroizing::new(private_key_wif),
            public_key: public_key_hex,
            address,
            account_class,
            created_at: now,
            updated_at: now,
        }
    }

    /// The normalized 12-word recovery phrase.
    #[must_use]
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// The private key in WIF.
    #[must_use]
    pub fn private_key_wif(&self) -> &str {
        &self.private_key
    }

    /// The compressed public key as lowercase hex.
    #[must_use]
    pub fn public_key_hex(&self) -> &str {
        &self.public_key
    }

    /// The P2PKH address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The account class this identity was derived for.
    #[must_use]
    pub const fn account_class(&self) -> AccountClass {
        self.account_class
    }

    /// When this record was assembled.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When this record was last touched.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Compare everything except the timestamps.
    ///
    /// Two records for the same (phrase, passphrase, class) must always be
    /// identical under this comparison, no matter when they were derived.
    #[must_use]
    pub fn same_identity(&self, other: &Self) -> bool {
        *self.mnemonic == *other.mnemonic
            && *self.private_key == *other.private_key
            && self.public_key == other.public_key
            && self.address == other.address
            && self.account_class == other.account_class
    }

    /// Plain serializable view for the persistence sink.
    #[must_use]
    pub fn to_export(&self) -> RecordExport {
        RecordExport {
            mnemonic: self.mnemonic.to_string(),
            private_key: self.private_key.to_string(),
            public_key: self.public_key.clone(),
            address: self.address.clone(),
            account_class: self.account_class,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl core::fmt::Debug for WalletRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("WalletRecord")
            .field("mnemonic", &"[REDACTED]")
            .field("private_key", &"[REDACTED]")
            .field("public_key", &self.public_key)
            .field("address", &self.address)
            .field("account_class", &self.account_class)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Serializable form of a [`WalletRecord`].
///
/// Carries the secrets in the clear; it exists solely to hand a completed
/// record to the external persistence sink, which stores it opaquely.
#[derive(Debug, Clone, Serialize)]
pub struct RecordExport {
    /// Recovery phrase.
    pub mnemonic: String,
    /// Private key in WIF.
    pub private_key: String,
    /// Compressed public key hex.
    pub public_key: String,
    /// P2PKH address.
    pub address: String,
    /// Account class.
    pub account_class: AccountClass,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last-update timestamp.
    pub updated_at: DateTime<Utc>,
}
