//! Explicit session context for wallet lifecycle tracking.
//!
//! The surrounding application needs to know where a wallet stands between
//! creation, persistence, and restoration. That bookkeeping lives here, in a
//! context object the caller owns and passes around; the factory and engine
//! underneath stay stateless and side-effect-free.

use crate::account::{AccountClass, ClassLookup};
use crate::error::{Error, Result};
use crate::factory::WalletFactory;
use crate::provider::HdKeyProvider;
use crate::rand_core::{CryptoRng, RngCore};
use crate::record::WalletRecord;

/// Lifecycle state of a wallet session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No wallet has been created or restored yet.
    Uninitialized,
    /// A fresh identity exists but has not been persisted.
    Generated,
    /// The current record has been handed to the persistence sink.
    Persisted,
    /// Any previous wallet has been dropped.
    Cleared,
    /// A restore is in flight.
    Restoring,
    /// An identity has been rebuilt from an existing phrase.
    Restored,
}

impl SessionState {
    /// State name for diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Uninitialized => "uninitialized",
            Self::Generated => "generated",
            Self::Persisted => "persisted",
            Self::Cleared => "cleared",
            Self::Restoring => "restoring",
            Self::Restored => "restored",
        }
    }
}

/// A caller-owned wallet session.
///
/// Holds at most one current record and enforces the legal lifecycle:
/// generate and restore are only possible from a blank session
/// (`Uninitialized` or `Cleared`), persistence marking only from a session
/// holding a fresh or restored record.
#[derive(Debug)]
pub struct WalletSession {
    state: SessionState,
    record: Option<WalletRecord>,
}

impl WalletSession {
    /// Create a blank session.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SessionState::Uninitialized,
            record: None,
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The current record, if the session holds one.
    #[must_use]
    pub fn record(&self) -> Option<&WalletRecord> {
        self.record.as_ref()
    }

    /// Generate a fresh identity into this session.
    pub fn generate<P: HdKeyProvider, R: RngCore + CryptoRng>(
        &mut self,
        factory: &WalletFactory<P>,
        rng: &mut R,
        passphrase: Option<&str>,
        class: AccountClass,
    ) -> Result<&WalletRecord> {
        self.require_blank("generate")?;

        let record = factory.generate(rng, passphrase, class)?;
        self.state = SessionState::Generated;
        Ok(self.record.insert(record))
    }

    /// Restore an identity from an existing phrase into this session.
    pub fn restore<P: HdKeyProvider>(
        &mut self,
        factory: &WalletFactory<P>,
        phrase: &str,
        passphrase: Option<&str>,
        class: Option<AccountClass>,
        directory: &dyn ClassLookup,
    ) -> Result<&WalletRecord> {
        self.require_blank("restore")?;

        let previous = self.state;
        self.state = SessionState::Restoring;
        match factory.restore(phrase, passphrase, class, directory) {
            Ok(record) => {
                self.state = SessionState::Restored;
                Ok(self.record.insert(record))
            }
            Err(e) => {
                self.state = previous;
                Err(e)
            }
        }
    }

    /// Mark the current record as handed to the persistence sink.
    pub fn mark_persisted(&mut self) -> Result<()> {
        match self.state {
            SessionState::Generated | SessionState::Restored => {
                self.state = SessionState::Persisted;
                Ok(())
            }
            other => Err(Error::State {
                from: other.name(),
                operation: "mark persisted",
            }),
        }
    }

    /// Drop the current record. Secret fields zeroize as the record drops.
    pub fn clear(&mut self) {
        self.record = None;
        self.state = SessionState::Cleared;
    }

    fn require_blank(&self, operation: &'static str) -> Result<()> {
        match self.state {
            SessionState::Uninitialized | SessionState::Cleared => Ok(()),
            other => Err(Error::State {
                from: other.name(),
                operation,
            }),
        }
    }
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::new()
    }
}
