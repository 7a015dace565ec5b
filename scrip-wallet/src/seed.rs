//! Seed stretching: (phrase, passphrase) → 64-byte derivation seed.
//!
//! PBKDF2-HMAC-SHA512 over the normalized phrase with a `"mnemonic"`-prefixed
//! salt, 2048 rounds. Identical inputs produce identical seeds on every
//! platform and every call; the seed itself is transient and zeroized on drop.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use scrip::Secret64;

/// Width of a stretched seed in bytes.
pub const SEED_BYTES: usize = 64;

/// PBKDF2 iteration count.
pub const PBKDF2_ROUNDS: u32 = 2048;

/// Configuration for seed stretching.
///
/// `default_passphrase` substitutes for an *absent* caller passphrase during
/// stretching only. It is an explicit injected value with no environment
/// fallback, and it never counts as passphrase presence for derivation-path
/// selection.
#[derive(Debug, Clone, Default)]
pub struct SeedOptions {
    /// Stretching passphrase applied when the caller supplies none.
    pub default_passphrase: Option<String>,
}

impl SeedOptions {
    /// The passphrase that actually enters the salt.
    fn effective_passphrase<'a>(&'a self, passphrase: Option<&'a str>) -> &'a str {
        match passphrase {
            Some(p) => p,
            None => self.default_passphrase.as_deref().unwrap_or(""),
        }
    }
}

/// Stretch a normalized phrase and optional passphrase into a seed.
#[must_use]
pub fn derive_seed(
    normalized_phrase: &str,
    passphrase: Option<&str>,
    options: &SeedOptions,
) -> Secret64 {
    let salt = Zeroizing::new(format!(
        "mnemonic{}",
        options.effective_passphrase(passphrase)
    ));

    let mut seed = [0u8; SEED_BYTES];
    pbkdf2_hmac::<Sha512>(
        normalized_phrase.as_bytes(),
        salt.as_bytes(),
        PBKDF2_ROUNDS,
        &mut seed,
    );

    let out = Secret64::new(seed);
    seed.zeroize();
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const PHRASE: &str = "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about";

    #[test]
    fn test_known_seed_vector() {
        let seed = derive_seed(PHRASE, Some("TREZOR"), &SeedOptions::default());
        let expected = hex!(
            "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04"
        );
        assert_eq!(seed.as_bytes(), &expected);
    }

    #[test]
    fn test_deterministic() {
        let a = derive_seed(PHRASE, Some("x"), &SeedOptions::default());
        let b = derive_seed(PHRASE, Some("x"), &SeedOptions::default());
        assert_eq!(a, b);
    }

    #[test]
    fn test_passphrase_changes_seed() {
        let without = derive_seed(PHRASE, None, &SeedOptions::default());
        let with = derive_seed(PHRASE, Some("password"), &SeedOptions::default());
        assert_ne!(without, with);
    }

    #[test]
    fn test_absent_passphrase_equals_empty() {
        let absent = derive_seed(PHRASE, None, &SeedOptions::default());
        let empty = derive_seed(PHRASE, Some(""), &SeedOptions::default());
        assert_eq!(absent, empty);
    }

    #[test]
    fn test_default_passphrase_applies_only_when_absent() {
        let options = SeedOptions {
            default_passphrase: Some("site-default".to_string()),
        };
        let absent = derive_seed(PHRASE, None, &options);
        let explicit_default = derive_seed(PHRASE, Some("site-default"), &SeedOptions::default());
        assert_eq!(absent, explicit_default);

        let supplied = derive_seed(PHRASE, Some("mine"), &options);
        let supplied_plain = derive_seed(PHRASE, Some("mine"), &SeedOptions::default());
        assert_eq!(supplied, supplied_plain);
    }
}
