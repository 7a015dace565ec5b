//! Recovery-phrase codec.
//!
//! Scrip identities are always backed by a 12-word English phrase: 128 bits
//! of entropy plus a 4-bit checksum, drawn from the standard 2048-word list.
//! Every phrase is normalized (trimmed, lowercased, single-spaced) before
//! any cryptographic use.
//!
//! The wordlist is designed so that every word is uniquely identifiable by
//! its first 4 characters; [`expand`] uses that property to accept
//! abbreviated phrases at the CLI boundary.

use bip39::{Language, Mnemonic};
use zeroize::{Zeroize, Zeroizing};

use crate::error::{Error, Result};
use crate::rand_core::{CryptoRng, RngCore};

/// Number of words in a recovery phrase.
pub const WORD_COUNT: usize = 12;

/// Entropy drawn per phrase (128 bits).
pub const ENTROPY_BYTES: usize = 16;

/// Minimum prefix length required for unambiguous word expansion.
const MIN_PREFIX_LEN: usize = 4;

/// Normalize a phrase: trim, lowercase, collapse runs of whitespace.
#[must_use]
pub fn normalize(phrase: &str) -> String {
    let mut normalized = String::with_capacity(phrase.len());
    for (i, word) in phrase.split_whitespace().enumerate() {
        if i > 0 {
            normalized.push(' ');
        }
        for c in word.chars() {
            normalized.extend(c.to_lowercase());
        }
    }
    normalized
}

/// Generate a fresh 12-word phrase from `rng`.
///
/// Degenerate all-zero output from the randomness source is rejected with
/// [`Error::Entropy`]. The rendered phrase is re-validated before being
/// returned; a failure there is an internal-consistency fault and fatal.
pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Mnemonic> {
    let mut entropy = [0u8; ENTROPY_BYTES];
    rng.fill_bytes(&mut entropy);
    if entropy.iter().all(|&b| b == 0) {
        return Err(Error::Entropy("randomness source returned all-zero bytes"));
    }

    let mnemonic = Mnemonic::from_entropy(&entropy)?;
    entropy.zeroize();

    // Self-check: the rendered phrase must survive its own validation and
    // decode back to the same entropy.
    let phrase = Zeroizing::new(mnemonic.to_string());
    let reparsed = parse(&phrase)?;
    if reparsed.to_entropy() != mnemonic.to_entropy() {
        return Err(Error::InvalidEncoding { field: "mnemonic" });
    }

    Ok(mnemonic)
}

/// Parse and validate a phrase: normalization, word count, wordlist
/// membership, checksum.
pub fn parse(phrase: &str) -> Result<Mnemonic> {
    let normalized = Zeroizing::new(normalize(phrase));
    let words = normalized.split(' ').filter(|w| !w.is_empty()).count();
    if words != WORD_COUNT {
        return Err(Error::WordCount(words));
    }
    Ok(Mnemonic::parse_normalized(&normalized)?)
}

/// Check whether `phrase` is a valid 12-word recovery phrase.
///
/// A predicate for callers: returns `false` for malformed input, never
/// panics or errors.
#[must_use]
pub fn validate(phrase: &str) -> bool {
    parse(phrase).is_ok()
}

/// Expand abbreviated words in a phrase to their full wordlist form.
///
/// Each whitespace-separated token is matched against the wordlist: exact
/// matches pass through, and prefixes of at least 4 characters that identify
/// a single word are expanded. The result is normalized but not
/// checksum-validated; run [`parse`] or [`validate`] on it afterwards.
pub fn expand(phrase: &str) -> Result<String> {
    let word_list = Language::English.word_list();
    let normalized = normalize(phrase);

    let mut result = String::with_capacity(normalized.len());
    for (i, token) in normalized.split(' ').filter(|w| !w.is_empty()).enumerate() {
        let word = resolve_token(word_list, token)?;
        if i > 0 {
            result.push(' ');
        }
        result.push_str(word);
    }
    Ok(result)
}

/// Resolve a single token against the wordlist, exact match or unique prefix.
fn resolve_token<'a>(word_list: &'a [&'a str; 2048], token: &str) -> Result<&'a str> {
    if let Ok(pos) = word_list.binary_search(&token) {
        return Ok(word_list[pos]);
    }

    if token.len() < MIN_PREFIX_LEN {
        return Err(Error::PrefixTooShort {
            prefix: token.to_string(),
            min_len: MIN_PREFIX_LEN,
        });
    }

    let mut matched = None;
    let mut count = 0usize;
    for &word in word_list {
        if word.starts_with(token) {
            matched = Some(word);
            count += 1;
        }
    }

    match count {
        0 => Err(Error::UnknownPrefix(token.to_string())),
        1 => Ok(matched.unwrap_or_default()),
        _ => Err(Error::AmbiguousPrefix {
            prefix: token.to_string(),
            matches: count,
        }),
    }
}
