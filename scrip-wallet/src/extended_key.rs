//! Hierarchical deterministic key derivation.
//!
//! Master key from seed via HMAC-SHA512, child keys via the standard
//! CKDpriv construction: HMAC over the parent chain code with either the
//! parent public key (normal) or the parent secret (hardened), child secret
//! = parse256(IL) + parent (mod n).

use hmac::{Hmac, Mac};
use k256::elliptic_curve::ops::Reduce;
use k256::{Scalar, U256};
use sha2::Sha512;
use zeroize::Zeroize;

use scrip::hdpath::{ChildIndex, DerivationPath};
use scrip::{Error, Result};

use crate::private_key::PrivateKey;
use crate::public_key::PublicKey;

type HmacSha512 = Hmac<Sha512>;

/// Domain-separation key for master-key derivation.
const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// An extended private key: a private key plus the chain code that lets it
/// derive children.
#[derive(Clone)]
pub struct ExtendedPrivateKey {
    private_key: PrivateKey,
    chain_code: [u8; 32],
    depth: u8,
}

impl Zeroize for ExtendedPrivateKey {
    fn zeroize(&mut self) {
        self.private_key.zeroize();
        self.chain_code.zeroize();
        self.depth = 0;
    }
}

impl Drop for ExtendedPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ExtendedPrivateKey {
    /// Derive the master key from a seed of 16 to 64 bytes.
    pub fn from_seed(seed: &[u8]) -> Result<Self> {
        if seed.len() < 16 || seed.len() > 64 {
            return Err(Error::InvalidLength {
                expected: 64,
                actual: seed.len(),
            });
        }

        let mut mac = HmacSha512::new_from_slice(MASTER_HMAC_KEY).map_err(|_| Error::Crypto)?;
        mac.update(seed);
        let result = mac.finalize().into_bytes();

        // First 32 bytes are the private key, last 32 are the chain code
        let private_key = PrivateKey::from_bytes(&result[..32])?;

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&result[32..]);

        Ok(Self {
            private_key,
            chain_code,
            depth: 0,
        })
    }

    /// Derive the child key at `index`.
    pub fn derive_child(&self, index: ChildIndex) -> Result<Self> {
        if self.depth == u8::MAX {
            return Err(Error::MaxDepthExceeded);
        }

        let mut mac = HmacSha512::new_from_slice(&self.chain_code).map_err(|_| Error::Crypto)?;

        match index {
            ChildIndex::Normal(_) => {
                // serP(point(kpar)) || ser32(i)
                mac.update(self.public_key().to_bytes().as_bytes());
            }
            ChildIndex::Hardened(_) => {
                // 0x00 || ser256(kpar) || ser32(i)
                mac.update(&[0u8]);
                mac.update(&self.private_key.to_bytes());
            }
        }
        mac.update(&index.to_u32().to_be_bytes());

        let result = mac.finalize().into_bytes();
        let (il, ir) = result.split_at(32);

        // child = parse256(IL) + parent (mod n)
        let parent_scalar: Scalar =
            <Scalar as Reduce<U256>>::reduce(U256::from_be_slice(&self.private_key.to_bytes()));
        let il_scalar: Scalar = <Scalar as Reduce<U256>>::reduce(U256::from_be_slice(il));
        let child_scalar = parent_scalar + il_scalar;

        let mut child_bytes: [u8; 32] = child_scalar.to_bytes().into();
        let child_key = PrivateKey::from_bytes(&child_bytes);
        child_bytes.zeroize();

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(ir);

        Ok(Self {
            private_key: child_key?,
            chain_code,
            depth: self.depth + 1,
        })
    }

    /// Walk a full derivation path from this key.
    pub fn derive(&self, path: &DerivationPath) -> Result<Self> {
        let mut current = self.clone();
        for &index in path.indices() {
            current = current.derive_child(index)?;
        }
        Ok(current)
    }

    /// The underlying private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The corresponding public key.
    pub fn public_key(&self) -> PublicKey {
        self.private_key.public_key()
    }

    /// The chain code.
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Depth in the derivation tree, 0 for the master key.
    pub const fn depth(&self) -> u8 {
        self.depth
    }
}

impl core::fmt::Debug for ExtendedPrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExtendedPrivateKey")
            .field("depth", &self.depth)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // BIP-32 test vector 1
    const TEST_SEED_1: &[u8] = &hex_literal::hex!("000102030405060708090a0b0c0d0e0f");

    #[test]
    fn test_master_key_from_seed_vector1() {
        let master = ExtendedPrivateKey::from_seed(TEST_SEED_1).unwrap();
        assert_eq!(master.depth(), 0);
        assert_eq!(
            hex::encode(master.private_key().to_bytes()),
            "e8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35"
        );
        assert_eq!(
            hex::encode(master.chain_code()),
            "873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508"
        );
    }

    #[test]
    fn test_vector1_child_m_0h() {
        let master = ExtendedPrivateKey::from_seed(TEST_SEED_1).unwrap();
        let child = master.derive_child(ChildIndex::Hardened(0)).unwrap();
        assert_eq!(child.depth(), 1);
        assert_eq!(
            hex::encode(child.private_key().to_bytes()),
            "edb2e14f9ee77d26dd93b4ecede8d16ed408ce149b6cd80b0715a2d911a0afea"
        );
        assert_eq!(
            hex::encode(child.chain_code()),
            "47fdacbd0f1097043b78c63c20c34ef4ed9a111d980047ad16282c7ae6236141"
        );
    }

    #[test]
    fn test_vector1_child_m_0h_1() {
        let master = ExtendedPrivateKey::from_seed(TEST_SEED_1).unwrap();
        let child = master
            .derive_child(ChildIndex::Hardened(0))
            .unwrap()
            .derive_child(ChildIndex::Normal(1))
            .unwrap();
        assert_eq!(
            hex::encode(child.private_key().to_bytes()),
            "3c6cb8d0f6a264c91ea8b5030fadaa8e538b020f0a387421a12de9319dc93368"
        );
    }

    #[test]
    fn test_derive_path_matches_stepwise() {
        let master = ExtendedPrivateKey::from_seed(TEST_SEED_1).unwrap();
        let path: DerivationPath = "m/0'/1".parse().unwrap();
        let walked = master.derive(&path).unwrap();
        let stepped = master
            .derive_child(ChildIndex::Hardened(0))
            .unwrap()
            .derive_child(ChildIndex::Normal(1))
            .unwrap();
        assert_eq!(walked.private_key().to_bytes(), stepped.private_key().to_bytes());
        assert_eq!(walked.depth(), 2);
    }

    #[test]
    fn test_hardened_and_normal_children_differ() {
        let master = ExtendedPrivateKey::from_seed(TEST_SEED_1).unwrap();
        let normal = master.derive_child(ChildIndex::Normal(0)).unwrap();
        let hardened = master.derive_child(ChildIndex::Hardened(0)).unwrap();
        assert_ne!(
            normal.private_key().to_bytes(),
            hardened.private_key().to_bytes()
        );
    }

    #[test]
    fn test_from_seed_rejects_bad_lengths() {
        assert!(ExtendedPrivateKey::from_seed(&[0u8; 15]).is_err());
        assert!(ExtendedPrivateKey::from_seed(&[0u8; 65]).is_err());
    }
}
