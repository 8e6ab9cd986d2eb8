use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::ClaimLeaf;

/// `keccak256(data)`.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Hash two sibling nodes into their parent.
///
/// The pair is ordered lexicographically before concatenation, so the parent
/// hash does not depend on which side each child sat on. Tree building and
/// proof verification both go through this function; a tree hashed any other
/// way will not verify here.
pub fn hash_sorted_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    Keccak256::new()
        .chain_update(lo)
        .chain_update(hi)
        .finalize()
        .into()
}

/// Fold a leaf hash up through a proof, returning the implied root.
pub fn fold_proof(proof: &[[u8; 32]], leaf_hash: &[u8; 32]) -> [u8; 32] {
    proof
        .iter()
        .fold(*leaf_hash, |computed, sibling| hash_sorted_pair(&computed, sibling))
}

/// Verifies a Merkle proof for a raw leaf hash against `root`.
pub fn verify_merkle_proof(proof: &[[u8; 32]], root: &[u8; 32], leaf_hash: &[u8; 32]) -> bool {
    fold_proof(proof, leaf_hash) == *root
}

/// Sibling hashes from a leaf up to the root, leaf level first.
///
/// No direction bits are carried: pairs are sorted before hashing, and a level
/// where the node was promoted without a sibling contributes no element.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimProof(pub Vec<[u8; 32]>);

impl ClaimProof {
    pub fn new(proof: Vec<[u8; 32]>) -> Self {
        Self(proof)
    }

    pub fn as_slice(&self) -> &[[u8; 32]] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<[u8; 32]> {
        self.0
    }

    /// The root this proof implies for `leaf`.
    pub fn root_for(&self, leaf: &ClaimLeaf) -> [u8; 32] {
        fold_proof(&self.0, &leaf.to_hash())
    }

    pub fn verify(&self, root: &[u8; 32], leaf: &ClaimLeaf) -> bool {
        self.root_for(leaf) == *root
    }
}

impl From<Vec<[u8; 32]>> for ClaimProof {
    fn from(proof: Vec<[u8; 32]>) -> Self {
        Self(proof)
    }
}

impl From<&[[u8; 32]]> for ClaimProof {
    fn from(proof: &[[u8; 32]]) -> Self {
        Self(proof.to_vec())
    }
}
