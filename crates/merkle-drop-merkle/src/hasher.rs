use merkle_drop::{hash_sorted_pair, keccak256};
use rs_merkle::Hasher;

/// `rs_merkle` hasher matching the verifier's folding rule.
///
/// - **Leaves** are hashed before they reach the tree (see `ClaimLeaf::to_hash`),
///   so `hash` is only used for raw data.
/// - **Internal nodes**: `keccak256(min(l, r) || max(l, r))`, through the same
///   `hash_sorted_pair` the verifier folds proofs with.
/// - **Unpaired nodes** are promoted to the next level unchanged, never
///   duplicated. A proof has no element for a level where this happened.
#[derive(Clone, Debug)]
pub struct SortedKeccakHasher;

impl Hasher for SortedKeccakHasher {
    type Hash = [u8; 32];

    fn hash(data: &[u8]) -> [u8; 32] {
        keccak256(data)
    }

    fn concat_and_hash(left: &Self::Hash, right: Option<&Self::Hash>) -> Self::Hash {
        match right {
            Some(right_hash) => hash_sorted_pair(left, right_hash),
            None => *left,
        }
    }
}
