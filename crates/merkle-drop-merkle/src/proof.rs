use merkle_drop::{fold_proof, verify_merkle_proof, ClaimLeaf};

use crate::errors::{MerkleError, MerkleResult};
use crate::ClaimTree;

/// Verify a merkle proof against a root and leaf data.
/// Off-chain counterpart of the check `ClaimVerifier::claim` performs.
pub fn verify_claim_proof(proof: &[[u8; 32]], root: &[u8; 32], leaf: &ClaimLeaf) -> bool {
    verify_merkle_proof(proof, root, &leaf.to_hash())
}

/// Generate a proof for a specific leaf by building the tree over `leaves`.
pub fn generate_proof_for_leaf(
    leaves: &[ClaimLeaf],
    target_leaf: &ClaimLeaf,
) -> MerkleResult<Vec<[u8; 32]>> {
    if !leaves.contains(target_leaf) {
        return Err(MerkleError::ClaimantNotFound);
    }

    ClaimTree::from_entries(leaves.to_vec())?.proof_for(target_leaf)
}

/// Batch verify multiple proofs against the same root
pub fn batch_verify_proofs(proofs: &[(&[[u8; 32]], &ClaimLeaf)], root: &[u8; 32]) -> Vec<bool> {
    proofs
        .iter()
        .map(|(proof, leaf)| verify_claim_proof(proof, root, leaf))
        .collect()
}

/// Extract the root implied by a proof and leaf data (useful for testing)
pub fn extract_root_from_proof(proof: &[[u8; 32]], leaf: &ClaimLeaf) -> [u8; 32] {
    fold_proof(proof, &leaf.to_hash())
}
