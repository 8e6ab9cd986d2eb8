pub mod claim_tree;
pub mod errors;
pub mod hasher;
pub mod proof;

pub use claim_tree::{build_claim_tree, ClaimTree};
pub use errors::{MerkleError, MerkleResult};
pub use hasher::SortedKeccakHasher;
pub use proof::{
    batch_verify_proofs, extract_root_from_proof, generate_proof_for_leaf, verify_claim_proof,
};

// Re-export leaf types from the airdrop program
pub use merkle_drop::{hash_claim_leaf, Address, ClaimLeaf};
