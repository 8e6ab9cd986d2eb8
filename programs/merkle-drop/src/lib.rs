pub mod address;
pub mod claim_leaf;
pub mod collaborators;
pub mod constants;
pub mod error;
pub mod events;
mod instructions;
pub mod proofs;
pub mod state;
pub mod verifier;

pub use address::{Address, AddressParseError};
pub use claim_leaf::{hash_claim_leaf, ClaimLeaf};
pub use collaborators::{EligibilityOracle, HolderOracle, OpenEligibility, TokenLedger};
pub use constants::MAX_PROOF_LEN;
pub use error::{AirdropError, AirdropResult, LedgerError};
pub use events::AirdropEvent;
pub use proofs::{
    fold_proof, hash_sorted_pair, keccak256, verify_merkle_proof, ClaimProof,
};
pub use state::{ClaimReceipt, VerifierConfig, VerifierState};
pub use verifier::{ClaimVerifier, MerkleAirdrop, NftGatedAirdrop};
