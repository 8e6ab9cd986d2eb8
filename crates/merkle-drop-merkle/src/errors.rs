use merkle_drop::Address;
use thiserror::Error;

pub type MerkleResult<T> = Result<T, MerkleError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MerkleError {
    #[error("Cannot build a tree from an empty eligibility list")]
    InvalidInput,
    #[error("Entry for {0} has a zero amount and could never be claimed")]
    ZeroAmount(Address),
    #[error("Claimant not found in tree")]
    ClaimantNotFound,
    #[error("Failed to build tree")]
    TreeBuildingFailed,
}
