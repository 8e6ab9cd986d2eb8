use thiserror::Error;

pub type AirdropResult<T> = Result<T, AirdropError>;

/// Failures reported by a token ledger collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient balance: need {required}, have {available}")]
    InsufficientBalance { required: u128, available: u128 },
    #[error("Insufficient allowance: need {required}, have {available}")]
    InsufficientAllowance { required: u128, available: u128 },
    #[error("Transfer rejected: {0}")]
    Rejected(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AirdropError {
    #[error("Tokens for this address have already been claimed.")]
    AlreadyClaimed,
    #[error("Claimant does not hold the asset this airdrop requires.")]
    NotEligible,
    #[error("Invalid Merkle proof provided.")]
    InvalidProof,
    #[error("Token transfer failed: {0}")]
    TransferFailed(#[from] LedgerError),
    #[error("Caller is not authorized for this action.")]
    Unauthorized,
    #[error("Amount must be greater than zero.")]
    InvalidAmount,
}
