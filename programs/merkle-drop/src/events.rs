use serde::{Deserialize, Serialize};

use crate::Address;

/// Observable events emitted by the verifier after a state change commits.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AirdropEvent {
    UserClaimedTokens { claimant: Address, amount: u128 },
    DepositIntoContractSuccessful { funder: Address, amount: u128 },
}

impl AirdropEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AirdropEvent::UserClaimedTokens { .. } => "UserClaimedTokens",
            AirdropEvent::DepositIntoContractSuccessful { .. } => "DepositIntoContractSuccessful",
        }
    }
}
