use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::Address;

/// Construction-time configuration of a verifier.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifierConfig {
    /// Root of the eligibility tree. Fixed for the life of the verifier.
    pub merkle_root: [u8; 32],
    /// The only address allowed to deposit into the pool.
    pub funder: Address,
    /// Ledger account the verifier pays out from.
    pub pool: Address,
}

/// Record of a committed claim. Its presence in [`VerifierState`] is what
/// marks an address as claimed.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimReceipt {
    /// The claimant who received the tokens.
    pub claimant: Address,

    /// Amount paid out.
    pub amount: u128,

    /// Leaf hash the proof was verified for.
    pub leaf_hash: [u8; 32],

    /// Position of this claim in the verifier's claim log, starting at 0.
    pub sequence: u64,
}

/// Persisted verifier state: root, funder, pool, and the claimed set.
///
/// The pool balance lives in the ledger, not here.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VerifierState {
    merkle_root: [u8; 32],
    funder: Address,
    pool: Address,
    claimed: BTreeMap<Address, ClaimReceipt>,
    next_sequence: u64,
}

impl VerifierState {
    pub fn new(config: VerifierConfig) -> Self {
        Self {
            merkle_root: config.merkle_root,
            funder: config.funder,
            pool: config.pool,
            claimed: BTreeMap::new(),
            next_sequence: 0,
        }
    }

    pub fn merkle_root(&self) -> &[u8; 32] {
        &self.merkle_root
    }

    pub fn funder(&self) -> &Address {
        &self.funder
    }

    pub fn pool(&self) -> &Address {
        &self.pool
    }

    pub fn config(&self) -> VerifierConfig {
        VerifierConfig {
            merkle_root: self.merkle_root,
            funder: self.funder,
            pool: self.pool,
        }
    }

    pub fn has_claimed(&self, claimant: &Address) -> bool {
        self.claimed.contains_key(claimant)
    }

    pub fn claim_receipt(&self, claimant: &Address) -> Option<&ClaimReceipt> {
        self.claimed.get(claimant)
    }

    pub fn claimed_count(&self) -> usize {
        self.claimed.len()
    }

    pub fn receipts(&self) -> impl Iterator<Item = &ClaimReceipt> {
        self.claimed.values()
    }

    /// Marks `claimant` as claimed. Returns `None` if it already was.
    pub(crate) fn record_claim(
        &mut self,
        claimant: Address,
        amount: u128,
        leaf_hash: [u8; 32],
    ) -> Option<ClaimReceipt> {
        if self.claimed.contains_key(&claimant) {
            return None;
        }
        let receipt = ClaimReceipt {
            claimant,
            amount,
            leaf_hash,
            sequence: self.next_sequence,
        };
        self.claimed.insert(claimant, receipt);
        self.next_sequence += 1;
        Some(receipt)
    }

    /// Undoes the `record_claim` that produced `receipt`. Only valid as the
    /// rollback of the claim currently in flight.
    pub(crate) fn revert_claim(&mut self, receipt: &ClaimReceipt) {
        if self.claimed.remove(&receipt.claimant).is_some() {
            self.next_sequence = receipt.sequence;
        }
    }
}
