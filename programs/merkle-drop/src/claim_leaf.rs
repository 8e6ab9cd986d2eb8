use serde::{Deserialize, Serialize};

use crate::constants::{ADDRESS_LEN, AMOUNT_WORD_LEN, LEAF_PREIMAGE_LEN};
use crate::proofs::keccak256;
use crate::Address;

/// Represents the data that is hashed to form a leaf in the Merkle tree.
/// Each leaf corresponds to one entry of the eligibility list.
///
/// ## ⚠️ CRITICAL: Leaf Encoding Stability
///
/// The preimage layout MUST NEVER CHANGE once a root has been published.
/// Any change invalidates every root and every proof handed out for it.
///
/// ### Current Layout (52 bytes):
/// ```text
/// claimant: [u8; 20]   bytes  0..20
/// amount:   uint256 BE bytes 20..52  (u128 left-padded with 16 zero bytes)
/// ```
///
/// This is `abi.encodePacked(address, uint256)`, so a root built here can be
/// checked by an EVM contract that hashes `keccak256(abi.encodePacked(msg.sender, amount))`.
/// The 52-byte leaf preimage and the 64-byte internal-node preimage have
/// different lengths, so a leaf can never be passed off as an internal node.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ClaimLeaf {
    /// The address entitled to claim.
    pub claimant: Address,
    /// The amount of tokens the claimant may claim.
    pub amount: u128,
}

impl ClaimLeaf {
    pub fn new(claimant: Address, amount: u128) -> Self {
        Self { claimant, amount }
    }

    /// Canonical fixed-width encoding of this leaf.
    pub fn to_bytes(&self) -> [u8; LEAF_PREIMAGE_LEN] {
        let mut bytes = [0u8; LEAF_PREIMAGE_LEN];
        bytes[..ADDRESS_LEN].copy_from_slice(self.claimant.as_bytes());
        let amount = self.amount.to_be_bytes();
        bytes[LEAF_PREIMAGE_LEN - amount.len()..].copy_from_slice(&amount);
        debug_assert_eq!(ADDRESS_LEN + AMOUNT_WORD_LEN, bytes.len());
        bytes
    }

    /// `keccak256(claimant || amount)`.
    pub fn to_hash(&self) -> [u8; 32] {
        keccak256(&self.to_bytes())
    }
}

/// Hashes a `ClaimLeaf` to produce a 32-byte hash suitable for Merkle tree construction.
pub fn hash_claim_leaf(leaf: &ClaimLeaf) -> [u8; 32] {
    leaf.to_hash()
}
