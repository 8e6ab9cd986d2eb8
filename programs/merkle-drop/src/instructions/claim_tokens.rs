use tracing::{debug, info, warn};

use crate::collaborators::{EligibilityOracle, TokenLedger};
use crate::constants::MAX_PROOF_LEN;
use crate::error::{AirdropError, AirdropResult};
use crate::events::AirdropEvent;
use crate::proofs::verify_merkle_proof;
use crate::state::{ClaimReceipt, VerifierState};
use crate::{Address, ClaimLeaf};

/// Claims `amount` for `claimant` against the verifier's root.
///
/// Check order: replay, amount, eligibility, proof. The claimed flag is
/// committed before the ledger is called and removed again if the transfer
/// fails, so a failed claim leaves no trace in state, ledger, or events.
pub(crate) fn handle_claim_tokens<L, E>(
    state: &mut VerifierState,
    ledger: &mut L,
    oracle: &E,
    events: &mut Vec<AirdropEvent>,
    claimant: Address,
    amount: u128,
    proof: &[[u8; 32]],
) -> AirdropResult<ClaimReceipt>
where
    L: TokenLedger + ?Sized,
    E: EligibilityOracle + ?Sized,
{
    // 1. Replay protection
    if state.has_claimed(&claimant) {
        debug!(%claimant, "claim rejected: already claimed");
        return Err(AirdropError::AlreadyClaimed);
    }

    // 1a. Basic argument validation
    if amount == 0 {
        return Err(AirdropError::InvalidAmount);
    }

    // 2. Eligibility gate, independent of tree membership
    if !oracle.owns_asset(&claimant) {
        debug!(%claimant, "claim rejected: eligibility oracle refused");
        return Err(AirdropError::NotEligible);
    }

    // 3-5. Rebuild the leaf and fold the proof to the stored root
    let leaf_hash = ClaimLeaf::new(claimant, amount).to_hash();
    if proof.len() > MAX_PROOF_LEN || !verify_merkle_proof(proof, state.merkle_root(), &leaf_hash)
    {
        debug!(%claimant, amount, proof_len = proof.len(), "claim rejected: invalid proof");
        return Err(AirdropError::InvalidProof);
    }

    // 6. Commit before handing control to the ledger
    let receipt = state
        .record_claim(claimant, amount, leaf_hash)
        .ok_or(AirdropError::AlreadyClaimed)?;

    // 7. Pay out; roll the commit back if the ledger refuses
    let pool = *state.pool();
    if let Err(err) = ledger.transfer(&pool, &claimant, amount) {
        warn!(%claimant, amount, error = %err, "payout failed, reverting claim");
        state.revert_claim(&receipt);
        return Err(AirdropError::TransferFailed(err));
    }

    // 8. Emit
    events.push(AirdropEvent::UserClaimedTokens { claimant, amount });
    info!(%claimant, amount, sequence = receipt.sequence, "claim committed");

    Ok(receipt)
}
