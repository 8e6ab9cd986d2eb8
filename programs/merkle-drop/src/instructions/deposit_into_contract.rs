use tracing::{debug, info};

use crate::collaborators::TokenLedger;
use crate::error::{AirdropError, AirdropResult};
use crate::events::AirdropEvent;
use crate::state::VerifierState;
use crate::Address;

/// Pulls `amount` from the funder into the pool. The funder must have
/// approved the pool on the ledger beforehand.
pub(crate) fn handle_deposit_into_contract<L>(
    state: &VerifierState,
    ledger: &mut L,
    events: &mut Vec<AirdropEvent>,
    caller: Address,
    amount: u128,
) -> AirdropResult<()>
where
    L: TokenLedger + ?Sized,
{
    if caller != *state.funder() {
        debug!(%caller, "deposit rejected: caller is not the funder");
        return Err(AirdropError::Unauthorized);
    }
    if amount == 0 {
        return Err(AirdropError::InvalidAmount);
    }

    ledger.transfer_from(&caller, state.pool(), amount)?;

    events.push(AirdropEvent::DepositIntoContractSuccessful {
        funder: caller,
        amount,
    });
    info!(funder = %caller, amount, "deposit committed");

    Ok(())
}
