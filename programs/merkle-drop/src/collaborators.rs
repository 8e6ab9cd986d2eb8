//! Collaborators the verifier depends on but does not own the logic of.

use crate::error::LedgerError;
use crate::Address;

/// Token ledger the airdrop pays out from.
///
/// `from` on [`TokenLedger::transfer`] is always the verifier's own pool
/// address. [`TokenLedger::transfer_from`] moves tokens the owner has
/// previously approved the pool to spend.
pub trait TokenLedger {
    fn balance_of(&self, owner: &Address) -> u128;

    fn transfer(&mut self, from: &Address, to: &Address, amount: u128) -> Result<(), LedgerError>;

    fn transfer_from(
        &mut self,
        owner: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), LedgerError>;
}

/// Eligibility predicate evaluated independently of Merkle membership.
pub trait EligibilityOracle {
    fn owns_asset(&self, owner: &Address) -> bool;
}

/// No gating: every address in the tree may claim.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenEligibility;

impl EligibilityOracle for OpenEligibility {
    fn owns_asset(&self, _owner: &Address) -> bool {
        true
    }
}

/// Gates claims on holding at least one unit of an asset tracked by `L`,
/// e.g. an NFT collection's `balanceOf`.
#[derive(Clone, Debug)]
pub struct HolderOracle<L> {
    asset: L,
}

impl<L: TokenLedger> HolderOracle<L> {
    pub fn new(asset: L) -> Self {
        Self { asset }
    }

    pub fn asset(&self) -> &L {
        &self.asset
    }

    pub fn asset_mut(&mut self) -> &mut L {
        &mut self.asset
    }
}

impl<L: TokenLedger> EligibilityOracle for HolderOracle<L> {
    fn owns_asset(&self, owner: &Address) -> bool {
        self.asset.balance_of(owner) > 0
    }
}

impl<F> EligibilityOracle for F
where
    F: Fn(&Address) -> bool,
{
    fn owns_asset(&self, owner: &Address) -> bool {
        self(owner)
    }
}
