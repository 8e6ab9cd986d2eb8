use std::collections::HashMap;

use merkle_drop::{Address, LedgerError, TokenLedger};

/// Balance-and-allowance ledger standing in for an ERC-20 token, or for an
/// NFT collection when used behind a `HolderOracle`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    balances: HashMap<Address, u128>,
    /// (owner, spender) -> remaining allowance
    allowances: HashMap<(Address, Address), u128>,
    paused: bool,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mint(&mut self, to: &Address, amount: u128) {
        *self.balances.entry(*to).or_default() += amount;
    }

    pub fn burn_all(&mut self, owner: &Address) {
        self.balances.remove(owner);
    }

    pub fn approve(&mut self, owner: &Address, spender: &Address, amount: u128) {
        self.allowances.insert((*owner, *spender), amount);
    }

    pub fn allowance(&self, owner: &Address, spender: &Address) -> u128 {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or(0)
    }

    /// While paused every transfer is rejected, like a paused token contract.
    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn total_supply(&self) -> u128 {
        self.balances.values().sum()
    }

    fn debit(&mut self, from: &Address, amount: u128) -> Result<(), LedgerError> {
        let available = self.balance_of(from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                required: amount,
                available,
            });
        }
        self.balances.insert(*from, available - amount);
        Ok(())
    }
}

impl TokenLedger for InMemoryLedger {
    fn balance_of(&self, owner: &Address) -> u128 {
        self.balances.get(owner).copied().unwrap_or(0)
    }

    fn transfer(&mut self, from: &Address, to: &Address, amount: u128) -> Result<(), LedgerError> {
        if self.paused {
            return Err(LedgerError::Rejected("ledger paused".to_string()));
        }
        self.debit(from, amount)?;
        self.mint(to, amount);
        Ok(())
    }

    /// `to` is the spender the owner approved.
    fn transfer_from(
        &mut self,
        owner: &Address,
        to: &Address,
        amount: u128,
    ) -> Result<(), LedgerError> {
        if self.paused {
            return Err(LedgerError::Rejected("ledger paused".to_string()));
        }
        let allowed = self.allowance(owner, to);
        if allowed < amount {
            return Err(LedgerError::InsufficientAllowance {
                required: amount,
                available: allowed,
            });
        }
        self.debit(owner, amount)?;
        self.allowances.insert((*owner, *to), allowed - amount);
        self.mint(to, amount);
        Ok(())
    }
}
