use std::collections::HashMap;

use merkle_drop::{AirdropEvent, EligibilityOracle, VerifierState};
use merkle_drop_merkle::Address;

use crate::TestFixture;

/// Everything a claim or deposit can change, captured for before/after
/// comparisons:
/// - verifier state (root, claimed set, sequence counter)
/// - pool balance
/// - emitted events
/// - balances of the addresses a test cares about
#[derive(Clone, Debug, PartialEq)]
pub struct AirdropSnapshot {
    pub state: VerifierState,
    pub pool_balance: u128,
    pub events: Vec<AirdropEvent>,
    pub tracked_balances: HashMap<Address, u128>,
}

impl AirdropSnapshot {
    pub fn capture<E: EligibilityOracle>(test: &TestFixture<E>) -> Self {
        Self {
            state: test.verifier.state().clone(),
            pool_balance: test.pool_balance(),
            events: test.verifier.events().to_vec(),
            tracked_balances: HashMap::new(),
        }
    }

    pub fn capture_with_balances<E: EligibilityOracle>(
        test: &TestFixture<E>,
        addresses: &[Address],
    ) -> Self {
        let mut snapshot = Self::capture(test);
        for address in addresses {
            snapshot
                .tracked_balances
                .insert(*address, test.balance_of(address));
        }
        snapshot
    }

    pub fn claimed_count(&self) -> usize {
        self.state.claimed_count()
    }
}
