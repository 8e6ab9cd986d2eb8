use crate::collaborators::{EligibilityOracle, HolderOracle, OpenEligibility, TokenLedger};
use crate::error::AirdropResult;
use crate::events::AirdropEvent;
use crate::instructions::{handle_claim_tokens, handle_deposit_into_contract};
use crate::state::{ClaimReceipt, VerifierConfig, VerifierState};
use crate::Address;

/// Plain allowlist airdrop: Merkle membership is the only gate.
pub type MerkleAirdrop<L> = ClaimVerifier<L, OpenEligibility>;

/// Airdrop gated on holding at least one unit of an asset (e.g. an NFT).
pub type NftGatedAirdrop<L, A> = ClaimVerifier<L, HolderOracle<A>>;

/// On-chain side of the airdrop: holds the published root and the claimed
/// set, authenticates claims, and pays out through the token ledger.
///
/// Every mutating call takes `&mut self`, so calls against one verifier are
/// applied one at a time in the order they are made.
pub struct ClaimVerifier<L, E = OpenEligibility> {
    state: VerifierState,
    ledger: L,
    oracle: E,
    events: Vec<AirdropEvent>,
}

impl<L: TokenLedger> ClaimVerifier<L, OpenEligibility> {
    pub fn open(config: VerifierConfig, ledger: L) -> Self {
        Self::new(config, ledger, OpenEligibility)
    }
}

impl<L: TokenLedger, E: EligibilityOracle> ClaimVerifier<L, E> {
    pub fn new(config: VerifierConfig, ledger: L, oracle: E) -> Self {
        Self::from_state(VerifierState::new(config), ledger, oracle)
    }

    /// Resume from a persisted state snapshot.
    pub fn from_state(state: VerifierState, ledger: L, oracle: E) -> Self {
        Self {
            state,
            ledger,
            oracle,
            events: Vec::new(),
        }
    }

    /// Claim `amount` for `caller`, who must be the address in the leaf.
    pub fn claim(
        &mut self,
        caller: &Address,
        amount: u128,
        proof: &[[u8; 32]],
    ) -> AirdropResult<ClaimReceipt> {
        handle_claim_tokens(
            &mut self.state,
            &mut self.ledger,
            &self.oracle,
            &mut self.events,
            *caller,
            amount,
            proof,
        )
    }

    /// Top up the pool. Restricted to the configured funder.
    pub fn deposit_into_contract(&mut self, caller: &Address, amount: u128) -> AirdropResult<()> {
        handle_deposit_into_contract(&self.state, &mut self.ledger, &mut self.events, *caller, amount)
    }

    pub fn merkle_root(&self) -> &[u8; 32] {
        self.state.merkle_root()
    }

    pub fn funder(&self) -> &Address {
        self.state.funder()
    }

    pub fn pool(&self) -> &Address {
        self.state.pool()
    }

    pub fn pool_balance(&self) -> u128 {
        self.ledger.balance_of(self.state.pool())
    }

    pub fn has_claimed(&self, claimant: &Address) -> bool {
        self.state.has_claimed(claimant)
    }

    pub fn claim_receipt(&self, claimant: &Address) -> Option<&ClaimReceipt> {
        self.state.claim_receipt(claimant)
    }

    pub fn claimed_count(&self) -> usize {
        self.state.claimed_count()
    }

    pub fn state(&self) -> &VerifierState {
        &self.state
    }

    pub fn events(&self) -> &[AirdropEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<AirdropEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn oracle(&self) -> &E {
        &self.oracle
    }

    pub fn oracle_mut(&mut self) -> &mut E {
        &mut self.oracle
    }

    pub fn into_parts(self) -> (VerifierState, L, E) {
        (self.state, self.ledger, self.oracle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AirdropError, LedgerError};
    use crate::proofs::hash_sorted_pair;
    use crate::ClaimLeaf;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MapLedger {
        balances: HashMap<Address, u128>,
        fail_transfers: bool,
    }

    impl TokenLedger for MapLedger {
        fn balance_of(&self, owner: &Address) -> u128 {
            self.balances.get(owner).copied().unwrap_or(0)
        }

        fn transfer(&mut self, from: &Address, to: &Address, amount: u128) -> Result<(), LedgerError> {
            if self.fail_transfers {
                return Err(LedgerError::Rejected("paused".to_string()));
            }
            let available = self.balance_of(from);
            if available < amount {
                return Err(LedgerError::InsufficientBalance {
                    required: amount,
                    available,
                });
            }
            *self.balances.entry(*from).or_default() -= amount;
            *self.balances.entry(*to).or_default() += amount;
            Ok(())
        }

        fn transfer_from(
            &mut self,
            owner: &Address,
            to: &Address,
            amount: u128,
        ) -> Result<(), LedgerError> {
            self.transfer(owner, to, amount)
        }
    }

    const FUNDER: Address = Address([0xf0; 20]);
    const POOL: Address = Address([0xee; 20]);
    const ALICE: Address = Address([0x0a; 20]);
    const BOB: Address = Address([0x0b; 20]);

    fn two_leaf_airdrop() -> MerkleAirdrop<MapLedger> {
        let root = hash_sorted_pair(
            &ClaimLeaf::new(ALICE, 100).to_hash(),
            &ClaimLeaf::new(BOB, 200).to_hash(),
        );
        let mut ledger = MapLedger::default();
        ledger.balances.insert(POOL, 1_000);
        ledger.balances.insert(FUNDER, 500);
        ClaimVerifier::open(
            VerifierConfig {
                merkle_root: root,
                funder: FUNDER,
                pool: POOL,
            },
            ledger,
        )
    }

    #[test]
    fn test_claim_pays_out_and_emits() {
        let mut airdrop = two_leaf_airdrop();
        let proof = [ClaimLeaf::new(BOB, 200).to_hash()];

        let receipt = airdrop.claim(&ALICE, 100, &proof).unwrap();

        assert_eq!(receipt.claimant, ALICE);
        assert_eq!(receipt.amount, 100);
        assert!(airdrop.has_claimed(&ALICE));
        assert_eq!(airdrop.ledger().balance_of(&ALICE), 100);
        assert_eq!(airdrop.pool_balance(), 900);
        assert_eq!(
            airdrop.events(),
            &[AirdropEvent::UserClaimedTokens {
                claimant: ALICE,
                amount: 100
            }]
        );
    }

    #[test]
    fn test_claim_replay_rejected() {
        let mut airdrop = two_leaf_airdrop();
        let proof = [ClaimLeaf::new(BOB, 200).to_hash()];

        airdrop.claim(&ALICE, 100, &proof).unwrap();
        assert_eq!(
            airdrop.claim(&ALICE, 100, &proof),
            Err(AirdropError::AlreadyClaimed)
        );
        assert_eq!(airdrop.pool_balance(), 900);
    }

    #[test]
    fn test_claim_wrong_amount_rejected() {
        let mut airdrop = two_leaf_airdrop();
        let proof = [ClaimLeaf::new(BOB, 200).to_hash()];

        assert_eq!(
            airdrop.claim(&ALICE, 101, &proof),
            Err(AirdropError::InvalidProof)
        );
        assert!(!airdrop.has_claimed(&ALICE));
    }

    #[test]
    fn test_claim_zero_amount_rejected() {
        let mut airdrop = two_leaf_airdrop();
        assert_eq!(airdrop.claim(&ALICE, 0, &[]), Err(AirdropError::InvalidAmount));
    }

    #[test]
    fn test_replay_reported_before_zero_amount() {
        let mut airdrop = two_leaf_airdrop();
        let proof = [ClaimLeaf::new(BOB, 200).to_hash()];
        airdrop.claim(&ALICE, 100, &proof).unwrap();

        assert_eq!(
            airdrop.claim(&ALICE, 0, &proof),
            Err(AirdropError::AlreadyClaimed)
        );
    }

    #[test]
    fn test_claim_oversized_proof_rejected() {
        let mut airdrop = two_leaf_airdrop();
        let proof = vec![[0u8; 32]; crate::constants::MAX_PROOF_LEN + 1];
        assert_eq!(
            airdrop.claim(&ALICE, 100, &proof),
            Err(AirdropError::InvalidProof)
        );
    }

    #[test]
    fn test_claim_transfer_failure_rolls_back() {
        let mut airdrop = two_leaf_airdrop();
        airdrop.ledger_mut().fail_transfers = true;
        let proof = [ClaimLeaf::new(BOB, 200).to_hash()];

        let result = airdrop.claim(&ALICE, 100, &proof);

        assert!(matches!(result, Err(AirdropError::TransferFailed(_))));
        assert!(!airdrop.has_claimed(&ALICE));
        assert!(airdrop.events().is_empty());

        airdrop.ledger_mut().fail_transfers = false;
        assert_eq!(airdrop.claim(&ALICE, 100, &proof).unwrap().sequence, 0);
    }

    #[test]
    fn test_claim_gated_by_oracle() {
        let root = ClaimLeaf::new(ALICE, 100).to_hash();
        let mut ledger = MapLedger::default();
        ledger.balances.insert(POOL, 1_000);
        let mut airdrop = ClaimVerifier::new(
            VerifierConfig {
                merkle_root: root,
                funder: FUNDER,
                pool: POOL,
            },
            ledger,
            |_: &Address| false,
        );

        assert_eq!(airdrop.claim(&ALICE, 100, &[]), Err(AirdropError::NotEligible));
        assert!(!airdrop.has_claimed(&ALICE));
    }

    #[test]
    fn test_deposit_restricted_to_funder() {
        let mut airdrop = two_leaf_airdrop();

        assert_eq!(
            airdrop.deposit_into_contract(&ALICE, 10),
            Err(AirdropError::Unauthorized)
        );
        assert_eq!(
            airdrop.deposit_into_contract(&FUNDER, 0),
            Err(AirdropError::InvalidAmount)
        );

        airdrop.deposit_into_contract(&FUNDER, 500).unwrap();
        assert_eq!(airdrop.pool_balance(), 1_500);
        assert_eq!(
            airdrop.drain_events(),
            vec![AirdropEvent::DepositIntoContractSuccessful {
                funder: FUNDER,
                amount: 500
            }]
        );
        assert!(airdrop.events().is_empty());
    }

    #[test]
    fn test_from_state_keeps_claimed_set() {
        let mut airdrop = two_leaf_airdrop();
        let proof = [ClaimLeaf::new(BOB, 200).to_hash()];
        airdrop.claim(&ALICE, 100, &proof).unwrap();

        let (state, ledger, oracle) = airdrop.into_parts();
        let mut resumed = ClaimVerifier::from_state(state, ledger, oracle);

        assert_eq!(
            resumed.claim(&ALICE, 100, &proof),
            Err(AirdropError::AlreadyClaimed)
        );
    }
}
