use merkle_drop::{
    keccak256, AirdropResult, ClaimReceipt, ClaimVerifier, EligibilityOracle, HolderOracle,
    OpenEligibility, TokenLedger, VerifierConfig,
};
use merkle_drop_merkle::{build_claim_tree, Address, ClaimTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::InMemoryLedger;

/// Derive a stable address from a name, so tests can refer to
/// "alice" instead of raw bytes.
pub fn deterministic_address(seed: &str) -> Address {
    let hash = keccak256(seed.as_bytes());
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash[12..]);
    Address(bytes)
}

/// `count` distinct addresses with amounts in `1..=max_amount`, reproducible from `seed`.
pub fn random_entries(seed: u64, count: usize, max_amount: u128) -> Vec<(Address, u128)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let address = deterministic_address(&format!("claimant_{seed}_{i}"));
            (address, rng.gen_range(1..=max_amount))
        })
        .collect()
}

/// The three-claimant list most scenarios start from:
/// alice 100, bob 200, carol 300.
pub fn default_entries() -> Vec<(Address, u128)> {
    vec![
        (deterministic_address("alice"), 100),
        (deterministic_address("bob"), 200),
        (deterministic_address("carol"), 300),
    ]
}

/// A built tree, a funded pool, and a verifier deployed against the tree's root.
pub struct TestFixture<E = OpenEligibility> {
    pub entries: Vec<(Address, u128)>,
    pub tree: ClaimTree,
    pub funder: Address,
    pub pool: Address,
    pub verifier: ClaimVerifier<InMemoryLedger, E>,
}

impl TestFixture<OpenEligibility> {
    /// Plain airdrop over `entries`, pool funded with the sum of all amounts.
    pub fn new(entries: Vec<(Address, u128)>) -> Self {
        Self::with_oracle(entries, OpenEligibility)
    }
}

impl Default for TestFixture<OpenEligibility> {
    fn default() -> Self {
        Self::new(default_entries())
    }
}

impl TestFixture<HolderOracle<InMemoryLedger>> {
    /// NFT-gated airdrop: each address in `holders` is minted one token of the
    /// gating collection.
    pub fn nft_gated(entries: Vec<(Address, u128)>, holders: &[Address]) -> Self {
        let mut collection = InMemoryLedger::new();
        for holder in holders {
            collection.mint(holder, 1);
        }
        Self::with_oracle(entries, HolderOracle::new(collection))
    }

    pub fn nft_collection_mut(&mut self) -> &mut InMemoryLedger {
        self.verifier.oracle_mut().asset_mut()
    }
}

impl<E: EligibilityOracle> TestFixture<E> {
    pub fn with_oracle(entries: Vec<(Address, u128)>, oracle: E) -> Self {
        let tree = build_claim_tree(&entries).expect("fixture entries must not be empty");
        let funder = deterministic_address("funder");
        let pool = deterministic_address("pool");

        let mut ledger = InMemoryLedger::new();
        ledger.mint(&pool, tree.total_amount().expect("fixture total should fit in u128"));

        let verifier = ClaimVerifier::new(
            VerifierConfig {
                merkle_root: tree.root(),
                funder,
                pool,
            },
            ledger,
            oracle,
        );

        Self {
            entries,
            tree,
            funder,
            pool,
            verifier,
        }
    }

    /// Amount listed for `claimant`, if any.
    pub fn amount_for(&self, claimant: &Address) -> Option<u128> {
        self.tree
            .entry_for_claimant(claimant)
            .ok()
            .map(|entry| entry.amount)
    }

    /// Proof the tree issues for `claimant`. Panics for unlisted addresses.
    pub fn proof_for(&self, claimant: &Address) -> Vec<[u8; 32]> {
        self.tree
            .proof_for_claimant(claimant)
            .expect("claimant should be in the tree")
    }

    /// Claim with the listed amount and the tree's proof.
    pub fn try_claim(&mut self, claimant: &Address) -> AirdropResult<ClaimReceipt> {
        let amount = self
            .amount_for(claimant)
            .expect("claimant should be in the tree");
        let proof = self.proof_for(claimant);
        self.verifier.claim(claimant, amount, &proof)
    }

    pub fn try_claim_with(
        &mut self,
        claimant: &Address,
        amount: u128,
        proof: &[[u8; 32]],
    ) -> AirdropResult<ClaimReceipt> {
        self.verifier.claim(claimant, amount, proof)
    }

    pub fn ledger_mut(&mut self) -> &mut InMemoryLedger {
        self.verifier.ledger_mut()
    }

    pub fn balance_of(&self, owner: &Address) -> u128 {
        self.verifier.ledger().balance_of(owner)
    }

    pub fn pool_balance(&self) -> u128 {
        self.verifier.pool_balance()
    }

    /// Mint `amount` to the funder and approve the pool to pull it.
    pub fn prepare_deposit(&mut self, amount: u128) {
        let (funder, pool) = (self.funder, self.pool);
        let ledger = self.verifier.ledger_mut();
        ledger.mint(&funder, amount);
        ledger.approve(&funder, &pool, amount);
    }
}
