use merkle_drop::{verify_merkle_proof, Address, ClaimLeaf};
use rayon::prelude::*;
use rs_merkle::MerkleTree;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::errors::{MerkleError, MerkleResult};
use crate::SortedKeccakHasher;

/// Builds a claim tree from `(claimant, amount)` pairs.
pub fn build_claim_tree(claimant_amounts: &[(Address, u128)]) -> MerkleResult<ClaimTree> {
    let entries = claimant_amounts
        .iter()
        .map(|(claimant, amount)| ClaimLeaf::new(*claimant, *amount))
        .collect();
    ClaimTree::from_entries(entries)
}

/// Merkle tree over an eligibility list.
///
/// Leaf hashes are sorted before the tree is built and every pair is sorted
/// before hashing, so the root depends only on the multiset of entries, not
/// on the order they were supplied in. The input order is kept for lookups.
#[derive(Clone)]
pub struct ClaimTree {
    tree: MerkleTree<SortedKeccakHasher>,
    root: [u8; 32],
    /// Entries in the order they were supplied
    entries: Vec<ClaimLeaf>,
    /// Leaf hash to its position in the sorted leaf layer
    leaf_index: HashMap<[u8; 32], usize>,
    /// Claimant to its first entry in `entries`
    claimant_entry: HashMap<Address, usize>,
}

impl ClaimTree {
    /// Build a tree from an eligibility list.
    ///
    /// Zero amounts are rejected: the verifier refuses zero-value claims, so
    /// such a leaf could never be redeemed.
    ///
    /// Duplicate claimants are not rejected here; callers are expected to
    /// supply unique addresses (the CSV loader enforces this). With duplicates,
    /// claimant lookups resolve to the first entry.
    pub fn from_entries(entries: Vec<ClaimLeaf>) -> MerkleResult<Self> {
        if entries.is_empty() {
            return Err(MerkleError::InvalidInput);
        }
        if let Some(entry) = entries.iter().find(|entry| entry.amount == 0) {
            return Err(MerkleError::ZeroAmount(entry.claimant));
        }

        let mut leaf_hashes: Vec<[u8; 32]> = entries.par_iter().map(ClaimLeaf::to_hash).collect();
        leaf_hashes.par_sort_unstable();

        let mut leaf_index = HashMap::with_capacity(leaf_hashes.len());
        for (index, hash) in leaf_hashes.iter().enumerate() {
            leaf_index.entry(*hash).or_insert(index);
        }

        let mut claimant_entry = HashMap::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if claimant_entry.contains_key(&entry.claimant) {
                warn!(claimant = %entry.claimant, "duplicate claimant in eligibility list");
                continue;
            }
            claimant_entry.insert(entry.claimant, index);
        }

        let tree = MerkleTree::<SortedKeccakHasher>::from_leaves(&leaf_hashes);
        let root = tree.root().ok_or(MerkleError::TreeBuildingFailed)?;
        debug!(leaves = leaf_hashes.len(), depth = tree.depth(), "claim tree built");

        Ok(Self {
            tree,
            root,
            entries,
            leaf_index,
            claimant_entry,
        })
    }

    pub fn root(&self) -> [u8; 32] {
        self.root
    }

    pub fn entries(&self) -> &[ClaimLeaf] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: an empty list is rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.tree.depth()
    }

    /// Sum of all entry amounts, or `None` on overflow. This is what the pool
    /// must hold for every claim to succeed.
    pub fn total_amount(&self) -> Option<u128> {
        self.entries
            .iter()
            .try_fold(0u128, |total, entry| total.checked_add(entry.amount))
    }

    /// Sibling hashes proving `entry` is in the tree, leaf level first.
    pub fn proof_for(&self, entry: &ClaimLeaf) -> MerkleResult<Vec<[u8; 32]>> {
        let index = self
            .leaf_index
            .get(&entry.to_hash())
            .ok_or(MerkleError::ClaimantNotFound)?;

        Ok(self.tree.proof(&[*index]).proof_hashes().to_vec())
    }

    /// Get the leaf data for a specific claimant
    pub fn entry_for_claimant(&self, claimant: &Address) -> MerkleResult<&ClaimLeaf> {
        let index = self
            .claimant_entry
            .get(claimant)
            .ok_or(MerkleError::ClaimantNotFound)?;

        self.entries
            .get(*index)
            .ok_or(MerkleError::ClaimantNotFound)
    }

    /// Generate a merkle proof for a specific claimant
    pub fn proof_for_claimant(&self, claimant: &Address) -> MerkleResult<Vec<[u8; 32]>> {
        let entry = self.entry_for_claimant(claimant)?;
        self.proof_for(entry)
    }

    /// Generate merkle proofs for multiple claimants
    pub fn proofs_for_claimants(
        &self,
        claimants: &[Address],
    ) -> MerkleResult<HashMap<Address, Vec<[u8; 32]>>> {
        let mut proofs = HashMap::with_capacity(claimants.len());

        for claimant in claimants {
            let proof = self.proof_for_claimant(claimant)?;
            proofs.insert(*claimant, proof);
        }

        Ok(proofs)
    }

    /// Check `proof` for `entry` against this tree's root.
    pub fn verify_proof(&self, entry: &ClaimLeaf, proof: &[[u8; 32]]) -> bool {
        verify_merkle_proof(proof, &self.root, &entry.to_hash())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use merkle_drop::hash_sorted_pair;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    fn address(seed: u8) -> Address {
        let mut bytes = [0u8; 20];
        bytes[0] = seed;
        bytes[19] = seed.wrapping_mul(31);
        Address(bytes)
    }

    fn entries(count: usize) -> Vec<ClaimLeaf> {
        (0..count)
            .map(|i| {
                let mut bytes = [0u8; 20];
                bytes[..8].copy_from_slice(&(i as u64 + 1).to_be_bytes());
                ClaimLeaf::new(Address(bytes), (i as u128 + 1) * 100)
            })
            .collect()
    }

    /// Level-by-level reference build: pair, sort, hash, promote the odd node.
    fn reference_root(entries: &[ClaimLeaf]) -> [u8; 32] {
        let mut level: Vec<[u8; 32]> = entries.iter().map(ClaimLeaf::to_hash).collect();
        level.sort();
        while level.len() > 1 {
            level = level
                .chunks(2)
                .map(|pair| match pair {
                    [left, right] => hash_sorted_pair(left, right),
                    [lone] => *lone,
                    _ => unreachable!(),
                })
                .collect();
        }
        level[0]
    }

    #[test]
    fn test_empty_list_rejected() {
        assert_eq!(
            ClaimTree::from_entries(vec![]).err(),
            Some(MerkleError::InvalidInput)
        );
    }

    #[test]
    fn test_zero_amount_entry_rejected() {
        let result = build_claim_tree(&[(address(1), 0), (address(2), 5)]);
        assert_eq!(result.err(), Some(MerkleError::ZeroAmount(address(1))));
    }

    #[test]
    fn test_single_leaf_tree() {
        let leaf = ClaimLeaf::new(address(1), 1000);
        let tree = ClaimTree::from_entries(vec![leaf]).unwrap();

        let proof = tree.proof_for(&leaf).unwrap();
        assert!(proof.is_empty(), "Single leaf proof should be empty");
        assert_eq!(tree.root(), leaf.to_hash(), "Single leaf root should equal leaf hash");
        assert!(tree.verify_proof(&leaf, &proof));
    }

    #[test]
    fn test_three_entry_scenario() {
        let (a, b, c) = (address(0xa), address(0xb), address(0xc));
        let tree = build_claim_tree(&[(a, 100), (b, 200), (c, 300)]).unwrap();

        let mut proof_lengths: Vec<usize> = [(a, 100), (b, 200), (c, 300)]
            .iter()
            .map(|(claimant, amount)| {
                let leaf = ClaimLeaf::new(*claimant, *amount);
                let proof = tree.proof_for(&leaf).unwrap();
                assert!(tree.verify_proof(&leaf, &proof));
                proof.len()
            })
            .collect();
        proof_lengths.sort();

        // Two leaves pair up and need two siblings; the promoted leaf needs one.
        assert_eq!(proof_lengths, vec![1, 2, 2]);

        let b_proof = tree.proof_for_claimant(&b).unwrap();
        assert!(!tree.verify_proof(&ClaimLeaf::new(b, 201), &b_proof));
    }

    #[test]
    fn test_matches_reference_build() {
        for size in 1..=33 {
            let leaves = entries(size);
            let tree = ClaimTree::from_entries(leaves.clone()).unwrap();
            assert_eq!(
                tree.root(),
                reference_root(&leaves),
                "rs_merkle root diverged from reference build for {} leaves",
                size
            );
        }
    }

    #[test]
    fn test_every_proof_verifies_small_trees() {
        for size in 1..=16 {
            let leaves = entries(size);
            let tree = ClaimTree::from_entries(leaves.clone()).unwrap();

            for leaf in &leaves {
                let proof = tree.proof_for(leaf).unwrap();
                assert!(
                    tree.verify_proof(leaf, &proof),
                    "Proof should verify for tree with {} leaves",
                    size
                );
            }
        }
    }

    #[test]
    fn test_irregular_sizes_first_and_last() {
        for &size in &[5usize, 7, 15, 31, 63, 100] {
            let leaves = entries(size);
            let tree = ClaimTree::from_entries(leaves.clone()).unwrap();

            for leaf in [&leaves[0], &leaves[size - 1]] {
                let proof = tree.proof_for_claimant(&leaf.claimant).unwrap();
                assert!(tree.verify_proof(leaf, &proof));
            }
        }
    }

    #[test]
    fn test_root_independent_of_input_order() {
        let mut rng = StdRng::seed_from_u64(7);
        for size in [2usize, 3, 4, 9, 50] {
            let leaves = entries(size);
            let expected = ClaimTree::from_entries(leaves.clone()).unwrap().root();

            for _ in 0..10 {
                let mut shuffled = leaves.clone();
                shuffled.shuffle(&mut rng);
                assert_eq!(ClaimTree::from_entries(shuffled).unwrap().root(), expected);
            }
        }
    }

    #[test]
    fn test_wrong_leaf_rejected() {
        let leaves = entries(8);
        let tree = ClaimTree::from_entries(leaves.clone()).unwrap();
        let proof = tree.proof_for(&leaves[2]).unwrap();

        assert!(!tree.verify_proof(&leaves[3], &proof));
        let off_by_one = ClaimLeaf::new(leaves[2].claimant, leaves[2].amount + 1);
        assert!(!tree.verify_proof(&off_by_one, &proof));
    }

    #[test]
    fn test_corrupted_proof_rejected() {
        let leaves = entries(20);
        let tree = ClaimTree::from_entries(leaves.clone()).unwrap();
        let mut proof = tree.proof_for(&leaves[11]).unwrap();

        let mut rng = StdRng::seed_from_u64(11);
        let level = rng.gen_range(0..proof.len());
        let byte = rng.gen_range(0..32);
        proof[level][byte] ^= 0x01;

        assert!(!tree.verify_proof(&leaves[11], &proof));
    }

    #[test]
    fn test_absent_entry_has_no_proof() {
        let tree = ClaimTree::from_entries(entries(4)).unwrap();
        let stranger = ClaimLeaf::new(address(0xff), 100);

        assert_eq!(tree.proof_for(&stranger), Err(MerkleError::ClaimantNotFound));
        assert_eq!(
            tree.proof_for_claimant(&stranger.claimant),
            Err(MerkleError::ClaimantNotFound)
        );
    }

    #[test]
    fn test_cross_tree_isolation() {
        let first = ClaimTree::from_entries(entries(6)).unwrap();
        let second = ClaimTree::from_entries(entries(7)).unwrap();
        let leaf = entries(6)[0];

        let proof = first.proof_for(&leaf).unwrap();
        assert!(first.verify_proof(&leaf, &proof));
        assert!(!second.verify_proof(&leaf, &proof));
    }

    #[test]
    fn test_duplicate_claimant_not_rejected() {
        let claimant = address(3);
        let tree = ClaimTree::from_entries(vec![
            ClaimLeaf::new(claimant, 100),
            ClaimLeaf::new(claimant, 200),
        ])
        .unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.entry_for_claimant(&claimant).unwrap().amount, 100);
        let second = ClaimLeaf::new(claimant, 200);
        assert!(tree.verify_proof(&second, &tree.proof_for(&second).unwrap()));
    }

    #[test]
    fn test_proofs_for_claimants() {
        let leaves = entries(5);
        let tree = ClaimTree::from_entries(leaves.clone()).unwrap();
        let claimants: Vec<Address> = leaves.iter().map(|leaf| leaf.claimant).collect();

        let proofs = tree.proofs_for_claimants(&claimants).unwrap();
        assert_eq!(proofs.len(), 5);
        for leaf in &leaves {
            assert!(tree.verify_proof(leaf, &proofs[&leaf.claimant]));
        }
    }

    #[test]
    fn test_total_amount() {
        let tree = ClaimTree::from_entries(entries(4)).unwrap();
        assert_eq!(tree.total_amount(), Some(100 + 200 + 300 + 400));

        let overflow = ClaimTree::from_entries(vec![
            ClaimLeaf::new(address(1), u128::MAX),
            ClaimLeaf::new(address(2), 1),
        ])
        .unwrap();
        assert_eq!(overflow.total_amount(), None);
    }
}
