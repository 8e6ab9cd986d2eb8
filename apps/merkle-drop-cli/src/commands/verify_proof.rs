use merkle_drop::{fold_proof, Address, ClaimLeaf, MAX_PROOF_LEN};
use merkle_drop_csvs::format_hash;
use std::str::FromStr;
use tracing::debug;

use crate::commands::parse_hash_arg;
use crate::error::{CliError, CliResult};

/// Fold a proof for `(address, amount)` and compare it with `root`, the same
/// check the verifier runs on a claim.
pub fn execute(root: String, address: String, amount: u128, proof: Vec<String>) -> CliResult<()> {
    let root = parse_hash_arg(&root)?;
    let claimant = Address::from_str(&address)?;
    let proof = proof
        .iter()
        .map(|sibling| parse_hash_arg(sibling))
        .collect::<CliResult<Vec<_>>>()?;

    if proof.len() > MAX_PROOF_LEN {
        return Err(CliError::InvalidProof(format!(
            "{} (proof has {} elements, limit is {})",
            format_hash(&root),
            proof.len(),
            MAX_PROOF_LEN
        )));
    }

    let leaf_hash = ClaimLeaf::new(claimant, amount).to_hash();
    let computed = fold_proof(&proof, &leaf_hash);
    debug!(leaf = %format_hash(&leaf_hash), computed = %format_hash(&computed), "proof folded");

    if computed != root {
        println!("❌ Proof is invalid");
        println!("   Computed root: {}", format_hash(&computed));
        return Err(CliError::InvalidProof(format_hash(&root)));
    }

    println!("✅ Proof is valid for {} claiming {}", claimant, amount);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use merkle_drop::hash_sorted_pair;

    #[test]
    fn test_two_leaf_proof() {
        let alice = Address([0x0a; 20]);
        let bob = Address([0x0b; 20]);
        let alice_leaf = ClaimLeaf::new(alice, 100).to_hash();
        let bob_leaf = ClaimLeaf::new(bob, 200).to_hash();
        let root = hash_sorted_pair(&alice_leaf, &bob_leaf);

        execute(
            format_hash(&root),
            alice.to_string(),
            100,
            vec![format_hash(&bob_leaf)],
        )
        .unwrap();

        let wrong_amount = execute(
            format_hash(&root),
            alice.to_string(),
            101,
            vec![format_hash(&bob_leaf)],
        );
        assert!(matches!(wrong_amount, Err(CliError::InvalidProof(_))));
    }

    #[test]
    fn test_bad_hex_rejected() {
        let result = execute(
            "0x1234".to_string(),
            Address([1; 20]).to_string(),
            1,
            vec![],
        );
        assert!(matches!(result, Err(CliError::InvalidHex(_))));
    }
}
