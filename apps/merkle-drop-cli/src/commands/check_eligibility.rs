use merkle_drop::{verify_merkle_proof, Address, ClaimLeaf};
use merkle_drop_csvs::{format_hash, read_proofs_json};
use std::path::PathBuf;
use std::str::FromStr;

use crate::commands::parse_hash_arg;
use crate::error::{CliError, CliResult};

/// Look up an address in proofs.json and re-verify its proof.
///
/// When `expected_root` is given, the proofs file must have been built for
/// that root. Returns whether the address is eligible.
pub fn execute(proofs: PathBuf, address: String, expected_root: Option<String>) -> CliResult<bool> {
    let claimant = Address::from_str(&address)?;
    println!("🔍 Checking eligibility for: {}", claimant);

    let proofs_file = read_proofs_json(&proofs)?;
    if let Some(expected) = expected_root {
        let expected = parse_hash_arg(&expected)?;
        if expected != proofs_file.merkle_root {
            return Err(CliError::RootMismatch {
                expected: format_hash(&expected),
                found: format_hash(&proofs_file.merkle_root),
            });
        }
    }

    let Some(entry) = proofs_file.get(&claimant) else {
        println!("❌ {} is not on the eligibility list", claimant);
        return Ok(false);
    };

    let leaf_hash = ClaimLeaf::new(claimant, entry.amount).to_hash();
    if !verify_merkle_proof(&entry.proof, &proofs_file.merkle_root, &leaf_hash) {
        return Err(CliError::InvalidProof(format_hash(&proofs_file.merkle_root)));
    }

    println!("✅ Eligible for {} tokens", entry.amount);
    println!("   Root: {}", format_hash(&proofs_file.merkle_root));
    println!("   Proof ({} elements):", entry.proof.len());
    for sibling in &entry.proof {
        println!("     {}", format_hash(sibling));
    }

    Ok(true)
}
