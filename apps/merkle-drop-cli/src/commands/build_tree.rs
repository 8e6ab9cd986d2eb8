use merkle_drop_csvs::{
    format_hash, read_eligibility_csv, write_proofs_json, EligibilityRow, ProofsFile,
};
use merkle_drop_merkle::{build_claim_tree, ClaimTree};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::CliResult;

/// Build the tree for an eligibility CSV and write the root and every proof
pub fn execute(input: PathBuf, root_output: PathBuf, proofs_output: PathBuf) -> CliResult<()> {
    println!("📋 Reading eligibility list: {}", input.display());
    let rows = read_eligibility_csv(&input)?;

    let (tree, proofs) = build_proofs(&rows)?;
    write_root(&root_output, &tree.root())?;
    write_proofs_json(&proofs_output, &proofs)?;

    println!("✅ Merkle root: {}", format_hash(&tree.root()));
    println!("   Root written to: {}", root_output.display());
    println!("   Proofs written to: {}", proofs_output.display());
    println!("📊 {} claimants, tree depth {}", tree.len(), tree.depth());

    Ok(())
}

/// Build the tree and collect every row's proof.
pub(crate) fn build_proofs(rows: &[EligibilityRow]) -> CliResult<(ClaimTree, ProofsFile)> {
    let entries: Vec<_> = rows.iter().map(|row| (row.address, row.amount)).collect();
    let tree = build_claim_tree(&entries)?;
    info!(
        claimants = tree.len(),
        root = %format_hash(&tree.root()),
        "claim tree built"
    );

    let mut proofs = ProofsFile::new(tree.root());
    for row in rows {
        let proof = tree.proof_for_claimant(&row.address)?;
        debug!(address = %row.address, proof_len = proof.len(), "proof generated");
        proofs.insert(row.address, row.amount, proof);
    }

    Ok((tree, proofs))
}

/// Root as a single `0x…` line.
pub(crate) fn write_root(path: &Path, root: &[u8; 32]) -> CliResult<()> {
    fs::write(path, format!("{}\n", format_hash(root)))?;
    Ok(())
}
