use merkle_drop_csvs::{format_hash, read_eligibility_csv, write_proofs_json};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::commands::build_tree::{build_proofs, write_root};
use crate::config::{AirdropConfig, AirdropSummary};
use crate::error::{CliError, CliResult};

pub const ROOT_FILE: &str = "merkle_root.txt";
pub const PROOFS_FILE: &str = "proofs.json";
pub const SUMMARY_FILE: &str = "summary.json";

/// Compile an airdrop from its YAML config into root, proofs and summary files
pub fn execute(config_path: PathBuf) -> CliResult<()> {
    println!("📋 Loading airdrop config: {}", config_path.display());
    let config = AirdropConfig::load(&config_path)?;

    let rows = read_eligibility_csv(&config.eligibility_csv)?;
    let (tree, proofs) = build_proofs(&rows)?;
    let total_amount = tree.total_amount().ok_or_else(|| {
        CliError::CommandExecution("total airdrop amount overflows u128".to_string())
    })?;

    fs::create_dir_all(&config.output_dir)?;
    write_root(&config.output_dir.join(ROOT_FILE), &tree.root())?;
    write_proofs_json(config.output_dir.join(PROOFS_FILE), &proofs)?;

    let summary = AirdropSummary {
        airdrop_name: config.airdrop_name.clone(),
        merkle_root: format_hash(&tree.root()),
        total_claimants: tree.len(),
        total_amount: total_amount.to_string(),
        tree_depth: tree.depth(),
        funder: config.funder,
        token: config.token,
        nft_collection: config.nft_collection,
    };
    fs::write(
        config.output_dir.join(SUMMARY_FILE),
        serde_json::to_string_pretty(&summary)?,
    )?;
    info!(airdrop = %config.airdrop_name, output = %config.output_dir.display(), "airdrop compiled");

    println!("✅ Compiled airdrop '{}'", config.airdrop_name);
    println!("   Merkle root: {}", summary.merkle_root);
    println!("   Claimants: {}", summary.total_claimants);
    println!("   Pool must hold: {}", summary.total_amount);
    if config.nft_gated {
        println!("   Gated on NFT collection");
    }
    println!("   Output: {}", config.output_dir.display());

    Ok(())
}
