use merkle_drop::Address;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

/// Airdrop configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AirdropConfig {
    /// Human-readable airdrop name (for organization)
    pub airdrop_name: String,

    /// Path to the eligibility CSV, relative to the config file
    pub eligibility_csv: PathBuf,

    /// Where compiled artifacts are written, relative to the config file
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Address allowed to deposit into the pool
    pub funder: Option<Address>,

    /// Token contract being distributed
    pub token: Option<Address>,

    /// Claims additionally require holding an NFT from `nft_collection`
    #[serde(default)]
    pub nft_gated: bool,

    pub nft_collection: Option<Address>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}

impl AirdropConfig {
    /// Load and validate a YAML config. Relative paths are resolved against
    /// the directory containing the config file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let contents = fs::read_to_string(path)?;
        let mut config: AirdropConfig = serde_yaml::from_str(&contents)?;
        config.validate()?;

        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.eligibility_csv = base.join(&config.eligibility_csv);
        config.output_dir = base.join(&config.output_dir);

        Ok(config)
    }

    pub fn validate(&self) -> CliResult<()> {
        if self.airdrop_name.trim().is_empty() {
            return Err(CliError::InvalidConfig(
                "airdrop_name must not be empty".to_string(),
            ));
        }
        if self.nft_gated && self.nft_collection.is_none() {
            return Err(CliError::InvalidConfig(
                "nft_gated requires nft_collection".to_string(),
            ));
        }
        if !self.nft_gated && self.nft_collection.is_some() {
            return Err(CliError::InvalidConfig(
                "nft_collection is set but nft_gated is false".to_string(),
            ));
        }
        Ok(())
    }
}

/// Summary written next to proofs.json by `compile`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AirdropSummary {
    pub airdrop_name: String,
    pub merkle_root: String,
    pub total_claimants: usize,
    /// Decimal string; the pool must hold at least this much
    pub total_amount: String,
    pub tree_depth: usize,
    pub funder: Option<Address>,
    pub token: Option<Address>,
    pub nft_collection: Option<Address>,
}
