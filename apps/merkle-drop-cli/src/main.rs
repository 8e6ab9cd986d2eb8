use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "merkle-drop")]
#[command(about = "Merkle airdrop tooling - build eligibility trees and check proofs")]
#[command(version)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a deterministic eligibility CSV
    GenerateFixtures {
        /// Number of addresses to generate
        #[arg(short, long)]
        count: u64,

        /// Seed for deterministic generation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output file path
        #[arg(short, long, default_value = "eligibility.csv")]
        output: PathBuf,

        /// Minimum amount per address
        #[arg(long, default_value = "1")]
        min_amount: u128,

        /// Maximum amount per address
        #[arg(long, default_value = "1000000000000000000000")]
        max_amount: u128,
    },

    /// Build the merkle tree for an eligibility CSV and write root + proofs
    BuildTree {
        /// Eligibility CSV (address,amount)
        #[arg(short, long)]
        input: PathBuf,

        /// File the hex root is written to
        #[arg(long, default_value = "merkle_root.txt")]
        root_output: PathBuf,

        /// File the per-address proofs are written to
        #[arg(long, default_value = "proofs.json")]
        proofs_output: PathBuf,
    },

    /// Compile an airdrop from a YAML config
    Compile {
        /// Airdrop configuration file
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Check whether an address is on the list and its proof verifies
    CheckEligibility {
        /// proofs.json produced by build-tree or compile
        #[arg(short, long)]
        proofs: PathBuf,

        /// Address to check
        #[arg(short, long)]
        address: String,

        /// Root the verifier was deployed with (hex)
        #[arg(short, long)]
        root: Option<String>,
    },

    /// Verify a raw proof against a root
    VerifyProof {
        /// Merkle root (hex)
        #[arg(short, long)]
        root: String,

        /// Claimant address
        #[arg(short, long)]
        address: String,

        /// Claimed amount
        #[arg(long)]
        amount: u128,

        /// Sibling hashes, leaf level first
        #[arg(short, long, num_args = 0..)]
        proof: Vec<String>,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::GenerateFixtures {
            count,
            seed,
            output,
            min_amount,
            max_amount,
        } => commands::generate_fixtures::execute(count, seed, output, min_amount, max_amount),

        Commands::BuildTree {
            input,
            root_output,
            proofs_output,
        } => commands::build_tree::execute(input, root_output, proofs_output),

        Commands::Compile { config } => commands::compile::execute(config),

        Commands::CheckEligibility {
            proofs,
            address,
            root,
        } => {
            if !commands::check_eligibility::execute(proofs, address, root)? {
                std::process::exit(1);
            }
            Ok(())
        }

        Commands::VerifyProof {
            root,
            address,
            amount,
            proof,
        } => commands::verify_proof::execute(root, address, amount, proof),
    }
}
