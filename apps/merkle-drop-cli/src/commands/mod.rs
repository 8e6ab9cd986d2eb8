pub mod build_tree;
pub mod check_eligibility;
pub mod compile;
pub mod generate_fixtures;
pub mod verify_proof;

use crate::error::{CliError, CliResult};

/// Parse a `0x`-prefixed (or bare) 32-byte hex hash from the command line
pub(crate) fn parse_hash_arg(value: &str) -> CliResult<[u8; 32]> {
    merkle_drop_csvs::parse_hash(value)
        .map_err(|e| CliError::InvalidHex(format!("'{}': {}", value, e)))
}
