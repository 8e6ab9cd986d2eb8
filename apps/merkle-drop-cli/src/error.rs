use merkle_drop::AddressParseError;
use merkle_drop_csvs::CsvError;
use merkle_drop_merkle::MerkleError;
use thiserror::Error;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Csv(#[from] CsvError),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Merkle tree error: {0}")]
    Merkle(#[from] MerkleError),

    #[error("Invalid address: {0}")]
    InvalidAddress(#[from] AddressParseError),

    #[error("Invalid hex string: {0}")]
    InvalidHex(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Merkle root mismatch: expected {expected}, proofs file has {found}")]
    RootMismatch { expected: String, found: String },

    #[error("Proof does not verify against root {0}")]
    InvalidProof(String),

    #[error("Command execution failed: {0}")]
    CommandExecution(String),
}
