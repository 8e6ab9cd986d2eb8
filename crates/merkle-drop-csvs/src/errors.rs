use merkle_drop::Address;
use thiserror::Error;

pub type CsvResult<T> = Result<T, CsvError>;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Schema validation error: {0}")]
    SchemaValidation(String),

    #[error("Row {row}: the zero address cannot be eligible")]
    ZeroAddress { row: usize },

    #[error("Row {row}: amount for {address} must be greater than zero")]
    ZeroAmount { row: usize, address: Address },

    #[error("Row {row}: duplicate address {address}")]
    DuplicateAddress { row: usize, address: Address },

    #[error("Inconsistent proofs file: {0}")]
    DataInconsistency(String),
}
