/*!
# Merkle Drop Data Files

Schemas and I/O for the two files an airdrop is prepared from.

### Eligibility CSV (`eligibility.csv`)
- `address`: 20-byte hex address, `0x` prefix optional, any case
- `amount`: token amount in base units (u128, must be > 0)

Addresses must be unique and non-zero. Rows are validated on read.

### Proofs JSON (`proofs.json`)
```json
{
  "merkle_root": "0x…",
  "claims": {
    "0x…": { "amount": "100", "proof": ["0x…", "0x…"] }
  }
}
```

## Usage

```no_run
use merkle_drop_csvs::{read_eligibility_csv, CsvResult};

fn example() -> CsvResult<()> {
    let rows = read_eligibility_csv("eligibility.csv")?;
    println!("{} eligible addresses", rows.len());
    Ok(())
}
```
*/

pub mod errors;
pub mod schemas;
pub mod validation;

// Re-export main types for convenience
pub use errors::{CsvError, CsvResult};
pub use schemas::{
    format_hash, parse_hash, EligibilityRow, ProofEntry, ProofsFile, ELIGIBILITY_CSV_HEADERS,
};
pub use validation::{
    read_eligibility_csv, read_eligibility_from, read_proofs_json, validate_eligibility_rows,
    write_eligibility_csv, write_proofs_json,
};
