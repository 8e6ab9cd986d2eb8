/*!
# Validation & I/O

Reading an eligibility list enforces what the tree builder assumes: every
address is well-formed, non-zero and unique, and every amount is positive.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::{EligibilityRow, ProofsFile, ELIGIBILITY_CSV_HEADERS},
};
use csv::{ReaderBuilder, Trim, Writer};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::debug;

// ================================================================================================
// CSV Reading with Validation
// ================================================================================================

/// Read and validate an eligibility CSV file
pub fn read_eligibility_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<EligibilityRow>> {
    let file = File::open(path.as_ref())?;
    let rows = read_eligibility_from(file)?;
    debug!(path = %path.as_ref().display(), rows = rows.len(), "eligibility list loaded");
    Ok(rows)
}

/// Read and validate eligibility rows from any reader
pub fn read_eligibility_from<R: Read>(reader: R) -> CsvResult<Vec<EligibilityRow>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    // Validate headers
    let headers = rdr.headers()?;
    validate_headers(headers.iter(), ELIGIBILITY_CSV_HEADERS, "eligibility.csv")?;

    // Read and deserialize rows
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: EligibilityRow = result?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(CsvError::SchemaValidation(
            "Eligibility CSV file is empty".to_string(),
        ));
    }

    validate_eligibility_rows(&rows)?;
    Ok(rows)
}

/// Check rows for the zero address, zero amounts and duplicate addresses.
///
/// Row numbers in errors are 1-based and exclude the header.
pub fn validate_eligibility_rows(rows: &[EligibilityRow]) -> CsvResult<()> {
    let mut seen = HashSet::with_capacity(rows.len());

    for (i, row) in rows.iter().enumerate() {
        let row_number = i + 1;

        if row.address.is_zero() {
            return Err(CsvError::ZeroAddress { row: row_number });
        }
        if row.amount == 0 {
            return Err(CsvError::ZeroAmount {
                row: row_number,
                address: row.address,
            });
        }
        if !seen.insert(row.address) {
            return Err(CsvError::DuplicateAddress {
                row: row_number,
                address: row.address,
            });
        }
    }

    Ok(())
}

// ================================================================================================
// CSV Writing
// ================================================================================================

/// Write eligibility CSV (csv crate writes the header row)
pub fn write_eligibility_csv<P: AsRef<Path>>(path: P, rows: &[EligibilityRow]) -> CsvResult<()> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

// ================================================================================================
// Proofs JSON
// ================================================================================================

/// Write proofs.json, pretty-printed
pub fn write_proofs_json<P: AsRef<Path>>(path: P, proofs: &ProofsFile) -> CsvResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, proofs)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Read proofs.json and check every claimant has a proof bounded by the tree depth limit
pub fn read_proofs_json<P: AsRef<Path>>(path: P) -> CsvResult<ProofsFile> {
    let reader = BufReader::new(File::open(path)?);
    let proofs: ProofsFile = serde_json::from_reader(reader)?;

    if proofs.is_empty() {
        return Err(CsvError::DataInconsistency(
            "proofs file lists no claimants".to_string(),
        ));
    }
    for (address, entry) in &proofs.claims {
        if entry.proof.len() > merkle_drop::MAX_PROOF_LEN {
            return Err(CsvError::DataInconsistency(format!(
                "proof for {} has {} elements, limit is {}",
                address,
                entry.proof.len(),
                merkle_drop::MAX_PROOF_LEN
            )));
        }
    }

    Ok(proofs)
}

// ================================================================================================
// Header Validation
// ================================================================================================

fn validate_headers<'a, I>(actual: I, expected: &[&str], file_type: &str) -> CsvResult<()>
where
    I: Iterator<Item = &'a str>,
{
    let actual_headers: Vec<&str> = actual.collect();

    if actual_headers.len() != expected.len() {
        return Err(CsvError::SchemaValidation(format!(
            "{}: expected {} headers, found {}",
            file_type,
            expected.len(),
            actual_headers.len()
        )));
    }

    for (i, (actual, expected)) in actual_headers.iter().zip(expected.iter()).enumerate() {
        if actual != expected {
            return Err(CsvError::SchemaValidation(format!(
                "{}: header {} should be '{}', found '{}'",
                file_type,
                i + 1,
                expected,
                actual
            )));
        }
    }

    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================
