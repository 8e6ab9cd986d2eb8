use merkle_drop::Address;
use merkle_drop_csvs::{write_eligibility_csv, EligibilityRow};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Upper bound on `--count`; larger lists are not a fixture.
pub const MAX_FIXTURE_COUNT: u64 = 10_000_000;

/// Generate a deterministic eligibility CSV for testing and benchmarking
pub fn execute(
    count: u64,
    seed: u64,
    output: PathBuf,
    min_amount: u128,
    max_amount: u128,
) -> CliResult<()> {
    if count == 0 {
        return Err(CliError::InvalidConfig(
            "count must be at least 1".to_string(),
        ));
    }
    if count > MAX_FIXTURE_COUNT {
        return Err(CliError::InvalidConfig(format!(
            "count {} exceeds the limit of {}",
            count, MAX_FIXTURE_COUNT
        )));
    }
    if min_amount == 0 || min_amount > max_amount {
        return Err(CliError::InvalidConfig(format!(
            "amount range {}..={} must be non-empty and start above zero",
            min_amount, max_amount
        )));
    }

    println!("Generating {} eligibility rows with seed {}", count, seed);
    println!("Amount range: {} - {}", min_amount, max_amount);

    let rows = generate_rows(count, seed, min_amount, max_amount);
    write_eligibility_csv(&output, &rows)?;

    let total = rows
        .iter()
        .fold(0u128, |total, row| total.saturating_add(row.amount));
    println!("✅ Generated eligibility list: {}", output.display());
    println!("📊 Summary:");
    println!("  - {} addresses", rows.len());
    println!("  - {} tokens in total", total);

    Ok(())
}

/// Same seed, same rows.
pub(crate) fn generate_rows(
    count: u64,
    seed: u64,
    min_amount: u128,
    max_amount: u128,
) -> Vec<EligibilityRow> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut seen = HashSet::new();
    let mut rows = Vec::with_capacity(count.min(MAX_FIXTURE_COUNT) as usize);

    while (rows.len() as u64) < count {
        let address = Address(rng.gen());
        if address.is_zero() || !seen.insert(address) {
            debug!(%address, "skipping unusable generated address");
            continue;
        }
        let amount = rng.gen_range(min_amount..=max_amount);
        rows.push(EligibilityRow::new(address, amount));
    }

    rows
}
