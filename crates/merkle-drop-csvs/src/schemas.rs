/*!
# Schema Definitions

Data contracts shared by the CLI commands:
- `generate-fixtures` (producer of eligibility.csv)
- `build-tree` / `compile` (consumer of eligibility.csv, producer of proofs.json)
- `check-eligibility` (consumer of proofs.json)
*/

use merkle_drop::Address;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ================================================================================================
// Eligibility CSV Schema
// ================================================================================================

/// Expected headers for eligibility.csv in exact order
pub const ELIGIBILITY_CSV_HEADERS: &[&str] = &["address", "amount"];

/// Row structure for eligibility.csv
///
/// **File**: `eligibility.csv`
/// **Purpose**: One entitlement per address
/// **Producer**: `generate-fixtures` command, or hand-written
/// **Consumers**: `build-tree` and `compile` commands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct EligibilityRow {
    /// Claimant address, `0x`-prefixed hex (prefix optional on input)
    pub address: Address,

    /// Token amount in base units
    pub amount: u128,
}

impl EligibilityRow {
    pub fn new(address: Address, amount: u128) -> Self {
        Self { address, amount }
    }
}

// ================================================================================================
// Proofs JSON Schema
// ================================================================================================

/// One claimant's entry in proofs.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProofEntry {
    /// Decimal string, so values above 2^53 survive JavaScript consumers
    #[serde(
        serialize_with = "serialize_amount",
        deserialize_with = "deserialize_amount"
    )]
    pub amount: u128,

    /// Sibling hashes, leaf level first
    #[serde(
        serialize_with = "serialize_hex_vec",
        deserialize_with = "deserialize_hex_vec"
    )]
    pub proof: Vec<[u8; 32]>,
}

/// Contents of proofs.json: the root plus every claimant's proof
///
/// **File**: `proofs.json`
/// **Producer**: `build-tree` and `compile` commands
/// **Consumers**: `check-eligibility` command, claim frontends
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProofsFile {
    #[serde(serialize_with = "serialize_hex", deserialize_with = "deserialize_hex")]
    pub merkle_root: [u8; 32],

    pub claims: BTreeMap<Address, ProofEntry>,
}

impl ProofsFile {
    pub fn new(merkle_root: [u8; 32]) -> Self {
        Self {
            merkle_root,
            claims: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, address: Address, amount: u128, proof: Vec<[u8; 32]>) {
        self.claims.insert(address, ProofEntry { amount, proof });
    }

    pub fn get(&self, address: &Address) -> Option<&ProofEntry> {
        self.claims.get(address)
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }
}

// ================================================================================================
// Custom Serde Functions
// ================================================================================================

/// Parse a 32-byte hash from hex, with or without `0x`
pub fn parse_hash(s: &str) -> Result<[u8; 32], String> {
    let trimmed = s.trim();
    let cleaned = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let bytes = hex::decode(cleaned).map_err(|e| e.to_string())?;
    if bytes.len() != 32 {
        return Err(format!("Expected 32 bytes, got {}", bytes.len()));
    }
    let mut array = [0u8; 32];
    array.copy_from_slice(&bytes);
    Ok(array)
}

/// Format a 32-byte hash as `0x`-prefixed lowercase hex
pub fn format_hash(hash: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(hash))
}

fn deserialize_hex<'de, D>(deserializer: D) -> Result<[u8; 32], D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_hash(&s).map_err(serde::de::Error::custom)
}

fn serialize_hex<S>(bytes: &[u8; 32], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_hash(bytes))
}

fn deserialize_hex_vec<'de, D>(deserializer: D) -> Result<Vec<[u8; 32]>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let strings = Vec::<String>::deserialize(deserializer)?;
    strings
        .iter()
        .map(|s| parse_hash(s).map_err(serde::de::Error::custom))
        .collect()
}

fn serialize_hex_vec<S>(hashes: &[[u8; 32]], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_seq(hashes.iter().map(format_hash))
}

fn deserialize_amount<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.trim().parse::<u128>().map_err(serde::de::Error::custom)
}

fn serialize_amount<S>(amount: &u128, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&amount.to_string())
}

// ================================================================================================
// Tests
// ================================================================================================
