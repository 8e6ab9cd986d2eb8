mod airdrop_snapshot;
mod in_memory_ledger;
mod test_fixture;

pub use airdrop_snapshot::AirdropSnapshot;
pub use in_memory_ledger::InMemoryLedger;
pub use test_fixture::{
    default_entries, deterministic_address, random_entries, TestFixture,
};
