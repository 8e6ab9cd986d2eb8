pub mod claim_tokens;
pub mod deposit_into_contract;

pub(crate) use claim_tokens::handle_claim_tokens;
pub(crate) use deposit_into_contract::handle_deposit_into_contract;
