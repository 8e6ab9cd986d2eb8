/// Width of a claimant address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// Width of the amount word in a leaf preimage. Amounts are encoded as a
/// big-endian uint256 so leaves match `abi.encodePacked(address, uint256)`.
pub const AMOUNT_WORD_LEN: usize = 32;

/// Leaf preimage length: address || amount word.
pub const LEAF_PREIMAGE_LEN: usize = ADDRESS_LEN + AMOUNT_WORD_LEN;

/// Longest proof `claim` will fold. A binary tree deeper than this would need
/// more than 2^64 leaves.
pub const MAX_PROOF_LEN: usize = 64;
