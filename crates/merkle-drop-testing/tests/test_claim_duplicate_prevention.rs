use merkle_drop::AirdropError;
use merkle_drop_testing::{deterministic_address, AirdropSnapshot, TestFixture};

/// Test that an address can claim at most once
///
/// **Test flow:**
/// 1. Bob claims successfully
/// 2. Capture state
/// 3. Bob repeats the identical claim → AlreadyClaimed
/// 4. Verify nothing changed: pool, bob's balance, claimed set, events
#[test]
fn test_claim_duplicate_prevention() {
    let mut test = TestFixture::default();
    let bob = deterministic_address("bob");

    // 1. First claim
    test.try_claim(&bob).expect("First claim should succeed");

    // 2. Capture state after first claim
    let after_first = AirdropSnapshot::capture_with_balances(&test, &[bob]);
    assert_eq!(after_first.claimed_count(), 1);

    // 3. Duplicate claim with the same amount and proof
    let result = test.try_claim(&bob);
    assert_eq!(result, Err(AirdropError::AlreadyClaimed));

    // 4. No state change
    let after_duplicate = AirdropSnapshot::capture_with_balances(&test, &[bob]);
    assert_eq!(
        after_first, after_duplicate,
        "No state should change when a duplicate claim is blocked"
    );
    assert_eq!(test.balance_of(&bob), 200);
}

/// Replay protection comes before proof checking: a second attempt with
/// garbage proof data still reports AlreadyClaimed.
#[test]
fn test_duplicate_reported_before_proof_check() {
    let mut test = TestFixture::default();
    let bob = deterministic_address("bob");

    test.try_claim(&bob).unwrap();

    assert_eq!(
        test.try_claim_with(&bob, 200, &[[0xde; 32]]),
        Err(AirdropError::AlreadyClaimed)
    );
    assert_eq!(
        test.try_claim_with(&bob, 999, &[]),
        Err(AirdropError::AlreadyClaimed)
    );
    assert_eq!(
        test.try_claim_with(&bob, 0, &[]),
        Err(AirdropError::AlreadyClaimed)
    );
}
