//! Circuit breaker semantics and the owner-only emergency path: writes halt,
//! reads stay live, and the escape hatch bypasses exactly the breaker and
//! the deviation bound.

use super::helpers::{seeded_oracle, OWNER, STRANGER, UPDATER};
use crate::error::OracleError;

#[test]
fn pause_and_unpause_are_owner_only() {
    let oracle = seeded_oracle();

    assert_eq!(oracle.pause(&STRANGER), Err(OracleError::NotOwner));
    assert_eq!(oracle.pause(&UPDATER), Err(OracleError::NotOwner));
    assert!(!oracle.paused(), "failed pause attempts must not engage");

    oracle.pause(&OWNER).expect("owner may pause");
    assert!(oracle.paused());
    assert_eq!(oracle.unpause(&UPDATER), Err(OracleError::NotOwner));
    oracle.unpause(&OWNER).expect("owner may unpause");
    assert!(!oracle.paused());
}

#[test]
fn pause_transitions_are_idempotent() {
    let oracle = seeded_oracle();

    oracle.pause(&OWNER).expect("first pause engages");
    oracle.pause(&OWNER).expect("pausing a paused oracle is a no-op success");
    assert!(oracle.paused());

    oracle.unpause(&OWNER).expect("first unpause releases");
    oracle.unpause(&OWNER).expect("unpausing an active oracle is a no-op success");
    assert!(!oracle.paused());
}

/// While paused: the normal path rejects, every read keeps answering from
/// prior data, and the emergency path still commits.
#[test]
fn paused_oracle_blocks_writes_but_not_reads() {
    let oracle = seeded_oracle();
    oracle
        .update_price(&UPDATER, 110, 1_600)
        .expect("pre-pause update commits");
    oracle.pause(&OWNER).expect("owner may pause");

    assert_eq!(
        oracle.update_price(&UPDATER, 111, 1_700),
        Err(OracleError::Paused)
    );

    assert_eq!(oracle.latest_price().expect("reads stay live"), 110);
    assert_eq!(
        oracle.twap(600).expect("twap stays live"),
        100,
        "100 was held for the whole trailing 600s window"
    );
    let point = oracle.latest_price_point().expect("point read stays live");
    assert_eq!(point.timestamp, 1_600);

    oracle
        .emergency_update_price(&OWNER, 150, 1_800)
        .expect("emergency path ignores the breaker");
    assert_eq!(oracle.latest_price().expect("committed"), 150);
}

#[test]
fn unpause_restores_the_normal_path() {
    let oracle = seeded_oracle();
    oracle.pause(&OWNER).expect("pause");
    oracle.unpause(&OWNER).expect("unpause");
    oracle
        .update_price(&UPDATER, 105, 1_100)
        .expect("normal path is live again");
}

/// The emergency path is the owner's alone; updater membership does not
/// reach it.
#[test]
fn emergency_path_rejects_non_owners() {
    let oracle = seeded_oracle();
    let before = oracle.observations();

    assert_eq!(
        oracle.emergency_update_price(&UPDATER, 120, 1_100),
        Err(OracleError::NotOwner)
    );
    assert_eq!(
        oracle.emergency_update_price(&STRANGER, 120, 1_100),
        Err(OracleError::NotOwner)
    );
    assert_eq!(oracle.observations(), before);
}

/// The emergency path validates input even though it skips the deviation
/// bound: the escape hatch is for out-of-band prices, not illegal ones.
#[test]
fn emergency_path_still_validates_input() {
    let oracle = seeded_oracle();

    assert_eq!(
        oracle.emergency_update_price(&OWNER, 0, 1_100),
        Err(OracleError::InvalidInput("price must be positive"))
    );
    assert_eq!(
        oracle.emergency_update_price(&OWNER, 120, 900),
        Err(OracleError::NonMonotonicTime {
            last: 1_000,
            submitted: 900,
        })
    );
}

/// A verified off-chain price shock: the bounded path blocks the correction,
/// the emergency path lands it, and the bounded path then resumes from the
/// corrected level.
#[test]
fn emergency_path_recovers_from_a_price_shock() {
    let oracle = seeded_oracle();

    let err = oracle
        .update_price(&UPDATER, 300, 1_100)
        .expect_err("3x move is far past the bound");
    assert!(matches!(err, OracleError::DeviationExceeded { .. }));

    oracle
        .emergency_update_price(&OWNER, 300, 1_100)
        .expect("owner lands the correction");

    oracle
        .update_price(&UPDATER, 310, 1_200)
        .expect("bounded path resumes relative to the corrected price");
}
