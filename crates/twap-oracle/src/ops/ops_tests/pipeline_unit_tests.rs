//! Unit tests for the normal update pipeline: gate ordering, the deviation
//! bound's exact boundary, and the all-or-nothing commit contract.

use super::helpers::{gated_oracle, seeded_oracle, OWNER, STRANGER, UPDATER};
use crate::error::OracleError;
use crate::ops::update_price::check_deviation;
use crate::state::access_state::Principal;
use crate::utils::constants::MAX_PRICE;
use ethnum::U256;

/// The documented bound: previous price 100 at 2_000 bps. 121 is a 21%
/// move and is rejected; 119 passes.
#[test]
fn deviation_bound_rejects_21_percent_and_accepts_19() {
    let oracle = seeded_oracle();

    let err = oracle
        .update_price(&UPDATER, 121, 1_010)
        .expect_err("21% move must be rejected");
    assert_eq!(
        err,
        OracleError::DeviationExceeded {
            deviation_bps: 2_100,
            max_deviation_bps: 2_000,
        }
    );

    oracle
        .update_price(&UPDATER, 119, 1_010)
        .expect("19% move is inside the bound");
}

/// Equality sits inside the bound: a move of exactly 2_000 bps passes.
#[test]
fn deviation_boundary_is_inclusive() {
    let oracle = seeded_oracle();
    oracle
        .update_price(&UPDATER, 120, 1_010)
        .expect("exact-boundary move is accepted");
    oracle
        .update_price(&UPDATER, 96, 1_020)
        .expect("downward boundary move (20% of 120) is accepted");
}

#[test]
fn check_deviation_handles_extremes_without_overflow() {
    // Identical prices deviate by zero.
    check_deviation(100, 100, 0).expect("zero move passes a zero bound");
    // Widest legal gap: the cap against the smallest price.
    assert!(check_deviation(1, MAX_PRICE, 10_000).is_err());
    // A fully open bound admits a doubling but not more.
    check_deviation(100, 200, 10_000).expect("100% move passes a 10000 bps bound");
    assert!(check_deviation(100, 201, 10_000).is_err());
}

/// The first observation is exempt from the deviation bound: there is no
/// previous price to deviate from.
#[test]
fn first_observation_skips_the_deviation_check() {
    let oracle = gated_oracle();
    oracle
        .update_price(&UPDATER, 1_000_000, 1_000)
        .expect("any legal price seeds an empty log");
}

/// Gates fire in pipeline order: authorization before the breaker, the
/// breaker before input validation, input validation before the deviation
/// bound.
#[test]
fn gates_fire_in_pipeline_order() {
    let oracle = seeded_oracle();
    oracle.pause(&OWNER).expect("owner may pause");

    // Unauthorized caller while paused: authorization reports first.
    assert_eq!(
        oracle.update_price(&STRANGER, 100, 1_010),
        Err(OracleError::Unauthorized)
    );
    // Authorized caller with bad input while paused: the breaker reports
    // before input validation.
    assert_eq!(
        oracle.update_price(&UPDATER, 0, 1_010),
        Err(OracleError::Paused)
    );

    oracle.unpause(&OWNER).expect("owner may unpause");
    // Zero price reports as bad input, not as a 100% deviation.
    assert_eq!(
        oracle.update_price(&UPDATER, 0, 1_010),
        Err(OracleError::InvalidInput("price must be positive"))
    );
}

/// Any rejection leaves the log exactly as it was: same length, same tip,
/// same cumulative fields.
#[test]
fn rejected_updates_leave_no_partial_state() {
    let oracle = seeded_oracle();
    let before = oracle.observations();

    let attempts: [(Principal, u128, i64); 4] = [
        (STRANGER, 105, 1_010), // Unauthorized
        (UPDATER, 0, 1_010),    // InvalidInput
        (UPDATER, 150, 1_010),  // DeviationExceeded
        (UPDATER, 105, 1_000),  // NonMonotonicTime
    ];
    for (caller, price, now) in attempts {
        assert!(oracle.update_price(&caller, price, now).is_err());
        assert_eq!(oracle.observations(), before, "rejection must not mutate");
    }
}

/// A committed update extends the integral with the previous price held
/// over the elapsed interval.
#[test]
fn committed_update_extends_the_integral() {
    let oracle = seeded_oracle();
    let observation = oracle
        .update_price(&UPDATER, 110, 1_060)
        .expect("in-bound update commits");

    assert_eq!(observation.timestamp, 1_060);
    assert_eq!(observation.price, 110);
    // 100 held for 60 seconds.
    assert_eq!(observation.cumulative_price, U256::from(6_000_u128));
    assert_eq!(observation.cumulative_time, 60);
    assert_eq!(oracle.latest_price().expect("history exists"), 110);
}

/// The owner can drive the normal path without being in the updater set.
#[test]
fn owner_may_use_the_normal_path() {
    let oracle = seeded_oracle();
    assert!(!oracle.is_authorized_updater(&OWNER));
    oracle
        .update_price(&OWNER, 101, 1_010)
        .expect("owner is implicitly authorized");
}
