//! Adversarial scenarios: every probe below models a caller trying to move
//! the published average or slip past a gate, and asserts the oracle's state
//! is bit-for-bit unmoved afterwards.

use super::helpers::{assert_integral_consistent, seeded_oracle, OWNER, STRANGER, UPDATER};
use crate::error::OracleError;

/// An unauthorized principal hammering the update path never lands a single
/// observation, whatever prices and timestamps it tries.
#[test]
fn unauthorized_hammering_never_mutates() {
    let oracle = seeded_oracle();
    let before = oracle.observations();

    for attempt in 0..64_i64 {
        let result = oracle.update_price(&STRANGER, 100 + attempt as u128, 1_001 + attempt);
        assert_eq!(result, Err(OracleError::Unauthorized));
    }

    assert_eq!(oracle.observations(), before, "log length and content unchanged");
    assert_eq!(oracle.latest_price().expect("seed survives"), 100);
}

/// A single-update spike cannot move the average: the deviation bound
/// rejects it and the TWAP stays where sustained prices put it.
#[test]
fn single_spike_cannot_move_the_average() {
    let oracle = seeded_oracle();
    oracle
        .update_price(&UPDATER, 102, 1_600)
        .expect("benign update");

    let twap_before = oracle.twap(600).expect("covered");
    assert!(matches!(
        oracle.update_price(&UPDATER, 200, 1_601),
        Err(OracleError::DeviationExceeded { .. })
    ));
    assert_eq!(
        oracle.twap(600).expect("covered"),
        twap_before,
        "rejected spike must leave the average untouched"
    );
}

/// Dragging the price upward within the bound takes sustained movement: the
/// time-weighted average trails the spot price through the ramp.
#[test]
fn gradual_ramp_moves_twap_slower_than_spot() {
    let oracle = seeded_oracle();

    let mut price = 100_u128;
    let mut now = 1_000_i64;
    for _ in 0..10 {
        price = price * 119 / 100; // stay just inside the 2_000 bps bound
        now += 60;
        oracle
            .update_price(&UPDATER, price, now)
            .expect("each step is inside the bound");
    }

    let spot = oracle.latest_price().expect("history exists");
    let averaged = oracle.twap(600).expect("ramp spans the window");
    assert!(
        averaged < spot,
        "time weighting must lag the manipulated spot price ({averaged} vs {spot})"
    );
    assert_integral_consistent(&oracle);
}

/// Revocation takes effect on the next call: a removed updater is
/// indistinguishable from a stranger.
#[test]
fn revoked_updater_loses_access_immediately() {
    let oracle = seeded_oracle();
    oracle
        .remove_authorized_updater(&OWNER, &UPDATER)
        .expect("owner revokes");

    assert_eq!(
        oracle.update_price(&UPDATER, 101, 1_100),
        Err(OracleError::Unauthorized)
    );
    assert!(!oracle.is_authorized_updater(&UPDATER));
}

/// Neither the breaker nor the emergency path is reachable by a
/// non-owner, so a compromised updater cannot freeze or override the feed.
#[test]
fn compromised_updater_cannot_reach_owner_controls() {
    let oracle = seeded_oracle();

    assert_eq!(oracle.pause(&UPDATER), Err(OracleError::NotOwner));
    assert_eq!(
        oracle.emergency_update_price(&UPDATER, 1, 1_100),
        Err(OracleError::NotOwner)
    );
    assert_eq!(
        oracle.add_authorized_updater(&UPDATER, STRANGER),
        Err(OracleError::NotOwner),
        "updaters must not mint updaters"
    );
    assert!(!oracle.paused());
    assert!(!oracle.is_authorized_updater(&STRANGER));
}

/// Stale-timestamp replays are rejected wholesale; the integral never
/// absorbs an out-of-order observation.
#[test]
fn timestamp_replays_are_rejected() {
    let oracle = seeded_oracle();
    oracle
        .update_price(&UPDATER, 105, 1_500)
        .expect("benign update");
    let before = oracle.observations();

    for replayed in [1_000, 1_250, 1_500] {
        assert!(matches!(
            oracle.update_price(&UPDATER, 105, replayed),
            Err(OracleError::NonMonotonicTime { .. })
        ));
    }
    assert_eq!(oracle.observations(), before);
    assert_integral_consistent(&oracle);
}
