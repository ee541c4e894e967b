use crate::oracle::TwapOracle;
use crate::state::access_state::Principal;
use crate::state::config::OracleConfig;
use ethnum::U256;

pub(crate) const OWNER: Principal = Principal::new([1; 32]);
pub(crate) const UPDATER: Principal = Principal::new([2; 32]);
pub(crate) const STRANGER: Principal = Principal::new([3; 32]);

/// Oracle with the deviation bound the documentation examples use (20%) and
/// a day of retention, owned by [`OWNER`] with [`UPDATER`] authorized.
pub(crate) fn gated_oracle() -> TwapOracle {
    let config = OracleConfig {
        default_window: 3_600,
        max_window: 86_400,
        max_deviation_bps: 2_000,
    };
    let oracle = TwapOracle::new(OWNER, config).expect("fixture config is valid");
    oracle
        .add_authorized_updater(&OWNER, UPDATER)
        .expect("owner wires the fixture updater");
    oracle
}

/// Gated oracle pre-seeded with one observation of price 100 at t=1_000.
pub(crate) fn seeded_oracle() -> TwapOracle {
    let oracle = gated_oracle();
    oracle
        .update_price(&UPDATER, 100, 1_000)
        .expect("seed observation is accepted");
    oracle
}

/// Recomputes the piecewise-constant integral from a snapshot and compares
/// it against the stored cumulative fields.
pub(crate) fn assert_integral_consistent(oracle: &TwapOracle) {
    let points = oracle.observations();
    for pair in points.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        assert!(prev.timestamp < next.timestamp, "snapshot must stay ordered");
        let held_for = (next.timestamp - prev.timestamp) as u128;
        assert_eq!(
            next.cumulative_price,
            prev.cumulative_price + U256::from(prev.price) * U256::from(held_for),
            "cumulative recurrence must hold across the snapshot"
        );
    }
}
