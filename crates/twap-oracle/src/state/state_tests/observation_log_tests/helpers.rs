use crate::state::observation_log::ObservationLog;
use crate::utils::constants::{DEFAULT_MAX_WINDOW, MAX_PRICE};
use ethnum::U256;
use proptest::prelude::*;

/// Checks every structural invariant of an observation log in one sweep:
/// strict timestamp ordering, the exact piecewise-constant cumulative
/// recurrence, genesis-anchored cumulative time, and the retention bound of
/// at most one margin entry at or before the cutoff.
macro_rules! assert_log_invariants {
    ($log:expr) => {{
        let log_ref = &$log;
        let points: Vec<_> = log_ref.iter().copied().collect();

        for pair in points.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            assert!(
                prev.timestamp < next.timestamp,
                "timestamps must strictly increase"
            );
            assert!(
                prev.price > 0 && prev.price <= crate::utils::constants::MAX_PRICE,
                "stored prices must stay within the accepted domain"
            );
            let held_for = (next.timestamp - prev.timestamp) as u64;
            assert_eq!(
                next.cumulative_price,
                prev.cumulative_price
                    + ethnum::U256::from(prev.price) * ethnum::U256::from(held_for as u128),
                "cumulative price must follow the piecewise-constant recurrence"
            );
            assert_eq!(
                next.cumulative_time - prev.cumulative_time,
                held_for,
                "cumulative time must advance by exactly the held interval"
            );
        }

        if let (Some(genesis), Some(oldest)) = (log_ref.genesis_timestamp(), log_ref.oldest()) {
            assert_eq!(
                oldest.cumulative_time,
                (oldest.timestamp - genesis) as u64,
                "cumulative time must stay anchored to the genesis timestamp"
            );
        }

        if let Some(latest) = log_ref.latest() {
            let cutoff = latest.timestamp - log_ref.max_window() as i64;
            let margin_entries = log_ref.iter().filter(|o| o.timestamp <= cutoff).count();
            assert!(
                margin_entries <= 1,
                "retention must keep at most one margin entry at or before the cutoff"
            );
        }
    }};
}

pub(crate) use assert_log_invariants;

/// Log with the default seven-day retention window.
pub(crate) fn empty_log() -> ObservationLog {
    ObservationLog::new(DEFAULT_MAX_WINDOW)
}

pub(crate) fn log_with_window(max_window: u64) -> ObservationLog {
    ObservationLog::new(max_window)
}

/// Appends a `(timestamp, price)` series, panicking on the first rejection.
pub(crate) fn append_all(log: &mut ObservationLog, series: &[(i64, u128)]) {
    for &(timestamp, price) in series {
        log.append(price, timestamp)
            .expect("fixture series must be accepted");
    }
}

/// The worked example from the oracle's documentation, shifted to positive
/// timestamps: 100 held for 10s, then 120 held for 10s, then 80 at the tip.
/// `twap(20)` over it is (100*10 + 120*10) / 20 = 110.
pub(crate) fn worked_example_log() -> ObservationLog {
    let mut log = empty_log();
    append_all(&mut log, &[(1_000, 100), (1_010, 120), (1_020, 80)]);
    log
}

/// Recomputes the integral over retained observations from prices alone and
/// compares against the stored cumulative fields.
pub(crate) fn recomputed_integral_matches(log: &ObservationLog) -> bool {
    let points: Vec<_> = log.iter().copied().collect();
    let Some(first) = points.first() else {
        return true;
    };
    let mut expected = first.cumulative_price;
    for pair in points.windows(2) {
        let held_for = (pair[1].timestamp - pair[0].timestamp) as u128;
        expected += U256::from(pair[0].price) * U256::from(held_for);
        if pair[1].cumulative_price != expected {
            return false;
        }
    }
    true
}

/// Strictly increasing `(timestamp, price)` series with realistic spacing
/// and a price domain wide enough to shake out arithmetic mistakes without
/// leaving the accepted input range.
pub(crate) fn monotonic_series_strategy() -> impl Strategy<Value = Vec<(i64, u128)>> {
    (
        1_i64..=1_000_000,
        proptest::collection::vec((1_i64..=7_200, 1_u128..=MAX_PRICE), 1..128),
    )
        .prop_map(|(start, steps)| {
            let mut timestamp = start;
            steps
                .into_iter()
                .map(|(delta, price)| {
                    timestamp += delta;
                    (timestamp, price)
                })
                .collect()
        })
}
