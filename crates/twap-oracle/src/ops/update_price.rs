//! Update pipelines.
//!
//! The normal path gates every submission through authorization, the circuit
//! breaker, input bounds, and the deviation bound, in that order, before a
//! single append commits the observation. The emergency path is the owner's
//! recovery mechanism when the bounded path itself blocks a legitimate
//! correction: it skips the breaker and the deviation bound but still
//! validates input and timestamp monotonicity.
//!
//! Checks run against state they do not mutate and the append validates
//! before it stores, so every rejection leaves the oracle exactly as it was.

use crate::error::OracleError;
use crate::state::access_state::Principal;
use crate::state::observation_log::{validate_price, Observation};
use crate::state::oracle_state::OracleState;
use crate::utils::constants::BPS_DENOMINATOR;

/// Normal update path: authorization, breaker, input bounds, deviation
/// bound, append.
pub(crate) fn update_price(
    state: &mut OracleState,
    caller: &Principal,
    price: u128,
    now: i64,
) -> Result<Observation, OracleError> {
    if !state.access.is_authorized(caller) {
        return Err(OracleError::Unauthorized);
    }
    if state.flags.is_paused() {
        return Err(OracleError::Paused);
    }
    // Bad input reports as bad input, not as a spurious 100% deviation.
    validate_price(price)?;
    if let Some(last) = state.log.latest() {
        check_deviation(last.price, price, state.config.max_deviation_bps)?;
    }

    let observation = state.log.append(price, now)?;
    tracing::info!(
        caller = %caller,
        price = %price,
        timestamp = observation.timestamp,
        cumulative_time = observation.cumulative_time,
        "price update committed"
    );
    Ok(observation)
}

/// Emergency update path: owner check, input bounds, append. Bypasses the
/// breaker and the deviation bound.
pub(crate) fn emergency_update_price(
    state: &mut OracleState,
    caller: &Principal,
    price: u128,
    now: i64,
) -> Result<Observation, OracleError> {
    state.access.require_owner(caller)?;
    validate_price(price)?;

    let observation = state.log.append(price, now)?;
    tracing::warn!(
        caller = %caller,
        price = %price,
        timestamp = observation.timestamp,
        "emergency price update committed"
    );
    Ok(observation)
}

// Scaled comparison keeps the bound exact in integer arithmetic:
// |candidate - previous| / previous > max_bps / 10_000 iff
// |candidate - previous| * 10_000 > previous * max_bps. Equality sits inside
// the bound. `previous` is a stored price, hence positive and capped, so
// neither product can overflow u128.
pub(crate) fn check_deviation(
    previous: u128,
    candidate: u128,
    max_deviation_bps: u16,
) -> Result<(), OracleError> {
    let scaled_diff = previous.abs_diff(candidate) * BPS_DENOMINATOR;
    if scaled_diff > previous * max_deviation_bps as u128 {
        return Err(OracleError::DeviationExceeded {
            deviation_bps: scaled_diff / previous,
            max_deviation_bps,
        });
    }
    Ok(())
}
