//! Read-side resolution against the observation log.
//!
//! Queries bypass every write gate: they stay live while the breaker is
//! engaged and never depend on caller identity.

use crate::error::OracleError;
use crate::state::observation_log::Observation;
use crate::state::oracle_state::OracleState;

pub(crate) fn latest_price(state: &OracleState) -> Result<u128, OracleError> {
    Ok(latest_price_point(state)?.price)
}

pub(crate) fn latest_price_point(state: &OracleState) -> Result<Observation, OracleError> {
    state
        .log
        .latest()
        .copied()
        .ok_or(OracleError::EmptyHistory)
}

pub(crate) fn twap(state: &OracleState, window: u64) -> Result<u128, OracleError> {
    state.log.twap(window)
}

pub(crate) fn default_twap(state: &OracleState) -> Result<u128, OracleError> {
    state.log.twap(state.config.default_window)
}
