//! Owner-only administration: updater-set management and the circuit
//! breaker. Every operation is idempotent; transitions are logged, repeats
//! are silent successes.

use crate::error::OracleError;
use crate::state::access_state::Principal;
use crate::state::oracle_state::{OracleState, StateFlags};

pub(crate) fn add_authorized_updater(
    state: &mut OracleState,
    caller: &Principal,
    updater: Principal,
) -> Result<(), OracleError> {
    if state.access.add_authorized_updater(caller, updater)? {
        tracing::debug!(updater = %updater, "authorized updater added");
    }
    Ok(())
}

pub(crate) fn remove_authorized_updater(
    state: &mut OracleState,
    caller: &Principal,
    updater: &Principal,
) -> Result<(), OracleError> {
    if state.access.remove_authorized_updater(caller, updater)? {
        tracing::debug!(updater = %updater, "authorized updater removed");
    }
    Ok(())
}

pub(crate) fn pause(state: &mut OracleState, caller: &Principal) -> Result<(), OracleError> {
    state.access.require_owner(caller)?;
    if !state.flags.is_paused() {
        state.flags.set(StateFlags::PAUSED);
        tracing::warn!(caller = %caller, "circuit breaker engaged; normal updates halted");
    }
    Ok(())
}

pub(crate) fn unpause(state: &mut OracleState, caller: &Principal) -> Result<(), OracleError> {
    state.access.require_owner(caller)?;
    if state.flags.is_paused() {
        state.flags.clear(StateFlags::PAUSED);
        tracing::info!(caller = %caller, "circuit breaker released");
    }
    Ok(())
}
