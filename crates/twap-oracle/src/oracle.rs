//! Public oracle handle.
//!
//! One `RwLock` guards the observation log, breaker flags, access state, and
//! config together, per the single-writer model: each mutating call holds
//! the write lock across its entire check-then-commit sequence, so two
//! concurrent updates can never interleave their cumulative-field
//! computation. Reads take the read lock and observe a point-in-time
//! consistent snapshot.

use crate::error::OracleError;
use crate::ops::{admin, query, update_price};
use crate::state::access_state::Principal;
use crate::state::config::OracleConfig;
use crate::state::observation_log::Observation;
use crate::state::oracle_state::OracleState;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub struct TwapOracle {
    inner: RwLock<OracleState>,
}

impl TwapOracle {
    /// Creates an oracle owned by `owner`. Fails with `InvalidInput` if the
    /// configuration is out of range; nothing is constructed in that case.
    pub fn new(owner: Principal, config: OracleConfig) -> Result<Self, OracleError> {
        let state = OracleState::new(owner, config)?;
        tracing::info!(
            owner = %owner,
            default_window = config.default_window,
            max_window = config.max_window,
            max_deviation_bps = config.max_deviation_bps,
            "twap oracle initialized"
        );
        Ok(Self {
            inner: RwLock::new(state),
        })
    }

    /// Submits a price observation through the normal gated path.
    pub fn update_price(
        &self,
        caller: &Principal,
        price: u128,
        now: i64,
    ) -> Result<Observation, OracleError> {
        let mut state = self.write();
        update_price::update_price(&mut state, caller, price, now)
    }

    /// Owner-only recovery path: commits an observation past the breaker and
    /// the deviation bound.
    pub fn emergency_update_price(
        &self,
        caller: &Principal,
        price: u128,
        now: i64,
    ) -> Result<Observation, OracleError> {
        let mut state = self.write();
        update_price::emergency_update_price(&mut state, caller, price, now)
    }

    /// Price of the most recent observation.
    pub fn latest_price(&self) -> Result<u128, OracleError> {
        query::latest_price(&self.read())
    }

    /// The most recent observation with its cumulative fields.
    pub fn latest_price_point(&self) -> Result<Observation, OracleError> {
        query::latest_price_point(&self.read())
    }

    /// TWAP over the trailing `window` seconds ending at the latest
    /// observation.
    pub fn twap(&self, window: u64) -> Result<u128, OracleError> {
        query::twap(&self.read(), window)
    }

    /// TWAP over the configured default window.
    pub fn default_twap(&self) -> Result<u128, OracleError> {
        query::default_twap(&self.read())
    }

    pub fn add_authorized_updater(
        &self,
        caller: &Principal,
        updater: Principal,
    ) -> Result<(), OracleError> {
        let mut state = self.write();
        admin::add_authorized_updater(&mut state, caller, updater)
    }

    pub fn remove_authorized_updater(
        &self,
        caller: &Principal,
        updater: &Principal,
    ) -> Result<(), OracleError> {
        let mut state = self.write();
        admin::remove_authorized_updater(&mut state, caller, updater)
    }

    /// Engages the circuit breaker. Owner-only, idempotent.
    pub fn pause(&self, caller: &Principal) -> Result<(), OracleError> {
        let mut state = self.write();
        admin::pause(&mut state, caller)
    }

    /// Releases the circuit breaker. Owner-only, idempotent.
    pub fn unpause(&self, caller: &Principal) -> Result<(), OracleError> {
        let mut state = self.write();
        admin::unpause(&mut state, caller)
    }

    pub fn paused(&self) -> bool {
        self.read().flags.is_paused()
    }

    pub fn owner(&self) -> Principal {
        self.read().access.owner()
    }

    /// Updater-set membership; the owner's implicit grant is not reflected
    /// here.
    pub fn is_authorized_updater(&self, principal: &Principal) -> bool {
        self.read().access.is_authorized_updater(principal)
    }

    pub fn config(&self) -> OracleConfig {
        self.read().config
    }

    /// Number of currently retained observations.
    pub fn observation_count(&self) -> usize {
        self.read().log.len()
    }

    /// Point-in-time snapshot of the retained observations, oldest first.
    pub fn observations(&self) -> Vec<Observation> {
        self.read().log.iter().copied().collect()
    }

    // Failed calls never leave partial state, so the data behind a poisoned
    // lock is still valid; recover it instead of propagating the panic.
    fn read(&self) -> RwLockReadGuard<'_, OracleState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, OracleState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
