//! Caller identity and the authorized-updater set.
//!
//! Identity is an explicit parameter threaded through every mutating
//! operation; the hosting environment authenticates callers and hands their
//! principal to this core, which only decides membership.

use crate::error::OracleError;
use std::fmt;

/// Opaque 32-byte caller identity.
///
/// The core never interprets the bytes; any authentication layer that can
/// produce a stable 32-byte identifier (a public key, a key hash, a tenant
/// id) can drive the oracle.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Principal([u8; 32]);

impl Principal {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl From<[u8; 32]> for Principal {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({self})")
    }
}

/// Owner identity plus the set of principals allowed on the normal update
/// path. The owner is fixed at construction and is the only principal able
/// to mutate this set, flip the circuit breaker, or use the emergency path.
#[derive(Clone, Debug)]
pub struct AccessState {
    owner: Principal,
    authorized_updaters: Vec<Principal>,
}

impl AccessState {
    pub fn new(owner: Principal) -> Self {
        Self {
            owner,
            authorized_updaters: Vec::new(),
        }
    }

    pub fn owner(&self) -> Principal {
        self.owner
    }

    pub fn is_owner(&self, principal: &Principal) -> bool {
        self.owner == *principal
    }

    /// True iff `principal` may use the normal update path: the owner, or a
    /// member of the updater set.
    pub fn is_authorized(&self, principal: &Principal) -> bool {
        self.is_owner(principal) || self.find(principal).is_some()
    }

    /// Updater-set membership alone, without the implicit owner grant.
    pub fn is_authorized_updater(&self, principal: &Principal) -> bool {
        self.find(principal).is_some()
    }

    /// Gate for owner-only operations.
    pub fn require_owner(&self, caller: &Principal) -> Result<(), OracleError> {
        if self.is_owner(caller) {
            Ok(())
        } else {
            Err(OracleError::NotOwner)
        }
    }

    /// Adds `updater` to the set. Owner-only; adding a present member is a
    /// no-op success. Returns whether the set changed.
    pub fn add_authorized_updater(
        &mut self,
        caller: &Principal,
        updater: Principal,
    ) -> Result<bool, OracleError> {
        self.require_owner(caller)?;
        if self.find(&updater).is_some() {
            return Ok(false);
        }
        self.authorized_updaters.push(updater);
        Ok(true)
    }

    /// Removes `updater` from the set. Owner-only; removing an absent
    /// principal is a no-op success. Returns whether the set changed.
    pub fn remove_authorized_updater(
        &mut self,
        caller: &Principal,
        updater: &Principal,
    ) -> Result<bool, OracleError> {
        self.require_owner(caller)?;
        match self.find(updater) {
            Some(index) => {
                self.authorized_updaters.swap_remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn updater_count(&self) -> usize {
        self.authorized_updaters.len()
    }

    // Linear scan with early exit; updater sets are small and the scan beats
    // hashing at these sizes.
    fn find(&self, principal: &Principal) -> Option<usize> {
        self.authorized_updaters.iter().position(|p| p == principal)
    }
}
