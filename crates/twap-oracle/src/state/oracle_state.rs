use crate::error::OracleError;
use crate::state::access_state::{AccessState, Principal};
use crate::state::config::OracleConfig;
use crate::state::observation_log::ObservationLog;

/// Root aggregate: everything one update call may touch lives here, so a
/// single lock around it serializes writes completely.
#[derive(Clone, Debug)]
pub struct OracleState {
    pub config: OracleConfig,
    pub flags: StateFlags,
    pub access: AccessState,
    pub log: ObservationLog,
}

impl OracleState {
    pub fn new(owner: Principal, config: OracleConfig) -> Result<Self, OracleError> {
        config.validate()?;
        Ok(Self {
            config,
            flags: StateFlags::new(),
            access: AccessState::new(owner),
            log: ObservationLog::new(config.max_window),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct StateFlags(u32);

impl StateFlags {
    // Type-safe flag values
    pub const PAUSED: Self = Self(0b0000_0001);

    pub const VALID_MASK: u32 = Self::PAUSED.0;

    #[inline(always)]
    pub const fn new() -> Self {
        Self(0)
    }

    #[inline(always)]
    pub fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline(always)]
    pub fn set(&mut self, flag: Self) {
        self.0 |= flag.0;
    }

    #[inline(always)]
    pub fn clear(&mut self, flag: Self) {
        self.0 &= !flag.0;
    }

    #[inline(always)]
    pub fn set_to(&mut self, flag: Self, on: bool) {
        if on {
            self.set(flag)
        } else {
            self.clear(flag)
        }
    }

    // Convenience specific accessors
    #[inline(always)]
    pub fn is_paused(self) -> bool {
        self.has(Self::PAUSED)
    }

    // Conversions for embedders that persist the flag word
    #[inline(always)]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub const fn from_u32_truncate(value: u32) -> Self {
        // lenient: drop unknown bits for forward-compat reads
        Self(value & Self::VALID_MASK)
    }
}
