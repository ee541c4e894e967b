//! Time-weighted average price (TWAP) oracle accumulator.
//!
//! Ingests discrete, authorized price observations and answers
//! manipulation-resistant average-price queries over historical lookback
//! windows. The core is an append-only observation log carrying a running
//! price-time integral; around it sit an access controller, a bounded
//! per-update deviation check, and a pause/emergency-override circuit
//! breaker.
//!
//! The crate performs no I/O and reads no clock: caller identity and
//! timestamps enter as explicit arguments, which keeps every operation a
//! bounded synchronous computation and makes the whole surface testable
//! without a hosting environment.
//!
//! ```
//! use twap_oracle::{OracleConfig, Principal, TwapOracle};
//!
//! let owner = Principal::new([1; 32]);
//! let oracle = TwapOracle::new(owner, OracleConfig::default()).unwrap();
//!
//! oracle.update_price(&owner, 100, 1_000).unwrap();
//! oracle.update_price(&owner, 105, 1_600).unwrap();
//! oracle.update_price(&owner, 103, 2_200).unwrap();
//!
//! assert_eq!(oracle.latest_price().unwrap(), 103);
//! let avg = oracle.twap(1_200).unwrap();
//! assert!(avg >= 100 && avg <= 105);
//! ```

pub mod error;
pub mod oracle;
pub mod state;
pub mod utils;

pub(crate) mod ops;

pub use error::OracleError;
pub use oracle::TwapOracle;
pub use state::access_state::Principal;
pub use state::config::OracleConfig;
pub use state::observation_log::{Observation, ObservationLog};
pub use state::oracle_state::{OracleState, StateFlags};
