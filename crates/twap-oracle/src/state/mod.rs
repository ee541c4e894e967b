pub mod access_state;
pub mod config;
pub mod observation_log;
pub mod oracle_state;

pub use access_state::*;
pub use config::*;
pub use observation_log::*;
pub use oracle_state::*;

#[cfg(test)]
pub mod state_tests;
