use thiserror::Error;

/// Failure taxonomy for every oracle operation.
///
/// All failures are synchronous and all-or-nothing: a rejected call appends
/// no observation and changes no state field. There is no fatal class; the
/// emergency update path is the designated operator escape hatch when the
/// bounded path itself is the obstacle.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum OracleError {
    /// Caller is neither the owner nor an authorized updater.
    #[error("caller is not authorized to submit price updates")]
    Unauthorized,

    /// Operation is reserved for the owner.
    #[error("caller is not the oracle owner")]
    NotOwner,

    /// Circuit breaker is engaged; the normal update path is closed.
    #[error("oracle is paused")]
    Paused,

    /// Candidate price moved further from the previous accepted price than
    /// the configured bound allows.
    #[error("price deviation {deviation_bps} bps exceeds maximum {max_deviation_bps} bps")]
    DeviationExceeded {
        deviation_bps: u128,
        max_deviation_bps: u16,
    },

    /// A submitted value is outside its valid domain (non-positive price,
    /// zero window, out-of-range configuration, ...).
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// Submitted timestamp does not strictly increase over the last
    /// accepted observation.
    #[error("timestamp {submitted} does not advance past last observation at {last}")]
    NonMonotonicTime { last: i64, submitted: i64 },

    /// No observation has ever been accepted.
    #[error("no observations recorded")]
    EmptyHistory,

    /// The requested range reaches back before the oldest retained
    /// observation.
    #[error("not enough history to cover the requested range")]
    InsufficientHistory,
}
