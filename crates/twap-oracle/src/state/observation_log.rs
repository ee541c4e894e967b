//! Append-only observation log with a running price-time integral.
//!
//! Each accepted observation stores the integral of the piecewise-constant
//! price function up to its timestamp (the price is held constant between
//! two observations). Differencing the integral at two instants and dividing
//! by the elapsed time yields the TWAP between them, which is what makes the
//! log manipulation-resistant: moving the average requires sustained price
//! movement, not a single spike.
//!
//! The integral is carried in `U256`. With prices capped at [`MAX_PRICE`]
//! (2^96) and timestamps confined to `i64`, the integral is bounded by
//! `2^96 * 2^63 = 2^159`, so the arithmetic below cannot overflow.

use crate::error::OracleError;
use crate::utils::constants::MAX_PRICE;
use ethnum::U256;
use std::collections::VecDeque;

/// One accepted price observation.
///
/// Observations are created only by a successful update call and are never
/// mutated afterwards; eviction removes whole entries from the front of the
/// log and nothing else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Observation {
    /// Seconds. Strictly increasing across the log; zero is reserved as the
    /// uninitialized sentinel and never stored.
    pub timestamp: i64,
    /// Strictly positive, at most [`MAX_PRICE`].
    pub price: u128,
    /// Integral of the piecewise-constant price over time since the first
    /// observation. Zero for the first observation.
    pub cumulative_price: U256,
    /// Elapsed seconds since the first observation ever appended (the
    /// genesis timestamp survives eviction).
    pub cumulative_time: u64,
}

/// Validates a submitted price magnitude. Shared between the log itself and
/// the update pipelines, which surface bad input before running the
/// deviation bound.
pub(crate) fn validate_price(price: u128) -> Result<(), OracleError> {
    if price == 0 {
        return Err(OracleError::InvalidInput("price must be positive"));
    }
    if price > MAX_PRICE {
        return Err(OracleError::InvalidInput("price exceeds maximum magnitude"));
    }
    Ok(())
}

/// Bounded, ordered log of observations.
///
/// Retention is time-based rather than capacity-based: after every append the
/// front is trimmed so that exactly one entry at or before
/// `latest - max_window` remains (the margin entry needed to interpolate the
/// cumulative integral at the window cutoff). Queries reaching further back
/// than the oldest retained entry report `InsufficientHistory`.
#[derive(Clone, Debug)]
pub struct ObservationLog {
    points: VecDeque<Observation>,
    max_window: u64,
    genesis: Option<i64>,
}

impl ObservationLog {
    pub fn new(max_window: u64) -> Self {
        Self {
            points: VecDeque::new(),
            max_window,
            genesis: None,
        }
    }

    /// Appends an observation, computing its cumulative fields from the
    /// previous entry, then evicts entries no reachable query depends on.
    ///
    /// Fails with `InvalidInput` on a non-positive or oversized price or a
    /// non-positive timestamp, and with `NonMonotonicTime` if the timestamp
    /// does not strictly advance. Nothing is stored on failure.
    pub fn append(&mut self, price: u128, timestamp: i64) -> Result<Observation, OracleError> {
        validate_price(price)?;
        if timestamp <= 0 {
            return Err(OracleError::InvalidInput("timestamp must be positive"));
        }

        let observation = match self.points.back() {
            Some(last) => {
                if timestamp <= last.timestamp {
                    return Err(OracleError::NonMonotonicTime {
                        last: last.timestamp,
                        submitted: timestamp,
                    });
                }
                let held_for = (timestamp - last.timestamp) as u128;
                let genesis = self.genesis.unwrap_or(last.timestamp);
                Observation {
                    timestamp,
                    price,
                    cumulative_price: last.cumulative_price
                        + U256::from(last.price) * U256::from(held_for),
                    cumulative_time: (timestamp - genesis) as u64,
                }
            }
            None => {
                self.genesis = Some(timestamp);
                Observation {
                    timestamp,
                    price,
                    cumulative_price: U256::new(0),
                    cumulative_time: 0,
                }
            }
        };

        self.points.push_back(observation);
        self.trim_expired(timestamp);
        Ok(observation)
    }

    /// Most recent observation, if any.
    pub fn latest(&self) -> Option<&Observation> {
        self.points.back()
    }

    /// Oldest retained observation, if any.
    pub fn oldest(&self) -> Option<&Observation> {
        self.points.front()
    }

    /// The cumulative price integral evaluated at `target`, interpolating
    /// with the price held during the bracketing interval. Valid for any
    /// instant at or after the oldest retained observation, including
    /// instants past the latest one.
    pub fn cumulative_at(&self, target: i64) -> Result<U256, OracleError> {
        if self.points.is_empty() {
            return Err(OracleError::EmptyHistory);
        }
        // Index of the first entry strictly after `target`; the entry before
        // it holds the price in effect at `target`.
        let idx = self.points.partition_point(|o| o.timestamp <= target);
        if idx == 0 {
            return Err(OracleError::InsufficientHistory);
        }
        let lo = &self.points[idx - 1];
        let held_for = (target - lo.timestamp) as u128;
        Ok(lo.cumulative_price + U256::from(lo.price) * U256::from(held_for))
    }

    /// TWAP over the trailing `window` seconds ending at the latest
    /// observation. Division truncates toward zero.
    pub fn twap(&self, window: u64) -> Result<u128, OracleError> {
        if window == 0 {
            return Err(OracleError::InvalidInput("window must be positive"));
        }
        if window > self.max_window {
            return Err(OracleError::InvalidInput(
                "window exceeds maximum supported window",
            ));
        }
        let last = self.points.back().ok_or(OracleError::EmptyHistory)?;
        let now = last.timestamp;
        let cutoff = now.saturating_sub(i64::try_from(window).unwrap_or(i64::MAX));

        // cumulative_at(now) is exactly the latest entry's integral.
        let delta = last.cumulative_price - self.cumulative_at(cutoff)?;

        // The average over the window is bounded by the largest price held
        // inside it, so the quotient always fits in u128.
        Ok((delta / U256::from(window as u128)).as_u128())
    }

    /// Number of retained observations.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Retention bound this log was constructed with.
    pub fn max_window(&self) -> u64 {
        self.max_window
    }

    /// Timestamp of the first observation ever appended, evicted or not.
    pub fn genesis_timestamp(&self) -> Option<i64> {
        self.genesis
    }

    /// Iterates retained observations oldest-first.
    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.points.iter()
    }

    // Drops front entries once the entry behind them is itself at or before
    // the retention cutoff, leaving exactly one margin entry for cutoff
    // interpolation.
    fn trim_expired(&mut self, now: i64) {
        let horizon = i64::try_from(self.max_window).unwrap_or(i64::MAX);
        let cutoff = now.saturating_sub(horizon);
        while self.points.len() > 1 && self.points[1].timestamp <= cutoff {
            self.points.pop_front();
        }
    }
}
