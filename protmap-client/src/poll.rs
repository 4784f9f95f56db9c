//! Polling policy for job status checks
//!
//! Bounds the status-polling loop: a maximum number of polls with either a
//! fixed delay or a capped doubling backoff between them. The policy is
//! injected into the client at construction, never read from globals.

use std::time::Duration;

use crate::error::{ClientError, Result};

/// Growth of the delay between consecutive polls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backoff {
    /// Same delay before every retry
    Fixed,
    /// Delay doubles after each retry, capped at `max_interval`
    Exponential { max_interval: Duration },
}

/// Bounded retry policy for `await_completion`.
///
/// `max_attempts` counts status polls, so the worst-case wall-clock wait is
/// the sum of `delay(1..max_attempts)` plus the request round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollPolicy {
    /// Delay before the first retry
    pub interval: Duration,
    /// Maximum number of status polls before giving up
    pub max_attempts: u32,
    /// Delay growth across retries
    pub backoff: Backoff,
}

// Doubling past 2^16 would dwarf any sane max_interval anyway.
const MAX_DOUBLINGS: u32 = 16;

impl PollPolicy {
    /// Policy with a constant delay between polls.
    pub fn fixed(interval: Duration, max_attempts: u32) -> Self {
        Self {
            interval,
            max_attempts,
            backoff: Backoff::Fixed,
        }
    }

    /// Policy whose delay doubles after each poll, capped at `max_interval`.
    pub fn exponential(interval: Duration, max_attempts: u32, max_interval: Duration) -> Self {
        Self {
            interval,
            max_attempts,
            backoff: Backoff::Exponential { max_interval },
        }
    }

    /// Delay to sleep after the `attempt`-th pending poll (1-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        match self.backoff {
            Backoff::Fixed => self.interval,
            Backoff::Exponential { max_interval } => {
                let doublings = attempt.saturating_sub(1).min(MAX_DOUBLINGS);
                let scaled = self.interval.saturating_mul(1 << doublings);
                scaled.min(max_interval)
            }
        }
    }

    /// Validates the policy.
    pub fn validate(&self) -> Result<()> {
        if self.max_attempts == 0 {
            return Err(ClientError::InvalidConfig(
                "max_attempts must be greater than 0".to_string(),
            ));
        }

        if self.interval.is_zero() {
            return Err(ClientError::InvalidConfig(
                "poll interval must be greater than 0".to_string(),
            ));
        }

        if let Backoff::Exponential { max_interval } = self.backoff {
            if max_interval < self.interval {
                return Err(ClientError::InvalidConfig(
                    "max_interval must not be smaller than the initial interval".to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl Default for PollPolicy {
    /// 120 polls, one second apart.
    fn default() -> Self {
        Self::fixed(Duration::from_secs(1), 120)
    }
}
