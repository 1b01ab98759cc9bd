//! Login session expiry tracking.
//!
//! The session is a plain value holding its expiry instant. The embedding
//! application owns the timer: it polls [`SessionExpiry::status`] and sleeps
//! for whatever [`SessionExpiry::next_check_in`] returns, which is
//! `check_interval` while active and `warning_refresh` once a warning shows.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct ExpiryPolicy {
    /// Remaining time at or under which the driver is warned.
    pub warn_before: Duration,
    /// How often the embedding application should check for expiry.
    pub check_interval: Duration,
    /// How often a shown warning should be recomputed.
    pub warning_refresh: Duration,
}

impl Default for ExpiryPolicy {
    fn default() -> Self {
        Self {
            warn_before: Duration::minutes(5),
            check_interval: Duration::seconds(60),
            warning_refresh: Duration::seconds(30),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionStatus {
    Active,
    ExpiringSoon { minutes_left: i64 },
    Expired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionExpiry {
    expires_at: DateTime<Utc>,
}

impl SessionExpiry {
    pub fn new(expires_at: DateTime<Utc>) -> Self {
        Self { expires_at }
    }

    /// Builds the session from a token `exp` claim (unix seconds).
    ///
    /// Returns `None` when the claim is out of chrono's representable range.
    pub fn from_exp_claim(exp: i64) -> Option<Self> {
        Utc.timestamp_opt(exp, 0).single().map(Self::new)
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Time left before expiry, never negative.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }

    pub fn status(&self, now: DateTime<Utc>, policy: &ExpiryPolicy) -> SessionStatus {
        if self.is_expired(now) {
            return SessionStatus::Expired;
        }

        let remaining = self.remaining(now);
        if remaining <= policy.warn_before {
            SessionStatus::ExpiringSoon {
                minutes_left: remaining.num_minutes(),
            }
        } else {
            SessionStatus::Active
        }
    }

    /// How long the caller should wait before polling again.
    ///
    /// Never past the expiry instant, so the poll that sees `Expired` lands
    /// on time. `None` once the session has expired.
    pub fn next_check_in(&self, now: DateTime<Utc>, policy: &ExpiryPolicy) -> Option<Duration> {
        let interval = match self.status(now, policy) {
            SessionStatus::Expired => return None,
            SessionStatus::ExpiringSoon { .. } => policy.warning_refresh,
            SessionStatus::Active => policy.check_interval,
        };
        Some(interval.min(self.remaining(now)))
    }

    /// Warning text while the session is about to expire.
    ///
    /// Nothing is returned for an active or expired session, nor in the final
    /// minute when the whole-minute count has dropped to zero.
    pub fn warning_message(&self, now: DateTime<Utc>, policy: &ExpiryPolicy) -> Option<String> {
        match self.status(now, policy) {
            SessionStatus::ExpiringSoon { minutes_left } if minutes_left > 0 => Some(format!(
                "Your session will expire in {} minute{}!",
                minutes_left,
                if minutes_left == 1 { "" } else { "s" }
            )),
            _ => None,
        }
    }
}
