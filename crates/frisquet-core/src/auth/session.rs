use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Assumed token lifetime in minutes.
/// The authentication response carries no expiry, so the client picks one.
pub const TOKEN_VALIDITY_MINUTES: i64 = 60;

/// Token issued by `/authentifications` plus the expiry the client assumes for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Token {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Token issued now, valid for `validity`
    pub fn issued_now(token: impl Into<String>, validity: Duration) -> Self {
        Self::new(token, Utc::now() + validity)
    }

    /// Valid only while the expiry is strictly in the future of `now`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    fn time_until_expiry(&self) -> Duration {
        self.expires_at - Utc::now()
    }

    /// Get minutes remaining until expiry (for display)
    pub fn minutes_until_expiry(&self) -> i64 {
        self.time_until_expiry().num_minutes().max(0)
    }
}

/// Default validity window applied to freshly issued tokens
pub fn default_validity() -> Duration {
    Duration::minutes(TOKEN_VALIDITY_MINUTES)
}
