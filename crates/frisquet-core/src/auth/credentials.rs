use std::fmt;

use anyhow::{Context, Result};

/// Environment variable holding the account email
pub const EMAIL_ENV: &str = "FRISQUET_EMAIL";

/// Environment variable holding the account password
pub const PASSWORD_ENV: &str = "FRISQUET_PASSWORD";

/// Frisquet Connect account credentials.
///
/// Fixed for the lifetime of the client that owns them.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Read credentials from `FRISQUET_EMAIL` and `FRISQUET_PASSWORD`
    pub fn from_env() -> Result<Self> {
        let email = std::env::var(EMAIL_ENV)
            .with_context(|| format!("{} is not set", EMAIL_ENV))?;
        let password = std::env::var(PASSWORD_ENV)
            .with_context(|| format!("{} is not set", PASSWORD_ENV))?;
        Ok(Self::new(email, password))
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
