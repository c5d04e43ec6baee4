//! Authentication types for the Frisquet Connect API.
//!
//! This module provides:
//! - `Credentials`: account email and password, fixed per client
//! - `Token`: the issued token and its client-assumed expiry
//!
//! Tokens live in memory only and are assumed valid for one hour.

pub mod credentials;
pub mod session;

pub use credentials::Credentials;
pub use session::{default_validity, Token, TOKEN_VALIDITY_MINUTES};
