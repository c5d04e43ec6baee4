//! Async client for the Frisquet Connect heating API.
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! let client = frisquet_core::ApiClient::new("me@example.com", "password")?;
//! for (id, name) in client.sites().await? {
//!     let data = client.get_site_data(&id).await?;
//!     println!("{name}: {} fields", data.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod models;

pub use api::{ApiClient, ApiError, FrisquetApi, DEFAULT_API_URL};
pub use auth::{Credentials, Token};
pub use config::Config;
