//! REST API client module for Frisquet Connect.
//!
//! This module provides the `ApiClient` for logging in to the Frisquet
//! Connect cloud and fetching site and consumption data, plus the
//! `FrisquetApi` trait describing the full control surface.
//!
//! The API authenticates with a token passed as a `token` query parameter,
//! obtained from the `/authentifications` endpoint.

pub mod client;
pub mod error;
pub mod interface;

pub use client::{ApiClient, DEFAULT_API_URL};
pub use error::ApiError;
pub use interface::FrisquetApi;
