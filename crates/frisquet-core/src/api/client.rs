//! API client for communicating with the Frisquet Connect REST API.
//!
//! `ApiClient` logs in lazily, caches the issued token for an assumed hour,
//! and attaches it as a `token` query parameter to site and consumption
//! requests.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use reqwest::{header, Client};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::auth::{default_validity, Credentials, Token};
use crate::models::{Authentication, ConsumptionData, ConsumptionType, SiteData, Sites};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Base URL of the Frisquet Connect API
pub const DEFAULT_API_URL: &str = "https://fcutappli.frisquet.com/api/v1";

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Locale sent with the login request
const AUTH_LOCALE: &str = "fr";

/// Client type the login endpoint expects
const AUTH_CLIENT_TYPE: &str = "IOS";

#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    locale: &'a str,
    email: &'a str,
    password: &'a str,
    type_client: &'a str,
}

#[derive(Debug, Default)]
struct SessionState {
    token: Option<Token>,
    sites: Option<Sites>,
}

/// API client for Frisquet Connect.
/// Clones share the connection pool, the cached session and the login guard.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    credentials: Credentials,
    base_url: String,
    token_validity: Duration,
    state: Arc<RwLock<SessionState>>,
    /// Held for the whole login round trip so concurrent refreshes collapse into one
    auth_lock: Arc<Mutex<()>>,
}

impl ApiClient {
    /// Create a client against the production API
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self> {
        Self::with_url(email, password, DEFAULT_API_URL)
    }

    /// Create a client against a custom base URL (trailing slashes are stripped)
    pub fn with_url(
        email: impl Into<String>,
        password: impl Into<String>,
        url: &str,
    ) -> Result<Self> {
        Self::from_credentials(Credentials::new(email, password), url)
    }

    pub fn from_credentials(credentials: Credentials, url: &str) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            credentials,
            base_url: url.trim_end_matches('/').to_string(),
            token_validity: default_validity(),
            state: Arc::new(RwLock::new(SessionState::default())),
            auth_lock: Arc::new(Mutex::new(())),
        })
    }

    /// Override how long a freshly issued token is trusted
    pub fn with_token_validity(mut self, validity: Duration) -> Self {
        self.token_validity = validity;
        self
    }

    /// Seed the cache with a token obtained elsewhere.
    /// The site registry is left untouched.
    pub fn set_token(&self, token: Token) {
        self.write_state().token = Some(token);
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn email(&self) -> &str {
        self.credentials.email()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn read_state(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ===== Session =====

    /// Log in and return the decoded response. Never retried.
    pub async fn get_authentication(&self) -> Result<Authentication> {
        let url = self.url("/authentifications");
        let body = AuthRequest {
            locale: AUTH_LOCALE,
            email: self.credentials.email(),
            password: self.credentials.password(),
            type_client: AUTH_CLIENT_TYPE,
        };

        debug!(email = self.credentials.email(), "Authenticating with Frisquet Connect");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from)
            .context("Failed to send authentication request")?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .map_err(ApiError::from_decode)
            .context("Failed to parse authentication response")
    }

    /// Authenticate and replace the cached token and site registry
    pub async fn initialise(&self) -> Result<()> {
        let _guard = self.auth_lock.lock().await;
        self.initialise_locked().await.map(|_| ())
    }

    /// Caller must hold `auth_lock`. Returns the new token.
    async fn initialise_locked(&self) -> Result<String> {
        let auth = self.get_authentication().await?;
        let sites = auth.sites();
        let token = Token::issued_now(auth.token, self.token_validity);
        info!(
            sites = sites.len(),
            valid_minutes = token.minutes_until_expiry(),
            "Authenticated with Frisquet Connect"
        );

        let value = token.token.clone();

        let mut state = self.write_state();
        state.token = Some(token);
        state.sites = Some(sites);
        Ok(value)
    }

    /// Whether the site registry has been populated at least once
    pub fn initialised(&self) -> bool {
        self.read_state().sites.is_some()
    }

    fn cached_token(&self) -> Option<String> {
        let now = Utc::now();
        self.read_state()
            .token
            .as_ref()
            .filter(|t| t.is_valid_at(now))
            .map(|t| t.token.clone())
    }

    fn cached_sites(&self) -> Option<Sites> {
        let now = Utc::now();
        let state = self.read_state();
        match (&state.token, &state.sites) {
            (Some(token), Some(sites)) if token.is_valid_at(now) => Some(sites.clone()),
            _ => None,
        }
    }

    /// Current token, logging in first if none is cached or it has expired
    pub async fn token(&self) -> Result<String> {
        if let Some(token) = self.cached_token() {
            return Ok(token);
        }

        let _guard = self.auth_lock.lock().await;
        // Another caller may have logged in while we waited
        if let Some(token) = self.cached_token() {
            return Ok(token);
        }

        debug!("Token missing or expired, re-authenticating");
        self.initialise_locked().await
    }

    /// Boiler ID to site name, logging in first if the registry is empty
    /// or the token behind it has expired
    pub async fn sites(&self) -> Result<Sites> {
        if let Some(sites) = self.cached_sites() {
            return Ok(sites);
        }

        let _guard = self.auth_lock.lock().await;
        if let Some(sites) = self.cached_sites() {
            return Ok(sites);
        }

        debug!("Site registry missing or stale, re-authenticating");
        self.initialise_locked().await?;
        Ok(self.read_state().sites.clone().unwrap_or_default())
    }

    async fn ensure_known_site(&self, site_id: &str) -> Result<()> {
        if self.sites().await?.contains_key(site_id) {
            Ok(())
        } else {
            Err(ApiError::UnknownSite(site_id.to_string()).into())
        }
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    /// Authenticated GET. The token travels in the query string, so transport
    /// errors are stripped of their URL before they are surfaced.
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let token = self.token().await?;
        let url = self.url(path);

        debug!(path = path, "GET");

        let response = self
            .client
            .get(&url)
            .query(&[("token", token.as_str())])
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::from(e.without_url()))
            .with_context(|| format!("Failed to send GET request to {}", path))?;

        let response = Self::check_response(response).await?;

        response
            .json()
            .await
            .map_err(ApiError::from_decode)
            .with_context(|| format!("Failed to parse JSON response from {}", path))
    }

    // ===== Data Fetching Methods =====

    /// Fetch the full payload for one site (zones, hot water, boiler state)
    pub async fn get_site_data(&self, site_id: &str) -> Result<SiteData> {
        self.ensure_known_site(site_id).await?;
        self.get(&format!("/sites/{}", site_id), &[]).await
    }

    /// Fetch heating and hot water consumption for one site
    pub async fn get_consumption(&self, site_id: &str) -> Result<ConsumptionData> {
        self.ensure_known_site(site_id).await?;

        let filters: Vec<(&str, &str)> = ConsumptionType::ALL
            .iter()
            .map(|kind| ("types[]", kind.as_str()))
            .collect();

        self.get(&format!("/sites/{}/conso", site_id), &filters).await
    }

    // ===== Zone Control =====

    pub async fn set_zone_temperature(
        &self,
        site_id: &str,
        zone_id: &str,
        temperature: f64,
    ) -> Result<()> {
        debug!(site_id, zone_id, temperature, "Zone temperature change requested");
        Err(ApiError::NotImplemented("Temperature setting").into())
    }

    pub async fn set_zone_mode(&self, site_id: &str, zone_id: &str, mode: &str) -> Result<()> {
        debug!(site_id, zone_id, mode, "Zone mode change requested");
        Err(ApiError::NotImplemented("Mode setting").into())
    }
}
