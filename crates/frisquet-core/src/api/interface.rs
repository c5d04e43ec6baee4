//! Capability contract for a full Frisquet Connect client.
//!
//! Only the read side is wired up today. The control methods and the ranged
//! consumption query fail with `ApiError::NotImplemented` without touching
//! the network.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::models::{ConsumptionData, HeatingMode, Mode, ModeChange, SiteData, Zone};

use super::{ApiClient, ApiError};

#[async_trait]
pub trait FrisquetApi: Send + Sync {
    /// Set the setpoint of one preset for a zone
    async fn set_temperature(
        &self,
        site_id: &str,
        zone: Zone,
        heating_mode: HeatingMode,
        temperature: f64,
    ) -> Result<()>;

    async fn set_mode(&self, site_id: &str, zone: Zone, change: ModeChange, mode: Mode) -> Result<()>;

    /// Turn boost on and off
    async fn set_boost(&self, site_id: &str, zone: Zone, on: bool) -> Result<()>;

    async fn get_consumption_data(
        &self,
        site_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ConsumptionData>;

    /// Current authentication token
    async fn get_authentication(&self) -> Result<String>;

    async fn get_site_data(&self, site_id: &str) -> Result<SiteData>;
}

#[async_trait]
impl FrisquetApi for ApiClient {
    async fn set_temperature(
        &self,
        site_id: &str,
        zone: Zone,
        heating_mode: HeatingMode,
        temperature: f64,
    ) -> Result<()> {
        debug!(site_id, zone = zone.number(), ?heating_mode, temperature, "Temperature change requested");
        Err(ApiError::NotImplemented("Temperature setting").into())
    }

    async fn set_mode(&self, site_id: &str, zone: Zone, change: ModeChange, mode: Mode) -> Result<()> {
        debug!(site_id, zone = zone.number(), ?change, ?mode, "Mode change requested");
        Err(ApiError::NotImplemented("Mode setting").into())
    }

    async fn set_boost(&self, site_id: &str, zone: Zone, on: bool) -> Result<()> {
        debug!(site_id, zone = zone.number(), on, "Boost change requested");
        Err(ApiError::NotImplemented("Boost").into())
    }

    async fn get_consumption_data(
        &self,
        site_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<ConsumptionData> {
        debug!(site_id, %start, %end, "Ranged consumption requested");
        Err(ApiError::NotImplemented("Consumption by date range").into())
    }

    async fn get_authentication(&self) -> Result<String> {
        self.token().await
    }

    async fn get_site_data(&self, site_id: &str) -> Result<SiteData> {
        ApiClient::get_site_data(self, site_id).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const SITE_ID: &str = "23425231180423";

    fn as_api(client: &ApiClient) -> &dyn FrisquetApi {
        client
    }

    #[tokio::test]
    async fn test_control_methods_not_implemented() {
        let server = MockServer::start().await;
        let client = ApiClient::with_url("a@b.c", "pw", &server.uri()).unwrap();
        let api = as_api(&client);

        let results = vec![
            api.set_temperature(SITE_ID, Zone::Zone1, HeatingMode::Comfort, 20.0).await,
            api.set_mode(SITE_ID, Zone::Zone2, ModeChange::Permanent, Mode::Eco).await,
            api.set_boost(SITE_ID, Zone::Zone3, true).await,
        ];
        for result in results {
            let err = result.unwrap_err();
            assert!(err.downcast_ref::<ApiError>().is_some_and(ApiError::is_not_implemented));
        }

        let now = Utc::now();
        let err = api
            .get_consumption_data(SITE_ID, now - Duration::days(7), now)
            .await
            .unwrap_err();
        assert!(err.downcast_ref::<ApiError>().is_some_and(ApiError::is_not_implemented));

        assert!(server.received_requests().await.unwrap_or_default().is_empty());
    }

    #[tokio::test]
    async fn test_read_methods_go_through_client() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/authentifications"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "token": "tok",
                "utilisateur": {"sites": [{"identifiant_chaudiere": SITE_ID, "nom": "Maison"}]}
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/sites/{}", SITE_ID)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"nom": "Maison"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::with_url("a@b.c", "pw", &server.uri()).unwrap();
        let api = as_api(&client);

        assert_eq!(api.get_authentication().await.unwrap(), "tok");
        let data = api.get_site_data(SITE_ID).await.unwrap();
        assert_eq!(data.get("nom"), Some(&json!("Maison")));
    }
}
