use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Site registry: boiler ID mapped to the site's display name
pub type Sites = HashMap<String, String>;

/// Opaque site payload returned by `GET /sites/{id}`
pub type SiteData = Map<String, Value>;

/// Opaque consumption payload returned by `GET /sites/{id}/conso`
pub type ConsumptionData = Map<String, Value>;

/// Decoded body of `POST /authentifications`.
///
/// Only the token and the site list are interpreted. Everything else the
/// server sends is kept in `extra` so callers still see the raw response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Authentication {
    pub token: String,
    pub utilisateur: AuthUser,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default)]
    pub sites: Vec<SiteSummary>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSummary {
    #[serde(rename = "identifiant_chaudiere")]
    pub id: String,
    #[serde(rename = "nom")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Authentication {
    /// Build the site registry from every site in the response
    pub fn sites(&self) -> Sites {
        self.utilisateur
            .sites
            .iter()
            .map(|site| (site.id.clone(), site.name.clone()))
            .collect()
    }
}
