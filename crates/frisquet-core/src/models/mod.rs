//! Data models for Frisquet Connect payloads.
//!
//! - `Authentication`, `SiteSummary`: the login response and its site list
//! - `Sites`, `SiteData`, `ConsumptionData`: registry and opaque payloads
//! - `ConsumptionType`: consumption filter codes
//! - `Zone`, `ModeChange`, `HeatingMode`, `Mode`: zone control vocabulary

pub mod consumption;
pub mod control;
pub mod site;

pub use consumption::ConsumptionType;
pub use control::{HeatingMode, Mode, ModeChange, Zone};
pub use site::{AuthUser, Authentication, ConsumptionData, SiteData, SiteSummary, Sites};
