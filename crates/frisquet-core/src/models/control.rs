//! Zone control vocabulary.
//!
//! These describe the boiler's zone-control surface. The API client does not
//! send any of them yet; see `api::FrisquetApi`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Zone {
    Zone1,
    Zone2,
    Zone3,
}

impl Zone {
    pub fn number(&self) -> u8 {
        match self {
            Zone::Zone1 => 1,
            Zone::Zone2 => 2,
            Zone::Zone3 => 3,
        }
    }
}

impl From<Zone> for u8 {
    fn from(zone: Zone) -> Self {
        zone.number()
    }
}

impl TryFrom<u8> for Zone {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Zone::Zone1),
            2 => Ok(Zone::Zone2),
            3 => Ok(Zone::Zone3),
            other => Err(format!("invalid zone number {}", other)),
        }
    }
}

/// How long a mode change lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeChange {
    Permanent,
    UntilNextChange,
}

/// Temperature preset a setpoint applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatingMode {
    Comfort,
    Eco,
    FrostProtection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Auto,
    Comfort,
    Eco,
    FrostProtection,
}
