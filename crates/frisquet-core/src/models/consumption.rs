use serde::{Deserialize, Serialize};

/// Energy usage categories accepted by the `types[]` consumption filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConsumptionType {
    /// Space heating ("chauffage")
    #[serde(rename = "CHF")]
    Heating,
    /// Domestic hot water ("sanitaire")
    #[serde(rename = "SAN")]
    DomesticHotWater,
}

impl ConsumptionType {
    pub const ALL: [ConsumptionType; 2] = [ConsumptionType::Heating, ConsumptionType::DomesticHotWater];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsumptionType::Heating => "CHF",
            ConsumptionType::DomesticHotWater => "SAN",
        }
    }
}
