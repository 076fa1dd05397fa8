use crate::Address;

use serde::{Deserialize, Serialize};

/// Payload for creating a [`Property`](crate::Property).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDraft {
    pub name: String,
    pub address: Address,
    #[serde(default)]
    pub area_ha: Option<f64>,
}

impl PropertyDraft {
    pub fn new(name: impl Into<String>, address: Address, area_ha: Option<f64>) -> Self {
        Self {
            name: name.into(),
            address,
            area_ha,
        }
    }
}
