//! Property - the rural property record owned by an identity.

use crate::Address;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: Address,
    /// Total area in hectares
    #[serde(default)]
    pub total_area_ha: Option<f64>,
    /// Id of the owning identity
    pub owner_id: String,
}

impl Property {
    pub fn is_owned_by(&self, identity_id: &str) -> bool {
        self.owner_id == identity_id
    }
}
