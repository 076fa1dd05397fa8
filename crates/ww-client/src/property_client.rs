use crate::http::send_json;
use crate::{ClientResult, FirebaseAuthClient};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use ww_core::{Address, Property, PropertyDraft};
use ww_session::{CollaboratorResult, ResourceProvider};

/// HTTP client for the WaterWise properties API
pub struct PropertyClient {
    pub base_url: String,
    client: ReqwestClient,
    auth: Option<Arc<FirebaseAuthClient>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatePropertyRequest<'a> {
    owner_id: &'a str,
    name: &'a str,
    /// Single-line address, as the API lists properties by location
    location: String,
    address: AddressBody<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    area: Option<f64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddressBody<'a> {
    street: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    city: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    state: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    postal_code: Option<&'a str>,
}

impl<'a> From<&'a Address> for AddressBody<'a> {
    fn from(address: &'a Address) -> Self {
        Self {
            street: &address.street,
            city: address.city.as_deref(),
            state: address.state.as_deref(),
            postal_code: address.postal_code.as_deref(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PropertyResponse {
    id: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    area: Option<f64>,
    #[serde(default)]
    owner_id: Option<String>,
}

impl PropertyClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - API URL (e.g., "https://waterwise-api.azurewebsites.net/api")
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, timeout: Duration) -> ClientResult<Self> {
        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            auth: None,
        })
    }

    /// Sends the auth client's id token as a bearer token when it has one.
    ///
    /// Tokens are held in memory by the auth client and are not persisted
    /// with the session. A process that restored its session from storage,
    /// without signing in again, has no token and sends no bearer.
    pub fn with_auth(mut self, auth: Arc<FirebaseAuthClient>) -> Self {
        self.auth = Some(auth);
        self
    }

    pub async fn create_property(
        &self,
        owner_id: &str,
        draft: &PropertyDraft,
    ) -> ClientResult<Property> {
        let body = CreatePropertyRequest {
            owner_id,
            name: &draft.name,
            location: draft.address.to_string(),
            address: AddressBody::from(&draft.address),
            area: draft.area_ha,
        };

        let mut req = self
            .client
            .post(format!("{}/properties", self.base_url))
            .json(&body);

        if let Some(auth) = &self.auth {
            match auth.id_token().await {
                Some(token) => req = req.bearer_auth(token),
                None => debug!("No id token in this process; sending without bearer"),
            }
        }

        debug!("Creating property '{}' for {owner_id}", draft.name);
        let created: PropertyResponse = send_json(req).await?;

        Ok(Property {
            id: created.id,
            name: created.name.unwrap_or_else(|| draft.name.clone()),
            address: draft.address.clone(),
            total_area_ha: created.area.or(draft.area_ha),
            owner_id: created.owner_id.unwrap_or_else(|| owner_id.to_string()),
        })
    }
}

#[async_trait]
impl ResourceProvider for PropertyClient {
    async fn create_resource(
        &self,
        owner_id: &str,
        draft: &PropertyDraft,
    ) -> CollaboratorResult<Property> {
        let property = self.create_property(owner_id, draft).await?;
        info!("Created property {} for {owner_id}", property.id);
        Ok(property)
    }
}
