//! Identity - the signed-in principal.

use crate::{AccountStatus, IdentityPatch};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-assigned unique id
    pub id: String,
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: AccountStatus,
    #[serde(default)]
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            email: email.into(),
            phone: None,
            status: AccountStatus::Active,
            last_login_at: None,
        }
    }

    /// Field-level merge: every `Some` in the patch overwrites, `None` keeps the prior value.
    pub fn merged(&self, patch: &IdentityPatch) -> Self {
        Self {
            id: self.id.clone(),
            display_name: patch
                .display_name
                .clone()
                .unwrap_or_else(|| self.display_name.clone()),
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            phone: patch.phone.clone().or_else(|| self.phone.clone()),
            status: patch.status.unwrap_or(self.status),
            last_login_at: self.last_login_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }
}
