use crate::api_config::is_http_url;
use crate::{ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_BASE_URL, DEFAULT_TOKEN_BASE_URL};

use serde::Deserialize;

/// Identity provider settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Web API key of the identity provider project
    pub api_key: Option<String>,
    pub identity_base_url: String,
    pub token_base_url: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            identity_base_url: String::from(DEFAULT_IDENTITY_BASE_URL),
            token_base_url: String::from(DEFAULT_TOKEN_BASE_URL),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(key) = &self.api_key
            && key.trim().is_empty()
        {
            return Err(ConfigError::auth("auth.api_key cannot be empty when set"));
        }

        for (name, url) in [
            ("auth.identity_base_url", &self.identity_base_url),
            ("auth.token_base_url", &self.token_base_url),
        ] {
            if !is_http_url(url) {
                return Err(ConfigError::auth(format!(
                    "{name} must start with http:// or https://, got '{url}'"
                )));
            }
        }

        Ok(())
    }

    /// Returns the API key or an error naming how to provide it.
    pub fn require_api_key(&self) -> ConfigErrorResult<&str> {
        self.api_key.as_deref().ok_or_else(|| {
            ConfigError::auth("auth.api_key is not set (config.toml or WW_AUTH_API_KEY)")
        })
    }
}
