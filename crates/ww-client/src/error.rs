use crate::classify_error_code;

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::StatusCode;
use thiserror::Error;
use ww_session::{AuthErrorKind, CollaboratorError};

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error: {message} (status: {status}, code: {code}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(
        status: StatusCode,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        ClientError::Api {
            status: status.as_u16(),
            code: code.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Session-level classification of this failure.
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            Self::Http { source, .. } if source.is_connect() || source.is_timeout() => {
                AuthErrorKind::NetworkUnavailable
            }
            Self::Http { .. } | Self::Json { .. } => AuthErrorKind::Unknown,
            Self::Api { status, .. } if *status == StatusCode::TOO_MANY_REQUESTS.as_u16() => {
                AuthErrorKind::RateLimited
            }
            Self::Api { code, .. } => classify_error_code(code),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

impl From<ClientError> for CollaboratorError {
    #[track_caller]
    fn from(err: ClientError) -> Self {
        CollaboratorError::new(err.kind(), err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
