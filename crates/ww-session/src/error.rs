use crate::{AuthErrorKind, CollaboratorError};

use std::panic::Location;

use error_location::ErrorLocation;
use log::warn;
use thiserror::Error;

/// Errors returned by [`SessionStore`](crate::SessionStore) operations.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid credential {location}")]
    InvalidCredential { location: ErrorLocation },

    #[error("Principal not found {location}")]
    PrincipalNotFound { location: ErrorLocation },

    #[error("Principal already exists {location}")]
    PrincipalAlreadyExists { location: ErrorLocation },

    #[error("Rate limited by identity provider {location}")]
    RateLimited { location: ErrorLocation },

    #[error("Network unavailable {location}")]
    NetworkUnavailable { location: ErrorLocation },

    #[error("Resource creation failed for identity {identity_id} {location}")]
    ResourceCreationFailed {
        identity_id: String,
        location: ErrorLocation,
    },

    #[error("No active session {location}")]
    NoActiveSession { location: ErrorLocation },

    #[error("Unknown authentication failure {location}")]
    Unknown { location: ErrorLocation },
}

impl AuthError {
    pub fn kind(&self) -> AuthErrorKind {
        match self {
            Self::InvalidCredential { .. } => AuthErrorKind::InvalidCredential,
            Self::PrincipalNotFound { .. } => AuthErrorKind::PrincipalNotFound,
            Self::PrincipalAlreadyExists { .. } => AuthErrorKind::PrincipalAlreadyExists,
            Self::RateLimited { .. } => AuthErrorKind::RateLimited,
            Self::NetworkUnavailable { .. } => AuthErrorKind::NetworkUnavailable,
            Self::ResourceCreationFailed { .. } => AuthErrorKind::ResourceCreationFailed,
            Self::NoActiveSession { .. } => AuthErrorKind::NoActiveSession,
            Self::Unknown { .. } => AuthErrorKind::Unknown,
        }
    }

    /// Message safe to show to the user.
    pub fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }

    /// Classifies a collaborator failure, logging its detail.
    ///
    /// `ResourceCreationFailed` and `NoActiveSession` are store-level outcomes;
    /// a collaborator reporting them is treated as `Unknown`.
    #[track_caller]
    pub fn from_collaborator(error: CollaboratorError) -> Self {
        warn!("Identity provider failure ({}): {}", error.kind, error.detail);

        let location = ErrorLocation::from(Location::caller());
        match error.kind {
            AuthErrorKind::InvalidCredential => Self::InvalidCredential { location },
            AuthErrorKind::PrincipalNotFound => Self::PrincipalNotFound { location },
            AuthErrorKind::PrincipalAlreadyExists => Self::PrincipalAlreadyExists { location },
            AuthErrorKind::RateLimited => Self::RateLimited { location },
            AuthErrorKind::NetworkUnavailable => Self::NetworkUnavailable { location },
            AuthErrorKind::ResourceCreationFailed
            | AuthErrorKind::NoActiveSession
            | AuthErrorKind::Unknown => Self::Unknown { location },
        }
    }

    /// Creates ResourceCreationFailed error at caller location.
    #[track_caller]
    pub fn resource_creation_failed(identity_id: impl Into<String>) -> Self {
        Self::ResourceCreationFailed {
            identity_id: identity_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates NoActiveSession error at caller location.
    #[track_caller]
    pub fn no_active_session() -> Self {
        Self::NoActiveSession {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
