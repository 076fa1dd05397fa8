use crate::AuthErrorKind;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure reported by a collaborator (identity provider, resource API).
///
/// `detail` is diagnostic text for logs. The store keeps only `kind`.
#[derive(Error, Debug)]
#[error("{kind}: {detail} {location}")]
pub struct CollaboratorError {
    pub kind: AuthErrorKind,
    pub detail: String,
    pub location: ErrorLocation,
}

impl CollaboratorError {
    #[track_caller]
    pub fn new(kind: AuthErrorKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn network(detail: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::NetworkUnavailable, detail)
    }

    #[track_caller]
    pub fn unknown(detail: impl Into<String>) -> Self {
        Self::new(AuthErrorKind::Unknown, detail)
    }
}

pub type CollaboratorResult<T> = std::result::Result<T, CollaboratorError>;
