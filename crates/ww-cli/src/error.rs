use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;
use ww_client::ClientError;
use ww_config::ConfigError;
use ww_core::CoreError;
use ww_session::AuthError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Validation(#[from] CoreError),

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl CliError {
    /// Creates a Logger error at caller location.
    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text printed to stderr.
    pub fn user_message(&self) -> String {
        match self {
            Self::Auth(e) => e.user_message().to_string(),
            Self::Validation(CoreError::Validation { field, message, .. }) => {
                format!("{field}: {message}")
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
