//! HTTP collaborators for the WaterWise session store.
//!
//! [`FirebaseAuthClient`] authenticates against the Firebase Identity Toolkit
//! REST API and [`PropertyClient`] creates properties on the WaterWise API.

pub(crate) mod error;
pub(crate) mod http;

pub mod firebase;
pub mod property_client;

#[cfg(test)]
mod tests;

pub use error::{ClientError, Result as ClientResult};
pub use firebase::{FirebaseAuthClient, FirebaseEndpoints, classify_error_code};
pub use property_client::PropertyClient;
