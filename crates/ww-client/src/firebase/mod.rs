pub mod auth_client;
pub mod endpoints;
pub mod error_codes;

pub(crate) mod dto;

pub use auth_client::FirebaseAuthClient;
pub use endpoints::FirebaseEndpoints;
pub use error_codes::classify_error_code;
