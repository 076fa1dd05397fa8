pub mod error;
pub mod models;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::account_status::AccountStatus;
pub use models::address::Address;
pub use models::credential::Credential;
pub use models::identity::Identity;
pub use models::identity_patch::IdentityPatch;
pub use models::new_identity::NewIdentity;
pub use models::property::Property;
pub use models::property_draft::PropertyDraft;
pub use models::registration::Registration;
pub use validation::registration_validator::RegistrationValidator;

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LENGTH: usize = 6;
/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

#[cfg(test)]
mod tests;
