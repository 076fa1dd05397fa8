pub mod account_status;
pub mod address;
pub mod credential;
pub mod identity;
pub mod identity_patch;
pub mod new_identity;
pub mod property;
pub mod property_draft;
pub mod registration;
