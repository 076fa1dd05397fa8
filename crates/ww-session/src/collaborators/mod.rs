pub mod auth_provider;
pub mod durable_storage;
pub mod resource_provider;

pub use auth_provider::AuthProvider;
pub use durable_storage::DurableStorage;
pub use resource_provider::ResourceProvider;
