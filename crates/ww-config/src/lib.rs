mod api_config;
mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

pub use api_config::ApiConfig;
pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

const CONFIG_DIR_ENV: &str = "WW_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".waterwise";
const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_API_BASE_URL: &str = "https://waterwise-api.azurewebsites.net/api";
const DEFAULT_API_TIMEOUT_SECS: u64 = 10;
const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
const DEFAULT_TOKEN_BASE_URL: &str = "https://securetoken.googleapis.com/v1";
const DEFAULT_STORAGE_DIR: &str = "session";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
