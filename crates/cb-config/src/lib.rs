mod board_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use board_config::BoardConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_USER_ID: &str = "local";
const DEFAULT_PROJECT: &str = "default";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

#[cfg(test)]
mod tests;
