use crate::{ConfigError, ConfigErrorResult, DEFAULT_SERVER_URL};

use serde::Deserialize;

/// Where the task backend lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: String::from(DEFAULT_SERVER_URL),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::server("server.url must not be empty"));
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::server(format!(
                "server.url must start with http:// or https://, got '{}'",
                self.url
            )));
        }

        Ok(())
    }
}
