use crate::{ConfigError, ConfigErrorResult, DEFAULT_PROJECT, DEFAULT_USER_ID};

use serde::Deserialize;

/// Identity the board acts as: tasks are scoped per user and per project on
/// the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub user_id: String,
    pub project: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            user_id: String::from(DEFAULT_USER_ID),
            project: String::from(DEFAULT_PROJECT),
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.user_id.trim().is_empty() {
            return Err(ConfigError::board("board.user_id must not be empty"));
        }

        if self.project.trim().is_empty() {
            return Err(ConfigError::board("board.project must not be empty"));
        }

        Ok(())
    }
}
