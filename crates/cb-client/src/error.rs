use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("API error ({status}): {message} {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Response decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api(status: u16, message: String) -> Self {
        ClientError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a decode error with location
    #[track_caller]
    pub fn decode<S: Into<String>>(message: S) -> Self {
        ClientError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Errors surfaced by the board service: either the input was rejected
/// before any call was made, or the gateway failed and the optimistic local
/// change was rolled back.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Core(#[from] cb_core::CoreError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Task {id} not found")]
    TaskNotFound { id: cb_core::TaskId },
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
