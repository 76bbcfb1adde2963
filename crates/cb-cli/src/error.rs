use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] cb_config::ConfigError),

    #[error(transparent)]
    Core(#[from] cb_core::CoreError),

    #[error(transparent)]
    Service(#[from] cb_client::ServiceError),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Usage(String),
}

pub type CliResult<T> = std::result::Result<T, CliError>;
