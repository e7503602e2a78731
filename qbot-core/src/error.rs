use thiserror::Error;

#[derive(Error, Debug)]
pub enum QbotError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Send error: {0}")]
    Send(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type Result<T> = std::result::Result<T, QbotError>;
