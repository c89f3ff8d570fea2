use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Telegram request failed: {0}")]
    Telegram(#[from] reqwest::Error),
}

impl RelayError {
    pub fn config(message: impl Into<String>) -> Self {
        RelayError::Config { message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, RelayError>;
