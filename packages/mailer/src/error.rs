use thiserror::Error;

pub type Result<T> = std::result::Result<T, MailerError>;

#[derive(Debug, Error)]
pub enum MailerError {
    /// Required sender settings are missing. Raised before any connection attempt.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid address: {0}")]
    Address(String),

    #[error("Failed to build message: {0}")]
    Build(String),

    /// Session setup, authentication or submission failed
    #[error("SMTP transport error: {0}")]
    Transport(String),
}

impl From<lettre::address::AddressError> for MailerError {
    fn from(err: lettre::address::AddressError) -> Self {
        Self::Address(err.to_string())
    }
}

impl From<lettre::error::Error> for MailerError {
    fn from(err: lettre::error::Error) -> Self {
        Self::Build(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for MailerError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        Self::Transport(err.to_string())
    }
}
