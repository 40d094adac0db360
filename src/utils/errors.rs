use thiserror::Error;

#[derive(Error, Debug)]
pub enum CertCheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Key Vault API error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("Certificate not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CertCheckError>;
