use thiserror::Error;

#[derive(Error, Debug)]
pub enum MintError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("serial issuance error: {0}")]
    SerialError(String),
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
}

pub type Result<T> = std::result::Result<T, MintError>;
