use thiserror::Error;

#[derive(Error, Debug)]
pub enum RentzError {
    #[error("Listing not found: {0}")]
    ListingNotFound(usize),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RentzError>;
