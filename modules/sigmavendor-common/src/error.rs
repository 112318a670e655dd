use thiserror::Error;

#[derive(Error, Debug)]
pub enum SigmaVendorError {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("AI search error: {0}")]
    AiSearch(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl From<serde_json::Error> for SigmaVendorError {
    fn from(e: serde_json::Error) -> Self {
        SigmaVendorError::Catalog(e.to_string())
    }
}
