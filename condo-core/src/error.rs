use thiserror::Error;

#[derive(Error, Debug)]
pub enum CondoError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of document resolution. `UnknownUnit` is recoverable per
/// request; `Catalog` means the manifest itself is unreadable or malformed.
/// An individual missing file is not an error at this level, it surfaces as a
/// per-artifact miss in the resolution result.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("No records for unit {unit}")]
    UnknownUnit { unit: String },

    #[error("Catalog error: {0}")]
    Catalog(String),
}

pub type Result<T> = std::result::Result<T, CondoError>;
