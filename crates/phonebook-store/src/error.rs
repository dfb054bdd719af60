use phonebook_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
    #[error("unsupported address book format in {0}")]
    UnsupportedFormat(PathBuf),
    #[error("contact already exists: {0}")]
    DuplicateContact(String),
    #[error("contact not found: {0}")]
    ContactNotFound(String),
    #[error("no contacts match: {0}")]
    NoMatch(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Json,
    Core,
    MissingHomeDir,
    InvalidDataPath,
    UnsupportedFormat,
    DuplicateContact,
    ContactNotFound,
    NoMatch,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Json(_) => StoreErrorKind::Json,
            StoreError::Core(_) => StoreErrorKind::Core,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidDataPath,
            StoreError::UnsupportedFormat(_) => StoreErrorKind::UnsupportedFormat,
            StoreError::DuplicateContact(_) => StoreErrorKind::DuplicateContact,
            StoreError::ContactNotFound(_) => StoreErrorKind::ContactNotFound,
            StoreError::NoMatch(_) => StoreErrorKind::NoMatch,
        }
    }
}
