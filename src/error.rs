//! Error types for loading and querying collections

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Collection not found: {0}")]
    CollectionNotFound(String),

    #[error("Record {id} not found in collection {collection}")]
    RecordNotFound { collection: String, id: String },

    #[error("Malformed collection {source_name}: {message}")]
    Malformed {
        source_name: String,
        message: String,
    },

    #[error("Duplicate id {id} in collection {collection}")]
    DuplicateId { collection: String, id: String },

    #[error("Duplicate collection name: {0}")]
    DuplicateCollection(String),

    #[error("Invalid difficulty: {0} (expected Easy, Medium or Hard)")]
    InvalidDifficulty(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    /// True for an unknown collection name or record id.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::CollectionNotFound(_) | Error::RecordNotFound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
