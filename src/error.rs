use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no ingredients were supplied to the generator")]
    EmptySelection,
    #[error("recipe generation failed: {0}")]
    Internal(String),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read storage key '{key}': {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write storage key '{key}': {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("select at least one ingredient before generating recipes")]
    NoIngredientsSelected,
    #[error("recipe '{0}' is not among the generated recipes and cannot be saved")]
    NotGenerated(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog file not found at: {0:?}")]
    NotFound(PathBuf),
    #[error("column '{0}' not found in catalog file")]
    MissingColumn(&'static str),
    #[error("no valid ingredients loaded from {0:?}")]
    Empty(PathBuf),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
