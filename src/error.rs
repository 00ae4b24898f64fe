//! Error types for catalog loading, the recipe book and the cooking journal.
//!
//! Classification and scaling are total functions and have no error type.

use std::path::PathBuf;
use thiserror::Error;

/// Catalog construction and lookup errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Identifier is not one of the known breakfast types
    #[error("Unknown breakfast type: {0}")]
    UnknownType(String),

    /// The same breakfast type appears twice in a catalog table
    #[error("Duplicate catalog entry: {0}")]
    DuplicateType(String),

    /// A catalog must have at least one entry to classify against
    #[error("Catalog is empty")]
    Empty,

    #[error("Failed to read catalog file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Recipe book errors
#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Duplicate recipe id: {0}")]
    DuplicateId(String),

    #[error("Failed to read recipe path {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse recipe file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Keys become file names, so they are restricted to a safe alphabet
    #[error("Invalid store key: {0:?}")]
    InvalidKey(String),
}

/// Cooking journal errors
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Journal document is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Ratings are whole stars from 1 to 5
    #[error("Invalid rating {0}: expected 1-5")]
    InvalidRating(u8),
}

pub type JournalResult<T> = std::result::Result<T, JournalError>;
