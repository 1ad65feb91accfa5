//! Error types for metadata operations.

use thiserror::Error;

/// Result type for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Classified outcome of a failed metadata operation.
///
/// The HTTP layer maps these variants to status codes, so the set of
/// variants is part of the public contract.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The addressed object does not exist.
    #[error("object not found: {0}")]
    NotFound(String),

    /// The operation is structurally invalid for the object types involved.
    #[error("bad input data: {0}")]
    BadInputData(String),

    /// Any other backend failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MetadataError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, MetadataError::NotFound(_))
    }

    pub fn is_bad_input(&self) -> bool {
        matches!(self, MetadataError::BadInputData(_))
    }

    /// Short classification label used in logs and error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            MetadataError::NotFound(_) => "not_found",
            MetadataError::BadInputData(_) => "bad_input_data",
            MetadataError::Io(_) => "unclassified",
        }
    }
}
