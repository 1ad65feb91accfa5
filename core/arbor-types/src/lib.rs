//! Core type definitions for Arbor.
//!
//! This crate defines the backend-independent values exchanged between the
//! metadata controllers, the authentication client and the HTTP layer:
//! - The acting [`User`], used only as a namespace partition key
//! - [`ObjectType`] and [`ObjectInfo`], describing one node of a namespace
//!
//! Nothing in here knows about filesystem locations; `ObjectInfo::path_spec`
//! is always namespace-relative.

mod object;
mod user;

pub use object::{ObjectInfo, ObjectType, TREE_MIME_TYPE};
pub use user::User;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building core values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid user: {0}")]
    InvalidUser(String),
}
