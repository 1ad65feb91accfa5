//! Metadata controller abstraction.

use arbor_types::{ObjectInfo, User};
use async_trait::async_trait;

use crate::error::MetadataResult;

/// Metadata operations over a user's namespace.
///
/// Path specs are namespace-relative and untrusted; implementations must
/// confine them to the user's namespace before touching the backend.
#[async_trait]
pub trait MetaDataController: Send + Sync {
    /// Creates the user's home tree. Idempotent.
    async fn init(&self, user: &User) -> MetadataResult<()>;

    /// Describes a single object.
    async fn examine_object(&self, user: &User, path_spec: &str) -> MetadataResult<ObjectInfo>;

    /// Describes the immediate children of a tree, in no particular order.
    async fn list_tree(&self, user: &User, path_spec: &str) -> MetadataResult<Vec<ObjectInfo>>;

    /// Atomically renames `source` onto `target`.
    async fn move_object(
        &self,
        user: &User,
        source_path_spec: &str,
        target_path_spec: &str,
    ) -> MetadataResult<()>;

    /// Removes an object and everything beneath it. Removing a missing
    /// object succeeds.
    async fn delete_object(&self, user: &User, path_spec: &str) -> MetadataResult<()>;
}
