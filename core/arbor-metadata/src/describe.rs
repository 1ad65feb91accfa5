//! Builds [`ObjectInfo`] values from raw filesystem metadata.

use arbor_types::{ObjectInfo, ObjectType, TREE_MIME_TYPE};
use std::fs::Metadata;

/// Describes the object at `path_spec` from its stat result.
///
/// Sizes are taken verbatim from the backend; for trees this is the
/// directory entry size, not the size of its contents.
pub fn describe(path_spec: &str, metadata: &Metadata) -> ObjectInfo {
    if metadata.is_dir() {
        ObjectInfo::tree(path_spec, metadata.len())
    } else {
        ObjectInfo::blob(
            path_spec,
            metadata.len(),
            mime_type(path_spec, ObjectType::Blob),
        )
    }
}

/// MIME type for an object. Blobs are looked up by extension and get the
/// empty string when the extension is unknown.
pub fn mime_type(path_spec: &str, object_type: ObjectType) -> String {
    match object_type {
        ObjectType::Tree => TREE_MIME_TYPE.to_string(),
        ObjectType::Blob => mime_guess::from_path(path_spec)
            .first_raw()
            .unwrap_or_default()
            .to_string(),
    }
}
