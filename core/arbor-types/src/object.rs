//! Namespace objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// MIME type reported for every tree.
pub const TREE_MIME_TYPE: &str = "inode/directory";

/// The kind of a namespace node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectType {
    /// A leaf holding byte content.
    Blob,
    /// A container of other objects.
    Tree,
}

impl ObjectType {
    pub fn is_tree(self) -> bool {
        matches!(self, ObjectType::Tree)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Blob => "blob",
            ObjectType::Tree => "tree",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata describing one node of a user's namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectInfo {
    #[serde(rename = "type")]
    pub object_type: ObjectType,
    /// Namespace-relative path, never a filesystem location.
    #[serde(rename = "pathspec")]
    pub path_spec: String,
    /// Byte size as reported by the backend. Not recursive for trees.
    pub size: u64,
    /// Empty when the backend did not compute one.
    pub checksum: String,
    #[serde(rename = "mime")]
    pub mime_type: String,
}

impl ObjectInfo {
    /// Describes a blob.
    pub fn blob(path_spec: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            object_type: ObjectType::Blob,
            path_spec: path_spec.into(),
            size,
            checksum: String::new(),
            mime_type: mime_type.into(),
        }
    }

    /// Describes a tree. Trees always carry [`TREE_MIME_TYPE`].
    pub fn tree(path_spec: impl Into<String>, size: u64) -> Self {
        Self {
            object_type: ObjectType::Tree,
            path_spec: path_spec.into(),
            size,
            checksum: String::new(),
            mime_type: TREE_MIME_TYPE.to_string(),
        }
    }

    pub fn is_tree(&self) -> bool {
        self.object_type.is_tree()
    }
}
