//! Filesystem-backed metadata controller.

use arbor_types::{ObjectInfo, User};
use async_trait::async_trait;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

use crate::controller::MetaDataController;
use crate::describe::describe;
use crate::error::{MetadataError, MetadataResult};
use crate::path::{child_path, namespace_path, storage_path};

/// Configuration for [`SimpleController`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleOptions {
    /// Directory the namespaces live under.
    pub metadata_dir: PathBuf,
    /// Staging directory for uploads. Reserved; no current operation uses it.
    pub temp_dir: PathBuf,
}

/// Metadata controller storing every namespace as a plain directory tree.
#[derive(Debug, Clone, Default)]
pub struct SimpleController {
    metadata_dir: PathBuf,
    temp_dir: PathBuf,
}

impl SimpleController {
    /// Creates a controller rooted at `options.metadata_dir`.
    pub fn new(options: SimpleOptions) -> Self {
        Self {
            metadata_dir: options.metadata_dir,
            temp_dir: options.temp_dir,
        }
    }

    pub fn metadata_dir(&self) -> &Path {
        &self.metadata_dir
    }

    pub fn temp_dir(&self) -> &Path {
        &self.temp_dir
    }

    /// Resolves `path_spec` to its location inside the user's home tree.
    pub fn storage_path(&self, user: &User, path_spec: &str) -> PathBuf {
        storage_path(&self.metadata_dir, user, path_spec)
    }

    async fn stat(&self, user: &User, path_spec: &str) -> MetadataResult<(PathBuf, std::fs::Metadata)> {
        let path = self.storage_path(user, path_spec);
        match fs::metadata(&path).await {
            Ok(metadata) => Ok((path, metadata)),
            Err(err) => Err(not_found_or_io(err, path_spec)),
        }
    }
}

fn not_found_or_io(err: io::Error, path_spec: &str) -> MetadataError {
    if err.kind() == ErrorKind::NotFound {
        MetadataError::NotFound(format!("{}: {err}", namespace_path(path_spec)))
    } else {
        MetadataError::Io(err)
    }
}

/// Structural rename conflicts the filesystem reports for the shapes of
/// source and target.
fn is_shape_conflict(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::IsADirectory
            | ErrorKind::NotADirectory
            | ErrorKind::DirectoryNotEmpty
            | ErrorKind::AlreadyExists
            | ErrorKind::InvalidInput
    )
}

#[async_trait]
impl MetaDataController for SimpleController {
    async fn init(&self, user: &User) -> MetadataResult<()> {
        let home = self.storage_path(user, "/");
        fs::create_dir_all(&home).await?;
        info!(user = %user, "home tree ready");
        Ok(())
    }

    async fn examine_object(&self, user: &User, path_spec: &str) -> MetadataResult<ObjectInfo> {
        let (_, metadata) = self.stat(user, path_spec).await?;
        Ok(describe(&namespace_path(path_spec), &metadata))
    }

    async fn list_tree(&self, user: &User, path_spec: &str) -> MetadataResult<Vec<ObjectInfo>> {
        let (path, metadata) = self.stat(user, path_spec).await?;
        if !metadata.is_dir() {
            return Err(MetadataError::BadInputData("object is not a tree".to_string()));
        }

        let mut entries = fs::read_dir(&path)
            .await
            .map_err(|err| not_found_or_io(err, path_spec))?;
        let mut infos = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            let name = entry.file_name().to_string_lossy().into_owned();
            infos.push(describe(&child_path(path_spec, &name), &metadata));
        }
        debug!(user = %user, count = infos.len(), "listed tree");
        Ok(infos)
    }

    async fn move_object(
        &self,
        user: &User,
        source_path_spec: &str,
        target_path_spec: &str,
    ) -> MetadataResult<()> {
        let source = self.storage_path(user, source_path_spec);
        let target = self.storage_path(user, target_path_spec);

        let err = match fs::rename(&source, &target).await {
            Ok(()) => {
                debug!(user = %user, "moved object");
                return Ok(());
            }
            Err(err) => err,
        };

        if err.kind() == ErrorKind::NotFound {
            // ENOENT also covers a missing target parent; only a missing
            // source is a not-found object.
            return match fs::symlink_metadata(&source).await {
                Err(stat_err) if stat_err.kind() == ErrorKind::NotFound => Err(
                    MetadataError::NotFound(format!("{}: {err}", namespace_path(source_path_spec))),
                ),
                _ => Err(MetadataError::Io(err)),
            };
        }
        if is_shape_conflict(err.kind()) {
            return Err(MetadataError::BadInputData(format!(
                "cannot move {} to {}: {err}",
                namespace_path(source_path_spec),
                namespace_path(target_path_spec),
            )));
        }
        Err(MetadataError::Io(err))
    }

    async fn delete_object(&self, user: &User, path_spec: &str) -> MetadataResult<()> {
        let path = self.storage_path(user, path_spec);
        if path == self.storage_path(user, "/") {
            return Err(MetadataError::BadInputData(
                "the namespace root cannot be deleted".to_string(),
            ));
        }

        let metadata = match fs::symlink_metadata(&path).await {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(user = %user, "delete of missing object");
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        let removed = if metadata.is_dir() {
            fs::remove_dir_all(&path).await
        } else {
            fs::remove_file(&path).await
        };
        match removed {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
