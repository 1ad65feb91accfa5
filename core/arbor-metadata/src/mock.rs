//! A recording metadata controller for testing callers.

use arbor_types::{ObjectInfo, User};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::controller::MetaDataController;
use crate::error::{MetadataError, MetadataResult};

/// The controller operation a call was made to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Init,
    ExamineObject,
    ListTree,
    MoveObject,
    DeleteObject,
}

/// A failure the mock should answer with. Converted into the matching
/// [`MetadataError`] on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockFailure {
    NotFound(String),
    BadInputData(String),
    Io(String),
}

impl From<MockFailure> for MetadataError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::NotFound(msg) => MetadataError::NotFound(msg),
            MockFailure::BadInputData(msg) => MetadataError::BadInputData(msg),
            MockFailure::Io(msg) => MetadataError::Io(io::Error::other(msg)),
        }
    }
}

/// A call recorded by [`MockController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    pub operation: Operation,
    pub username: String,
    /// Path specs in argument order (source then target for moves).
    pub paths: Vec<String>,
}

/// Metadata controller answering from configured results.
///
/// By default every operation succeeds: `examine_object` echoes an empty
/// blob at the requested path and `list_tree` returns no children.
#[derive(Debug, Default)]
pub struct MockController {
    failures: Mutex<HashMap<Operation, MockFailure>>,
    examine_result: Mutex<Option<ObjectInfo>>,
    list_result: Mutex<Vec<ObjectInfo>>,
    calls: Mutex<Vec<MockCall>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every later call to `operation` fail with `failure`.
    pub fn fail(&self, operation: Operation, failure: MockFailure) {
        lock(&self.failures).insert(operation, failure);
    }

    /// Sets the object returned by `examine_object`.
    pub fn set_examine_result(&self, info: ObjectInfo) {
        *lock(&self.examine_result) = Some(info);
    }

    /// Sets the children returned by `list_tree`.
    pub fn set_list_result(&self, infos: Vec<ObjectInfo>) {
        *lock(&self.list_result) = infos;
    }

    /// All calls received so far, oldest first.
    pub fn calls(&self) -> Vec<MockCall> {
        lock(&self.calls).clone()
    }

    pub fn call_count(&self, operation: Operation) -> usize {
        lock(&self.calls)
            .iter()
            .filter(|call| call.operation == operation)
            .count()
    }

    pub fn total_calls(&self) -> usize {
        lock(&self.calls).len()
    }

    fn record(&self, operation: Operation, user: &User, paths: &[&str]) -> MetadataResult<()> {
        lock(&self.calls).push(MockCall {
            operation,
            username: user.username().to_string(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
        });
        match lock(&self.failures).get(&operation) {
            Some(failure) => Err(failure.clone().into()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MetaDataController for MockController {
    async fn init(&self, user: &User) -> MetadataResult<()> {
        self.record(Operation::Init, user, &[])
    }

    async fn examine_object(&self, user: &User, path_spec: &str) -> MetadataResult<ObjectInfo> {
        self.record(Operation::ExamineObject, user, &[path_spec])?;
        Ok(lock(&self.examine_result)
            .clone()
            .unwrap_or_else(|| ObjectInfo::blob(path_spec, 0, "")))
    }

    async fn list_tree(&self, user: &User, path_spec: &str) -> MetadataResult<Vec<ObjectInfo>> {
        self.record(Operation::ListTree, user, &[path_spec])?;
        Ok(lock(&self.list_result).clone())
    }

    async fn move_object(
        &self,
        user: &User,
        source_path_spec: &str,
        target_path_spec: &str,
    ) -> MetadataResult<()> {
        self.record(
            Operation::MoveObject,
            user,
            &[source_path_spec, target_path_spec],
        )
    }

    async fn delete_object(&self, user: &User, path_spec: &str) -> MetadataResult<()> {
        self.record(Operation::DeleteObject, user, &[path_spec])
    }
}
