//! Metadata controllers for Arbor namespaces.
//!
//! A metadata controller owns the mapping from `(user, path spec)` pairs to
//! backend storage and exposes five operations over it: `init`,
//! `examine_object`, `list_tree`, `move_object` and `delete_object`.
//!
//! # Architecture
//!
//! - [`MetaDataController`] is the backend contract; callers only ever hold
//!   an `Arc<dyn MetaDataController>`.
//! - [`SimpleController`] is the filesystem backend. Every user owns the
//!   subtree `<metadata_dir>/<first letter>/<username>`.
//! - [`path`] implements the secure join that confines every caller-supplied
//!   path to that subtree.
//! - [`mock`] provides a recording test double for the HTTP layer.
//!
//! Every backend failure is classified once into [`MetadataError`] and
//! returned immediately; nothing in this crate retries.

mod controller;
mod describe;
mod error;
pub mod mock;
pub mod path;
mod simple;

pub use controller::MetaDataController;
pub use describe::{describe, mime_type};
pub use error::{MetadataError, MetadataResult};
pub use simple::{SimpleController, SimpleOptions};
