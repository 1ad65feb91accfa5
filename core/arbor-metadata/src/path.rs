//! Path sandboxing.
//!
//! Every caller-supplied path spec is joined onto a forced root `/` and
//! lexically cleaned before it is attached to a real base directory. Leading
//! `..` segments collapse against that root, so the result of
//! [`secure_join`] is always the base itself or one of its descendants.

use arbor_types::User;
use path_clean::PathClean;
use std::path::{Path, PathBuf};

/// Joins `fragments` below `base` without ever escaping it.
///
/// With no fragments the base is returned cleaned. Absolute-looking
/// fragments do not escape either: the root they name is the forced root.
pub fn secure_join<S: AsRef<str>>(base: impl AsRef<Path>, fragments: &[S]) -> PathBuf {
    let base = base.as_ref();
    if fragments.is_empty() {
        return base.clean();
    }

    let mut jailed = PathBuf::from("/");
    for fragment in fragments {
        jailed.push(fragment.as_ref());
    }
    let jailed = jailed.clean();
    let relative = jailed.strip_prefix("/").unwrap_or(&jailed);

    base.join(relative).clean()
}

/// Namespace-absolute home of `user`: `/<first letter>/<username>`.
pub fn home_dir(user: &User) -> PathBuf {
    let username = user.username();
    let shard: String = username.chars().take(1).collect();
    secure_join("/", &[shard.as_str(), username])
}

/// Filesystem location of `path_spec` inside the namespace of `user`.
pub fn storage_path(metadata_dir: impl AsRef<Path>, user: &User, path_spec: &str) -> PathBuf {
    let user_path = secure_join(home_dir(user), &[path_spec]);
    secure_join(metadata_dir, &[user_path.to_string_lossy()])
}

/// Caller-facing form of a path spec: `/`-separated, no leading `/` and no
/// `..` segments. The namespace root is the empty string.
pub fn namespace_path(path_spec: &str) -> String {
    let rooted = secure_join("/", &[path_spec]);
    rooted
        .strip_prefix("/")
        .unwrap_or(&rooted)
        .to_string_lossy()
        .into_owned()
}

/// Path spec of the child `name` of the tree at `parent`.
pub fn child_path(parent: &str, name: &str) -> String {
    let parent = namespace_path(parent);
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}/{name}")
    }
}
