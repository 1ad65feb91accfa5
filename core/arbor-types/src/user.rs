//! The acting identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// An authenticated user as reported by the authentication service.
///
/// The username is guaranteed to be a non-empty single path segment: both
/// [`User::new`] and deserialization reject anything else, so every `User`
/// has exactly one home directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawUser")]
pub struct User {
    username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    display_name: Option<String>,
}

#[derive(Deserialize)]
struct RawUser {
    username: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
}

impl TryFrom<RawUser> for User {
    type Error = Error;

    fn try_from(raw: RawUser) -> Result<Self> {
        Ok(Self::new(raw.username)?
            .with_email(raw.email)
            .with_display_name(raw.display_name))
    }
}

impl User {
    /// Creates a user with the given username.
    pub fn new(username: impl Into<String>) -> Result<Self> {
        let username = username.into();
        if username.is_empty() {
            return Err(Error::InvalidUser("username is empty".to_string()));
        }
        // The username becomes a directory name under the metadata root.
        if username == "." || username == ".." || username.contains(['/', '\\', '\0']) {
            return Err(Error::InvalidUser(format!(
                "username {username:?} is not a single path segment"
            )));
        }
        Ok(Self {
            username,
            email: None,
            display_name: None,
        })
    }

    #[must_use]
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = email;
        self
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: Option<String>) -> Self {
        self.display_name = display_name;
        self
    }

    /// The namespace partition key.
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    /// Parses a user from the JSON document returned by the authentication service.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)
    }
}
