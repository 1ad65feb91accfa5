//! Token verification for Arbor.
//!
//! Arbor does not issue or validate tokens itself. Every request carries an
//! opaque bearer token that is handed to a [`TokenVerifier`], which answers
//! with the [`User`](arbor_types::User) the token belongs to or an error.
//!
//! - [`RemoteVerifier`] asks the platform's authentication service.
//! - [`mock::StaticVerifier`] accepts a single fixed token, for tests.

mod error;
pub mod mock;
mod remote;

pub use error::{AuthError, AuthResult};
pub use remote::{RemoteVerifier, RemoteVerifierConfig};

use arbor_types::User;
use async_trait::async_trait;

/// Resolves bearer tokens to users.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    /// Returns the user `token` was issued to.
    async fn verify(&self, token: &str) -> AuthResult<User>;
}
