//! A fixed-token verifier for testing.

use arbor_types::User;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::error::{AuthError, AuthResult};
use crate::TokenVerifier;

/// Accepts exactly one token and maps it to one user.
#[derive(Debug)]
pub struct StaticVerifier {
    token: String,
    user: User,
    calls: AtomicUsize,
}

impl StaticVerifier {
    pub fn new(token: impl Into<String>, user: User) -> Self {
        Self {
            token: token.into(),
            user,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `verify` calls received.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenVerifier for StaticVerifier {
    async fn verify(&self, token: &str) -> AuthResult<User> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }
        if token == self.token {
            Ok(self.user.clone())
        } else {
            Err(AuthError::Rejected { status: 401 })
        }
    }
}
