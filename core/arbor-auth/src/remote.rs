//! Client for the platform authentication service.

use arbor_types::User;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::error::{AuthError, AuthResult};
use crate::TokenVerifier;

/// Configuration for [`RemoteVerifier`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteVerifierConfig {
    /// Base URL of the authentication service, e.g.
    /// `http://localhost:58001/clawio/v1/auth/`.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RemoteVerifierConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:58001/clawio/v1/auth/".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Verifies tokens with `POST <base_url>/verify/<token>`.
///
/// A 2xx answer carries the user as JSON; anything else is a rejection.
#[derive(Debug, Clone)]
pub struct RemoteVerifier {
    base_url: String,
    client: Client,
}

impl RemoteVerifier {
    pub fn new(config: RemoteVerifierConfig) -> AuthResult<Self> {
        let base = config.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(AuthError::Config(format!(
                "authentication service URL must be http(s): {base:?}"
            )));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: base.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn verify_url(&self, token: &str) -> String {
        format!("{}/verify/{}", self.base_url, urlencoding::encode(token))
    }
}

#[async_trait]
impl TokenVerifier for RemoteVerifier {
    async fn verify(&self, token: &str) -> AuthResult<User> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        let response = self.client.post(self.verify_url(token)).send().await?;
        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "token rejected by authentication service");
            return Err(AuthError::Rejected {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        User::from_json(&body).map_err(|e| AuthError::InvalidResponse(e.to_string()))
    }
}
