//! Typed wrapper over the backend REST API.

use std::time::Duration;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::config::ApiClientConfig;
use crate::model::OnboardingProfile;

/// Error type for API client operations.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server rejected request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
}

/// Server acknowledgement for a completed onboarding submission.
#[derive(Debug, Deserialize)]
pub struct OnboardingOutcome {
    pub success: bool,

    /// Updated user document as returned by the server.
    #[serde(default)]
    pub user: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// HTTP client bound to a fixed base URL, forwarding credentials (cookies)
/// on every request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn from_config(config: &ApiClientConfig) -> Result<Self, ApiError> {
        let base_url = Url::parse(&config.base_url)?;
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base_url.join(path)?)
    }

    /// Submit a completed onboarding profile.
    ///
    /// Success returns the server acknowledgement; a non-success status
    /// becomes [`ApiError::Rejected`] carrying the server's message.
    pub async fn complete_onboarding(
        &self,
        profile: &OnboardingProfile,
    ) -> Result<OnboardingOutcome, ApiError> {
        let url = self.endpoint("auth/onboarding")?;
        let response = self.http.post(url).json(profile).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };

        Err(ApiError::Rejected { status, message })
    }
}
