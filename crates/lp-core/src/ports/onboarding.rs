//! Onboarding link port
//!
//! This port defines the contract for asking the site's backend for a payment
//! provider onboarding link. Implementations are provided by the
//! infrastructure layer (e.g., an HTTP client).

use async_trait::async_trait;
use thiserror::Error;

use crate::onboarding::{OnboardingLink, OnboardingLinkResponse, OnboardingRequest};

#[derive(Debug, Error)]
pub enum OnboardingLinkError {
    /// Endpoint answered with a non-success status.
    #[error("Could not create onboarding link")]
    Status { status: u16 },

    /// Endpoint answered successfully but without a usable URL.
    #[error("No onboarding URL received")]
    MissingUrl,

    /// Request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// Response body was not the expected JSON.
    #[error("invalid onboarding response: {0}")]
    InvalidResponse(String),
}

impl OnboardingLinkError {
    /// Message suitable for the inline message region, if this error has one.
    ///
    /// `None` means the caller shows its generic message.
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Status { .. } | Self::MissingUrl => Some(self.to_string()),
            Self::Transport(message) if !message.trim().is_empty() => Some(message.clone()),
            Self::Transport(_) | Self::InvalidResponse(_) => None,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait OnboardingLinkPort: Send + Sync {
    /// Send the request and decode the response body.
    async fn post_request(
        &self,
        request: &OnboardingRequest,
    ) -> Result<OnboardingLinkResponse, OnboardingLinkError>;

    /// Request a link, treating a response without URL as a failure.
    async fn request_link(
        &self,
        request: &OnboardingRequest,
    ) -> Result<OnboardingLink, OnboardingLinkError> {
        let response = self.post_request(request).await?;
        match response.url {
            Some(url) if !url.is_empty() => Ok(OnboardingLink::new(url)),
            _ => Err(OnboardingLinkError::MissingUrl),
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mockall::mock! {
    pub OnboardingLinkClient {}

    #[async_trait]
    impl OnboardingLinkPort for OnboardingLinkClient {
        async fn post_request(
            &self,
            request: &OnboardingRequest,
        ) -> Result<OnboardingLinkResponse, OnboardingLinkError>;
    }
}
