//! Payment onboarding domain models
//!
//! This module defines the wire types of the onboarding-link endpoint and the
//! state machine behind the "connect account" button.

pub mod state_machine;

use serde::{Deserialize, Serialize};

pub use state_machine::{
    OnboardingAction, OnboardingEvent, OnboardingState, OnboardingStateMachine,
};

/// Body of the onboarding-link request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingRequest {
    pub user_id: String,
}

impl OnboardingRequest {
    /// Build a request for the injected user, or the fallback id when the page
    /// did not inject one (or injected an empty one).
    pub fn for_user(current_user_id: Option<String>, fallback_user_id: &str) -> Self {
        let user_id = current_user_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| fallback_user_id.to_string());
        Self { user_id }
    }
}

/// Body of a successful onboarding-link response. `url` may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingLinkResponse {
    #[serde(default)]
    pub url: Option<String>,
}

/// One-time URL issued by the payment provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingLink(String);

impl OnboardingLink {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for OnboardingLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
