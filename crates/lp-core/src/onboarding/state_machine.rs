//! Onboarding button state machine.
//!
//! Defines a pure state transition function for the connect-account button.

use tracing::warn;

use super::OnboardingLink;

/// Onboarding button state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OnboardingState {
    /// Button enabled, nothing attempted yet.
    #[default]
    Idle,
    /// Button disabled, blank tab open, request in flight.
    Connecting,
    /// Provider tab on its way, current page navigating to the in-progress
    /// route. Terminal.
    Redirecting { url: String },
    /// Failed attempt; the button is interactive again.
    Failed { message: String },
}

/// Events that drive the onboarding flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingEvent {
    /// User clicked the button.
    Clicked,
    /// Endpoint answered with a URL.
    LinkReceived { link: OnboardingLink },
    /// Endpoint failed, or answered without a URL.
    LinkFailed { message: String },
}

/// Side-effects produced by state transitions, executed in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingAction {
    /// Disable the button and show the connecting label.
    LockButton,
    /// Empty the message region.
    ClearMessage,
    /// Open a blank tab before awaiting anything, so popup blockers treat it as
    /// part of the click.
    OpenBlankTab,
    /// Ask the endpoint for a link.
    RequestLink,
    /// Point the pre-opened tab at the provider.
    NavigateTab { link: OnboardingLink },
    /// Move the current page to the in-progress route.
    RedirectToInProgress,
    /// Close the pre-opened tab if it is still open.
    CloseTab,
    /// Write a message into the message region.
    ShowMessage { message: String },
    /// Re-enable the button and restore the idle label.
    UnlockButton,
}

/// Pure onboarding state machine: no side effects.
pub struct OnboardingStateMachine;

impl OnboardingStateMachine {
    pub fn transition(
        state: OnboardingState,
        event: OnboardingEvent,
    ) -> (OnboardingState, Vec<OnboardingAction>) {
        match (state, event) {
            (OnboardingState::Idle | OnboardingState::Failed { .. }, OnboardingEvent::Clicked) => (
                OnboardingState::Connecting,
                vec![
                    OnboardingAction::LockButton,
                    OnboardingAction::ClearMessage,
                    OnboardingAction::OpenBlankTab,
                    OnboardingAction::RequestLink,
                ],
            ),
            (OnboardingState::Connecting, OnboardingEvent::LinkReceived { link }) => (
                OnboardingState::Redirecting {
                    url: link.as_str().to_string(),
                },
                vec![
                    OnboardingAction::NavigateTab { link },
                    OnboardingAction::RedirectToInProgress,
                ],
            ),
            (OnboardingState::Connecting, OnboardingEvent::LinkFailed { message }) => (
                OnboardingState::Failed {
                    message: message.clone(),
                },
                vec![
                    OnboardingAction::CloseTab,
                    OnboardingAction::ShowMessage { message },
                    OnboardingAction::UnlockButton,
                ],
            ),
            (state, event) => {
                warn!(?state, ?event, "onboarding event ignored in current state");
                (state, Vec::new())
            }
        }
    }
}
