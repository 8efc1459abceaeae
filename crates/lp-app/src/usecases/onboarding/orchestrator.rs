//! Onboarding orchestrator.
//!
//! This module coordinates the onboarding state machine and its side effects
//! on the button, the message region, the provider tab and the current page.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info, info_span, warn, Instrument};

use lp_core::config::OnboardingConfig;
use lp_core::onboarding::{
    OnboardingAction, OnboardingEvent, OnboardingRequest, OnboardingState, OnboardingStateMachine,
};
use lp_core::ports::{
    BrowserWindowPort, DomPort, OnboardingLinkPort, TabHandle, UserContextPort,
};
use lp_core::ElementRef;

/// Orchestrator that drives the connect-account button.
pub struct OnboardingOrchestrator {
    config: OnboardingConfig,
    state: Mutex<OnboardingState>,
    pending_tab: Mutex<Option<TabHandle>>,

    dom: Arc<dyn DomPort>,
    window: Arc<dyn BrowserWindowPort>,
    link_client: Arc<dyn OnboardingLinkPort>,
    user_context: Arc<dyn UserContextPort>,
}

impl OnboardingOrchestrator {
    pub fn new(
        config: OnboardingConfig,
        dom: Arc<dyn DomPort>,
        window: Arc<dyn BrowserWindowPort>,
        link_client: Arc<dyn OnboardingLinkPort>,
        user_context: Arc<dyn UserContextPort>,
    ) -> Self {
        Self {
            config,
            state: Mutex::new(OnboardingState::default()),
            pending_tab: Mutex::new(None),
            dom,
            window,
            link_client,
            user_context,
        }
    }

    pub fn button(&self) -> ElementRef {
        ElementRef::id(&self.config.button_id)
    }

    pub fn message_region(&self) -> ElementRef {
        ElementRef::id(&self.config.message_id)
    }

    /// Whether the page carries the onboarding button.
    pub fn is_available(&self) -> bool {
        self.dom.exists(&self.button())
    }

    pub fn state(&self) -> OnboardingState {
        lock(&self.state).clone()
    }

    /// Handle a click on the button. Resolves once the flow reached either the
    /// redirect or the reset-to-idle state.
    pub async fn on_click(&self) -> OnboardingState {
        self.dispatch(OnboardingEvent::Clicked).await
    }

    async fn dispatch(&self, event: OnboardingEvent) -> OnboardingState {
        let span = info_span!("usecase.onboarding.dispatch", event = ?event);
        async {
            let mut pending_events = vec![event];
            let mut current = OnboardingState::default();

            while let Some(event) = pending_events.pop() {
                let event_name = format!("{:?}", event);
                // One guard for the whole transition, so a click racing an
                // in-flight request observes Connecting and is dropped.
                let (from, next, actions) = {
                    let mut state = lock(&self.state);
                    let from = state.clone();
                    let (next, actions) = OnboardingStateMachine::transition(from.clone(), event);
                    *state = next.clone();
                    (from, next, actions)
                };
                info!(from = ?from, to = ?next, event = %event_name, "onboarding state transition");

                pending_events.extend(self.execute_actions(actions).await);
                current = next;
            }

            current
        }
        .instrument(span)
        .await
    }

    async fn execute_actions(&self, actions: Vec<OnboardingAction>) -> Vec<OnboardingEvent> {
        let mut follow_up_events = Vec::new();
        for action in actions {
            debug!(?action, "onboarding executing action");
            match action {
                OnboardingAction::LockButton => {
                    self.dom.set_disabled(&self.button(), true);
                    self.dom.set_text(&self.button(), &self.config.connecting_label);
                }
                OnboardingAction::ClearMessage => {
                    self.dom.set_text(&self.message_region(), "");
                }
                OnboardingAction::OpenBlankTab => {
                    let tab = self.window.open_blank_tab();
                    if tab.is_none() {
                        warn!("blank onboarding tab was blocked");
                    }
                    *lock(&self.pending_tab) = tab;
                }
                OnboardingAction::RequestLink => {
                    follow_up_events.push(self.request_link().await);
                }
                OnboardingAction::NavigateTab { link } => {
                    let navigated = match lock(&self.pending_tab).take() {
                        Some(tab) => self.window.navigate_tab(tab, link.as_str()),
                        None => false,
                    };
                    if !navigated && self.window.open_tab(link.as_str()).is_none() {
                        warn!("provider tab could not be opened");
                    }
                }
                OnboardingAction::RedirectToInProgress => {
                    if let Err(err) = self.window.redirect(&self.config.in_progress_path) {
                        error!(
                            error = %err,
                            path = %self.config.in_progress_path,
                            "onboarding redirect failed"
                        );
                    }
                }
                OnboardingAction::CloseTab => {
                    if let Some(tab) = lock(&self.pending_tab).take() {
                        self.window.close_tab(tab);
                    }
                }
                OnboardingAction::ShowMessage { message } => {
                    self.dom.set_text(&self.message_region(), &message);
                }
                OnboardingAction::UnlockButton => {
                    self.dom.set_disabled(&self.button(), false);
                    self.dom.set_text(&self.button(), &self.config.idle_label);
                }
            }
        }
        follow_up_events
    }

    async fn request_link(&self) -> OnboardingEvent {
        let request = OnboardingRequest::for_user(
            self.user_context.current_user_id(),
            &self.config.fallback_user_id,
        );
        let span = info_span!("usecase.onboarding.request_link", user_id = %request.user_id);

        match self.link_client.request_link(&request).instrument(span).await {
            Ok(link) => {
                info!("onboarding link received");
                OnboardingEvent::LinkReceived { link }
            }
            Err(err) => {
                warn!(error = %err, "onboarding link request failed");
                let message = err
                    .user_message()
                    .unwrap_or_else(|| self.config.generic_error.clone());
                OnboardingEvent::LinkFailed { message }
            }
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
