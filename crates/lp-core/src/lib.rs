//! # lp-core
//!
//! Core domain models and business logic for the leadpage scripts.
//!
//! This crate contains pure page logic without any browser dependencies.
//! Everything that touches the document, the window or the network is
//! expressed as a port in [`ports`].

// Public module exports
pub mod config;
pub mod dom;
pub mod exit_intent;
pub mod navigation;
pub mod onboarding;
pub mod ports;

// Re-export commonly used types at the crate root
pub use config::PageConfig;
pub use dom::{ElementRef, EventDisposition};
pub use exit_intent::{ExitIntentSession, LeaveKind, PointerLeave};
pub use navigation::MenuState;
pub use onboarding::{
    OnboardingAction, OnboardingEvent, OnboardingLink, OnboardingRequest, OnboardingState,
    OnboardingStateMachine,
};
