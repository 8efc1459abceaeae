//! leadpage application layer
//!
//! This crate contains the page controllers. They own the session state and
//! drive the browser exclusively through `lp-core` ports.

pub mod deps;
pub mod usecases;

#[cfg(test)]
pub(crate) mod test_support;

pub use deps::PageDeps;
pub use usecases::{
    ExitIntentController, FormValidation, MobileMenu, OnboardingOrchestrator, PageFeatures,
    PageInteractionController, SmoothScroll,
};
