//! Page use cases
//!
//! One controller per page behaviour. Controllers are constructed from ports
//! and react to events the browser adapter forwards to them:
//!
//! [document mouseout / mouseleave]  → ExitIntentController
//! [hamburger / menu link click]     → MobileMenu
//! [a[href^="#"] click]              → SmoothScroll
//! [form submit]                     → FormValidation
//! [onboarding button click]         → OnboardingOrchestrator

pub mod exit_intent;
pub mod forms;
pub mod navigation;
pub mod onboarding;
pub mod page;

pub use exit_intent::ExitIntentController;
pub use forms::FormValidation;
pub use navigation::{MobileMenu, SmoothScroll};
pub use onboarding::OnboardingOrchestrator;
pub use page::{PageFeatures, PageInteractionController};
