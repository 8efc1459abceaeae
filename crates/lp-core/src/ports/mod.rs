//! Port interfaces for the application layer
//!
//! Ports define the contract between the page controllers (use cases) and the
//! browser. Each browser global the controllers would otherwise reach for
//! (`document`, `window`, `localStorage`, `setTimeout`, `fetch`) is a port
//! here, so controllers run unchanged against in-memory fakes.
//!
//! Every port is `Send + Sync`: browser adapters resolve their JS handles on
//! each call instead of holding them.

pub mod dom;
pub mod onboarding;
pub mod storage;
mod timer;
mod user_context;
pub mod window;

pub use dom::{DomPort, SubmittedForm};
pub use onboarding::{OnboardingLinkError, OnboardingLinkPort};
pub use storage::{KeyValueStoreError, KeyValueStorePort};
pub use timer::{TimerPort, TimerTask};
pub use user_context::UserContextPort;
pub use window::{BrowserWindowPort, TabHandle};
