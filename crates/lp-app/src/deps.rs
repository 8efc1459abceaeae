//! # Page Dependencies
//!
//! This module defines the dependency grouping for controller construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - Just parameter grouping

use std::sync::Arc;
use lp_core::ports::*;

/// Page dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
#[derive(Clone)]
pub struct PageDeps {
    // Document
    pub dom: Arc<dyn DomPort>,

    // Window / navigation
    pub window: Arc<dyn BrowserWindowPort>,
    pub user_context: Arc<dyn UserContextPort>,

    // Persistence and scheduling
    pub store: Arc<dyn KeyValueStorePort>,
    pub timer: Arc<dyn TimerPort>,

    // Network
    pub onboarding_link: Arc<dyn OnboardingLinkPort>,
}
