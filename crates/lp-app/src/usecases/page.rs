//! Page interaction controller.
//!
//! Groups the sub-features that run once the document is parsed. Each one
//! initializes independently: a missing element disables only its own
//! feature.

use std::sync::Arc;

use tracing::info;

use lp_core::PageConfig;

use crate::deps::PageDeps;
use crate::usecases::{FormValidation, MobileMenu, OnboardingOrchestrator, SmoothScroll};

/// Which optional sub-features found their elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageFeatures {
    pub mobile_menu: bool,
    pub onboarding: bool,
}

pub struct PageInteractionController {
    mobile_menu: MobileMenu,
    smooth_scroll: SmoothScroll,
    forms: FormValidation,
    onboarding: Arc<OnboardingOrchestrator>,
}

impl PageInteractionController {
    pub fn new(config: &PageConfig, deps: &PageDeps) -> Self {
        Self {
            mobile_menu: MobileMenu::new(config.navigation.clone(), deps.dom.clone()),
            smooth_scroll: SmoothScroll::new(deps.dom.clone()),
            forms: FormValidation::new(config.navigation.form_validated_class.clone()),
            onboarding: Arc::new(OnboardingOrchestrator::new(
                config.onboarding.clone(),
                deps.dom.clone(),
                deps.window.clone(),
                deps.onboarding_link.clone(),
                deps.user_context.clone(),
            )),
        }
    }

    /// Start every optional sub-feature and report which ones found their elements.
    ///
    /// Smooth scrolling and form gating need no particular element and are
    /// always on.
    pub fn initialize(&self) -> PageFeatures {
        info!("page script loaded");
        PageFeatures {
            mobile_menu: self.mobile_menu.initialize(),
            onboarding: self.onboarding.is_available(),
        }
    }

    pub fn mobile_menu(&self) -> &MobileMenu {
        &self.mobile_menu
    }

    pub fn smooth_scroll(&self) -> &SmoothScroll {
        &self.smooth_scroll
    }

    pub fn forms(&self) -> &FormValidation {
        &self.forms
    }

    pub fn onboarding(&self) -> &Arc<OnboardingOrchestrator> {
        &self.onboarding
    }
}
