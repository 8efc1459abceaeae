//! # Page configuration DTO
//!
//! ## Responsibilities
//!
//! - Define the configuration data structures for both page controllers
//! - Provide TOML → DTO mapping
//!
//! Every field has a default matching the markup shipped with the site, so an
//! empty document (or no document at all) yields a working configuration.
//! `from_toml` only overrides keys that are present; it performs no
//! validation.

/// Configuration of the exit-intent popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitIntentConfig {
    /// Id of the overlay container.
    pub overlay_id: String,
    /// Selector of the optional close control.
    pub close_selector: String,
    /// Class added to the overlay while visible.
    pub visible_class: String,
    /// Persisted suppression key.
    pub storage_key: String,
    /// Delay before the fallback leave listener becomes active.
    pub fallback_delay_ms: u64,
    /// Lifetime of the suppression record.
    pub suppression_ttl_ms: u64,
}

impl Default for ExitIntentConfig {
    fn default() -> Self {
        Self {
            overlay_id: "exit-popup".to_string(),
            close_selector: ".exit-popup-close".to_string(),
            visible_class: "show".to_string(),
            storage_key: "exitPopupShown".to_string(),
            fallback_delay_ms: 30_000,
            suppression_ttl_ms: 24 * 60 * 60 * 1000,
        }
    }
}

/// Configuration of the mobile navigation menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationConfig {
    pub hamburger_id: String,
    pub menu_id: String,
    pub menu_open_class: String,
    pub button_active_class: String,
    pub body_lock_class: String,
    /// Class added to every submitted form.
    pub form_validated_class: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            hamburger_id: "hamburger-btn".to_string(),
            menu_id: "mobile-menu".to_string(),
            menu_open_class: "open".to_string(),
            button_active_class: "active".to_string(),
            body_lock_class: "no-scroll".to_string(),
            form_validated_class: "was-validated".to_string(),
        }
    }
}

/// Configuration of the payment onboarding button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingConfig {
    pub button_id: String,
    pub message_id: String,
    /// Endpoint issuing onboarding links, relative to the page origin.
    pub endpoint: String,
    /// Route the current page moves to once the provider tab is on its way.
    pub in_progress_path: String,
    /// User id sent when the page did not inject one.
    pub fallback_user_id: String,
    pub idle_label: String,
    pub connecting_label: String,
    /// Message shown when a failure carries no message of its own.
    pub generic_error: String,
}

impl Default for OnboardingConfig {
    fn default() -> Self {
        Self {
            button_id: "stripeOnboardBtn".to_string(),
            message_id: "stripeOnboardMsg".to_string(),
            endpoint: "/pay/stripe/onboard-link".to_string(),
            in_progress_path: "/onboarding-in-progress".to_string(),
            fallback_user_id: "demo".to_string(),
            idle_label: "Connect Stripe Account".to_string(),
            connecting_label: "Connecting...".to_string(),
            generic_error: "Error connecting to Stripe.".to_string(),
        }
    }
}

/// Full page configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageConfig {
    pub exit_intent: ExitIntentConfig,
    pub navigation: NavigationConfig,
    pub onboarding: OnboardingConfig,
}

impl PageConfig {
    /// Create PageConfig from a TOML value.
    ///
    /// Keys that are missing (or of the wrong type) keep their default.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(section) = toml_value.get("exit_intent") {
            let c = &mut config.exit_intent;
            overlay_str(section, "overlay_id", &mut c.overlay_id);
            overlay_str(section, "close_selector", &mut c.close_selector);
            overlay_str(section, "visible_class", &mut c.visible_class);
            overlay_str(section, "storage_key", &mut c.storage_key);
            overlay_u64(section, "fallback_delay_ms", &mut c.fallback_delay_ms);
            overlay_u64(section, "suppression_ttl_ms", &mut c.suppression_ttl_ms);
        }

        if let Some(section) = toml_value.get("navigation") {
            let c = &mut config.navigation;
            overlay_str(section, "hamburger_id", &mut c.hamburger_id);
            overlay_str(section, "menu_id", &mut c.menu_id);
            overlay_str(section, "menu_open_class", &mut c.menu_open_class);
            overlay_str(section, "button_active_class", &mut c.button_active_class);
            overlay_str(section, "body_lock_class", &mut c.body_lock_class);
            overlay_str(section, "form_validated_class", &mut c.form_validated_class);
        }

        if let Some(section) = toml_value.get("onboarding") {
            let c = &mut config.onboarding;
            overlay_str(section, "button_id", &mut c.button_id);
            overlay_str(section, "message_id", &mut c.message_id);
            overlay_str(section, "endpoint", &mut c.endpoint);
            overlay_str(section, "in_progress_path", &mut c.in_progress_path);
            overlay_str(section, "fallback_user_id", &mut c.fallback_user_id);
            overlay_str(section, "idle_label", &mut c.idle_label);
            overlay_str(section, "connecting_label", &mut c.connecting_label);
            overlay_str(section, "generic_error", &mut c.generic_error);
        }

        Ok(config)
    }
}

fn overlay_str(section: &toml::Value, key: &str, target: &mut String) {
    if let Some(value) = section.get(key).and_then(|v| v.as_str()) {
        *target = value.to_string();
    }
}

fn overlay_u64(section: &toml::Value, key: &str, target: &mut u64) {
    // Negative integers are ignored rather than wrapped.
    if let Some(value) = section
        .get(key)
        .and_then(|v| v.as_integer())
        .and_then(|v| u64::try_from(v).ok())
    {
        *target = value;
    }
}
