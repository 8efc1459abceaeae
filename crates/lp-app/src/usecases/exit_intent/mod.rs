//! Exit-intent popup controller.
//!
//! Shows a retention overlay once per session when the cursor leaves through
//! the top of the viewport, and keeps it from reappearing for a day.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use lp_core::config::ExitIntentConfig;
use lp_core::exit_intent::{ExitIntentSession, PointerLeave, SUPPRESSION_VALUE};
use lp_core::ports::{DomPort, KeyValueStorePort, TimerPort};
use lp_core::ElementRef;

pub struct ExitIntentController {
    config: ExitIntentConfig,
    session: ExitIntentSession,
    dom: Arc<dyn DomPort>,
    store: Arc<dyn KeyValueStorePort>,
    timer: Arc<dyn TimerPort>,
}

impl ExitIntentController {
    pub fn new(
        config: ExitIntentConfig,
        dom: Arc<dyn DomPort>,
        store: Arc<dyn KeyValueStorePort>,
        timer: Arc<dyn TimerPort>,
    ) -> Self {
        Self {
            config,
            session: ExitIntentSession::new(),
            dom,
            store,
            timer,
        }
    }

    pub fn session(&self) -> &ExitIntentSession {
        &self.session
    }

    pub fn overlay(&self) -> ElementRef {
        ElementRef::id(&self.config.overlay_id)
    }

    pub fn close_control(&self) -> ElementRef {
        ElementRef::selector(&self.config.close_selector)
    }

    /// Restore the session from storage and schedule the fallback trigger.
    ///
    /// Returns `false` (and does nothing) when the page has no overlay.
    pub fn start(self: &Arc<Self>) -> bool {
        if !self.dom.exists(&self.overlay()) {
            debug!(overlay = %self.overlay(), "exit intent overlay not found, popup disabled");
            return false;
        }

        match self.store.contains(&self.config.storage_key) {
            Ok(true) => {
                self.session.restore_suppressed();
                debug!(
                    key = %self.config.storage_key,
                    "exit intent popup suppressed for this session"
                );
            }
            Ok(false) => {}
            Err(err) => {
                warn!(error = %err, "failed to read exit intent suppression record");
            }
        }

        let this = Arc::clone(self);
        self.timer.schedule(
            Duration::from_millis(self.config.fallback_delay_ms),
            Box::new(move || this.on_fallback_elapsed()),
        );
        true
    }

    /// Display the popup, at most once per session.
    ///
    /// Returns whether this call displayed it.
    pub fn show(&self) -> bool {
        if !self.session.try_mark_shown() {
            return false;
        }

        let overlay = self.overlay();
        self.dom.set_style(&overlay, "display", "flex");
        self.dom.add_class(&overlay, &self.config.visible_class);
        self.dom.set_style(&ElementRef::Body, "overflow", "hidden");

        // Analytics hook point.
        info!("exit intent popup shown");

        if !self.session.is_suppressed() {
            self.persist_suppression();
        }
        true
    }

    /// Hide the popup and release the scroll lock. Safe to call repeatedly.
    pub fn hide(&self) {
        let overlay = self.overlay();
        self.dom.set_style(&overlay, "display", "none");
        self.dom.remove_class(&overlay, &self.config.visible_class);
        self.dom.set_style(&ElementRef::Body, "overflow", "");
    }

    pub fn on_pointer_leave(&self, leave: PointerLeave) -> bool {
        if !self.session.should_show(&leave) {
            return false;
        }
        self.show()
    }

    pub fn on_fallback_elapsed(&self) {
        if self.session.arm_fallback() {
            debug!("exit intent fallback listener armed");
        }
    }

    pub fn on_close_clicked(&self) {
        self.hide();
    }

    /// Clicks on the overlay backdrop dismiss; clicks on its content do not.
    pub fn on_overlay_clicked(&self, target_is_overlay: bool) {
        if target_is_overlay {
            self.hide();
        }
    }

    fn persist_suppression(&self) {
        let key = self.config.storage_key.clone();
        if let Err(err) = self.store.set(&key, SUPPRESSION_VALUE) {
            warn!(error = %err, "failed to write exit intent suppression record");
            return;
        }

        let store = Arc::clone(&self.store);
        self.timer.schedule(
            Duration::from_millis(self.config.suppression_ttl_ms),
            Box::new(move || match store.remove(&key) {
                Ok(()) => debug!(key = %key, "exit intent suppression record expired"),
                Err(err) => warn!(error = %err, "failed to remove exit intent suppression record"),
            }),
        );
    }
}
