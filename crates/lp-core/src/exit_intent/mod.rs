//! Exit-intent domain model.
//!
//! Holds the per-page session flags and the leave heuristics deciding when a
//! cursor is about to exit the viewport.

use std::sync::atomic::{AtomicBool, Ordering};

/// `mouseout` events fire the popup when the cursor is this close to the top
/// edge (strictly less than).
pub const TOP_EDGE_THRESHOLD_PX: f64 = 10.0;

/// The fallback `mouseleave` listener fires at or above this coordinate
/// (`clientY <= 0`).
pub const FALLBACK_EDGE_PX: f64 = 0.0;

/// Value written to the suppression record.
pub const SUPPRESSION_VALUE: &str = "true";

/// Which native listener produced a leave event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveKind {
    /// `mouseout` bubbling to the document.
    MouseOut,
    /// `mouseleave` on the document, only honoured once the fallback is armed.
    DocumentLeave,
}

/// A pointer leaving an element or the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerLeave {
    pub kind: LeaveKind,
    pub client_y: f64,
    /// The event carried a `relatedTarget` (or legacy `toElement`).
    pub has_related_target: bool,
}

impl PointerLeave {
    pub fn mouse_out(client_y: f64, has_related_target: bool) -> Self {
        Self {
            kind: LeaveKind::MouseOut,
            client_y,
            has_related_target,
        }
    }

    pub fn document_leave(client_y: f64) -> Self {
        Self {
            kind: LeaveKind::DocumentLeave,
            client_y,
            has_related_target: false,
        }
    }

    /// Cursor left through the browser chrome at the top of the viewport.
    ///
    /// The two listeners use different boundaries; both are kept as they are.
    pub fn crosses_top_edge(&self) -> bool {
        match self.kind {
            LeaveKind::MouseOut => {
                !self.has_related_target && self.client_y < TOP_EDGE_THRESHOLD_PX
            }
            LeaveKind::DocumentLeave => self.client_y <= FALLBACK_EDGE_PX,
        }
    }
}

/// Session state of the exit-intent popup for a single page load.
///
/// `shown` is never reset within a session.
#[derive(Debug, Default)]
pub struct ExitIntentSession {
    shown: AtomicBool,
    suppressed: AtomicBool,
    fallback_armed: AtomicBool,
}

impl ExitIntentSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore the session from a suppression record found at start-up.
    ///
    /// The popup counts as already shown, and showing it will not write the
    /// record again.
    pub fn restore_suppressed(&self) {
        self.suppressed.store(true, Ordering::SeqCst);
        self.shown.store(true, Ordering::SeqCst);
    }

    pub fn is_shown(&self) -> bool {
        self.shown.load(Ordering::SeqCst)
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed.load(Ordering::SeqCst)
    }

    pub fn is_fallback_armed(&self) -> bool {
        self.fallback_armed.load(Ordering::SeqCst)
    }

    /// Claim the single display of this session.
    ///
    /// Returns `true` exactly once; every later call returns `false`.
    pub fn try_mark_shown(&self) -> bool {
        self.shown
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    /// Arm the fallback listener if the popup has not been shown yet.
    pub fn arm_fallback(&self) -> bool {
        if self.is_shown() {
            return false;
        }
        self.fallback_armed.store(true, Ordering::SeqCst);
        true
    }

    /// Whether a leave event should display the popup right now.
    pub fn should_show(&self, leave: &PointerLeave) -> bool {
        if self.is_shown() || !leave.crosses_top_edge() {
            return false;
        }
        match leave.kind {
            LeaveKind::MouseOut => true,
            LeaveKind::DocumentLeave => self.is_fallback_armed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mouse_out_near_top_without_related_target_crosses_edge() {
        assert!(PointerLeave::mouse_out(0.0, false).crosses_top_edge());
        assert!(PointerLeave::mouse_out(9.9, false).crosses_top_edge());
        assert!(PointerLeave::mouse_out(-4.0, false).crosses_top_edge());
    }

    #[test]
    fn mouse_out_boundary_is_exclusive() {
        assert!(!PointerLeave::mouse_out(10.0, false).crosses_top_edge());
        assert!(!PointerLeave::mouse_out(250.0, false).crosses_top_edge());
    }

    #[test]
    fn mouse_out_with_related_target_never_crosses_edge() {
        for y in [-20.0, 0.0, 5.0, 9.0, 10.0, 500.0] {
            assert!(!PointerLeave::mouse_out(y, true).crosses_top_edge());
        }
    }

    #[test]
    fn document_leave_boundary_is_inclusive_zero() {
        assert!(PointerLeave::document_leave(0.0).crosses_top_edge());
        assert!(PointerLeave::document_leave(-1.0).crosses_top_edge());
        assert!(!PointerLeave::document_leave(1.0).crosses_top_edge());
        assert!(!PointerLeave::document_leave(5.0).crosses_top_edge());
    }

    #[test]
    fn try_mark_shown_succeeds_once() {
        let session = ExitIntentSession::new();
        assert!(session.try_mark_shown());
        assert!(!session.try_mark_shown());
        assert!(session.is_shown());
    }

    #[test]
    fn restored_session_never_shows() {
        let session = ExitIntentSession::new();
        session.restore_suppressed();

        assert!(session.is_suppressed());
        assert!(!session.should_show(&PointerLeave::mouse_out(0.0, false)));
        assert!(!session.try_mark_shown());
    }

    #[test]
    fn document_leave_requires_armed_fallback() {
        let session = ExitIntentSession::new();
        let leave = PointerLeave::document_leave(0.0);

        assert!(!session.should_show(&leave));
        assert!(session.arm_fallback());
        assert!(session.should_show(&leave));
    }

    #[test]
    fn fallback_does_not_arm_after_display() {
        let session = ExitIntentSession::new();
        session.try_mark_shown();

        assert!(!session.arm_fallback());
        assert!(!session.is_fallback_armed());
    }
}
