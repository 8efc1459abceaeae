use std::time::Duration;

/// Deferred work handed to a [`TimerPort`].
pub type TimerTask = Box<dyn FnOnce() + Send + 'static>;

/// Fire-and-forget scheduling (`setTimeout`). Scheduled tasks cannot be
/// cancelled.
pub trait TimerPort: Send + Sync {
    fn schedule(&self, delay: Duration, task: TimerTask);
}
