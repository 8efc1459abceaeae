use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::{sleep_until, Instant};
use tracing::debug;

use lp_core::ports::{TimerPort, TimerTask};

type TaskMap = Arc<Mutex<HashMap<u64, tokio::task::AbortHandle>>>;

/// [`TimerPort`] backed by tokio tasks.
///
/// Tasks still pending when the timer is dropped are aborted.
pub struct TokioTimer {
    handle: Handle,
    next_id: AtomicU64,
    tasks: TaskMap,
}

impl TokioTimer {
    pub fn new(handle: Handle) -> Self {
        Self {
            handle,
            next_id: AtomicU64::new(0),
            tasks: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Timer on the runtime the caller is running in.
    pub fn from_current() -> anyhow::Result<Self> {
        Ok(Self::new(Handle::try_current()?))
    }

    /// Number of scheduled tasks that have not fired yet.
    pub fn pending(&self) -> usize {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl TimerPort for TokioTimer {
    fn schedule(&self, delay: Duration, task: TimerTask) {
        // Deadline is fixed here, not when the spawned task is first polled.
        let deadline = Instant::now() + delay;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let tasks = Arc::clone(&self.tasks);

        let mut guard = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        let join = self.handle.spawn(async move {
            sleep_until(deadline).await;
            tasks
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .remove(&id);
            task();
        });
        guard.insert(id, join.abort_handle());
        debug!(timer_id = id, delay_ms = delay.as_millis() as u64, "timer scheduled");
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        let tasks = self.tasks.lock().unwrap_or_else(PoisonError::into_inner);
        for handle in tasks.values() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use tokio::time::{advance, sleep};

    fn counter_task(counter: &Arc<AtomicUsize>) -> TimerTask {
        let counter = Arc::clone(counter);
        Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    /// Let spawned timer tasks observe the current (paused) clock.
    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn task_runs_after_delay() -> anyhow::Result<()> {
        let timer = TokioTimer::from_current()?;
        let fired = Arc::new(AtomicUsize::new(0));

        timer.schedule(Duration::from_secs(30), counter_task(&fired));
        settle().await;
        assert_eq!(timer.pending(), 1);

        sleep(Duration::from_secs(30) - Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert_eq!(timer.pending(), 0);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_is_fixed_at_schedule_time() -> anyhow::Result<()> {
        let timer = TokioTimer::from_current()?;
        let fired = Arc::new(AtomicUsize::new(0));

        timer.schedule(Duration::from_secs(30), counter_task(&fired));
        // The clock moves before the spawned task is ever polled.
        advance(Duration::from_secs(30)).await;
        sleep(Duration::ZERO).await;
        settle().await;

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn tasks_fire_in_delay_order() -> anyhow::Result<()> {
        let timer = TokioTimer::from_current()?;
        let order = Arc::new(Mutex::new(Vec::new()));

        for (label, secs) in [("late", 10), ("early", 5)] {
            let order = Arc::clone(&order);
            timer.schedule(
                Duration::from_secs(secs),
                Box::new(move || order.lock().unwrap().push(label)),
            );
        }

        sleep(Duration::from_secs(5)).await;
        settle().await;
        assert_eq!(*order.lock().unwrap(), vec!["early"]);

        sleep(Duration::from_secs(5)).await;
        settle().await;
        assert_eq!(*order.lock().unwrap(), vec!["early", "late"]);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_timer_aborts_pending_tasks() -> anyhow::Result<()> {
        let timer = TokioTimer::from_current()?;
        let fired = Arc::new(AtomicUsize::new(0));

        timer.schedule(Duration::from_secs(5), counter_task(&fired));
        drop(timer);
        sleep(Duration::from_secs(10)).await;
        settle().await;

        assert_eq!(fired.load(Ordering::SeqCst), 0);
        Ok(())
    }

    #[test]
    fn from_current_outside_runtime_fails() {
        assert!(TokioTimer::from_current().is_err());
    }
}
