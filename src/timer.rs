//! One-shot deferred callbacks on a background thread.

use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Pending,
    Fired,
    Stopped,
}

#[derive(Debug)]
struct Shared {
    state: Mutex<State>,
    wake: Condvar,
}

/// Handle to a callback scheduled with [`after_func`].
///
/// Dropping the handle does not cancel the callback.
#[derive(Debug, Clone)]
pub struct Timer {
    shared: Arc<Shared>,
}

impl Timer {
    /// Cancels the callback if it has not run yet.
    ///
    /// Returns `true` if this call kept the callback from running, `false` if
    /// it had already fired or been stopped.
    pub fn stop(&self) -> bool {
        let mut state = self
            .shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *state != State::Pending {
            return false;
        }
        *state = State::Stopped;
        self.shared.wake.notify_all();
        tracing::trace!("timer stopped");
        true
    }
}

/// Runs `f` once, on its own thread, after `delay_ms` milliseconds.
///
/// Every pending timer parks one OS thread until it fires or is stopped;
/// [`Timer::stop`] wakes that thread so it exits right away. This suits a
/// handful of short delays, not thousands of long-lived timers.
pub fn after_func<F>(delay_ms: u64, f: F) -> Timer
where
    F: FnOnce() + Send + 'static,
{
    let shared = Arc::new(Shared {
        state: Mutex::new(State::Pending),
        wake: Condvar::new(),
    });
    let worker = Arc::clone(&shared);
    tracing::trace!(delay_ms, "timer scheduled");

    thread::spawn(move || {
        let state = worker.state.lock().unwrap_or_else(PoisonError::into_inner);
        let (mut state, _) = worker
            .wake
            .wait_timeout_while(state, Duration::from_millis(delay_ms), |s| {
                *s == State::Pending
            })
            .unwrap_or_else(PoisonError::into_inner);
        if *state != State::Pending {
            return;
        }
        *state = State::Fired;
        drop(state);
        tracing::debug!(delay_ms, "timer fired");
        f();
    });

    Timer { shared }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::mpsc;

    #[test]
    fn test_after_func_runs_later() {
        let executed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&executed);
        let _timer = after_func(50, move || flag.store(true, Ordering::SeqCst));

        assert!(!executed.load(Ordering::SeqCst), "callback executed too early");
        thread::sleep(Duration::from_millis(300));
        assert!(executed.load(Ordering::SeqCst), "callback was not executed");
    }

    #[test]
    fn test_stop_before_firing() {
        let executed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&executed);
        let timer = after_func(100, move || flag.store(true, Ordering::SeqCst));

        assert!(timer.stop(), "timer should have been active");
        assert!(!timer.stop(), "second stop must report inactive");
        thread::sleep(Duration::from_millis(250));
        assert!(!executed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_stop_after_firing() {
        let (tx, rx) = mpsc::channel();
        let timer = after_func(10, move || tx.send(()).unwrap());

        rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(!timer.stop());
    }

    #[test]
    fn test_stop_releases_worker_thread() {
        let (tx, rx) = mpsc::channel::<()>();
        let timer = after_func(60_000, move || tx.send(()).unwrap());

        assert!(timer.stop());
        // The worker drops the unrun callback, and its sender, on exit.
        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)),
            Err(mpsc::RecvTimeoutError::Disconnected)
        );
    }

    #[test]
    fn test_dropped_handle_still_fires() {
        let (tx, rx) = mpsc::channel();
        drop(after_func(10, move || tx.send(7).unwrap()));
        assert_eq!(rx.recv_timeout(Duration::from_secs(5)), Ok(7));
    }
}
