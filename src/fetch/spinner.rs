//! Progress spinner shown while a network call is in flight.
//!
//! One background task renders a rotating glyph on a single overwritten
//! line while the foreground awaits the wrapped call. Teardown signals an
//! atomic stop flag and waits (bounded) for the worker to clear the line,
//! so the spinner never leaves stray output and never outlives the call it
//! decorates.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Glyph cycle rendered by the spinner. The trailing space is indicatif's
/// final-state glyph, shown only if the line survived to completion.
const SPINNER_TICK_CHARS: &str = "|/-\\ ";

/// Interval between glyph rotations.
const SPINNER_INTERVAL: Duration = Duration::from_millis(100);

/// How often the worker polls the stop flag.
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// Bound on waiting for the worker to acknowledge the stop signal.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

/// Runs `operation` with a spinner labeled `message` rendered concurrently.
///
/// The spinner is torn down before this function returns, on success and
/// failure results alike; the wrapped operation's outcome is returned
/// untouched.
pub(crate) async fn with_spinner<F, T>(message: &str, operation: F) -> T
where
    F: Future<Output = T>,
{
    let spinner = Spinner::start(message);
    let result = operation.await;
    spinner.finish().await;
    result
}

/// Handle to the background spinner worker.
///
/// `finish` is the normal teardown path; `Drop` is the backstop that stops
/// the worker if the wrapping future is dropped mid-flight.
struct Spinner {
    stop: Arc<AtomicBool>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl Spinner {
    fn start(message: &str) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let handle = spawn_spinner_worker(message.to_string(), Arc::clone(&stop));
        Self {
            stop,
            handle: Some(handle),
        }
    }

    async fn finish(mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = tokio::time::timeout(SHUTDOWN_GRACE, handle).await;
        }
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
    }
}

fn spawn_spinner_worker(message: String, stop: Arc<AtomicBool>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{msg}... {spinner}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars(SPINNER_TICK_CHARS),
        );
        spinner.set_message(message);
        spinner.enable_steady_tick(SPINNER_INTERVAL);

        while !stop.load(Ordering::SeqCst) {
            tokio::time::sleep(STOP_POLL_INTERVAL).await;
        }

        spinner.finish_and_clear();
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_worker_exits_when_stop_flag_is_set() {
        let stop = Arc::new(AtomicBool::new(false));
        let handle = spawn_spinner_worker("Testing".to_string(), Arc::clone(&stop));

        stop.store(true, Ordering::SeqCst);
        let joined = tokio::time::timeout(Duration::from_secs(1), handle).await;
        assert!(joined.is_ok(), "worker should observe the stop signal promptly");
    }

    #[tokio::test]
    async fn test_with_spinner_returns_wrapped_value() {
        let value = with_spinner("Loading", async { 41 + 1 }).await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_with_spinner_passes_errors_through() {
        let result: Result<(), &str> = with_spinner("Loading", async { Err("boom") }).await;
        assert_eq!(result, Err("boom"));
    }

    #[tokio::test]
    async fn test_spinner_stop_flag_starts_unset() {
        let spinner = Spinner::start("Working");
        assert!(!spinner.stop.load(Ordering::SeqCst));
        spinner.finish().await;
    }

    #[tokio::test]
    async fn test_dropping_spinner_signals_stop() {
        let spinner = Spinner::start("Working");
        let stop = Arc::clone(&spinner.stop);
        drop(spinner);
        assert!(stop.load(Ordering::SeqCst));
    }
}
