//! Scheduler - Suspension points between simulated events.
//!
//! Interactions never touch a timer directly; they go through an injected
//! [`Scheduler`]. The default [`TokioScheduler`] uses tokio's clock, so it
//! runs on real time and on paused time alike (`#[tokio::test(start_paused = true)]`
//! auto-advances the clock whenever the runtime is idle).

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::time::Instant;

/// Boxed non-Send future. Handlers and trees are Rc-based.
pub type LocalBoxFuture<'a> = Pin<Box<dyn Future<Output = ()> + 'a>>;

/// Source of delays, yields and timestamps for interactions.
pub trait Scheduler {
    /// Suspend for `duration`.
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'_>;

    /// Suspend once so other ready tasks (handler continuations) can run.
    fn yield_now(&self) -> LocalBoxFuture<'_>;

    /// Time since the scheduler was created. Used for event timestamps.
    fn elapsed(&self) -> Duration;
}

/// [`Scheduler`] backed by the tokio runtime the interaction is awaited on.
#[derive(Clone, Copy, Debug)]
pub struct TokioScheduler {
    epoch: Instant,
}

impl TokioScheduler {
    pub fn new() -> Self {
        Self { epoch: Instant::now() }
    }
}

impl Default for TokioScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for TokioScheduler {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'_> {
        Box::pin(tokio::time::sleep(duration))
    }

    fn yield_now(&self) -> LocalBoxFuture<'_> {
        Box::pin(tokio::task::yield_now())
    }

    fn elapsed(&self) -> Duration {
        self.epoch.elapsed()
    }
}
