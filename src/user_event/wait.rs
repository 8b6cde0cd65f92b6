//! Wait - The suspension point between simulated events.

use std::time::Duration;

use tracing::trace;

use crate::config::Config;
use crate::scheduler::Scheduler;

/// Wait the configured delay.
pub async fn wait(config: &Config, scheduler: &dyn Scheduler) {
    wait_for(config.delay, scheduler).await;
}

/// Wait `delay`. A disabled or zero delay still yields once, so event
/// ordering is the same with and without a delay.
pub async fn wait_for(delay: Option<Duration>, scheduler: &dyn Scheduler) {
    match delay {
        Some(delay) if !delay.is_zero() => {
            trace!(?delay, "waiting");
            scheduler.sleep(delay).await;
        }
        _ => scheduler.yield_now().await,
    }
}
