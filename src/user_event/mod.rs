//! User Event - Simulated user interactions bound to a session.
//!
//! A session ([`UserEvent`]) carries a configuration resolved once at
//! [`setup`] time plus the scheduler and act collaborators every interaction
//! runs through. Sessions share nothing but the read-only process defaults.
//!
//! # API
//!
//! - `setup()` / `setup_with(options)` - Create a session
//! - `UserEvent::press` / `UserEvent::long_press` - Press gestures
//! - `UserEvent::type_text` - Type into a text input
//! - `press`, `long_press`, `type_text` - Session-free calls using the defaults
//!
//! # Example
//!
//! ```ignore
//! use spark_user_event::{user_event, TypeOptions};
//!
//! let user = user_event::setup();
//! user.type_text(&input, "abc{Enter}", TypeOptions::default()).await?;
//! ```

mod keys;
mod press;
mod type_text;
mod wait;

pub use keys::*;
pub use press::*;
pub use type_text::*;
pub use wait::*;

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::config::{self, Config, HostComponentNames};
use crate::engine::{Act, ElementHandle, SignalAct};
use crate::error::Result;
use crate::event::Dispatcher;
use crate::scheduler::{Scheduler, TokioScheduler};

// =============================================================================
// Setup Options
// =============================================================================

/// Per-session overrides, merged over the process defaults by [`setup_with`].
#[derive(Clone, Default)]
pub struct SetupOptions {
    delay: Option<Option<Duration>>,
    host_component_names: Option<HostComponentNames>,
    scheduler: Option<Rc<dyn Scheduler>>,
    act: Option<Rc<dyn Act>>,
}

impl SetupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delay between events; `None` disables it.
    pub fn delay(mut self, delay: Option<Duration>) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn host_component_names(mut self, names: HostComponentNames) -> Self {
        self.host_component_names = Some(names);
        self
    }

    pub fn scheduler(mut self, scheduler: Rc<dyn Scheduler>) -> Self {
        self.scheduler = Some(scheduler);
        self
    }

    pub fn act(mut self, act: Rc<dyn Act>) -> Self {
        self.act = Some(act);
        self
    }
}

// =============================================================================
// Session
// =============================================================================

/// An interaction session.
#[derive(Clone)]
pub struct UserEvent {
    config: Config,
    scheduler: Rc<dyn Scheduler>,
    act: Rc<dyn Act>,
}

impl UserEvent {
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn dispatcher(&self) -> Dispatcher<'_> {
        Dispatcher {
            host_names: &self.config.host_component_names,
            act: self.act.as_ref(),
            scheduler: self.scheduler.as_ref(),
        }
    }

    async fn wait(&self) {
        wait(&self.config, self.scheduler.as_ref()).await;
    }

    async fn wait_for(&self, delay: Duration) {
        wait_for(Some(delay), self.scheduler.as_ref()).await;
    }

    /// Milliseconds since the session's scheduler epoch, for touch payloads.
    fn timestamp(&self) -> u64 {
        self.scheduler.elapsed().as_millis() as u64
    }
}

impl fmt::Debug for UserEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserEvent").field("config", &self.config).finish_non_exhaustive()
    }
}

/// Create a session from the process defaults.
pub fn setup() -> UserEvent {
    setup_with(SetupOptions::default())
}

/// Create a session, merging `options` over the process defaults.
pub fn setup_with(options: SetupOptions) -> UserEvent {
    let defaults = config::get_config();
    let config = Config {
        delay: options.delay.unwrap_or(defaults.delay),
        host_component_names: options
            .host_component_names
            .unwrap_or(defaults.host_component_names),
    };

    UserEvent {
        config,
        scheduler: options
            .scheduler
            .unwrap_or_else(|| Rc::new(TokioScheduler::new())),
        act: options.act.unwrap_or_else(|| Rc::new(SignalAct)),
    }
}

// =============================================================================
// Session-free Interactions
// =============================================================================

/// [`UserEvent::press`] on a fresh default session.
pub async fn press(element: &ElementHandle) -> Result<()> {
    setup().press(element).await
}

/// [`UserEvent::long_press`] on a fresh default session.
pub async fn long_press(element: &ElementHandle, options: LongPressOptions) -> Result<()> {
    setup().long_press(element, options).await
}

/// [`UserEvent::type_text`] on a fresh default session.
pub async fn type_text(element: &ElementHandle, text: &str, options: TypeOptions) -> Result<()> {
    setup().type_text(element, text, options).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{configure, reset_config, TEST_CONFIG_LOCK};

    #[test]
    fn test_setup_uses_process_defaults() {
        let _guard = TEST_CONFIG_LOCK.lock();
        reset_config();
        configure(|config| config.delay = Some(Duration::from_millis(7)));

        let user = setup();
        assert_eq!(user.config().delay, Some(Duration::from_millis(7)));
        reset_config();
    }

    #[test]
    fn test_options_override_defaults() {
        let _guard = TEST_CONFIG_LOCK.lock();
        reset_config();
        let user = setup_with(
            SetupOptions::new()
                .delay(None)
                .host_component_names(HostComponentNames { text_input: "RCTTextInput".into() }),
        );

        assert_eq!(user.config().delay, None);
        assert_eq!(user.config().host_component_names.text_input, "RCTTextInput");
    }

    #[test]
    fn test_sessions_are_isolated_from_later_default_changes() {
        let _guard = TEST_CONFIG_LOCK.lock();
        reset_config();
        let before = setup();
        configure(|config| config.delay = Some(Duration::from_millis(50)));
        let after = setup();

        assert_eq!(before.config().delay, Some(Duration::ZERO));
        assert_eq!(after.config().delay, Some(Duration::from_millis(50)));
        reset_config();
    }

    #[test]
    fn test_session_on_other_thread_sees_configured_defaults() {
        let _guard = TEST_CONFIG_LOCK.lock();
        reset_config();
        configure(|config| config.delay = Some(Duration::from_millis(42)));

        let delay = std::thread::spawn(|| setup().config().delay).join().unwrap();
        assert_eq!(delay, Some(Duration::from_millis(42)));
        reset_config();
    }
}
