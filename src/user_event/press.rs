//! Press - Press and long-press gestures.
//!
//! ```text
//! pressIn -> (hold) -> press | longPress -> (min press duration) -> pressOut
//! ```
//!
//! All events bubble, so pressing a label inside a pressable container
//! reaches the container's handlers.

use std::time::Duration;

use tracing::debug;

use super::UserEvent;
use crate::engine::ElementHandle;
use crate::error::Result;
use crate::event::{EventBuilder, EventName};

/// Shortest time between `pressIn` and `pressOut` on a real device.
pub const DEFAULT_MIN_PRESS_DURATION: Duration = Duration::from_millis(130);

/// Hold time of a default long press.
pub const DEFAULT_LONG_PRESS_DELAY: Duration = Duration::from_millis(500);

/// Options for [`UserEvent::long_press`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LongPressOptions {
    /// How long the press is held before release.
    pub duration: Duration,
}

impl Default for LongPressOptions {
    fn default() -> Self {
        Self {
            duration: DEFAULT_LONG_PRESS_DELAY,
        }
    }
}

impl UserEvent {
    /// Press and immediately release `element`.
    pub async fn press(&self, element: &ElementHandle) -> Result<()> {
        self.base_press(element, EventName::Press, Duration::ZERO).await
    }

    /// Press `element` and hold it for `options.duration`.
    pub async fn long_press(&self, element: &ElementHandle, options: LongPressOptions) -> Result<()> {
        self.base_press(element, EventName::LongPress, options.duration).await
    }

    async fn base_press(
        &self,
        element: &ElementHandle,
        release_event: EventName,
        duration: Duration,
    ) -> Result<()> {
        debug!(element = element.index(), %release_event, ?duration, "press");
        let dispatcher = self.dispatcher();

        self.wait().await;
        dispatcher
            .dispatch_bubbling(element, EventName::PressIn, EventBuilder::touch(self.timestamp()))
            .await?;

        self.wait_for(duration).await;
        dispatcher
            .dispatch_bubbling(element, release_event, EventBuilder::touch(self.timestamp()))
            .await?;

        let remaining = DEFAULT_MIN_PRESS_DURATION.saturating_sub(duration);
        if !remaining.is_zero() {
            self.wait_for(remaining).await;
        }
        dispatcher
            .dispatch_bubbling(element, EventName::PressOut, EventBuilder::touch(self.timestamp()))
            .await?;

        Ok(())
    }
}
