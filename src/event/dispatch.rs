//! Event Dispatch - Deliver a payload to the responsible handler.
//!
//! Lookup starts at the target element. An element qualifies when it has a
//! handler under the event's handler prop *and* the event is enabled for it.
//! With [`Propagation::Bubble`] the search continues on the nearest host
//! ancestor; composites are skipped and never consulted. The first match
//! wins, so a handled event never reaches an ancestor.
//!
//! The handler runs inside [`Act`], then the scheduler yields once so that
//! continuations the handler spawned have progressed before dispatch returns.

use tracing::{debug, trace};

use super::names::{EventFlags, EventName};
use super::payload::EventPayload;
use crate::config::HostComponentNames;
use crate::engine::{Act, ElementHandle, EventHandler, PointerEvents};
use crate::error::{Result, UserEventError};
use crate::scheduler::Scheduler;

/// Whether lookup may continue on ancestors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    /// Try the element, then successive host ancestors.
    Bubble,
    /// Only the element itself.
    Own,
}

// =============================================================================
// Enablement
// =============================================================================

pub fn is_text_input(element: &ElementHandle, host_names: &HostComponentNames) -> bool {
    element.is_host() && element.element_type().as_deref() == Some(host_names.text_input.as_str())
}

/// Text inputs and elements negotiating the responder role.
pub fn is_touch_responder(element: &ElementHandle, host_names: &HostComponentNames) -> bool {
    is_text_input(element, host_names) || element.on_start_should_set_responder().is_some()
}

/// False when `pointerEvents` on the element or a host ancestor blocks touches.
pub fn is_pointer_events_enabled(element: &ElementHandle) -> bool {
    if matches!(element.pointer_events(), PointerEvents::None | PointerEvents::BoxNone) {
        return false;
    }

    let mut current = element.host_parent();
    while let Some(ancestor) = current {
        if matches!(ancestor.pointer_events(), PointerEvents::None | PointerEvents::BoxOnly) {
            return false;
        }
        current = ancestor.host_parent();
    }
    true
}

/// Whether `event` may be delivered to `element`, given its touch responder.
pub fn is_event_enabled(
    element: &ElementHandle,
    event: EventName,
    responder: Option<&ElementHandle>,
    host_names: &HostComponentNames,
) -> bool {
    if let Some(responder) = responder.filter(|r| is_text_input(r, host_names)) {
        return responder.is_editable() || event.flags().contains(EventFlags::IGNORES_EDITABLE);
    }

    if event.is_touch() && !is_pointer_events_enabled(element) {
        return false;
    }

    let touch_start = responder
        .and_then(ElementHandle::on_start_should_set_responder)
        .map(|f| f());
    let touch_move = responder
        .and_then(ElementHandle::on_move_should_set_responder)
        .map(|f| f());

    match (touch_start, touch_move) {
        (None, None) => true,
        (start, moved) => start == Some(true) || moved == Some(true),
    }
}

// =============================================================================
// Lookup
// =============================================================================

/// The element's own handler for `event`, if it is enabled.
pub fn enabled_handler(
    element: &ElementHandle,
    event: EventName,
    host_names: &HostComponentNames,
) -> Option<EventHandler> {
    if !element.is_host() {
        return None;
    }
    let handler = element.handler(event.handler_prop())?;
    let responder = is_touch_responder(element, host_names).then_some(element);
    is_event_enabled(element, event, responder, host_names).then_some(handler)
}

/// Nearest element, starting at `element`, with an enabled handler for `event`.
pub fn find_enabled_handler(
    element: &ElementHandle,
    event: EventName,
    propagation: Propagation,
    host_names: &HostComponentNames,
) -> Option<(ElementHandle, EventHandler)> {
    let mut current = Some(element.clone());
    while let Some(candidate) = current {
        if let Some(handler) = enabled_handler(&candidate, event, host_names) {
            return Some((candidate, handler));
        }
        if propagation == Propagation::Own {
            return None;
        }
        current = candidate.host_parent();
    }
    None
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Delivers payloads using a session's host names, act and scheduler.
pub struct Dispatcher<'a> {
    pub host_names: &'a HostComponentNames,
    pub act: &'a dyn Act,
    pub scheduler: &'a dyn Scheduler,
}

impl Dispatcher<'_> {
    /// Dispatch `payload` as `event`. Returns whether a handler ran.
    ///
    /// No handler anywhere in the chain is not an error.
    pub async fn dispatch(
        &self,
        element: &ElementHandle,
        event: EventName,
        payload: EventPayload,
        propagation: Propagation,
    ) -> Result<bool> {
        let Some((target, handler)) =
            find_enabled_handler(element, event, propagation, self.host_names)
        else {
            trace!(%event, element = element.index(), "no enabled handler");
            return Ok(false);
        };

        debug!(
            %event,
            element = element.index(),
            target = target.index(),
            bubbled = target != *element,
            "dispatching event"
        );

        self.act
            .act(&mut || handler(&payload))
            .map_err(|source| UserEventError::Handler { event, source })?;

        self.scheduler.yield_now().await;
        Ok(true)
    }

    pub async fn dispatch_bubbling(
        &self,
        element: &ElementHandle,
        event: EventName,
        payload: EventPayload,
    ) -> Result<bool> {
        self.dispatch(element, event, payload, Propagation::Bubble).await
    }

    pub async fn dispatch_own(
        &self,
        element: &ElementHandle,
        event: EventName,
        payload: EventPayload,
    ) -> Result<bool> {
        self.dispatch(element, event, payload, Propagation::Own).await
    }
}
