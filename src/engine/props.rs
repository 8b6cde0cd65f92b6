//! Element props - values, flags and event handlers.
//!
//! Props support static values, signals, and getters so a controlling parent
//! can own an element's displayed value. Event handlers are stored under their
//! handler-prop name (`onChangeText`, `onFocus`, ...), the same key the
//! dispatcher derives from an [`EventName`].

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use spark_signals::Signal;

use crate::error::HandlerResult;
use crate::event::{EventName, EventPayload};

// =============================================================================
// Callback Types
// =============================================================================

/// Event handler registered on an element.
///
/// Rc so the dispatcher can clone the handler out of the tree before calling
/// it; handlers are free to re-render or unmount while they run.
pub type EventHandler = Rc<dyn Fn(&EventPayload) -> HandlerResult>;

/// Responder negotiation callback (`onStartShouldSetResponder`, ...).
pub type ResponderCallback = Rc<dyn Fn() -> bool>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal, typically owned by a controlling parent.
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

// =============================================================================
// Pointer Events
// =============================================================================

/// Which part of a subtree may be the target of touch events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerEvents {
    #[default]
    Auto,
    /// Neither the element nor its children receive touches.
    None,
    /// Only children receive touches.
    BoxNone,
    /// Only the element itself receives touches.
    BoxOnly,
}

// =============================================================================
// Props
// =============================================================================

/// Properties of a rendered element.
///
/// # Example
///
/// ```ignore
/// use spark_user_event::{EventName, Props};
/// use spark_signals::signal;
///
/// let text = signal(String::new());
/// let text_for_handler = text.clone();
///
/// let props = Props::new()
///     .test_id("input")
///     .value(text.clone())
///     .on(EventName::ChangeText, move |event| {
///         text_for_handler.set(event.text().unwrap_or_default().to_string());
///     });
/// ```
#[derive(Clone, Default)]
pub struct Props {
    /// Identifier used by `RenderTree::get_by_test_id`.
    pub test_id: Option<String>,

    /// Controlled value. Re-read on every access.
    pub value: Option<PropValue<String>>,

    /// Initial value of an uncontrolled text input.
    pub default_value: Option<String>,

    pub multiline: Option<bool>,

    /// `Some(false)` disables a text input (default: editable).
    pub editable: Option<bool>,

    pub pointer_events: Option<PointerEvents>,

    pub on_start_should_set_responder: Option<ResponderCallback>,

    pub on_move_should_set_responder: Option<ResponderCallback>,

    /// Event handlers keyed by handler-prop name.
    handlers: HashMap<String, EventHandler>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id = Some(id.into());
        self
    }

    pub fn value(mut self, value: impl Into<PropValue<String>>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = Some(multiline);
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = Some(editable);
        self
    }

    pub fn pointer_events(mut self, pointer_events: PointerEvents) -> Self {
        self.pointer_events = Some(pointer_events);
        self
    }

    pub fn on_start_should_set_responder(mut self, f: impl Fn() -> bool + 'static) -> Self {
        self.on_start_should_set_responder = Some(Rc::new(f));
        self
    }

    pub fn on_move_should_set_responder(mut self, f: impl Fn() -> bool + 'static) -> Self {
        self.on_move_should_set_responder = Some(Rc::new(f));
        self
    }

    /// Register an infallible handler for `event`.
    pub fn on(self, event: EventName, f: impl Fn(&EventPayload) + 'static) -> Self {
        self.try_on(event, move |payload| {
            f(payload);
            Ok(())
        })
    }

    /// Register a handler for `event` whose errors propagate to the interaction.
    pub fn try_on(self, event: EventName, f: impl Fn(&EventPayload) -> HandlerResult + 'static) -> Self {
        self.handler(event.handler_prop(), Rc::new(f))
    }

    /// Register a handler under a raw prop name.
    pub fn handler(mut self, prop_name: impl Into<String>, handler: EventHandler) -> Self {
        self.handlers.insert(prop_name.into(), handler);
        self
    }

    /// Handler registered under `prop_name`, if any.
    pub fn get_handler(&self, prop_name: &str) -> Option<EventHandler> {
        self.handlers.get(prop_name).cloned()
    }

    /// Names of all registered handler props.
    pub fn handler_names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }
}

impl fmt::Debug for Props {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut handlers: Vec<&str> = self.handler_names().collect();
        handlers.sort_unstable();
        f.debug_struct("Props")
            .field("test_id", &self.test_id)
            .field("value", &self.value.as_ref().map(PropValue::get))
            .field("default_value", &self.default_value)
            .field("multiline", &self.multiline)
            .field("editable", &self.editable)
            .field("pointer_events", &self.pointer_events)
            .field("handlers", &handlers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_prop_value_static() {
        let value: PropValue<String> = "abc".into();
        assert_eq!(value.get(), "abc");
    }

    #[test]
    fn test_prop_value_signal_is_live() {
        let text = signal("a".to_string());
        let value: PropValue<String> = text.clone().into();

        assert_eq!(value.get(), "a");
        text.set("ab".to_string());
        assert_eq!(value.get(), "ab");
    }

    #[test]
    fn test_prop_value_getter() {
        let value: PropValue<String> = PropValue::Getter(Rc::new(|| "computed".to_string()));
        assert_eq!(value.get(), "computed");
    }

    #[test]
    fn test_on_registers_under_handler_prop() {
        let props = Props::new()
            .on(EventName::ChangeText, |_| {})
            .on(EventName::Focus, |_| {});

        assert!(props.get_handler("onChangeText").is_some());
        assert!(props.get_handler("onFocus").is_some());
        assert!(props.get_handler("onBlur").is_none());
    }

    #[test]
    fn test_raw_handler_name() {
        let props = Props::new().handler("onCustomThing", Rc::new(|_| Ok(())));
        assert_eq!(props.handler_names().collect::<Vec<_>>(), vec!["onCustomThing"]);
    }

    #[test]
    fn test_debug_lists_handlers_sorted() {
        let props = Props::new()
            .test_id("input")
            .on(EventName::KeyPress, |_| {})
            .on(EventName::Blur, |_| {});

        let debug = format!("{props:?}");
        assert!(debug.contains("\"onBlur\", \"onKeyPress\""));
        assert!(debug.contains("Some(\"input\")"));
    }
}
