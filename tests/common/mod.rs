#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use spark_user_event::{EventName, EventPayload, Props};

/// Every event a text input can emit.
pub const TEXT_INPUT_EVENTS: [EventName; 12] = [
    EventName::Focus,
    EventName::Blur,
    EventName::PressIn,
    EventName::PressOut,
    EventName::Change,
    EventName::ChangeText,
    EventName::KeyPress,
    EventName::TextInput,
    EventName::SelectionChange,
    EventName::SubmitEditing,
    EventName::EndEditing,
    EventName::ContentSizeChange,
];

#[derive(Debug, Clone)]
pub struct LoggedEvent {
    pub name: String,
    pub payload: EventPayload,
}

/// Records events in delivery order.
#[derive(Clone, Default)]
pub struct EventLogger {
    events: Rc<RefCell<Vec<LoggedEvent>>>,
}

impl EventLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handler that records `name` with its payload.
    pub fn handle(&self, name: &str) -> impl Fn(&EventPayload) + 'static {
        let events = self.events.clone();
        let name = name.to_string();
        move |payload: &EventPayload| {
            events.borrow_mut().push(LoggedEvent {
                name: name.clone(),
                payload: payload.clone(),
            });
        }
    }

    /// Record a marker that is not an event (continuations, effects).
    pub fn mark(&self, name: &str) {
        self.events.borrow_mut().push(LoggedEvent {
            name: name.to_string(),
            payload: EventPayload::Text(String::new()),
        });
    }

    pub fn events(&self) -> Vec<LoggedEvent> {
        self.events.borrow().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.events.borrow().iter().map(|e| e.name.clone()).collect()
    }

    /// Payload texts of every event named `name`.
    pub fn texts_of(&self, name: &str) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.name == name)
            .filter_map(|e| e.payload.text().map(str::to_string))
            .collect()
    }
}

/// `props` with a logging handler for every text-input event.
pub fn with_text_input_handlers(props: Props, logger: &EventLogger) -> Props {
    TEXT_INPUT_EVENTS
        .into_iter()
        .fold(props, |props, event| props.on(event, logger.handle(event.as_str())))
}

/// Expected names for typing `keys` characters into a single-line input.
pub fn typing_sequence(keys: usize) -> Vec<&'static str> {
    let mut names = vec!["pressIn", "focus", "pressOut"];
    for _ in 0..keys {
        names.extend(["keyPress", "change", "changeText", "selectionChange"]);
    }
    names.extend(["endEditing", "blur"]);
    names
}
