//! Event names and the event → handler-prop naming table.

use std::fmt;
use std::str::FromStr;

use crate::error::UnknownEventName;

// =============================================================================
// Event Flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Static traits of an event kind, consulted by the enablement rules.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EventFlags: u8 {
        const NONE = 0;
        /// Touch-class event, blocked by `pointerEvents`.
        const TOUCH = 1 << 0;
        /// Delivered to a text input even when it is not editable.
        const IGNORES_EDITABLE = 1 << 1;
    }
}

// =============================================================================
// Event Name
// =============================================================================

/// A named interaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventName {
    Press,
    PressIn,
    PressOut,
    LongPress,
    Focus,
    Blur,
    KeyPress,
    TextInput,
    Change,
    ChangeText,
    SelectionChange,
    ContentSizeChange,
    SubmitEditing,
    EndEditing,
    Layout,
    Scroll,
}

impl EventName {
    pub const ALL: [EventName; 16] = [
        EventName::Press,
        EventName::PressIn,
        EventName::PressOut,
        EventName::LongPress,
        EventName::Focus,
        EventName::Blur,
        EventName::KeyPress,
        EventName::TextInput,
        EventName::Change,
        EventName::ChangeText,
        EventName::SelectionChange,
        EventName::ContentSizeChange,
        EventName::SubmitEditing,
        EventName::EndEditing,
        EventName::Layout,
        EventName::Scroll,
    ];

    /// The camelCase event name (`"changeText"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            EventName::Press => "press",
            EventName::PressIn => "pressIn",
            EventName::PressOut => "pressOut",
            EventName::LongPress => "longPress",
            EventName::Focus => "focus",
            EventName::Blur => "blur",
            EventName::KeyPress => "keyPress",
            EventName::TextInput => "textInput",
            EventName::Change => "change",
            EventName::ChangeText => "changeText",
            EventName::SelectionChange => "selectionChange",
            EventName::ContentSizeChange => "contentSizeChange",
            EventName::SubmitEditing => "submitEditing",
            EventName::EndEditing => "endEditing",
            EventName::Layout => "layout",
            EventName::Scroll => "scroll",
        }
    }

    /// The prop a handler for this event is registered under (`"onChangeText"`).
    pub const fn handler_prop(self) -> &'static str {
        match self {
            EventName::Press => "onPress",
            EventName::PressIn => "onPressIn",
            EventName::PressOut => "onPressOut",
            EventName::LongPress => "onLongPress",
            EventName::Focus => "onFocus",
            EventName::Blur => "onBlur",
            EventName::KeyPress => "onKeyPress",
            EventName::TextInput => "onTextInput",
            EventName::Change => "onChange",
            EventName::ChangeText => "onChangeText",
            EventName::SelectionChange => "onSelectionChange",
            EventName::ContentSizeChange => "onContentSizeChange",
            EventName::SubmitEditing => "onSubmitEditing",
            EventName::EndEditing => "onEndEditing",
            EventName::Layout => "onLayout",
            EventName::Scroll => "onScroll",
        }
    }

    pub const fn flags(self) -> EventFlags {
        match self {
            EventName::Press
            | EventName::PressIn
            | EventName::PressOut
            | EventName::LongPress => EventFlags::TOUCH,
            EventName::ContentSizeChange | EventName::Layout | EventName::Scroll => {
                EventFlags::IGNORES_EDITABLE
            }
            EventName::Focus
            | EventName::Blur
            | EventName::KeyPress
            | EventName::TextInput
            | EventName::Change
            | EventName::ChangeText
            | EventName::SelectionChange
            | EventName::SubmitEditing
            | EventName::EndEditing => EventFlags::NONE,
        }
    }

    pub fn is_touch(self) -> bool {
        self.flags().contains(EventFlags::TOUCH)
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventName {
    type Err = UnknownEventName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventName::ALL
            .into_iter()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| UnknownEventName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_handler_prop_follows_naming_convention() {
        for event in EventName::ALL {
            let name = event.as_str();
            let mut chars = name.chars();
            let first = chars.next().unwrap().to_ascii_uppercase();
            let expected = format!("on{first}{}", chars.as_str());
            assert_eq!(event.handler_prop(), expected, "{event}");
        }
    }

    #[test]
    fn test_handler_props_are_distinct() {
        let props: HashSet<_> = EventName::ALL.iter().map(|e| e.handler_prop()).collect();
        assert_eq!(props.len(), EventName::ALL.len());
    }

    #[test]
    fn test_unknown_event_name_message() {
        let err = "drag".parse::<EventName>().unwrap_err();
        assert_eq!(err.to_string(), "unknown event name \"drag\"");
    }

    #[test]
    fn test_parse_round_trips_names() {
        assert_eq!("changeText".parse(), Ok(EventName::ChangeText));
        assert_eq!("pressIn".parse(), Ok(EventName::PressIn));
        assert_eq!(
            "ChangeText".parse::<EventName>(),
            Err(UnknownEventName("ChangeText".to_string()))
        );
    }

    #[test]
    fn test_flags() {
        assert!(EventName::PressIn.is_touch());
        assert!(!EventName::Focus.is_touch());
        assert!(EventName::ContentSizeChange.flags().contains(EventFlags::IGNORES_EDITABLE));
        assert!(!EventName::Change.flags().contains(EventFlags::IGNORES_EDITABLE));
        assert_eq!(EventName::Focus.flags(), EventFlags::NONE);
    }
}
