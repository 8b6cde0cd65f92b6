//! Event Builder - Payloads shaped like the host components' event contract.
//!
//! Pure factories: no dispatch, no element state beyond the arguments.
//! Every structured payload serializes as `{"nativeEvent": {...}}`;
//! `changeText` receives the raw string.
//!
//! # Example
//!
//! ```ignore
//! use spark_user_event::EventBuilder;
//!
//! let event = EventBuilder::change("abc");
//! assert_eq!(event.text(), Some("abc"));
//! ```

use serde::Serialize;

/// Node handle reported as `target` in payloads.
pub const DEFAULT_TARGET: u32 = 0;

/// Width of one character in the synthetic content-size metric.
pub const CHAR_WIDTH: u32 = 5;

/// Height of one line in the synthetic content-size metric.
pub const LINE_HEIGHT: u32 = 16;

// =============================================================================
// Payload Parts
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContentSize {
    pub width: u32,
    pub height: u32,
}

/// Collapsed selection at the end of `text`.
pub fn text_range(text: &str) -> TextRange {
    let end = text.chars().count();
    TextRange { start: end, end }
}

/// Synthetic content size: longest line × char width, line count × line height.
pub fn text_content_size(text: &str) -> ContentSize {
    let lines: Vec<&str> = text.split('\n').collect();
    let longest = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    ContentSize {
        width: saturating_u32(longest).saturating_mul(CHAR_WIDTH),
        height: saturating_u32(lines.len()).saturating_mul(LINE_HEIGHT),
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Wrapper that puts the event body under `nativeEvent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeEvent<T> {
    pub native_event: T,
}

impl<T> NativeEvent<T> {
    fn new(native_event: T) -> Self {
        Self { native_event }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchPoint {
    pub identifier: u32,
    pub location_x: f32,
    pub location_y: f32,
    pub page_x: f32,
    pub page_y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TouchData {
    pub changed_touches: Vec<TouchPoint>,
    pub identifier: u32,
    pub location_x: f32,
    pub location_y: f32,
    pub page_x: f32,
    pub page_y: f32,
    pub target: u32,
    /// Milliseconds since the session's scheduler epoch.
    pub timestamp: u64,
    pub touches: Vec<TouchPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetData {
    pub target: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyPressData {
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextInputData {
    pub text: String,
    pub previous_text: String,
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeData {
    pub text: String,
    pub target: u32,
    pub event_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionChangeData {
    pub selection: TextRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSizeChangeData {
    pub content_size: ContentSize,
    pub target: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditingData {
    pub text: String,
    pub target: u32,
}

// =============================================================================
// Event Payload
// =============================================================================

/// A synthesized event payload. Built fresh per dispatched event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum EventPayload {
    Touch(NativeEvent<TouchData>),
    /// Focus and blur.
    Target(NativeEvent<TargetData>),
    KeyPress(NativeEvent<KeyPressData>),
    TextInput(NativeEvent<TextInputData>),
    Change(NativeEvent<ChangeData>),
    SelectionChange(NativeEvent<SelectionChangeData>),
    ContentSizeChange(NativeEvent<ContentSizeChangeData>),
    /// Submit editing and end editing.
    Editing(NativeEvent<EditingData>),
    /// Raw string, as delivered to `onChangeText`.
    Text(String),
}

impl EventPayload {
    /// Text carried by text-bearing payloads.
    pub fn text(&self) -> Option<&str> {
        match self {
            EventPayload::Text(text) => Some(text),
            EventPayload::Change(event) => Some(&event.native_event.text),
            EventPayload::TextInput(event) => Some(&event.native_event.text),
            EventPayload::Editing(event) => Some(&event.native_event.text),
            _ => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            EventPayload::KeyPress(event) => Some(&event.native_event.key),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<TextRange> {
        match self {
            EventPayload::SelectionChange(event) => Some(event.native_event.selection),
            _ => None,
        }
    }

    pub fn content_size(&self) -> Option<ContentSize> {
        match self {
            EventPayload::ContentSizeChange(event) => Some(event.native_event.content_size),
            _ => None,
        }
    }
}

// =============================================================================
// Event Builder
// =============================================================================

/// Factory for host-component event payloads.
pub struct EventBuilder;

impl EventBuilder {
    // -------------------------------------------------------------------------
    // Common
    // -------------------------------------------------------------------------

    pub fn touch(timestamp: u64) -> EventPayload {
        EventPayload::Touch(NativeEvent::new(TouchData {
            changed_touches: Vec::new(),
            identifier: 0,
            location_x: 0.0,
            location_y: 0.0,
            page_x: 0.0,
            page_y: 0.0,
            target: DEFAULT_TARGET,
            timestamp,
            touches: Vec::new(),
        }))
    }

    pub fn focus() -> EventPayload {
        EventPayload::Target(NativeEvent::new(TargetData { target: DEFAULT_TARGET }))
    }

    pub fn blur() -> EventPayload {
        EventPayload::Target(NativeEvent::new(TargetData { target: DEFAULT_TARGET }))
    }

    // -------------------------------------------------------------------------
    // Text input
    // -------------------------------------------------------------------------

    pub fn key_press(key: impl Into<String>) -> EventPayload {
        EventPayload::KeyPress(NativeEvent::new(KeyPressData { key: key.into() }))
    }

    /// Incremental input on multiline inputs. `range` is collapsed at the new text's end.
    pub fn text_input(text: &str, previous_text: &str) -> EventPayload {
        EventPayload::TextInput(NativeEvent::new(TextInputData {
            text: text.to_string(),
            previous_text: previous_text.to_string(),
            range: text_range(text),
        }))
    }

    pub fn change(text: &str) -> EventPayload {
        EventPayload::Change(NativeEvent::new(ChangeData {
            text: text.to_string(),
            target: DEFAULT_TARGET,
            event_count: 0,
        }))
    }

    pub fn change_text(text: &str) -> EventPayload {
        EventPayload::Text(text.to_string())
    }

    pub fn selection_change(selection: TextRange) -> EventPayload {
        EventPayload::SelectionChange(NativeEvent::new(SelectionChangeData { selection }))
    }

    pub fn content_size_change(content_size: ContentSize) -> EventPayload {
        EventPayload::ContentSizeChange(NativeEvent::new(ContentSizeChangeData {
            content_size,
            target: DEFAULT_TARGET,
        }))
    }

    pub fn submit_editing(text: &str) -> EventPayload {
        EventPayload::Editing(NativeEvent::new(EditingData {
            text: text.to_string(),
            target: DEFAULT_TARGET,
        }))
    }

    pub fn end_editing(text: &str) -> EventPayload {
        EventPayload::Editing(NativeEvent::new(EditingData {
            text: text.to_string(),
            target: DEFAULT_TARGET,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn to_json(payload: &EventPayload) -> serde_json::Value {
        serde_json::to_value(payload).unwrap()
    }

    #[test]
    fn test_touch_shape() {
        assert_eq!(
            to_json(&EventBuilder::touch(42)),
            json!({
                "nativeEvent": {
                    "changedTouches": [],
                    "identifier": 0,
                    "locationX": 0.0,
                    "locationY": 0.0,
                    "pageX": 0.0,
                    "pageY": 0.0,
                    "target": 0,
                    "timestamp": 42,
                    "touches": [],
                }
            })
        );
    }

    #[test]
    fn test_focus_and_blur_are_target_only() {
        assert_eq!(to_json(&EventBuilder::focus()), json!({ "nativeEvent": { "target": 0 } }));
        assert_eq!(to_json(&EventBuilder::blur()), json!({ "nativeEvent": { "target": 0 } }));
    }

    #[test]
    fn test_text_input_payloads() {
        assert_eq!(
            to_json(&EventBuilder::key_press("Enter")),
            json!({ "nativeEvent": { "key": "Enter" } })
        );
        assert_eq!(
            to_json(&EventBuilder::change("ab")),
            json!({ "nativeEvent": { "text": "ab", "target": 0, "eventCount": 0 } })
        );
        assert_eq!(to_json(&EventBuilder::change_text("ab")), json!("ab"));
        assert_eq!(
            to_json(&EventBuilder::text_input("ab", "a")),
            json!({
                "nativeEvent": {
                    "text": "ab",
                    "previousText": "a",
                    "range": { "start": 2, "end": 2 },
                }
            })
        );
        assert_eq!(
            to_json(&EventBuilder::submit_editing("done")),
            json!({ "nativeEvent": { "text": "done", "target": 0 } })
        );
    }

    #[test]
    fn test_selection_collapses_at_end_in_chars() {
        assert_eq!(text_range(""), TextRange { start: 0, end: 0 });
        assert_eq!(text_range("héllo"), TextRange { start: 5, end: 5 });
        assert_eq!(
            to_json(&EventBuilder::selection_change(text_range("abc"))),
            json!({ "nativeEvent": { "selection": { "start": 3, "end": 3 } } })
        );
    }

    #[test]
    fn test_content_size_saturates() {
        assert_eq!(saturating_u32(7), 7);
        assert_eq!(saturating_u32(usize::MAX).saturating_mul(CHAR_WIDTH), u32::MAX);
        assert_eq!(saturating_u32(u32::MAX as usize / 2).saturating_mul(LINE_HEIGHT), u32::MAX);
    }

    #[test]
    fn test_content_size_from_lines() {
        assert_eq!(text_content_size(""), ContentSize { width: 0, height: 16 });
        assert_eq!(text_content_size("abc"), ContentSize { width: 15, height: 16 });
        assert_eq!(text_content_size("a\nabcd\n"), ContentSize { width: 20, height: 48 });
        assert_eq!(
            to_json(&EventBuilder::content_size_change(text_content_size("ab"))),
            json!({ "nativeEvent": { "contentSize": { "width": 10, "height": 16 }, "target": 0 } })
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(EventBuilder::change_text("x").text(), Some("x"));
        assert_eq!(EventBuilder::end_editing("y").text(), Some("y"));
        assert_eq!(EventBuilder::focus().text(), None);
        assert_eq!(EventBuilder::key_press("a").key(), Some("a"));
        assert_eq!(
            EventBuilder::selection_change(text_range("ab")).selection(),
            Some(TextRange { start: 2, end: 2 })
        );
        assert_eq!(
            EventBuilder::content_size_change(text_content_size("a")).content_size(),
            Some(ContentSize { width: 5, height: 16 })
        );
    }
}
