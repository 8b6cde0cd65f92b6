//! Type - Drive a text input through a realistic typing session.
//!
//! Event order for one call:
//!
//! ```text
//! [pressIn] focus [pressOut]
//! per key: keyPress [textInput] change changeText selectionChange [contentSizeChange]
//! [submitEditing] endEditing blur
//! ```
//!
//! Bracketed press events are skipped with `skip_press`, `submitEditing` is
//! opt-in, and `textInput`/`contentSizeChange` are emitted only by multiline
//! inputs. Each step waits one scheduler tick; events within a step do not.

use tracing::debug;

use super::UserEvent;
use super::keys::{KeyToken, parse_keys};
use crate::engine::ElementHandle;
use crate::error::{Result, UserEventError};
use crate::event::{Dispatcher, EventBuilder, EventName, text_content_size, text_range};

/// Options for [`UserEvent::type_text`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TypeOptions {
    /// Skip the `pressIn`/`pressOut` pair before focusing.
    pub skip_press: bool,
    /// Emit `submitEditing` after the last key.
    pub submit_editing: bool,
}

impl UserEvent {
    /// Type `text` into a host text input.
    ///
    /// `text` may contain `{Backspace}`, `{Enter}` and `{Tab}`. The element
    /// must be the configured text-input host; otherwise, or on a malformed
    /// key sequence, this fails before any event is dispatched.
    pub async fn type_text(
        &self,
        element: &ElementHandle,
        text: &str,
        options: TypeOptions,
    ) -> Result<()> {
        let expected = &self.config.host_component_names.text_input;
        let actual = element.element_type();
        if !element.is_host() || actual.as_ref() != Some(expected) {
            return Err(UserEventError::TypeMismatch {
                interaction: "type_text",
                expected: expected.clone(),
                actual: actual.unwrap_or_else(|| "<unmounted>".to_string()),
            });
        }

        let keys = parse_keys(text)?;
        debug!(element = element.index(), keys = keys.len(), ?options, "type_text");

        let dispatcher = self.dispatcher();

        if !options.skip_press {
            self.wait().await;
            dispatcher
                .dispatch_bubbling(element, EventName::PressIn, EventBuilder::touch(self.timestamp()))
                .await?;
        }

        self.wait().await;
        dispatcher
            .dispatch_bubbling(element, EventName::Focus, EventBuilder::focus())
            .await?;

        if !options.skip_press {
            dispatcher
                .dispatch_bubbling(element, EventName::PressOut, EventBuilder::touch(self.timestamp()))
                .await?;
        }

        let mut current_text = element
            .value()
            .or_else(|| element.default_value())
            .unwrap_or_default();

        for key in &keys {
            self.wait().await;

            // A controlling parent may have rejected or rewritten the last change
            let previous_text = element.value().unwrap_or(current_text);
            current_text = key.apply(&previous_text);

            emit_typing_events(&dispatcher, element, key, &current_text, &previous_text).await?;
        }

        let final_text = element.value().unwrap_or(current_text);

        if options.submit_editing {
            self.wait().await;
            dispatcher
                .dispatch_bubbling(
                    element,
                    EventName::SubmitEditing,
                    EventBuilder::submit_editing(&final_text),
                )
                .await?;
        }

        self.wait().await;
        dispatcher
            .dispatch_bubbling(element, EventName::EndEditing, EventBuilder::end_editing(&final_text))
            .await?;
        dispatcher
            .dispatch_bubbling(element, EventName::Blur, EventBuilder::blur())
            .await?;

        Ok(())
    }
}

async fn emit_typing_events(
    dispatcher: &Dispatcher<'_>,
    element: &ElementHandle,
    key: &KeyToken,
    current_text: &str,
    previous_text: &str,
) -> Result<()> {
    // Structural gate: keyed on the multiline flag, not on handler presence
    let is_multiline = element.is_multiline();

    dispatcher
        .dispatch_bubbling(element, EventName::KeyPress, EventBuilder::key_press(key.key_name()))
        .await?;

    if is_multiline {
        dispatcher
            .dispatch_bubbling(
                element,
                EventName::TextInput,
                EventBuilder::text_input(current_text, previous_text),
            )
            .await?;
    }

    dispatcher
        .dispatch_bubbling(element, EventName::Change, EventBuilder::change(current_text))
        .await?;
    dispatcher
        .dispatch_bubbling(element, EventName::ChangeText, EventBuilder::change_text(current_text))
        .await?;
    dispatcher
        .dispatch_bubbling(
            element,
            EventName::SelectionChange,
            EventBuilder::selection_change(text_range(current_text)),
        )
        .await?;

    if is_multiline {
        dispatcher
            .dispatch_bubbling(
                element,
                EventName::ContentSizeChange,
                EventBuilder::content_size_change(text_content_size(current_text)),
            )
            .await?;
    }

    Ok(())
}
