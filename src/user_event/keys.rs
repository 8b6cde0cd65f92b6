//! Key sequence parser for typed text.
//!
//! Turns a human-authored input string into atomic key tokens:
//! - Plain characters (one token each, `\n` included)
//! - Bracketed special keys: `{Backspace}`, `{Enter}`, `{Tab}`
//! - `{{` and `}}` for a literal `{` and `}`; a lone `}` is literal too
//!
//! Tokens share key names with the crossterm vocabulary, so a parsed sequence
//! can also be replayed as crossterm key codes.

use crossterm::event::KeyCode;

use crate::error::KeyParseError;

// =============================================================================
// Types
// =============================================================================

/// Named keys recognised inside `{...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKey {
    Backspace,
    Enter,
    Tab,
}

impl SpecialKey {
    pub const ALL: [SpecialKey; 3] = [SpecialKey::Backspace, SpecialKey::Enter, SpecialKey::Tab];

    /// Key name as reported by `keyPress` (`"Enter"`).
    pub const fn name(self) -> &'static str {
        match self {
            SpecialKey::Backspace => "Backspace",
            SpecialKey::Enter => "Enter",
            SpecialKey::Tab => "Tab",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        SpecialKey::ALL.into_iter().find(|key| key.name() == name)
    }
}

/// One atomic keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyToken {
    Char(char),
    Special(SpecialKey),
}

impl KeyToken {
    /// Key name as reported by `keyPress`.
    pub fn key_name(&self) -> String {
        match self {
            KeyToken::Char(c) => c.to_string(),
            KeyToken::Special(key) => key.name().to_string(),
        }
    }

    /// Text after applying this key to `text`. Backspace on empty text is a no-op.
    pub fn apply(&self, text: &str) -> String {
        let mut next = text.to_string();
        match self {
            KeyToken::Char(c) => next.push(*c),
            KeyToken::Special(SpecialKey::Enter) => next.push('\n'),
            KeyToken::Special(SpecialKey::Tab) => next.push('\t'),
            KeyToken::Special(SpecialKey::Backspace) => {
                next.pop();
            }
        }
        next
    }

    /// Crossterm key code for this token.
    pub fn key_code(&self) -> KeyCode {
        match self {
            KeyToken::Char(c) => KeyCode::Char(*c),
            KeyToken::Special(SpecialKey::Backspace) => KeyCode::Backspace,
            KeyToken::Special(SpecialKey::Enter) => KeyCode::Enter,
            KeyToken::Special(SpecialKey::Tab) => KeyCode::Tab,
        }
    }

    /// Token for a crossterm key code, if the code has a typing equivalent.
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char(c) => Some(KeyToken::Char(c)),
            KeyCode::Backspace => Some(KeyToken::Special(SpecialKey::Backspace)),
            KeyCode::Enter => Some(KeyToken::Special(SpecialKey::Enter)),
            KeyCode::Tab => Some(KeyToken::Special(SpecialKey::Tab)),
            _ => None,
        }
    }
}

// =============================================================================
// Parser
// =============================================================================

/// Parse `input` into key tokens, preserving order.
pub fn parse_keys(input: &str) -> Result<Vec<KeyToken>, KeyParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if (c == '{' || c == '}') && chars.get(i + 1) == Some(&c) {
            tokens.push(KeyToken::Char(c));
            i += 2;
            continue;
        }

        if c != '{' {
            tokens.push(KeyToken::Char(c));
            i += 1;
            continue;
        }

        let Some(len) = chars[i + 1..].iter().position(|&c| c == '}') else {
            return Err(KeyParseError::Unterminated {
                input: input.to_string(),
                position: i,
            });
        };

        let name: String = chars[i + 1..i + 1 + len].iter().collect();
        let key = SpecialKey::from_name(&name).ok_or_else(|| KeyParseError::UnknownKey {
            input: input.to_string(),
            name,
        })?;
        tokens.push(KeyToken::Special(key));
        i += len + 2;
    }

    Ok(tokens)
}
