// Text input fields and required-field validation

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single editable form field. The cursor is a char index, not a byte index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub cursor: usize,
    pub masked: bool,
    pub multiline: bool,
    /// Message shown when the field is left empty
    pub required: Option<&'static str>,
    /// Current validation error, cleared on the next edit
    pub error: Option<String>,
}

impl TextField {
    pub fn new(label: &'static str, placeholder: &'static str) -> Self {
        Self {
            label,
            placeholder,
            value: String::new(),
            cursor: 0,
            masked: false,
            multiline: false,
            required: None,
            error: None,
        }
    }

    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    pub fn with_value(mut self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    /// Replace the contents and put the cursor at the end
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.chars().count();
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.error = None;
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, c);
        self.cursor += 1;
        self.error = None;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let idx = self.byte_index(self.cursor - 1);
        self.value.remove(idx);
        self.cursor -= 1;
        self.error = None;
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let idx = self.byte_index(self.cursor);
        self.value.remove(idx);
        self.error = None;
    }

    /// Apply an editing key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        }
    }

    /// Check the required rule. Sets `error` and returns false on failure.
    pub fn validate(&mut self) -> bool {
        if let Some(message) = self.required {
            if self.value.is_empty() {
                self.error = Some(message.to_string());
                return false;
            }
        }
        true
    }

    /// Text to draw: masked fields show one bullet per char
    pub fn display_value(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    /// Display text with a bar at the cursor position
    pub fn display_with_cursor(&self) -> String {
        let shown: Vec<char> = self.display_value().chars().collect();
        let pos = self.cursor.min(shown.len());
        let before: String = shown.iter().take(pos).collect();
        let after: String = shown.iter().skip(pos).collect();
        format!("{}|{}", before, after)
    }
}

/// Validate every field (no short-circuit, so all errors show at once)
pub fn validate_all(fields: &mut [&mut TextField]) -> bool {
    let mut ok = true;
    for field in fields.iter_mut() {
        ok &= field.validate();
    }
    ok
}
