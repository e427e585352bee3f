//! Text input that shows a formatted value but reports the canonical one.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::format::{CurrencyMask, Mask, PhoneMask, Rejection, SsnMask};

pub type PhoneInput = MaskedInput<PhoneMask>;
pub type SsnInput = MaskedInput<SsnMask>;
pub type CurrencyInput = MaskedInput<CurrencyMask>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl InputSize {
    /// Rows the control occupies, including its label.
    pub fn height(self) -> u16 {
        match self {
            InputSize::Small => 1,
            InputSize::Medium => 2,
            InputSize::Large => 3,
        }
    }
}

/// Where the label sits relative to the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPlacement {
    /// Above the value: the control is focused or holds something.
    Floating,
    /// In place of the value, like a placeholder.
    Inline,
}

/// Per-control view state, rebuilt whenever the value or focus changes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MaskedControlState {
    pub display_value: String,
    pub is_focused: bool,
    pub has_value: bool,
}

/// Result of feeding a key event to a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a key this control handles.
    Ignored,
    /// Handled and deliberately blocked, e.g. deleting the `$`.
    Suppressed,
    /// Cursor moved; value untouched.
    Moved,
    /// Value edited; carries the canonical value to store.
    Changed(String),
}

#[derive(Debug, Clone)]
pub struct MaskedInput<M> {
    mask: M,
    label: String,
    size: InputSize,
    error: Option<String>,
    show_error: bool,
    state: MaskedControlState,
    canonical: String,
    /// Char index into the display value.
    cursor: usize,
    last_rejection: Option<Rejection>,
}

impl<M: Mask> MaskedInput<M> {
    pub fn new(mask: M, label: impl Into<String>) -> Self {
        Self {
            mask,
            label: label.into(),
            size: InputSize::default(),
            error: None,
            show_error: false,
            state: MaskedControlState::default(),
            canonical: String::new(),
            cursor: 0,
            last_rejection: None,
        }
    }

    pub fn with_size(mut self, size: InputSize) -> Self {
        self.size = size;
        self
    }

    pub fn set_error(&mut self, error: Option<String>, show_error: bool) {
        self.error = error;
        self.show_error = show_error;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn size(&self) -> InputSize {
        self.size
    }

    pub fn state(&self) -> &MaskedControlState {
        &self.state
    }

    pub fn display(&self) -> &str {
        &self.state.display_value
    }

    pub fn value(&self) -> &str {
        &self.canonical
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Reason the most recent edit was discarded, cleared by the next
    /// accepted edit.
    pub fn last_rejection(&self) -> Option<Rejection> {
        self.last_rejection
    }

    pub fn label_placement(&self) -> LabelPlacement {
        if self.state.is_focused || self.state.has_value {
            LabelPlacement::Floating
        } else {
            LabelPlacement::Inline
        }
    }

    /// Error text to show, if any. Hidden while the user is editing.
    pub fn visible_error(&self) -> Option<&str> {
        if self.show_error && !self.state.is_focused {
            self.error.as_deref()
        } else {
            None
        }
    }

    /// Adopt a canonical value coming from the store.
    pub fn sync(&mut self, value: &str) {
        if value == self.canonical {
            return;
        }
        self.canonical = value.to_string();
        self.state.has_value = !value.is_empty();
        self.state.display_value = if value.is_empty() {
            self.empty_display()
        } else {
            self.mask
                .format(value)
                .unwrap_or_else(|_| value.to_string())
        };
        self.cursor = char_len(&self.state.display_value);
    }

    /// Handle a whole-text change and return the canonical value to store.
    pub fn on_input(&mut self, raw: &str) -> String {
        self.apply(raw.to_string(), char_len(raw))
    }

    pub fn on_focus(&mut self) {
        self.state.is_focused = true;
        if self.state.display_value.is_empty() {
            if let Some(glyph) = self.mask.prefix() {
                self.state.display_value = glyph.to_string();
            }
        }
        self.cursor = char_len(&self.state.display_value);
    }

    /// Leave the control. Returns `Some("")` when a bare glyph collapsed to
    /// nothing, which the caller must store.
    pub fn on_blur(&mut self) -> Option<String> {
        self.state.is_focused = false;
        if self.is_bare_glyph(&self.state.display_value) {
            self.state.display_value.clear();
            self.state.has_value = false;
            self.canonical.clear();
            self.cursor = 0;
            return Some(String::new());
        }
        None
    }

    pub fn on_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind != KeyEventKind::Press
            || key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return KeyOutcome::Ignored;
        }

        let guarded = self.mask.prefix().is_some();
        let len = char_len(&self.state.display_value);

        match key.code {
            KeyCode::Char(c) => {
                let mut raw = self.state.display_value.clone();
                raw.insert(byte_index(&raw, self.cursor), c);
                KeyOutcome::Changed(self.apply(raw, self.cursor + 1))
            }
            KeyCode::Backspace => {
                if guarded && self.cursor <= 1 {
                    return KeyOutcome::Suppressed;
                }
                let chars: Vec<char> = self.state.display_value.chars().collect();
                let Some(at) = (self.floor()..self.cursor)
                    .rev()
                    .find(|&i| self.mask.is_significant(chars[i]))
                else {
                    return KeyOutcome::Ignored;
                };
                KeyOutcome::Changed(self.apply(remove_at(&chars, at), at))
            }
            KeyCode::Delete => {
                if guarded && self.cursor <= 1 {
                    return KeyOutcome::Suppressed;
                }
                let chars: Vec<char> = self.state.display_value.chars().collect();
                let Some(at) = (self.cursor..chars.len())
                    .find(|&i| self.mask.is_significant(chars[i]))
                else {
                    return KeyOutcome::Ignored;
                };
                let cursor = self.cursor;
                KeyOutcome::Changed(self.apply(remove_at(&chars, at), cursor))
            }
            KeyCode::Left => {
                if guarded && self.cursor <= 1 {
                    KeyOutcome::Suppressed
                } else if self.cursor == 0 {
                    KeyOutcome::Ignored
                } else {
                    self.cursor -= 1;
                    KeyOutcome::Moved
                }
            }
            KeyCode::Right => {
                if self.cursor < len {
                    self.cursor += 1;
                    KeyOutcome::Moved
                } else {
                    KeyOutcome::Ignored
                }
            }
            KeyCode::Home => {
                self.cursor = self.floor();
                KeyOutcome::Moved
            }
            KeyCode::End => {
                self.cursor = len;
                KeyOutcome::Moved
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Format `raw`, update display and cursor, return the canonical value.
    fn apply(&mut self, mut raw: String, mut raw_cursor: usize) -> String {
        if let Some(glyph) = self.mask.prefix() {
            if !raw.is_empty() && !raw.starts_with(glyph) {
                raw.insert(0, glyph);
                raw_cursor += 1;
            }
            if raw.is_empty() || self.is_bare_glyph(&raw) {
                return self.clear();
            }
        }

        match self.mask.format(&raw) {
            // Nothing significant survived, e.g. "$a": same as clearing.
            Ok(display) if display.is_empty() && self.mask.prefix().is_some() => {
                return self.clear();
            }
            Ok(display) => {
                self.cursor = self.place_cursor(&raw, raw_cursor, &display);
                self.state.display_value = display;
                self.last_rejection = None;
            }
            Err(rejection) => {
                tracing::debug!(label = %self.label, %rejection, "edit rejected");
                self.last_rejection = Some(rejection);
            }
        }

        self.canonical = self.mask.canonicalize(&self.state.display_value);
        self.state.has_value = !self.canonical.is_empty();
        self.canonical.clone()
    }

    /// Empty the control, keeping the glyph on screen while focused.
    fn clear(&mut self) -> String {
        self.state.display_value = self.empty_display();
        self.state.has_value = false;
        self.canonical.clear();
        self.cursor = char_len(&self.state.display_value);
        self.last_rejection = None;
        String::new()
    }

    /// Cursor position in `display` after as many significant characters as
    /// preceded `raw_cursor` in `raw`.
    fn place_cursor(&self, raw: &str, raw_cursor: usize, display: &str) -> usize {
        let wanted = raw
            .chars()
            .take(raw_cursor)
            .filter(|c| self.mask.is_significant(*c))
            .count();

        let mut seen = 0;
        for (i, c) in display.chars().enumerate() {
            if self.mask.is_significant(c) {
                if seen == wanted {
                    return i;
                }
                seen += 1;
            }
        }
        char_len(display)
    }

    /// Leftmost cursor position: just after the glyph, if there is one.
    fn floor(&self) -> usize {
        match self.mask.prefix() {
            Some(glyph) if self.state.display_value.starts_with(glyph) => 1,
            _ => 0,
        }
    }

    fn empty_display(&self) -> String {
        match self.mask.prefix() {
            Some(glyph) if self.state.is_focused => glyph.to_string(),
            _ => String::new(),
        }
    }

    fn is_bare_glyph(&self, text: &str) -> bool {
        let mut chars = text.chars();
        matches!(
            (self.mask.prefix(), chars.next(), chars.next()),
            (Some(glyph), Some(first), None) if glyph == first
        )
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

fn remove_at(chars: &[char], at: usize) -> String {
    chars
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != at)
        .map(|(_, c)| c)
        .collect()
}
