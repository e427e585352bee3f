use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use super::masked::KeyOutcome;

pub const EMPLOYMENT_STATUSES: [&str; 4] =
    ["Full-time", "Part-time", "Self-employed", "Unemployed"];

/// Fixed list of options cycled with Left/Right.
#[derive(Debug, Clone)]
pub struct ChoiceInput {
    label: String,
    options: Vec<String>,
    selected: Option<usize>,
    is_focused: bool,
}

impl ChoiceInput {
    pub fn new<I, S>(label: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            options: options.into_iter().map(Into::into).collect(),
            selected: None,
            is_focused: false,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    pub fn value(&self) -> &str {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Select whatever option equals `value`; anything else clears the
    /// selection.
    pub fn sync(&mut self, value: &str) {
        self.selected = self.options.iter().position(|o| o == value);
    }

    pub fn on_focus(&mut self) {
        self.is_focused = true;
    }

    pub fn on_blur(&mut self) {
        self.is_focused = false;
    }

    pub fn on_key(&mut self, key: KeyEvent) -> KeyOutcome {
        if key.kind != KeyEventKind::Press || self.options.is_empty() {
            return KeyOutcome::Ignored;
        }
        let last = self.options.len() - 1;
        let next = match (key.code, self.selected) {
            (KeyCode::Right | KeyCode::Char(' '), None) => Some(0),
            (KeyCode::Right | KeyCode::Char(' '), Some(i)) => Some(if i == last { 0 } else { i + 1 }),
            (KeyCode::Left, None) => Some(last),
            (KeyCode::Left, Some(i)) => Some(if i == 0 { last } else { i - 1 }),
            (KeyCode::Backspace | KeyCode::Delete, _) => None,
            _ => return KeyOutcome::Ignored,
        };
        self.selected = next;
        KeyOutcome::Changed(self.value().to_string())
    }
}
