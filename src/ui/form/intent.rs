use crate::ui::mvi::Intent;

use super::field::FieldId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormIntent {
    /// Store a canonical value. No validation, no coercion.
    SetField { field: FieldId, value: String },
    /// Back to the all-empty form, e.g. after a loan was created.
    Reset,
}

impl FormIntent {
    pub fn set(field: FieldId, value: impl Into<String>) -> Self {
        FormIntent::SetField {
            field,
            value: value.into(),
        }
    }
}

impl Intent for FormIntent {}
