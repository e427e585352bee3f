//! Input controls for the loan form.
//!
//! Controls own only presentation state (display text, cursor, focus). The
//! value they report upward is always canonical; the form store never sees a
//! formatted string.

mod choice;
mod masked;

pub use choice::{ChoiceInput, EMPLOYMENT_STATUSES};
pub use masked::{
    CurrencyInput, InputSize, KeyOutcome, LabelPlacement, MaskedControlState, MaskedInput,
    PhoneInput, SsnInput,
};

use crossterm::event::KeyEvent;

use crate::format::{CurrencyMask, DigitsMask, FieldMask, PhoneMask, PlainMask, SsnMask};
use crate::ui::form::FieldId;

/// A control bound to one form field.
#[derive(Debug, Clone)]
pub enum FieldControl {
    Masked(MaskedInput<FieldMask>),
    Choice(ChoiceInput),
}

impl FieldControl {
    /// The control the loan form uses for `field`.
    pub fn for_field(field: FieldId, currency: CurrencyMask) -> Self {
        use FieldId::*;
        let mask = match field {
            EmploymentStatus => {
                return FieldControl::Choice(ChoiceInput::new(field.label(), EMPLOYMENT_STATUSES))
            }
            PhoneNumber => FieldMask::Phone(PhoneMask),
            Ssn => FieldMask::Ssn(SsnMask),
            OriginalLoanAmount => FieldMask::Currency(currency),
            BirthMonth | BirthDay | StartMonth | StartDay => FieldMask::Digits(DigitsMask::new(2)),
            BirthYear | StartYear => FieldMask::Digits(DigitsMask::new(4)),
            _ => FieldMask::Plain(PlainMask),
        };
        let size = match field {
            PhoneNumber | Ssn | OriginalLoanAmount => InputSize::Large,
            _ => InputSize::Medium,
        };
        FieldControl::Masked(MaskedInput::new(mask, field.label()).with_size(size))
    }

    pub fn label(&self) -> &str {
        match self {
            FieldControl::Masked(input) => input.label(),
            FieldControl::Choice(choice) => choice.label(),
        }
    }

    pub fn display(&self) -> &str {
        match self {
            FieldControl::Masked(input) => input.display(),
            FieldControl::Choice(choice) => choice.value(),
        }
    }

    pub fn sync(&mut self, value: &str) {
        match self {
            FieldControl::Masked(input) => input.sync(value),
            FieldControl::Choice(choice) => choice.sync(value),
        }
    }

    pub fn on_focus(&mut self) {
        match self {
            FieldControl::Masked(input) => input.on_focus(),
            FieldControl::Choice(choice) => choice.on_focus(),
        }
    }

    pub fn on_blur(&mut self) -> Option<String> {
        match self {
            FieldControl::Masked(input) => input.on_blur(),
            FieldControl::Choice(choice) => {
                choice.on_blur();
                None
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) -> KeyOutcome {
        match self {
            FieldControl::Masked(input) => input.on_key(key),
            FieldControl::Choice(choice) => choice.on_key(key),
        }
    }
}
