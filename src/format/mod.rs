//! Input masks for the loan form.
//!
//! A mask maps whatever the user typed to the string shown in the control
//! (the display value) and maps a display value back to the string kept in
//! the form store (the canonical value).
//!
//! ```text
//! raw keystrokes ──format──→ display ──canonicalize──→ canonical
//! ```
//!
//! Masks are pure; all focus and cursor handling lives in
//! [`crate::ui::controls`].

mod currency;
mod phone;
mod ssn;

pub use currency::{CurrencyMask, DEFAULT_MAX_AMOUNT};
pub use phone::PhoneMask;
pub use ssn::SsnMask;

use thiserror::Error;

/// Why a mask refused a candidate value.
///
/// Controls keep their previous display when this happens; the reason is
/// recorded so the UI can optionally show it.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Rejection {
    #[error("not a number")]
    NotFinite,

    #[error("amount exceeds the maximum of {max}")]
    ExceedsMaximum { max: f64 },
}

/// A display/canonical mapping for one kind of field.
pub trait Mask {
    /// Render raw input as a display string.
    fn format(&self, raw: &str) -> Result<String, Rejection>;

    /// Strip presentation from a display string.
    fn canonicalize(&self, display: &str) -> String;

    /// Leading glyph the control keeps in front of the value.
    fn prefix(&self) -> Option<char> {
        None
    }

    /// Whether `c` carries value, as opposed to being a separator the mask
    /// inserts on its own.
    fn is_significant(&self, c: char) -> bool;
}

/// Free text; what you type is what gets stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlainMask;

impl Mask for PlainMask {
    fn format(&self, raw: &str) -> Result<String, Rejection> {
        Ok(raw.to_string())
    }

    fn canonicalize(&self, display: &str) -> String {
        display.to_string()
    }

    fn is_significant(&self, _c: char) -> bool {
        true
    }
}

/// Fixed-width numeric fields such as month, day and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitsMask {
    pub max_len: usize,
}

impl DigitsMask {
    pub const fn new(max_len: usize) -> Self {
        Self { max_len }
    }
}

impl Mask for DigitsMask {
    fn format(&self, raw: &str) -> Result<String, Rejection> {
        Ok(digits(raw, self.max_len))
    }

    fn canonicalize(&self, display: &str) -> String {
        digits(display, self.max_len)
    }

    fn is_significant(&self, c: char) -> bool {
        c.is_ascii_digit()
    }
}

/// Every mask the loan form uses, so controls can be stored side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldMask {
    Plain(PlainMask),
    Digits(DigitsMask),
    Phone(PhoneMask),
    Ssn(SsnMask),
    Currency(CurrencyMask),
}

impl Mask for FieldMask {
    fn format(&self, raw: &str) -> Result<String, Rejection> {
        match self {
            FieldMask::Plain(m) => m.format(raw),
            FieldMask::Digits(m) => m.format(raw),
            FieldMask::Phone(m) => m.format(raw),
            FieldMask::Ssn(m) => m.format(raw),
            FieldMask::Currency(m) => m.format(raw),
        }
    }

    fn canonicalize(&self, display: &str) -> String {
        match self {
            FieldMask::Plain(m) => m.canonicalize(display),
            FieldMask::Digits(m) => m.canonicalize(display),
            FieldMask::Phone(m) => m.canonicalize(display),
            FieldMask::Ssn(m) => m.canonicalize(display),
            FieldMask::Currency(m) => m.canonicalize(display),
        }
    }

    fn prefix(&self) -> Option<char> {
        match self {
            FieldMask::Currency(m) => m.prefix(),
            _ => None,
        }
    }

    fn is_significant(&self, c: char) -> bool {
        match self {
            FieldMask::Plain(m) => m.is_significant(c),
            FieldMask::Digits(m) => m.is_significant(c),
            FieldMask::Phone(m) => m.is_significant(c),
            FieldMask::Ssn(m) => m.is_significant(c),
            FieldMask::Currency(m) => m.is_significant(c),
        }
    }
}

/// ASCII digits of `input`, at most `limit` of them.
pub(crate) fn digits(input: &str, limit: usize) -> String {
    input.chars().filter(char::is_ascii_digit).take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mask_is_identity() {
        assert_eq!(PlainMask.format("Jane Doe").unwrap(), "Jane Doe");
        assert_eq!(PlainMask.canonicalize(" x "), " x ");
    }

    #[test]
    fn digits_mask_truncates() {
        let year = DigitsMask::new(4);
        assert_eq!(year.format("19a85x7").unwrap(), "1985");
        assert_eq!(year.canonicalize("2-0"), "20");
    }

    #[test]
    fn field_mask_forwards_prefix_only_for_currency() {
        assert_eq!(FieldMask::Phone(PhoneMask).prefix(), None);
        assert_eq!(
            FieldMask::Currency(CurrencyMask::default()).prefix(),
            Some('$')
        );
    }
}
