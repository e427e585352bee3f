use super::{digits, Mask, Rejection};

const MAX_DIGITS: usize = 10;

/// US phone numbers: `(DDD) DDD-DDDD`, stored as bare digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhoneMask;

impl Mask for PhoneMask {
    fn format(&self, raw: &str) -> Result<String, Rejection> {
        let d = digits(raw, MAX_DIGITS);
        let formatted = match d.len() {
            0 => String::new(),
            1..=3 => format!("({}", d),
            4..=6 => format!("({}) {}", &d[..3], &d[3..]),
            _ => format!("({}) {}-{}", &d[..3], &d[3..6], &d[6..]),
        };
        Ok(formatted)
    }

    fn canonicalize(&self, display: &str) -> String {
        digits(display, MAX_DIGITS)
    }

    fn is_significant(&self, c: char) -> bool {
        c.is_ascii_digit()
    }
}
