use super::{Mask, Rejection};

/// Largest amount the loan form accepts by default.
pub const DEFAULT_MAX_AMOUNT: f64 = 999_999_999.0;

const GLYPH: char = '$';

/// Dollar amounts: `$1,234.56`, stored as `1234.56`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrencyMask {
    pub allow_cents: bool,
    pub max_amount: f64,
}

impl Default for CurrencyMask {
    fn default() -> Self {
        Self {
            allow_cents: true,
            max_amount: DEFAULT_MAX_AMOUNT,
        }
    }
}

impl CurrencyMask {
    pub fn new(allow_cents: bool, max_amount: f64) -> Self {
        Self {
            allow_cents,
            max_amount,
        }
    }

    /// Reduce raw input to digits and at most one decimal point.
    fn numeric(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        let mut seen_point = false;
        for c in raw.chars() {
            match c {
                '0'..='9' => out.push(c),
                '.' if self.allow_cents && !seen_point => {
                    seen_point = true;
                    out.push(c);
                }
                _ => {}
            }
        }
        if let Some(point) = out.find('.') {
            out.truncate((point + 3).min(out.len()));
        }
        out
    }
}

impl Mask for CurrencyMask {
    fn format(&self, raw: &str) -> Result<String, Rejection> {
        let numeric = self.numeric(raw);
        if numeric.is_empty() {
            return Ok(String::new());
        }

        let value: f64 = numeric.parse().map_err(|_| Rejection::NotFinite)?;
        if !value.is_finite() {
            return Err(Rejection::NotFinite);
        }
        if value > self.max_amount {
            return Err(Rejection::ExceedsMaximum {
                max: self.max_amount,
            });
        }

        let formatted = match numeric.split_once('.') {
            Some((whole, fraction)) => {
                format!("{}{}.{}", GLYPH, group_thousands(whole), fraction)
            }
            None => format!("{}{}", GLYPH, group_thousands(&numeric)),
        };
        Ok(formatted)
    }

    fn canonicalize(&self, display: &str) -> String {
        display.chars().filter(|c| *c != GLYPH && *c != ',').collect()
    }

    fn prefix(&self) -> Option<char> {
        Some(GLYPH)
    }

    fn is_significant(&self, c: char) -> bool {
        c.is_ascii_digit() || c == '.'
    }
}

/// Insert `,` every three digits, dropping leading zeros.
fn group_thousands(whole: &str) -> String {
    let trimmed = whole.trim_start_matches('0');
    let trimmed = if trimmed.is_empty() { "0" } else { trimmed };

    let len = trimmed.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in trimmed.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
